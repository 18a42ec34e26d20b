use chrono::{DateTime, Local};
use serde::Serialize;

/// Outcome of probing one endpoint within a pass. The failure detail
/// (status code, transport error) is logged by the prober and deliberately
/// not carried here: the report only ever shows Active or Down.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub endpoint_name: String,
    pub reachable: bool,
}

/// Overall severity of a probe pass, escalating from calm to critical.
/// Drives the subject line and the report header color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    AllActive,
    Partial,
    AllDown,
}

impl Severity {
    pub fn header_color(self) -> &'static str {
        match self {
            Severity::AllActive => "#1b5e20",
            Severity::Partial => "#f57c00",
            Severity::AllDown => "#b71c1c",
        }
    }
}

/// One probe pass plus its generation time. Built fresh each pass and
/// discarded after rendering; nothing survives to the next pass.
#[derive(Debug, Clone)]
pub struct Report {
    pub results: Vec<ProbeResult>,
    pub generated_at: DateTime<Local>,
}

impl Report {
    pub fn new(results: Vec<ProbeResult>, generated_at: DateTime<Local>) -> Self {
        Self { results, generated_at }
    }

    pub fn active_count(&self) -> usize {
        self.results.iter().filter(|r| r.reachable).count()
    }

    pub fn down_count(&self) -> usize {
        self.results.len() - self.active_count()
    }

    pub fn severity(&self) -> Severity {
        if self.down_count() == 0 {
            Severity::AllActive
        } else if self.active_count() == 0 {
            Severity::AllDown
        } else {
            Severity::Partial
        }
    }
}

/// Resend `POST /emails` payload.
#[derive(Debug, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}
