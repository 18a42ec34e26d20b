use anyhow::{bail, Context, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MonitorConfig {
    pub endpoints: Vec<Endpoint>,
    pub recipients: Vec<String>,
    pub sender: String,
    pub resend_api_key: String,
    #[serde(default = "default_check_interval")]
    pub check_interval_secs: u64,
    #[serde(default = "default_heartbeat_time")]
    pub heartbeat_time: String,
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
    #[serde(default = "default_report_title")]
    pub report_title: String,
}

/// One monitored HTTP endpoint. Registry order is the order of the
/// `endpoints` array in the config file.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Endpoint {
    pub name: String,
    pub url: String,
}

fn default_check_interval() -> u64 { 900 }
fn default_heartbeat_time() -> String { "00:00".into() }
fn default_probe_timeout() -> u64 { 60 }
fn default_report_title() -> String { "API Status Monitor".into() }

impl MonitorConfig {
    /// Startup validation. Any failure here is fatal: the monitor must not
    /// enter its loop with a config it cannot act on.
    pub fn validate(&self) -> Result<()> {
        if self.endpoints.is_empty() {
            bail!("config has no endpoints to monitor");
        }
        let mut names = HashSet::new();
        for endpoint in &self.endpoints {
            if !names.insert(endpoint.name.as_str()) {
                bail!("duplicate endpoint name: {}", endpoint.name);
            }
        }
        if self.recipients.is_empty() {
            bail!("config has no notification recipients");
        }
        if self.resend_api_key.is_empty() {
            bail!("resend_api_key is empty");
        }
        self.parsed_heartbeat_time()?;
        Ok(())
    }

    pub fn parsed_heartbeat_time(&self) -> Result<NaiveTime> {
        NaiveTime::parse_from_str(&self.heartbeat_time, "%H:%M").with_context(|| {
            format!("invalid heartbeat_time {:?}, expected HH:MM", self.heartbeat_time)
        })
    }
}
