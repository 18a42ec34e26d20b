use anyhow::Result;
use chrono::Local;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

use crate::config::MonitorConfig;
use crate::models::Report;
use crate::notifier::Notifier;
use crate::prober::Prober;
use crate::report;
use crate::scheduler::{until_next_daily, Scheduler, Trigger, TICK};

/// Orchestrates the probe-and-maybe-notify cycle and the daily heartbeat.
/// Holds no state between passes: every cycle starts from a clean slate.
pub struct Monitor {
    config: MonitorConfig,
    prober: Prober,
    notifier: Notifier,
}

impl Monitor {
    pub fn new(config: MonitorConfig) -> Result<Self> {
        let prober = Prober::new(Duration::from_secs(config.probe_timeout_secs))?;
        let notifier = Notifier::new(
            config.resend_api_key.clone(),
            config.sender.clone(),
            config.recipients.clone(),
        );
        Ok(Self { config, prober, notifier })
    }

    /// Runs one immediate check pass, then polls the scheduler forever.
    /// Process shutdown is the only exit path.
    pub async fn run(&self) -> Result<()> {
        info!(
            "monitor started: {} endpoints, checking every {}s, daily heartbeat at {}",
            self.config.endpoints.len(),
            self.config.check_interval_secs,
            self.config.heartbeat_time,
        );

        self.check_cycle().await;

        let heartbeat_at = self.config.parsed_heartbeat_time()?;
        let mut scheduler = Scheduler::new(
            Instant::now(),
            Duration::from_secs(self.config.check_interval_secs),
            until_next_daily(Local::now(), heartbeat_at),
        );

        loop {
            tokio::time::sleep(TICK).await;
            for trigger in scheduler.due(Instant::now()) {
                match trigger {
                    Trigger::Check => self.check_cycle().await,
                    Trigger::Heartbeat => self.heartbeat_cycle().await,
                }
            }
        }
    }

    /// One probe pass over the registry. Notifies only when something is
    /// down; delivery failures are logged and swallowed so the loop
    /// keeps running.
    pub async fn check_cycle(&self) {
        let started = Instant::now();
        info!("=== checking {} endpoints ===", self.config.endpoints.len());

        let results = self.prober.probe_all(&self.config.endpoints).await;
        let report = Report::new(results, Local::now());
        info!(
            "pass completed in {:.2}s: {} active, {} down",
            started.elapsed().as_secs_f64(),
            report.active_count(),
            report.down_count(),
        );

        if report.down_count() == 0 {
            info!("all endpoints active, no notification sent");
            return;
        }

        let subject = report::subject(&report, &self.config.report_title);
        let html = report::render_status(&report, &self.config.report_title);
        if let Err(error) = self.notifier.notify(&subject, &html).await {
            error!("failed to send status report: {error:#}");
        }
    }

    /// Daily check-in, sent regardless of endpoint health.
    pub async fn heartbeat_cycle(&self) {
        let now = Local::now();
        let subject = report::heartbeat_subject(&self.config.report_title, now);
        let html = report::render_heartbeat(
            &self.config.endpoints,
            &self.config.report_title,
            Duration::from_secs(self.config.check_interval_secs),
            now,
        );
        if let Err(error) = self.notifier.notify(&subject, &html).await {
            warn!("failed to send daily heartbeat: {error:#}");
        }
    }
}
