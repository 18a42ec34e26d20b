//! Pure report rendering: no I/O, deterministic given its inputs.

use chrono::{DateTime, Local};
use std::fmt::Write;
use std::time::Duration;

use crate::config::Endpoint;
use crate::models::Report;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Subject line policy: all-active, all-down, or partial with both counts.
pub fn subject(report: &Report, title: &str) -> String {
    let active = report.active_count();
    let down = report.down_count();
    if down == 0 {
        format!("\u{2705} {title}: All Endpoints Active")
    } else if active == 0 {
        format!("\u{274c} {title}: All Endpoints Down")
    } else {
        format!("\u{26a0}\u{fe0f} {title}: {active} Active, {down} Down")
    }
}

pub fn heartbeat_subject(title: &str, generated_at: DateTime<Local>) -> String {
    format!("\u{1f514} {title}: Daily Check-in ({})", generated_at.format("%Y-%m-%d"))
}

fn styles(header_color: &str) -> String {
    format!(
        r#"<style>
    body {{ font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; padding: 0; background-color: #f5f5f5; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background-color: {header_color}; color: white; padding: 20px; border-radius: 10px 10px 0 0; text-align: center; }}
    .content {{ background-color: white; padding: 20px; border-radius: 0 0 10px 10px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); }}
    .endpoint {{ padding: 15px; margin-bottom: 15px; border-radius: 5px; border-left: 5px solid; }}
    .endpoint-active {{ background-color: #e8f5e9; border-left-color: #4caf50; }}
    .endpoint-down {{ background-color: #ffebee; border-left-color: #f44336; }}
    .status-label {{ display: inline-block; padding: 5px 10px; border-radius: 15px; font-weight: bold; font-size: 14px; }}
    .status-active {{ background-color: #4caf50; color: white; }}
    .status-down {{ background-color: #f44336; color: white; }}
    .footer {{ margin-top: 20px; text-align: center; color: #757575; font-size: 12px; }}
    </style>"#
    )
}

fn footer(title: &str, generated_at: DateTime<Local>) -> String {
    format!(
        r#"<div class="footer">
    <p>Report generated at: {}</p>
    <p>{title}</p>
    </div>"#,
        generated_at.format(TIMESTAMP_FORMAT)
    )
}

/// Renders the status report: a color-coded header summarizing the pass,
/// one card per endpoint with an Active/Down pill, and a timestamp footer.
pub fn render_status(report: &Report, title: &str) -> String {
    let active = report.active_count();
    let down = report.down_count();
    let overall = if down == 0 {
        "All Active \u{2705}".to_string()
    } else {
        format!("{active} Active \u{2705}, {down} Down \u{274c}")
    };

    let mut body = String::new();
    let _ = write!(
        body,
        r#"<html>
    <head>{styles}</head>
    <body>
    <div class="container">
    <div class="header">
    <h1>{title}</h1>
    <p>Status: {overall}</p>
    </div>
    <div class="content">
    <h2>Endpoint Status Details</h2>"#,
        styles = styles(report.severity().header_color()),
    );

    for result in &report.results {
        let (card, pill, label) = if result.reachable {
            ("endpoint-active", "status-active", "Active")
        } else {
            ("endpoint-down", "status-down", "Down")
        };
        let _ = write!(
            body,
            r#"
    <div class="endpoint {card}">
    <h3>{}</h3>
    <p>Status: <span class="status-label {pill}">{label}</span></p>
    </div>"#,
            result.endpoint_name,
        );
    }

    let _ = write!(
        body,
        r#"
    {footer}
    </div>
    </div>
    </body>
    </html>"#,
        footer = footer(title, report.generated_at),
    );
    body
}

/// Renders the daily heartbeat: confirms the monitor itself is running and
/// lists every monitored endpoint, independent of current health.
pub fn render_heartbeat(
    endpoints: &[Endpoint],
    title: &str,
    check_interval: Duration,
    generated_at: DateTime<Local>,
) -> String {
    let mut targets = String::new();
    for endpoint in endpoints {
        let _ = write!(
            targets,
            "<li><strong>{}</strong>: {}</li>\n",
            endpoint.name, endpoint.url
        );
    }

    format!(
        r#"<html>
    <head>{styles}</head>
    <body>
    <div class="container">
    <div class="header">
    <h1>{title}</h1>
    <p>Daily Status Report</p>
    </div>
    <div class="content">
    <h2>Monitoring System Active</h2>
    <p>This is an automated message to confirm that the monitoring system is active and running.</p>
    <p>The system is checking all endpoints every {minutes} minutes and will send alerts if any issues are detected.</p>
    <p>Current monitoring targets:</p>
    <ul>
    {targets}</ul>
    {footer}
    </div>
    </div>
    </body>
    </html>"#,
        styles = styles("#3f51b5"),
        minutes = check_interval.as_secs() / 60,
        footer = footer(title, generated_at),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProbeResult;
    use chrono::TimeZone;

    const TITLE: &str = "Testnet API Monitor";

    fn at_noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
    }

    fn report(flags: &[(&str, bool)]) -> Report {
        let results = flags
            .iter()
            .map(|&(name, reachable)| ProbeResult {
                endpoint_name: name.into(),
                reachable,
            })
            .collect();
        Report::new(results, at_noon())
    }

    #[test]
    fn subject_all_active() {
        let report = report(&[("A", true), ("B", true), ("C", true)]);
        assert_eq!(subject(&report, TITLE), "\u{2705} Testnet API Monitor: All Endpoints Active");
    }

    #[test]
    fn subject_all_down() {
        let report = report(&[("A", false), ("B", false), ("C", false)]);
        assert_eq!(subject(&report, TITLE), "\u{274c} Testnet API Monitor: All Endpoints Down");
    }

    #[test]
    fn subject_partial_includes_both_counts() {
        let report = report(&[("A", true), ("B", false), ("C", false)]);
        assert_eq!(
            subject(&report, TITLE),
            "\u{26a0}\u{fe0f} Testnet API Monitor: 1 Active, 2 Down"
        );
    }

    #[test]
    fn render_is_deterministic() {
        let report = report(&[("A", true), ("B", false)]);
        assert_eq!(render_status(&report, TITLE), render_status(&report, TITLE));
        assert_eq!(subject(&report, TITLE), subject(&report, TITLE));
    }

    #[test]
    fn header_color_escalates_with_severity() {
        let calm = render_status(&report(&[("A", true)]), TITLE);
        assert!(calm.contains("#1b5e20"));

        let warning = render_status(&report(&[("A", true), ("B", false)]), TITLE);
        assert!(warning.contains("#f57c00"));

        let critical = render_status(&report(&[("A", false)]), TITLE);
        assert!(critical.contains("#b71c1c"));
    }

    #[test]
    fn body_has_one_card_per_endpoint_with_label() {
        let html = render_status(&report(&[("Blocks API", true), ("Tx API", false)]), TITLE);
        assert!(html.contains("<h3>Blocks API</h3>"));
        assert!(html.contains("<h3>Tx API</h3>"));
        assert_eq!(html.matches("endpoint-active").count(), 2); // css rule + one card
        assert_eq!(html.matches("endpoint-down").count(), 2);
        assert!(html.contains(">Active</span>"));
        assert!(html.contains(">Down</span>"));
        assert!(html.contains("Report generated at: 2026-01-01 12:00:00"));
    }

    #[test]
    fn heartbeat_lists_every_endpoint() {
        let endpoints = vec![
            Endpoint { name: "Blocks API".into(), url: "https://api.example.com/blocks".into() },
            Endpoint { name: "Tx API".into(), url: "https://api.example.com/tx".into() },
        ];
        let html = render_heartbeat(&endpoints, TITLE, Duration::from_secs(900), at_noon());
        assert!(html.contains("<li><strong>Blocks API</strong>: https://api.example.com/blocks</li>"));
        assert!(html.contains("<li><strong>Tx API</strong>: https://api.example.com/tx</li>"));
        assert!(html.contains("every 15 minutes"));
        assert!(html.contains("#3f51b5"));

        assert_eq!(
            heartbeat_subject(TITLE, at_noon()),
            "\u{1f514} Testnet API Monitor: Daily Check-in (2026-01-01)"
        );
    }
}
