use anyhow::{Context, Result};
use tracing::info;

use crate::models::EmailMessage;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Delivers rendered reports through the Resend transactional email API.
/// One call per report, no retry, no delivery confirmation.
pub struct Notifier {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    sender: String,
    recipients: Vec<String>,
}

impl Notifier {
    pub fn new(api_key: String, sender: String, recipients: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: RESEND_API_URL.to_string(),
            api_key,
            sender,
            recipients,
        }
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }

    /// Callers are expected to log and swallow the error: a broken
    /// notification channel must never stop the monitor.
    pub async fn notify(&self, subject: &str, html: &str) -> Result<()> {
        let message = EmailMessage {
            from: self.sender.clone(),
            to: self.recipients.clone(),
            subject: subject.to_string(),
            html: html.to_string(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&message)
            .send()
            .await
            .context("email delivery request failed")?;
        response
            .error_for_status()
            .context("email delivery rejected")?;

        info!("email sent to {:?}", self.recipients);
        Ok(())
    }
}
