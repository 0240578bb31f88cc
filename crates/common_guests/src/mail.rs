//! Confirmation email delivery through the SendGrid v3 API.

use crate::settings::SendGridSettings;
use reqwest::{Client, StatusCode};
use std::time::Duration;

const SENDER: &str = "invites@example.onmicrosoft.com";
const SUBJECT: &str = "Access to Teams";
const TEXT_BODY: &str = "Access to Teams Confirm Message";
const HTML_BODY: &str = "<strong>Access to Teams Confirm Message</strong>";

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status {status}: {text}")]
    UnexpectedStatus { status: StatusCode, text: String },
}

/// Minimal SendGrid mail client. Callers log delivery failures instead of
/// propagating them; a guest invite succeeds independently of email
/// deliverability.
#[derive(Clone)]
pub struct SendGridMailer {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SendGridMailer {
    /// Create the mail client.
    ///
    /// # Panics
    /// if it can't create the underlying HTTP client.
    #[must_use]
    pub fn new(settings: &SendGridSettings) -> Self {
        Self {
            http: Client::builder()
                .connect_timeout(Duration::from_secs(5))
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    /// Send the fixed-content "Access to Teams" confirmation email.
    ///
    /// # Errors
    /// * If the request can't be sent.
    /// * If SendGrid answers with a non-2xx status.
    pub async fn send_access_confirmation(&self, to: &str) -> Result<(), MailError> {
        let url = format!("{}/v3/mail/send", self.base_url);
        let message = serde_json::json!({
            "personalizations": [{ "to": [{ "email": to }] }],
            "from": { "email": SENDER },
            "subject": SUBJECT,
            "content": [
                { "type": "text/plain", "value": TEXT_BODY },
                { "type": "text/html", "value": HTML_BODY },
            ],
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&message)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            status => {
                let text = response.text().await?;
                Err(MailError::UnexpectedStatus { status, text })
            }
        }
    }
}
