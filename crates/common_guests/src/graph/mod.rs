mod auth;
mod groups;
mod invitations;

pub use auth::AccessToken;
pub use invitations::{CreatedInvitation, InvitationRequest};

use crate::settings::GraphSettings;
use reqwest::{Client, StatusCode};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Error getting Graph token: {0}")]
    TokenAcquisition(String),
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status {status}: {text}")]
    UnexpectedStatus { status: StatusCode, text: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Client for the Microsoft Graph REST API.
///
/// Holds the tenant credentials and base URLs; every operation takes the
/// bearer token explicitly so callers decide when one is acquired and a
/// single token can be threaded through a chain of calls.
#[derive(Clone)]
pub struct GraphClient {
    http: Client,
    login_base_url: String,
    graph_base_url: String,
    tenant: String,
    client_id: String,
    client_secret: String,
}

impl GraphClient {
    /// Create a Graph client from the configured tenant settings.
    ///
    /// # Panics
    /// if it can't create the underlying HTTP client.
    #[must_use]
    pub fn new(settings: &GraphSettings) -> Self {
        Self {
            http: Client::builder()
                .connect_timeout(Duration::from_secs(5))
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            login_base_url: settings.login_base_url.clone(),
            graph_base_url: settings.graph_base_url.clone(),
            tenant: settings.tenant.clone(),
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
        }
    }
}
