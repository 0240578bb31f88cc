//! Guest invitations via the `/beta/invitations` endpoint.

use crate::graph::{GraphClient, GraphError};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Payload for `POST /beta/invitations`. `sendInvitationMessage` is always
/// false; the hosting application delivers its own notification.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationRequest {
    pub invited_user_display_name: String,
    pub invited_user_email_address: String,
    pub invite_redirect_url: String,
    pub send_invitation_message: bool,
}

impl InvitationRequest {
    #[must_use]
    pub fn new(display_name: &str, email: &str, redirect_url: &str) -> Self {
        Self {
            invited_user_display_name: display_name.to_string(),
            invited_user_email_address: email.to_string(),
            invite_redirect_url: redirect_url.to_string(),
            send_invitation_message: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Invitation {
    invited_user: InvitedUser,
}

#[derive(Debug, Deserialize)]
struct InvitedUser {
    id: String,
}

/// A successfully created invitation.
///
/// `body` is the invitation exactly as Graph returned it, so handlers can
/// pass it through to their own response without losing fields.
#[derive(Debug)]
pub struct CreatedInvitation {
    pub invited_user_id: String,
    pub body: serde_json::Value,
}

impl GraphClient {
    /// Create a guest invitation.
    ///
    /// Returns `Ok(None)` when Graph answers with anything other than 201:
    /// the invitation is treated as not created and the caller is expected
    /// to skip the membership step without raising an error.
    ///
    /// # Errors
    /// * If the request can't be sent.
    /// * If a 201 body can't be parsed or lacks `invitedUser.id`.
    pub async fn create_invitation(
        &self,
        token: &str,
        request: &InvitationRequest,
    ) -> Result<Option<CreatedInvitation>, GraphError> {
        let url = format!("{}/beta/invitations", self.graph_base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            warn!(
                "Invitation for {} was not created (status {})",
                request.invited_user_email_address,
                response.status()
            );
            return Ok(None);
        }

        let body: serde_json::Value = response.json().await?;
        let invitation: Invitation = serde_json::from_value(body.clone())?;
        Ok(Some(CreatedInvitation {
            invited_user_id: invitation.invited_user.id,
            body,
        }))
    }
}
