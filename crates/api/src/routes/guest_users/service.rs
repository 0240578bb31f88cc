use crate::routes::guest_users::error::GuestUserError;
use crate::state::AppState;
use common_guests::InvitationRequest;
use tracing::{error, info};

/// Invite a guest user, add them to the requested group and send the
/// confirmation email.
///
/// The invitation uses `userId` as both display name and email address and
/// redirects to the configured placeholder URL. A non-201 invitation status
/// skips the membership step silently. Email delivery failures are logged
/// and never propagated; the handler reports success regardless.
pub async fn invite_guest_user(
    state: &AppState,
    user_id: &str,
    group_id: &str,
) -> Result<String, GuestUserError> {
    let token = state.graph.acquire_token().await?;
    let token = token.access_token.as_str();

    let request = InvitationRequest::new(
        user_id,
        user_id,
        &state.settings.graph.invite_redirect_url,
    );
    if let Some(created) = state.graph.create_invitation(token, &request).await? {
        state
            .graph
            .add_group_member(token, group_id, &created.invited_user_id)
            .await?;
    }

    // The success message interpolates the configured group id, not the
    // request's.
    let message = format!(
        "User {user_id} was added to group id: {}",
        state.settings.graph.group_id
    );
    info!("{message}");

    if let Err(e) = state.mailer.send_access_confirmation(user_id).await {
        error!("Failed to send confirmation email to {user_id}: {e}");
    }

    Ok(message)
}
