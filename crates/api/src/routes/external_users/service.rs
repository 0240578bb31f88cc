use crate::routes::external_users::error::ExternalUserError;
use crate::routes::external_users::interfaces::AddExternalUserResponse;
use crate::state::AppState;
use common_guests::InvitationRequest;
use tracing::{info, warn};

/// Invite an external user and add them to the requested group.
///
/// One token is acquired up front and threaded through the site URL lookup,
/// the invitation, and the membership call. Returns `Ok(None)` when Graph
/// declines to create the invitation (any non-201 status): the membership
/// step is skipped and no error is raised.
pub async fn invite_external_user(
    state: &AppState,
    user_id: &str,
    group_id: &str,
    user_name: Option<&str>,
) -> Result<Option<AddExternalUserResponse>, ExternalUserError> {
    let token = state.graph.acquire_token().await?;
    let token = token.access_token.as_str();

    let redirect_url = state.graph.group_site_url(token, group_id).await?;

    let display_name = user_name.unwrap_or(user_id);
    let request = InvitationRequest::new(display_name, user_id, &redirect_url);

    let Some(created) = state.graph.create_invitation(token, &request).await? else {
        warn!("No invitation created for {user_id}; skipping group membership.");
        return Ok(None);
    };

    state
        .graph
        .add_group_member(token, group_id, &created.invited_user_id)
        .await?;
    info!("User {user_id} was added to group id: {group_id}");

    Ok(Some(AddExternalUserResponse {
        group_id: group_id.to_string(),
        invitation: created.body,
    }))
}
