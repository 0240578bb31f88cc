use crate::routes::external_users::error::ExternalUserError;
use crate::routes::external_users::interfaces::{AddExternalUserBody, AddExternalUserResponse};
use crate::routes::external_users::service;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;

/// Invite an external user into the directory and add them to a group.
#[utoipa::path(
    post,
    path = "/external-users",
    request_body = AddExternalUserBody,
    responses(
        (status = 200, description = "Invitation created and user added to the group (body is null when Graph declined the invitation)", body = AddExternalUserResponse),
        (status = 400, description = "Missing userId/groupId, or a token or Graph call failed"),
    )
)]
pub async fn add_external_user(
    State(state): State<AppState>,
    payload: Option<Json<AddExternalUserBody>>,
) -> Result<Json<Option<AddExternalUserResponse>>, ExternalUserError> {
    let body = payload.map(|Json(body)| body).unwrap_or_default();
    let (Some(user_id), Some(group_id)) = (body.user_id.as_deref(), body.group_id.as_deref())
    else {
        return Err(ExternalUserError::MissingFields);
    };

    let outcome =
        service::invite_external_user(&state, user_id, group_id, body.user_name.as_deref()).await?;
    Ok(Json(outcome))
}
