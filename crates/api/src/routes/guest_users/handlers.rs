use crate::routes::guest_users::error::GuestUserError;
use crate::routes::guest_users::interfaces::AddGuestUserParams;
use crate::routes::guest_users::service;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Query, State};

/// Invite a guest user, add them to a group and send a confirmation email.
#[utoipa::path(
    post,
    path = "/guest-users",
    params(
        ("userId" = Option<String>, Query, description = "Email address of the guest to invite"),
        ("groupId" = Option<String>, Query, description = "Directory group the guest is added to"),
    ),
    request_body = AddGuestUserParams,
    responses(
        (status = 200, description = "Guest invited and added to the group", body = String),
        (status = 400, description = "Missing userId/groupId, or a token or Graph call failed"),
    )
)]
pub async fn add_guest_user(
    State(state): State<AppState>,
    Query(query): Query<AddGuestUserParams>,
    payload: Option<Json<AddGuestUserParams>>,
) -> Result<String, GuestUserError> {
    let body = payload.map(|Json(params)| params).unwrap_or_default();
    let user_id = query.user_id.or(body.user_id);
    let group_id = query.group_id.or(body.group_id);
    let (Some(user_id), Some(group_id)) = (user_id, group_id) else {
        return Err(GuestUserError::MissingFields);
    };

    service::invite_guest_user(&state, &user_id, &group_id).await
}
