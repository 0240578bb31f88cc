use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for inviting an external user. All fields optional at the
/// wire level; presence of `userId` and `groupId` is checked by the handler,
/// nothing more (no format or email validation).
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddExternalUserBody {
    /// Email address of the user to invite.
    pub user_id: Option<String>,
    /// Directory group the invited user is added to.
    pub group_id: Option<String>,
    /// Display name for the invitation; falls back to `userId`.
    pub user_name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddExternalUserResponse {
    pub group_id: String,
    /// The invitation exactly as Graph returned it.
    #[schema(value_type = Object)]
    pub invitation: serde_json::Value,
}
