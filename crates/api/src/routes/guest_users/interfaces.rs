use serde::Deserialize;
use utoipa::ToSchema;

/// Parameters for the guest-user handler, accepted on the query string or
/// as a JSON body (query wins). Presence-checked only.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddGuestUserParams {
    /// Email address of the guest to invite.
    pub user_id: Option<String>,
    /// Directory group the guest is added to.
    pub group_id: Option<String>,
}
