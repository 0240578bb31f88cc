use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common_guests::GraphError;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum GuestUserError {
    #[error("Please pass a userId and groupId on the query string or in the request body")]
    MissingFields,

    #[error(transparent)]
    Graph(#[from] GraphError),
}

fn log_invite_failure(error: &GuestUserError) {
    match error {
        GuestUserError::MissingFields => {
            warn!("Guest user request rejected: missing userId or groupId.");
        }
        GuestUserError::Graph(e) => error!("Graph call failed: {e}"),
    }
}

impl IntoResponse for GuestUserError {
    fn into_response(self) -> Response {
        log_invite_failure(&self);
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
