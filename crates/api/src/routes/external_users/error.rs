use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common_guests::GraphError;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ExternalUserError {
    #[error("Please pass a userId and groupId in the request body")]
    MissingFields,

    #[error(transparent)]
    Graph(#[from] GraphError),
}

fn log_invite_failure(error: &ExternalUserError) {
    match error {
        ExternalUserError::MissingFields => {
            warn!("External user request rejected: missing userId or groupId.");
        }
        ExternalUserError::Graph(e) => error!("Graph call failed: {e}"),
    }
}

impl IntoResponse for ExternalUserError {
    fn into_response(self) -> Response {
        log_invite_failure(&self);

        // Every failure maps to 400 with the error text as a plain body,
        // including token and downstream call failures.
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
