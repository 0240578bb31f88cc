pub mod external_users;
pub mod guest_users;
pub mod root;

use crate::routes::external_users::handlers::add_external_user;
use crate::routes::guest_users::handlers::add_guest_user;
use crate::routes::root::handlers::root;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{LatencyUnit, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

// --- API Documentation ---
#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        external_users::handlers::add_external_user,
        guest_users::handlers::add_guest_user,
    ),
    components(
        schemas(
            external_users::interfaces::AddExternalUserBody,
            external_users::interfaces::AddExternalUserResponse,
            guest_users::interfaces::AddGuestUserParams,
        ),
    ),
    tags(
        (name = "Guest Invites", description = "Invite external users into the directory and add them to a group")
    )
)]
struct ApiDoc;

// --- Router Construction ---
pub fn create_router(state: AppState) -> Router {
    let openapi = ApiDoc::openapi();

    Router::new()
        .merge(Scalar::with_url("/docs", openapi))
        .route("/", get(root))
        .route("/external-users", post(add_external_user))
        .route("/guest-users", post(add_guest_user))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().on_response(
                tower_http::trace::DefaultOnResponse::new()
                    .level(tracing::Level::INFO)
                    .latency_unit(LatencyUnit::Micros),
            ),
        )
}
