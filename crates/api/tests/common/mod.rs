#![allow(dead_code)] // not every test binary uses every helper

use api::routes::create_router;
use api::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common_guests::{ApiSettings, AppSettings, GraphSettings, LoggingSettings, SendGridSettings};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TENANT: &str = "test-tenant";
/// Group id from configuration, distinct from any request group id so tests
/// can pin down which one ends up where.
pub const CONFIGURED_GROUP_ID: &str = "configured-group";

/// Build the app router with every outbound base URL pointed at the mock
/// server; paths keep the collaborators apart.
pub fn test_router(mock_base: &str) -> Router {
    let settings = AppSettings {
        api: ApiSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        logging: LoggingSettings {
            level: "info".to_string(),
        },
        graph: GraphSettings {
            tenant: TENANT.to_string(),
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            group_id: CONFIGURED_GROUP_ID.to_string(),
            login_base_url: mock_base.to_string(),
            graph_base_url: mock_base.to_string(),
            invite_redirect_url: "https://URL-TO-SITE".to_string(),
        },
        sendgrid: SendGridSettings {
            api_key: "sendgrid-key".to_string(),
            base_url: mock_base.to_string(),
        },
    };
    create_router(AppState::new(settings))
}

pub async fn send_post(router: Router, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let builder = Request::builder().method("POST").uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };

    let response = router.oneshot(request).await.expect("request should run");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    (status, String::from_utf8_lossy(&bytes).to_string())
}

pub fn token_path() -> String {
    format!("/{TENANT}/oauth2/v2.0/token")
}

pub async fn mount_token_success(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(token_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 3599,
            "ext_expires_in": 3599,
            "access_token": "mock-token",
        })))
        .mount(server)
        .await;
}

pub async fn mount_site_url(server: &MockServer, group_id: &str, web_url: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/v1.0/groups/{group_id}/sites/root/weburl")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": web_url })))
        .mount(server)
        .await;
}

pub async fn mount_sendgrid(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path("/v3/mail/send"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
