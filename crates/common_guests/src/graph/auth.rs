//! Client-credentials OAuth against the Microsoft identity platform.

use crate::graph::{GraphClient, GraphError};
use serde::Deserialize;

/// OAuth2 token response from the identity platform.
///
/// Acquired fresh for every incoming request, used for the dependent Graph
/// calls, then discarded. Nothing here is cached.
#[derive(Debug, Deserialize)]
pub struct AccessToken {
    pub token_type: String,
    pub expires_in: i64,
    pub ext_expires_in: i64,
    pub access_token: String,
}

impl GraphClient {
    /// Acquire an access token using the client credentials flow.
    ///
    /// # Errors
    /// * If the token request can't be sent.
    /// * If the token endpoint returns a non-2xx status.
    /// * If the token response body can't be parsed.
    pub async fn acquire_token(&self) -> Result<AccessToken, GraphError> {
        let token_url = format!("{}/{}/oauth2/v2.0/token", self.login_base_url, self.tenant);
        let scope = format!("{}/.default", self.graph_base_url);
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("scope", scope.as_str()),
        ];

        let response = self
            .http
            .post(&token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| GraphError::TokenAcquisition(format!("token request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GraphError::TokenAcquisition(format!(
                "token request failed with status {status}: {body}"
            )));
        }

        response
            .json::<AccessToken>()
            .await
            .map_err(|e| GraphError::TokenAcquisition(format!("failed to parse token response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GraphSettings;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> GraphClient {
        GraphClient::new(&GraphSettings {
            tenant: "test-tenant".to_string(),
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            group_id: "group-123".to_string(),
            login_base_url: base_url.to_string(),
            graph_base_url: base_url.to_string(),
            invite_redirect_url: "https://URL-TO-SITE".to_string(),
        })
    }

    #[test]
    fn access_token_deserializes_from_token_endpoint_shape() {
        let token: AccessToken = serde_json::from_str(
            r#"{"token_type":"Bearer","expires_in":3599,"ext_expires_in":3599,"access_token":"abc"}"#,
        )
        .expect("token response should deserialize");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.access_token, "abc");
    }

    #[tokio::test]
    async fn acquire_token_posts_client_credentials_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/test-tenant/oauth2/v2.0/token"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains("client_id=client-id"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token_type": "Bearer",
                "expires_in": 3599,
                "ext_expires_in": 3599,
                "access_token": "mock-token",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let token = test_client(&server.uri())
            .acquire_token()
            .await
            .expect("token acquisition should succeed");
        assert_eq!(token.access_token, "mock-token");
    }

    #[tokio::test]
    async fn acquire_token_wraps_non_2xx_into_token_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/test-tenant/oauth2/v2.0/token"))
            .respond_with(ResponseTemplate::new(500).set_body_string("AADSTS broken"))
            .mount(&server)
            .await;

        let error = test_client(&server.uri())
            .acquire_token()
            .await
            .expect_err("token acquisition should fail");
        assert!(matches!(error, GraphError::TokenAcquisition(_)));
        assert!(error.to_string().contains("AADSTS broken"));
    }

    #[tokio::test]
    async fn acquire_token_wraps_malformed_json_into_token_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/test-tenant/oauth2/v2.0/token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let error = test_client(&server.uri())
            .acquire_token()
            .await
            .expect_err("token acquisition should fail");
        assert!(error.to_string().contains("failed to parse token response"));
    }
}
