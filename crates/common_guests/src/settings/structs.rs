use serde::Deserialize;

/// Overall application configuration structure.
#[derive(Debug, Deserialize)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub logging: LoggingSettings,
    pub graph: GraphSettings,
    pub sendgrid: SendGridSettings,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

/// Credentials and endpoints for the Microsoft Graph tenant.
///
/// Credential values are deliberately not checked at startup; an empty
/// tenant or secret surfaces as a token acquisition failure on the first
/// request that needs it.
#[derive(Debug, Deserialize)]
pub struct GraphSettings {
    pub tenant: String,
    pub client_id: String,
    pub client_secret: String,
    /// Directory group that invited guests are added to. Interpolated into
    /// the guest-user success message.
    pub group_id: String,
    #[serde(default = "default_login_base_url")]
    pub login_base_url: String,
    #[serde(default = "default_graph_base_url")]
    pub graph_base_url: String,
    /// Where invited guests land when no group site URL is resolved.
    #[serde(default = "default_invite_redirect_url")]
    pub invite_redirect_url: String,
}

/// Configuration for the transactional email provider.
#[derive(Debug, Deserialize)]
pub struct SendGridSettings {
    pub api_key: String,
    #[serde(default = "default_sendgrid_base_url")]
    pub base_url: String,
}

fn default_login_base_url() -> String {
    "https://login.microsoftonline.com".to_string()
}

fn default_graph_base_url() -> String {
    "https://graph.microsoft.com".to_string()
}

fn default_invite_redirect_url() -> String {
    "https://URL-TO-SITE".to_string()
}

fn default_sendgrid_base_url() -> String {
    "https://api.sendgrid.com".to_string()
}
