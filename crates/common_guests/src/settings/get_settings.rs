use crate::settings::structs::AppSettings;
use std::path::Path;

/// Load the app settings from YAML + environment variables.
///
/// Reads `config/settings.yaml` relative to the working directory, then
/// applies `APP__SECTION__FIELD` environment overrides. A `.env` file is
/// honored if present.
///
/// # Errors
/// * If the settings file does not exist.
/// * If the merged configuration cannot be deserialized into `AppSettings`.
pub fn load_app_settings() -> color_eyre::Result<AppSettings> {
    dotenv::dotenv().ok();
    let config_path = Path::new("config/settings.yaml").canonicalize()?;

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );
    Ok(builder.build()?.try_deserialize::<AppSettings>()?)
}

#[cfg(test)]
mod tests {
    use crate::settings::structs::AppSettings;

    const MINIMAL_YAML: &str = r"
api:
  host: 127.0.0.1
  port: 3570
logging:
  level: info
graph:
  tenant: test-tenant
  client_id: client-id
  client_secret: client-secret
  group_id: group-123
sendgrid:
  api_key: sendgrid-key
";

    #[test]
    fn base_urls_default_to_production_endpoints() -> color_eyre::Result<()> {
        let settings: AppSettings = config::Config::builder()
            .add_source(config::File::from_str(
                MINIMAL_YAML,
                config::FileFormat::Yaml,
            ))
            .build()?
            .try_deserialize()?;

        assert_eq!(settings.graph.login_base_url, "https://login.microsoftonline.com");
        assert_eq!(settings.graph.graph_base_url, "https://graph.microsoft.com");
        assert_eq!(settings.graph.invite_redirect_url, "https://URL-TO-SITE");
        assert_eq!(settings.sendgrid.base_url, "https://api.sendgrid.com");
        Ok(())
    }
}
