use api::routes::create_router;
use api::state::AppState;
use common_guests::load_app_settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let settings = load_app_settings()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level)),
        )
        .init();

    let addr = format!("{}:{}", settings.api.host, settings.api.port);
    let app = create_router(AppState::new(settings));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Guests API listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
