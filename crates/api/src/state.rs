use common_guests::{AppSettings, GraphClient, SendGridMailer};
use std::sync::Arc;

/// Shared per-process state: the loaded configuration plus the outbound
/// clients built from it. Cheap to clone; handlers receive it through
/// axum's `State` extractor instead of reading ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<AppSettings>,
    pub graph: GraphClient,
    pub mailer: SendGridMailer,
}

impl AppState {
    #[must_use]
    pub fn new(settings: AppSettings) -> Self {
        let graph = GraphClient::new(&settings.graph);
        let mailer = SendGridMailer::new(&settings.sendgrid);
        Self {
            settings: Arc::new(settings),
            graph,
            mailer,
        }
    }
}
