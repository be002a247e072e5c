use crate::config::Config;
use crate::models::Formatting;
use std::sync::Arc;

/// Read-only state shared by the handlers. Holds configuration only; no
/// dashboard data survives a request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub formatting: Arc<Formatting>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let formatting = config.formatting();
        Self {
            config: Arc::new(config),
            formatting: Arc::new(formatting),
        }
    }
}
