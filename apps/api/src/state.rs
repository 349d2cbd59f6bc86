use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no credential is configured; every scoring request then fails fast.
    pub llm: Option<Arc<dyn ChatModel>>,
    pub config: Config,
}

impl AppState {
    /// The configured model, or the configuration error every scoring route returns.
    pub fn model(&self) -> Result<Arc<dyn ChatModel>, AppError> {
        self.llm.clone().ok_or_else(|| {
            AppError::Configuration("OPENAI_API_KEY is not configured.".to_string())
        })
    }
}
