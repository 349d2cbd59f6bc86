pub mod config;
pub mod errors;
pub mod extraction;
pub mod llm_client;
pub mod routes;
pub mod scoring;
pub mod state;
pub mod upload;
pub mod view;

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::llm_client::{ChatModel, LlmError, OpenAiClient};

/// Builds the model client from config, or `None` when no credential is set.
pub fn build_chat_model(config: &Config) -> Result<Option<Arc<dyn ChatModel>>, LlmError> {
    let Some(api_key) = config.openai_api_key.clone() else {
        return Ok(None);
    };

    let client = OpenAiClient::new(
        api_key,
        config.openai_base_url.clone(),
        config.openai_model.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    Ok(Some(Arc::new(client)))
}
