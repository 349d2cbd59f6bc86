//! Requirement derivation: the first model call, turning a job title into a free-text list
//! of skills, keywords and certifications.

use crate::errors::AppError;
use crate::llm_client::prompts::ASSISTANT_SYSTEM;
use crate::llm_client::{ChatModel, ChatRequest, ResponseFormat};
use crate::scoring::prompts::REQUIREMENTS_PROMPT_TEMPLATE;
use crate::scoring::render_template;

pub fn build_requirements_prompt(job_title: &str) -> String {
    render_template(REQUIREMENTS_PROMPT_TEMPLATE, &[("job_title", job_title)])
}

/// Returns the model's answer verbatim. It is opaque text, interpolated as-is into the
/// scoring prompt. Nothing is cached between requests.
pub async fn derive_requirements(job_title: &str, llm: &dyn ChatModel) -> Result<String, AppError> {
    let prompt = build_requirements_prompt(job_title);
    let requirements = llm
        .complete(ChatRequest {
            system: ASSISTANT_SYSTEM,
            prompt: &prompt,
            format: ResponseFormat::Text,
        })
        .await?;
    Ok(requirements)
}
