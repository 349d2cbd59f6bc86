//! Rubric scoring: the second model call. Embeds the requirements, the weight table and
//! the résumé text, asks for a JSON object, and validates what comes back.

use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::prompts::SCORING_SYSTEM;
use crate::llm_client::{ChatModel, ChatRequest, ResponseFormat};
use crate::scoring::prompts::SCORING_PROMPT_TEMPLATE;
use crate::scoring::render_template;
use crate::scoring::report::{parse_score_report, ScoreReport};
use crate::scoring::rubric::{weights_json, RUBRIC};

pub fn build_scoring_prompt(resume_text: &str, job_title: &str, job_requirements: &str) -> String {
    let weights = weights_json();
    let criterion_keys = RUBRIC
        .iter()
        .map(|c| c.key())
        .collect::<Vec<_>>()
        .join(", ");

    render_template(
        SCORING_PROMPT_TEMPLATE,
        &[
            ("job_title", job_title),
            ("job_requirements", job_requirements),
            ("weights", &weights),
            ("criterion_keys", &criterion_keys),
            ("resume_text", resume_text),
        ],
    )
}

pub async fn score_resume(
    resume_text: &str,
    job_title: &str,
    job_requirements: &str,
    llm: &dyn ChatModel,
) -> Result<ScoreReport, AppError> {
    let prompt = build_scoring_prompt(resume_text, job_title, job_requirements);
    let raw = llm
        .complete(ChatRequest {
            system: SCORING_SYSTEM,
            prompt: &prompt,
            format: ResponseFormat::JsonObject,
        })
        .await?;

    parse_score_report(&raw).map_err(|e| {
        warn!("Rejected scoring response ({} bytes): {e}", raw.len());
        AppError::InvalidUpstreamResponse(e)
    })
}
