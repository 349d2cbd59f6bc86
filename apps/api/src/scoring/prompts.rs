// User-prompt templates for the two model calls. System prompts live in llm_client::prompts.

/// Requirement derivation. Placeholder: `{job_title}`.
pub const REQUIREMENTS_PROMPT_TEMPLATE: &str = r#"Identify the essential skills, keywords, and certifications for the job title: "{job_title}". Please provide a concise list."#;

/// Rubric scoring. Placeholders: `{job_title}`, `{job_requirements}`, `{weights}`,
/// `{criterion_keys}`, `{resume_text}`.
pub const SCORING_PROMPT_TEMPLATE: &str = r#"Please score the following resume for the job title "{job_title}".
The essential skills, keywords, and certifications for this role are:
{job_requirements}

Score the resume out of 100 based on the following criteria and weights:
{weights}

For each criterion, provide a score, positive feedback, and negative feedback.
Each score must be a whole number between 0 and the criterion's weight.
Finally, provide a total score and an overall summary feedback.

Use exactly these criterion keys, one entry per key, in this order:
{criterion_keys}

Return the output as a JSON object with the following structure:
{
  "scores": [
    {
      "criterion": "criterion_key",
      "score": 0,
      "positive": "Positive feedback",
      "negative": "Negative feedback"
    }
  ],
  "total_score": 0,
  "summary_feedback": "Overall summary feedback"
}

Resume Text:
{resume_text}"#;
