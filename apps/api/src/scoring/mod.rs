// Scoring pipeline: requirement derivation, then rubric scoring.
// The two model calls are sequential because the second prompt embeds the first answer.
// All model access goes through the ChatModel trait.

pub mod prompts;
pub mod report;
pub mod requirements;
pub mod rubric;
pub mod scorer;

use std::time::Instant;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::ChatModel;
use crate::scoring::report::ScoreReport;

/// Output of one full analysis.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub job_requirements: String,
    pub report: ScoreReport,
}

/// Runs both model calls for an already-extracted, non-empty résumé.
pub async fn analyze(
    resume_text: &str,
    job_title: &str,
    llm: &dyn ChatModel,
) -> Result<Analysis, AppError> {
    let started = Instant::now();
    let job_requirements = requirements::derive_requirements(job_title, llm).await?;
    info!(
        "Derived requirements for '{job_title}' ({} chars) in {}ms",
        job_requirements.len(),
        started.elapsed().as_millis()
    );

    let started = Instant::now();
    let report = scorer::score_resume(resume_text, job_title, &job_requirements, llm).await?;
    info!(
        "Scored resume against {} criteria in {}ms",
        report.scores.len(),
        started.elapsed().as_millis()
    );

    Ok(Analysis {
        job_requirements,
        report,
    })
}

/// Single-pass `{name}` substitution. Substituted values are never re-scanned, and braces
/// that do not name a known placeholder are copied through unchanged.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::StubModel;
    use crate::llm_client::ResponseFormat;

    #[test]
    fn test_render_template_replaces_known_placeholders() {
        let out = render_template("Hi {name}, role {role}.", &[("name", "Jo"), ("role", "SRE")]);
        assert_eq!(out, "Hi Jo, role SRE.");
    }

    #[test]
    fn test_render_template_keeps_unknown_braces() {
        let out = render_template("{\n  \"scores\": []\n} {x}", &[("x", "1")]);
        assert_eq!(out, "{\n  \"scores\": []\n} 1");
    }

    #[test]
    fn test_render_template_does_not_rescan_values() {
        let out = render_template("{a}{b}", &[("a", "{b}"), ("b", "B")]);
        assert_eq!(out, "{b}B");
    }

    #[test]
    fn test_render_template_unclosed_brace() {
        assert_eq!(render_template("tail {", &[("a", "b")]), "tail {");
    }

    #[tokio::test]
    async fn test_analyze_feeds_requirements_into_scoring_prompt() {
        let stub = StubModel::with_replies([
            "- Terraform\n- CKA certification",
            r#"{"scores":[{"criterion":"customization","score":"11","positive":"a","negative":"b"}],
                "total_score":"70","summary_feedback":"fine"}"#,
        ]);

        let analysis = analyze("Jane Doe, SRE", "Site Reliability Engineer", &stub)
            .await
            .unwrap();
        assert_eq!(analysis.job_requirements, "- Terraform\n- CKA certification");
        assert_eq!(analysis.report.summary_feedback, "fine");

        let calls = stub.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].format, ResponseFormat::Text);
        assert_eq!(calls[1].format, ResponseFormat::JsonObject);
        assert!(calls[1].prompt.contains("- Terraform\n- CKA certification"));
        assert!(calls[1].prompt.contains("Jane Doe, SRE"));
    }

    #[tokio::test]
    async fn test_analyze_stops_after_failed_requirement_call() {
        let stub = StubModel::default();
        stub.push_error(crate::llm_client::LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        });

        let err = analyze("Jane Doe", "Engineer", &stub).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert_eq!(stub.call_count(), 1);
    }
}
