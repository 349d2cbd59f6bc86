//! ScoreReport: the model's rubric scoring output, validated for shape before it leaves
//! the server.
//!
//! The model is asked for a fixed JSON structure but is not bound by it, so every field is
//! checked explicitly. A malformed response is a `ReportError`, never a default value.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::llm_client::strip_json_fences;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("response is not valid JSON: {0}")]
    NotJson(#[from] serde_json::Error),

    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("missing field '{0}'")]
    MissingField(String),

    #[error("field '{field}' must be {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    #[error("'scores' is empty")]
    NoScores,
}

/// A score exactly as the model sent it. Models return both `8` and `"8"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Number(Number),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub criterion: String,
    pub score: ScoreValue,
    pub positive: String,
    pub negative: String,
}

/// Body of a successful `POST /api/score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub scores: Vec<ScoreEntry>,
    pub total_score: ScoreValue,
    pub summary_feedback: String,
}

/// Parses raw model output into a `ScoreReport`, tolerating markdown fences.
pub fn parse_score_report(raw: &str) -> Result<ScoreReport, ReportError> {
    let value: Value = serde_json::from_str(strip_json_fences(raw))?;
    validate_report(&value)
}

/// Checks every expected field for presence and type.
pub fn validate_report(value: &Value) -> Result<ScoreReport, ReportError> {
    let object = value.as_object().ok_or(ReportError::NotAnObject)?;

    let raw_scores = require(object, "scores", "scores")?
        .as_array()
        .ok_or_else(|| wrong_type("scores", "an array"))?;
    if raw_scores.is_empty() {
        return Err(ReportError::NoScores);
    }

    let scores = raw_scores
        .iter()
        .enumerate()
        .map(|(i, entry)| validate_entry(i, entry))
        .collect::<Result<Vec<_>, _>>()?;

    let total_score = score_value(require(object, "total_score", "total_score")?, "total_score")?;
    let summary_feedback = string_field(object, "summary_feedback", "summary_feedback")?;

    Ok(ScoreReport {
        scores,
        total_score,
        summary_feedback,
    })
}

fn validate_entry(index: usize, entry: &Value) -> Result<ScoreEntry, ReportError> {
    let path = |field: &str| format!("scores[{index}].{field}");
    let object = entry
        .as_object()
        .ok_or_else(|| wrong_type(&format!("scores[{index}]"), "an object"))?;

    Ok(ScoreEntry {
        criterion: string_field(object, "criterion", &path("criterion"))?,
        score: score_value(require(object, "score", &path("score"))?, &path("score"))?,
        positive: string_field(object, "positive", &path("positive"))?,
        negative: string_field(object, "negative", &path("negative"))?,
    })
}

fn require<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Value, ReportError> {
    object
        .get(key)
        .ok_or_else(|| ReportError::MissingField(path.to_string()))
}

fn string_field(object: &Map<String, Value>, key: &str, path: &str) -> Result<String, ReportError> {
    require(object, key, path)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| wrong_type(path, "a string"))
}

fn score_value(value: &Value, path: &str) -> Result<ScoreValue, ReportError> {
    match value {
        Value::Number(n) => Ok(ScoreValue::Number(n.clone())),
        Value::String(s) => Ok(ScoreValue::Text(s.clone())),
        _ => Err(wrong_type(path, "a string or number")),
    }
}

fn wrong_type(field: &str, expected: &'static str) -> ReportError {
    ReportError::WrongType {
        field: field.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const WELL_FORMED: &str = r#"{
        "scores": [
            {"criterion": "Grammar & Spelling", "score": "8", "positive": "p", "negative": "n"},
            {"criterion": "customization", "score": 12, "positive": "Tailored", "negative": "Generic summary"}
        ],
        "total_score": "75",
        "summary_feedback": "s"
    }"#;

    #[test]
    fn test_well_formed_report_parses() {
        let report = parse_score_report(WELL_FORMED).unwrap();
        assert_eq!(report.scores.len(), 2);
        assert_eq!(report.scores[0].criterion, "Grammar & Spelling");
        assert_eq!(report.scores[0].score, ScoreValue::Text("8".to_string()));
        assert_eq!(report.scores[1].score, ScoreValue::Number(12.into()));
        assert_eq!(report.total_score, ScoreValue::Text("75".to_string()));
        assert_eq!(report.summary_feedback, "s");
    }

    #[test]
    fn test_fenced_report_parses() {
        let fenced = format!("```json\n{WELL_FORMED}\n```");
        assert!(parse_score_report(&fenced).is_ok());
    }

    #[test]
    fn test_report_serializes_with_wire_shape() {
        let report = parse_score_report(WELL_FORMED).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["scores"][0]["score"], "8");
        assert_eq!(value["scores"][1]["score"], 12);
        assert_eq!(value["total_score"], "75");
    }

    #[test]
    fn test_non_json_is_rejected() {
        let err = parse_score_report("I'm sorry, I can't score this resume.").unwrap_err();
        assert!(matches!(err, ReportError::NotJson(_)));
    }

    #[test]
    fn test_empty_object_is_rejected() {
        let err = parse_score_report("{}").unwrap_err();
        assert!(matches!(err, ReportError::MissingField(ref f) if f == "scores"));
    }

    #[test]
    fn test_array_root_is_rejected() {
        let err = validate_report(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, ReportError::NotAnObject));
    }

    #[test]
    fn test_empty_scores_is_rejected() {
        let err = validate_report(&json!({
            "scores": [],
            "total_score": 0,
            "summary_feedback": ""
        }))
        .unwrap_err();
        assert!(matches!(err, ReportError::NoScores));
    }

    #[test]
    fn test_missing_entry_field_reports_path() {
        let err = validate_report(&json!({
            "scores": [
                {"criterion": "formatting", "score": 9, "positive": "Clean"}
            ],
            "total_score": 9,
            "summary_feedback": "ok"
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "missing field 'scores[0].negative'");
    }

    #[test]
    fn test_boolean_score_is_wrong_type() {
        let err = validate_report(&json!({
            "scores": [
                {"criterion": "formatting", "score": true, "positive": "", "negative": ""}
            ],
            "total_score": 9,
            "summary_feedback": "ok"
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            ReportError::WrongType { ref field, .. } if field == "scores[0].score"
        ));
    }

    #[test]
    fn test_scores_object_is_wrong_type() {
        let err = validate_report(&json!({
            "scores": {"formatting": 9},
            "total_score": 9,
            "summary_feedback": "ok"
        }))
        .unwrap_err();
        assert!(matches!(err, ReportError::WrongType { ref field, .. } if field == "scores"));
    }

    #[test]
    fn test_missing_summary_is_rejected() {
        let err = validate_report(&json!({
            "scores": [
                {"criterion": "formatting", "score": 9, "positive": "", "negative": ""}
            ],
            "total_score": 9
        }))
        .unwrap_err();
        assert!(matches!(err, ReportError::MissingField(ref f) if f == "summary_feedback"));
    }
}
