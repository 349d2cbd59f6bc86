//! Normalization: reshapes a `ScoreReport` into the fixed rubric keys the view renders.
//!
//! Labels go through `Criterion::from_label`; anything it cannot resolve is kept aside as
//! an unrecognized criterion instead of being mis-keyed. Scores use leading-integer parsing
//! and fall back to 0, so one odd value never breaks the whole render.

use crate::scoring::report::{ScoreReport, ScoreValue};
use crate::scoring::rubric::Criterion;

#[derive(Debug, Clone, PartialEq)]
pub struct CriterionResult {
    pub criterion: Criterion,
    pub score: i64,
    pub feedback: String,
}

impl CriterionResult {
    pub fn key(&self) -> &'static str {
        self.criterion.key()
    }

    pub fn label(&self) -> &'static str {
        self.criterion.label()
    }

    pub fn weight(&self) -> u32 {
        self.criterion.weight()
    }

    /// Score as a share of the criterion weight, clamped to 0–100.
    pub fn percent(&self) -> i64 {
        let weight = i64::from(self.weight());
        self.score.clamp(0, weight) * 100 / weight
    }
}

/// A scored entry whose label matched no rubric criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct UnrecognizedCriterion {
    pub label: String,
    pub score: i64,
    pub feedback: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Grade {
    pub fn from_score(score: i64) -> Self {
        if score >= 80 {
            Grade::Excellent
        } else if score >= 60 {
            Grade::Good
        } else {
            Grade::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Grade::Excellent => "success",
            Grade::Good => "warning",
            Grade::NeedsImprovement => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub overall: i64,
    /// Recognized criteria in rubric order.
    pub criteria: Vec<CriterionResult>,
    pub unrecognized: Vec<UnrecognizedCriterion>,
    pub summary: String,
}

impl ScoreCard {
    pub fn grade(&self) -> Grade {
        Grade::from_score(self.overall)
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&CriterionResult> {
        self.criteria.iter().find(|c| c.key() == key)
    }
}

pub fn normalize_report(report: &ScoreReport) -> ScoreCard {
    let mut criteria: Vec<CriterionResult> = Vec::new();
    let mut unrecognized = Vec::new();

    for entry in &report.scores {
        let score = parse_score(&entry.score);
        let feedback = format!("{} {}", entry.positive, entry.negative)
            .trim()
            .to_string();

        match Criterion::from_label(&entry.criterion) {
            Some(criterion) => {
                let result = CriterionResult {
                    criterion,
                    score,
                    feedback,
                };
                // Later duplicates replace earlier ones.
                match criteria.iter_mut().find(|c| c.criterion == criterion) {
                    Some(existing) => *existing = result,
                    None => criteria.push(result),
                }
            }
            None => unrecognized.push(UnrecognizedCriterion {
                label: entry.criterion.clone(),
                score,
                feedback,
            }),
        }
    }

    criteria.sort_by_key(|c| c.criterion as usize);

    ScoreCard {
        overall: parse_score(&report.total_score),
        criteria,
        unrecognized,
        summary: report.summary_feedback.clone(),
    }
}

/// Base-10 integer value of a score; anything non-numeric is 0.
pub fn parse_score(value: &ScoreValue) -> i64 {
    match value {
        ScoreValue::Number(n) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            })
            .unwrap_or(0),
        ScoreValue::Text(s) => parse_leading_int(s),
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits up to the first
/// non-digit. `"8/10"` is 8, `"abc"` is 0.
pub fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::report::{parse_score_report, ScoreEntry};

    fn entry(criterion: &str, score: ScoreValue) -> ScoreEntry {
        ScoreEntry {
            criterion: criterion.to_string(),
            score,
            positive: "Good".to_string(),
            negative: "Bad".to_string(),
        }
    }

    fn text(s: &str) -> ScoreValue {
        ScoreValue::Text(s.to_string())
    }

    fn report(scores: Vec<ScoreEntry>, total: ScoreValue) -> ScoreReport {
        ScoreReport {
            scores,
            total_score: total,
            summary_feedback: "summary".to_string(),
        }
    }

    #[test]
    fn test_grammar_spelling_label_normalizes() {
        let report = parse_score_report(
            r#"{"scores":[{"criterion":"Grammar & Spelling","score":"8","positive":"p","negative":"n"}],
                "total_score":"75","summary_feedback":"s"}"#,
        )
        .unwrap();

        let card = normalize_report(&report);
        let grammar = card.get("grammar_spelling").unwrap();
        assert_eq!(grammar.score, 8);
        assert_eq!(grammar.feedback, "p n");
        assert_eq!(card.overall, 75);
        assert_eq!(card.summary, "s");
    }

    #[test]
    fn test_non_numeric_score_is_zero() {
        let card = normalize_report(&report(
            vec![entry("formatting", text("abc"))],
            text("abc"),
        ));
        assert_eq!(card.get("formatting").unwrap().score, 0);
        assert_eq!(card.overall, 0);
    }

    #[test]
    fn test_parse_leading_int_semantics() {
        assert_eq!(parse_leading_int("8"), 8);
        assert_eq!(parse_leading_int("  12 points"), 12);
        assert_eq!(parse_leading_int("8/10"), 8);
        assert_eq!(parse_leading_int("7.9"), 7);
        assert_eq!(parse_leading_int("-3"), -3);
        assert_eq!(parse_leading_int("+4"), 4);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("-"), 0);
    }

    #[test]
    fn test_numeric_scores_truncate() {
        assert_eq!(parse_score(&ScoreValue::Number(9.into())), 9);
        let float: serde_json::Number = serde_json::from_str("8.7").unwrap();
        assert_eq!(parse_score(&ScoreValue::Number(float)), 8);
    }

    #[test]
    fn test_unrecognized_label_is_kept_aside() {
        let card = normalize_report(&report(
            vec![
                entry("Keyword Density", text("5")),
                entry("Word Choice", text("7")),
            ],
            text("60"),
        ));
        assert_eq!(card.criteria.len(), 1);
        assert_eq!(card.criteria[0].key(), "word_choice");
        assert_eq!(card.unrecognized.len(), 1);
        assert_eq!(card.unrecognized[0].label, "Keyword Density");
        assert_eq!(card.unrecognized[0].score, 5);
    }

    #[test]
    fn test_criteria_follow_rubric_order() {
        let card = normalize_report(&report(
            vec![
                entry("comprehensiveness", text("9")),
                entry("Job Customization", text("13")),
                entry("spelling_grammar", text("10")),
            ],
            text("90"),
        ));
        let keys: Vec<_> = card.criteria.iter().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            vec!["customization", "grammar_spelling", "comprehensiveness"]
        );
    }

    #[test]
    fn test_duplicate_criterion_keeps_last() {
        let card = normalize_report(&report(
            vec![entry("formatting", text("3")), entry("Formatting", text("9"))],
            text("50"),
        ));
        assert_eq!(card.criteria.len(), 1);
        assert_eq!(card.get("formatting").unwrap().score, 9);
    }

    #[test]
    fn test_percent_is_relative_to_weight_and_clamped() {
        let card = normalize_report(&report(
            vec![
                entry("customization", text("12")),
                entry("formatting", text("25")),
                entry("word_choice", text("-2")),
            ],
            text("50"),
        ));
        assert_eq!(card.get("customization").unwrap().percent(), 80);
        assert_eq!(card.get("formatting").unwrap().percent(), 100);
        assert_eq!(card.get("word_choice").unwrap().percent(), 0);
    }

    #[test]
    fn test_huge_scores_do_not_overflow_percent() {
        let huge = ScoreValue::Number(serde_json::Number::from(i64::MAX));
        let card = normalize_report(&report(
            vec![
                entry("formatting", text("99999999999999999999")),
                entry("word_choice", huge),
                entry("optimal_length", text("-99999999999999999999")),
            ],
            text("99999999999999999999"),
        ));
        assert_eq!(card.get("formatting").unwrap().score, i64::MAX);
        assert_eq!(card.get("formatting").unwrap().percent(), 100);
        assert_eq!(card.get("word_choice").unwrap().percent(), 100);
        assert_eq!(card.get("optimal_length").unwrap().percent(), 0);
        assert_eq!(card.grade(), Grade::Excellent);
    }

    #[test]
    fn test_grade_bands() {
        assert_eq!(Grade::from_score(80), Grade::Excellent);
        assert_eq!(Grade::from_score(79), Grade::Good);
        assert_eq!(Grade::from_score(60), Grade::Good);
        assert_eq!(Grade::from_score(59), Grade::NeedsImprovement);
        assert_eq!(Grade::NeedsImprovement.label(), "Needs Improvement");
    }

    #[test]
    fn test_feedback_trims_when_one_side_is_empty() {
        let mut only_positive = entry("formatting", text("9"));
        only_positive.negative = String::new();
        let card = normalize_report(&report(vec![only_positive], text("9")));
        assert_eq!(card.get("formatting").unwrap().feedback, "Good");
    }
}
