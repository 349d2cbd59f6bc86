//! The fixed scoring rubric: nine criteria with integer weights summing to 100.
//!
//! This table is the only definition of the rubric. The scoring prompt, the HTML view and
//! the CLI all read it from here.

/// One rubric criterion. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Customization,
    GrammarSpelling,
    SummaryStatement,
    MeasurableResults,
    WordChoice,
    Formatting,
    OptimalLength,
    ContactInformation,
    Comprehensiveness,
}

pub const RUBRIC: [Criterion; 9] = [
    Criterion::Customization,
    Criterion::GrammarSpelling,
    Criterion::SummaryStatement,
    Criterion::MeasurableResults,
    Criterion::WordChoice,
    Criterion::Formatting,
    Criterion::OptimalLength,
    Criterion::ContactInformation,
    Criterion::Comprehensiveness,
];

/// Normalized labels that older prompts and alternate wordings produce.
const ALIASES: &[(&str, Criterion)] = &[
    ("job_customization", Criterion::Customization),
    ("spelling_grammar", Criterion::GrammarSpelling),
    ("spelling_and_grammar", Criterion::GrammarSpelling),
    ("grammar_and_spelling", Criterion::GrammarSpelling),
    ("summary", Criterion::SummaryStatement),
    ("contact_info", Criterion::ContactInformation),
    ("length", Criterion::OptimalLength),
];

impl Criterion {
    /// Machine-stable key; also the `criterion` value the model is asked to echo.
    pub fn key(self) -> &'static str {
        match self {
            Criterion::Customization => "customization",
            Criterion::GrammarSpelling => "grammar_spelling",
            Criterion::SummaryStatement => "summary_statement",
            Criterion::MeasurableResults => "measurable_results",
            Criterion::WordChoice => "word_choice",
            Criterion::Formatting => "formatting",
            Criterion::OptimalLength => "optimal_length",
            Criterion::ContactInformation => "contact_information",
            Criterion::Comprehensiveness => "comprehensiveness",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Criterion::Customization => "Job Customization",
            Criterion::GrammarSpelling => "Grammar & Spelling",
            Criterion::SummaryStatement => "Summary Statement",
            Criterion::MeasurableResults => "Measurable Results",
            Criterion::WordChoice => "Word Choice",
            Criterion::Formatting => "Formatting",
            Criterion::OptimalLength => "Optimal Length",
            Criterion::ContactInformation => "Contact Information",
            Criterion::Comprehensiveness => "Comprehensiveness",
        }
    }

    /// Maximum points for this criterion.
    pub fn weight(self) -> u32 {
        match self {
            Criterion::Customization | Criterion::MeasurableResults => 15,
            _ => 10,
        }
    }

    /// Resolves a model-supplied label through `normalize_label`, the rubric keys, then
    /// the alias table. `None` means the label is not a rubric criterion.
    pub fn from_label(label: &str) -> Option<Self> {
        let key = normalize_label(label);
        RUBRIC
            .iter()
            .copied()
            .find(|c| c.key() == key)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == key)
                    .map(|(_, c)| *c)
            })
    }
}

/// Lower-cases a label and turns `" & "` and spaces into underscores:
/// "Grammar & Spelling" becomes `grammar_spelling`.
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .replace(" & ", "_")
        .replace(' ', "_")
}

/// Sum of all weights. Always 100.
#[cfg(test)]
pub fn total_weight() -> u32 {
    RUBRIC.iter().map(|c| c.weight()).sum()
}

/// The weight table as pretty JSON (`{"customization": 15, ...}`), in rubric order.
pub fn weights_json() -> String {
    let mut out = String::from("{\n");
    for (i, criterion) in RUBRIC.iter().enumerate() {
        let sep = if i + 1 < RUBRIC.len() { "," } else { "" };
        out.push_str(&format!(
            "  \"{}\": {}{}\n",
            criterion.key(),
            criterion.weight(),
            sep
        ));
    }
    out.push('}');
    out
}
