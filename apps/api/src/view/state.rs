//! The analysis page's state machine.
//!
//! Idle → Analyzing → Result | Error, and `reset` from either terminal state back to Idle.
//! Transitions that do not apply to the current state leave it unchanged.

use crate::view::normalize::ScoreCard;

/// Form inputs carried between states so the Error page can show what was submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub job_title: String,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    Analyzing(FormInput),
    Result { input: FormInput, card: ScoreCard },
    Error { input: FormInput, message: String },
}

impl ViewState {
    /// Idle → Analyzing. Requires a file and a non-blank job title, as the submit control
    /// does; otherwise stays Idle.
    pub fn submit(self, input: FormInput) -> Self {
        match self {
            ViewState::Idle if input.file_name.is_some() && !input.job_title.trim().is_empty() => {
                ViewState::Analyzing(input)
            }
            other => other,
        }
    }

    /// Analyzing → Result | Error.
    pub fn complete(self, outcome: Result<ScoreCard, String>) -> Self {
        match self {
            ViewState::Analyzing(input) => match outcome {
                Ok(card) => ViewState::Result { input, card },
                Err(message) => ViewState::Error { input, message },
            },
            other => other,
        }
    }

    /// Result | Error → Idle, discarding the report and inputs.
    pub fn reset(self) -> Self {
        match self {
            ViewState::Result { .. } | ViewState::Error { .. } => ViewState::Idle,
            other => other,
        }
    }

    /// The submit control is disabled while a request is in flight.
    pub fn submit_disabled(&self) -> bool {
        matches!(self, ViewState::Analyzing(_))
    }
}
