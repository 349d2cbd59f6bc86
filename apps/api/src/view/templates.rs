use askama::Template;

use crate::extraction::{DOCX_MIME, PDF_MIME, TEXT_MIME};
use crate::view::normalize::ScoreCard;
use crate::view::state::ViewState;

/// The single analysis page. Which section renders follows the `ViewState` it was built from.
#[derive(Template)]
#[template(path = "index.html")]
pub struct AnalysisPage<'a> {
    pub job_title: &'a str,
    pub error: Option<&'a str>,
    pub card: Option<&'a ScoreCard>,
    pub submit_disabled: bool,
    pub accept: String,
}

impl<'a> AnalysisPage<'a> {
    pub fn from_state(state: &'a ViewState) -> Self {
        let (job_title, error, card) = match state {
            ViewState::Idle => ("", None, None),
            ViewState::Analyzing(input) => (input.job_title.as_str(), None, None),
            ViewState::Result { input, card } => (input.job_title.as_str(), None, Some(card)),
            ViewState::Error { input, message } => {
                (input.job_title.as_str(), Some(message.as_str()), None)
            }
        };

        AnalysisPage {
            job_title,
            error,
            card,
            submit_disabled: state.submit_disabled(),
            accept: [".pdf", ".docx", ".txt", PDF_MIME, DOCX_MIME, TEXT_MIME].join(","),
        }
    }
}
