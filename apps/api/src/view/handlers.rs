//! Axum route handlers for the HTML analysis page.

use askama::Template;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::{read_upload, score_upload};
use crate::view::normalize::{normalize_report, ScoreCard};
use crate::view::state::{FormInput, ViewState};
use crate::view::templates::AnalysisPage;

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    render(&ViewState::Idle)
}

/// GET /new
///
/// "Analyze another resume": drops whatever was on screen and starts from an empty form.
pub async fn handle_new() -> Redirect {
    Redirect::to("/")
}

/// POST /analyze
///
/// Same pipeline and status codes as `POST /api/score`, rendered as HTML.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut input = FormInput::default();
    let outcome = run_analysis(&state, multipart, &mut input).await;

    let (status, outcome) = match outcome {
        Ok(card) => (StatusCode::OK, Ok(card)),
        Err(err) => {
            let (status, _, message) = err.parts();
            (status, Err(message))
        }
    };
    let view = ViewState::Analyzing(input).complete(outcome);

    match render(&view) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn run_analysis(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
    input: &mut FormInput,
) -> Result<ScoreCard, AppError> {
    let llm = state.model()?;
    let multipart =
        multipart.map_err(|e| AppError::Validation(format!("Invalid form submission: {e}")))?;
    let upload = read_upload(multipart).await?;

    *input = FormInput {
        job_title: upload.job_title.clone(),
        file_name: upload.file_name.clone(),
    };

    let analysis = score_upload(upload, llm.as_ref()).await?;
    Ok(normalize_report(&analysis.report))
}

fn render(view: &ViewState) -> Result<Html<String>, AppError> {
    AnalysisPage::from_state(view)
        .render()
        .map(Html)
        .map_err(|e| AppError::Internal(e.into()))
}
