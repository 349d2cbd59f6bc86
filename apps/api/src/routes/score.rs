use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};

use crate::errors::AppError;
use crate::scoring::report::ScoreReport;
use crate::state::AppState;
use crate::upload::{read_upload, score_upload};

/// POST /api/score
///
/// Multipart `file` + `jobTitle` in, validated `ScoreReport` out. The credential check runs
/// before the body is touched, so an unconfigured server answers 500 for any payload.
pub async fn handle_score(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ScoreReport>, AppError> {
    let llm = state.model()?;
    let multipart =
        multipart.map_err(|e| AppError::Validation(format!("Invalid form submission: {e}")))?;

    let upload = read_upload(multipart).await?;
    let analysis = score_upload(upload, llm.as_ref()).await?;

    Ok(Json(analysis.report))
}
