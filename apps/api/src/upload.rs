//! Upload: the multipart payload of one scoring request, and the extract-then-score flow
//! shared by the JSON API and the HTML form.

use std::time::Instant;

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_resume_text_blocking, DocumentKind};
use crate::llm_client::ChatModel;
use crate::scoring::{analyze, Analysis};

pub const FILE_FIELD: &str = "file";
pub const JOB_TITLE_FIELD: &str = "jobTitle";

#[derive(Debug, Clone)]
pub struct Upload {
    pub bytes: Bytes,
    pub kind: DocumentKind,
    pub file_name: Option<String>,
    pub job_title: String,
}

/// The file part as seen before its body is read.
enum FilePart {
    Supported {
        bytes: Bytes,
        kind: DocumentKind,
        file_name: Option<String>,
    },
    Unsupported(String),
}

/// Reads `file` and `jobTitle` from the form.
///
/// The file's declared type is checked before its body is read, so an unsupported upload
/// is rejected without buffering it. An empty file input (no file chosen) counts as missing.
pub async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    let mut file: Option<FilePart> = None;
    let mut job_title: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            FILE_FIELD => {
                let file_name = field.file_name().map(str::to_string);
                if file_name.as_deref() == Some("") {
                    continue;
                }
                let mime = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                file = Some(match DocumentKind::from_mime(&mime) {
                    Some(kind) => FilePart::Supported {
                        bytes: field.bytes().await.map_err(|e| {
                            AppError::Validation(format!("Failed to read uploaded file: {e}"))
                        })?,
                        kind,
                        file_name,
                    },
                    None => FilePart::Unsupported(mime),
                });
            }
            JOB_TITLE_FIELD => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read job title: {e}")))?;
                job_title = Some(text.trim().to_string()).filter(|t| !t.is_empty());
            }
            _ => {}
        }
    }

    let (Some(file), Some(job_title)) = (file, job_title) else {
        return Err(AppError::Validation("Missing file or job title".to_string()));
    };

    match file {
        FilePart::Supported {
            bytes,
            kind,
            file_name,
        } => Ok(Upload {
            bytes,
            kind,
            file_name,
            job_title,
        }),
        FilePart::Unsupported(mime) => Err(AppError::UnsupportedFileType(mime)),
    }
}

/// Extracts the résumé text and runs the scoring pipeline.
/// Empty text is rejected here, before any model call.
pub async fn score_upload(upload: Upload, llm: &dyn ChatModel) -> Result<Analysis, AppError> {
    let analysis_id = Uuid::new_v4();
    info!(
        %analysis_id,
        "Scoring {} upload ({} bytes) for job title '{}' with {}",
        upload.kind.mime(),
        upload.bytes.len(),
        upload.job_title,
        llm.model_name()
    );

    let started = Instant::now();
    let resume_text = extract_resume_text_blocking(upload.bytes, upload.kind).await?;
    debug!(
        %analysis_id,
        "Extracted {} chars in {}ms",
        resume_text.len(),
        started.elapsed().as_millis()
    );

    let analysis = analyze(&resume_text, &upload.job_title, llm).await?;
    info!(%analysis_id, "Analysis complete");
    Ok(analysis)
}
