//! Text extraction: turns an uploaded résumé into plain UTF-8 text.
//!
//! Uploads dispatch on the declared MIME type, the CLI on the file extension. Unsupported
//! types are rejected before the payload is inspected. Whitespace-only output is its own failure.

use std::path::Path;

use bytes::Bytes;
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TEXT_MIME: &str = "text/plain";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported file type '{0}'")]
    Unsupported(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("extraction task failed: {0}")]
    Task(String),

    #[error("document contains no text")]
    Empty,
}

/// The three document formats the scorer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Matches a declared MIME type, ignoring parameters and case.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            PDF_MIME => Some(DocumentKind::Pdf),
            DOCX_MIME => Some(DocumentKind::Docx),
            TEXT_MIME => Some(DocumentKind::PlainText),
            _ => None,
        }
    }

    /// Picks a format from a file extension. Used where no MIME type is declared.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            DocumentKind::Pdf => PDF_MIME,
            DocumentKind::Docx => DOCX_MIME,
            DocumentKind::PlainText => TEXT_MIME,
        }
    }
}

/// Extracts text and enforces the non-empty invariant.
pub fn extract_resume_text(bytes: &[u8], kind: DocumentKind) -> Result<String, ExtractionError> {
    let text = match kind {
        DocumentKind::Pdf => extract_pdf(bytes)?,
        DocumentKind::Docx => extract_docx(bytes)?,
        DocumentKind::PlainText => String::from_utf8_lossy(bytes).into_owned(),
    };

    if text.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }
    Ok(text)
}

/// Runs extraction on the blocking pool; the PDF and DOCX parsers are synchronous and a
/// large document would otherwise stall the runtime worker.
pub async fn extract_resume_text_blocking(
    bytes: Bytes,
    kind: DocumentKind,
) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || extract_resume_text(&bytes, kind))
        .await
        .map_err(|e| ExtractionError::Task(e.to_string()))?
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
}

/// Raw paragraph text, one line per paragraph, including paragraphs inside table cells.
/// Run formatting is discarded.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut text = String::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => push_paragraph(&mut text, paragraph),
            DocumentChild::Table(table) => push_table(&mut text, table),
            _ => {}
        }
    }
    Ok(text)
}

fn push_paragraph(text: &mut String, paragraph: &Paragraph) {
    for paragraph_child in &paragraph.children {
        if let ParagraphChild::Run(run) = paragraph_child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text.push('\n');
}

/// Cells are read row by row, left to right.
#[allow(irrefutable_let_patterns)]
fn push_table(text: &mut String, table: &Table) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row else { continue };
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell else { continue };
            for content in &cell.children {
                if let TableCellContent::Paragraph(paragraph) = content {
                    push_paragraph(text, paragraph);
                }
            }
        }
    }
}
