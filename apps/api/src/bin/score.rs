//! resume-score: runs the scoring pipeline against a résumé on disk and prints the result.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bytes::Bytes;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use resume_scorer::build_chat_model;
use resume_scorer::config::Config;
use resume_scorer::extraction::{extract_resume_text_blocking, DocumentKind};
use resume_scorer::scoring::analyze;
use resume_scorer::scoring::report::{ScoreReport, ScoreValue};
use resume_scorer::view::normalize::normalize_report;

#[derive(Debug, Parser)]
#[command(name = "resume-score", version, about = "Score a resume against a job title")]
struct Args {
    /// Path to the resume file (PDF, DOCX, or TXT)
    resume_file: PathBuf,

    /// The job title to score the resume against
    job_title: String,

    /// Also write the full JSON report to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(llm) = build_chat_model(&config)? else {
        bail!("OPENAI_API_KEY is not set. Add it to the environment or a .env file.");
    };

    let Some(kind) = DocumentKind::from_path(&args.resume_file) else {
        bail!(
            "Unsupported file format: '{}' (expected .pdf, .docx or .txt)",
            args.resume_file.display()
        );
    };

    let bytes = tokio::fs::read(&args.resume_file)
        .await
        .with_context(|| format!("Failed to read '{}'", args.resume_file.display()))?;
    let resume_text = extract_resume_text_blocking(Bytes::from(bytes), kind)
        .await
        .with_context(|| format!("Error reading resume file '{}'", args.resume_file.display()))?;

    let job_title = args.job_title.trim();
    if job_title.is_empty() {
        bail!("The job title must not be empty");
    }

    eprintln!("Scoring resume...");
    let analysis = analyze(&resume_text, job_title, llm.as_ref()).await?;

    println!("Identified Job Requirements:\n{}\n", analysis.job_requirements);
    print!("{}", render_table(&analysis.report));

    let card = normalize_report(&analysis.report);
    println!("\nTotal Score: {}/100 ({})", card.overall, card.grade().label());
    for unknown in &card.unrecognized {
        println!("Note: '{}' is not a rubric criterion", unknown.label);
    }
    println!("\nSummary Feedback:\n{}", analysis.report.summary_feedback);

    if let Some(path) = args.output {
        let json = serde_json::to_string_pretty(&analysis.report)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        println!("\nFull results saved to {}", path.display());
    }

    Ok(())
}

fn score_text(value: &ScoreValue) -> String {
    match value {
        ScoreValue::Number(n) => n.to_string(),
        ScoreValue::Text(s) => s.clone(),
    }
}

/// Grid table of criterion, score and feedback, one row per scored entry.
fn render_table(report: &ScoreReport) -> String {
    let headers = ["Criterion", "Score", "Positive Feedback", "Negative Feedback"];
    let rows: Vec<[String; 4]> = report
        .scores
        .iter()
        .map(|e| {
            [
                e.criterion.clone(),
                score_text(&e.score),
                e.positive.replace('\n', " "),
                e.negative.replace('\n', " "),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };
    let format_row = |cells: &[&str]| {
        let mut line = String::from("|");
        for (cell, width) in cells.iter().zip(&widths) {
            let pad = width - cell.chars().count();
            line.push_str(&format!(" {cell}{} |", " ".repeat(pad)));
        }
        line.push('\n');
        line
    };

    let mut out = border.clone();
    out.push_str(&format_row(&headers));
    out.push_str(&border.replace('-', "="));
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&format_row(&cells));
        out.push_str(&border);
    }
    out
}
