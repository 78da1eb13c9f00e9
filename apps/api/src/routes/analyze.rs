//! Axum route handlers for the analysis endpoint.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::analysis::analyzer::analyze_skills;
use crate::analysis::models::AnalysisOutcome;
use crate::errors::AppError;
use crate::extraction::{extract_text, UploadedFile};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// The two uploads a request must carry.
#[derive(Debug)]
pub struct AnalyzeForm {
    pub resume: UploadedFile,
    pub job_description: UploadedFile,
}

/// POST /analyze
///
/// Extracts both uploads, then asks the model for the skills report. Analyzer
/// failures still return 200 with `{error, details}`; everything else is a 500.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisOutcome>, AppError> {
    let mut multipart = multipart?;
    let form = read_analyze_form(&mut multipart).await?;

    let resume_text = extract_blocking(form.resume).await?;
    let jd_text = extract_blocking(form.job_description).await?;

    let outcome = analyze_skills(&resume_text, &jd_text, state.generator.as_ref()).await;
    debug!("Analysis finished (failed: {})", outcome.is_failure());
    Ok(Json(outcome))
}

/// OPTIONS /analyze
pub async fn handle_preflight() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// Collects the `resume` and `job_description` file parts. The first file part
/// with a given name wins. Unknown parts and parts without a filename are skipped.
async fn read_analyze_form(multipart: &mut Multipart) -> Result<AnalyzeForm, AppError> {
    let mut resume = None;
    let mut job_description = None;

    while let Some(field) = multipart.next_field().await? {
        let slot = match field.name() {
            Some(RESUME_FIELD) => &mut resume,
            Some(JOB_DESCRIPTION_FIELD) => &mut job_description,
            _ => continue,
        };
        if slot.is_some() {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            debug!("Skipping non-file part '{}'", field.name().unwrap_or_default());
            continue;
        };
        let bytes = field.bytes().await?;
        debug!("Received upload '{filename}' ({} bytes)", bytes.len());
        *slot = Some(UploadedFile { filename, bytes });
    }

    Ok(AnalyzeForm {
        resume: resume.ok_or(AppError::MissingField(RESUME_FIELD))?,
        job_description: job_description.ok_or(AppError::MissingField(JOB_DESCRIPTION_FIELD))?,
    })
}

/// Parsing libraries are synchronous and may panic on hostile input, so
/// extraction runs on the blocking pool.
async fn extract_blocking(file: UploadedFile) -> Result<String, AppError> {
    let filename = file.filename.clone();
    let text = tokio::task::spawn_blocking(move || extract_text(&file))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!(
                "text extraction task failed for '{filename}': {e}"
            ))
        })??;
    debug!("Extracted {} chars from '{filename}'", text.chars().count());
    Ok(text)
}
