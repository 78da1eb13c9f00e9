//! Text extraction for uploaded documents.
//!
//! Dispatch is by filename extension only: `.pdf`, `.docx`, everything else is
//! treated as UTF-8 text. No MIME sniffing and no recovery from malformed files.

pub mod docx;
pub mod pdf;

use std::path::Path;

use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("DOCX extraction failed: {0}")]
    Docx(#[from] docx_rs::ReaderError),

    #[error("'utf-8' codec can't decode {filename}: {source}")]
    Utf8 {
        filename: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// A request-scoped upload: the declared filename plus raw bytes.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Case-insensitive extension match; no extension means plain text.
    pub fn from_filename(filename: &str) -> Self {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some("docx") => DocumentKind::Docx,
            _ => DocumentKind::PlainText,
        }
    }
}

/// Extracts plain text from an uploaded file. CPU-bound: call from a blocking task.
pub fn extract_text(file: &UploadedFile) -> Result<String, ExtractError> {
    match DocumentKind::from_filename(&file.filename) {
        DocumentKind::Pdf => pdf::extract_pdf_text(&file.bytes),
        DocumentKind::Docx => docx::extract_docx_text(&file.bytes),
        DocumentKind::PlainText => {
            String::from_utf8(file.bytes.to_vec()).map_err(|source| ExtractError::Utf8 {
                filename: file.filename.clone(),
                source,
            })
        }
    }
}
