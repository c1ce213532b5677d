//! PDF text extraction for uploaded files.
//!
//! pdf-extract is synchronous and CPU-bound, so extraction runs on the
//! blocking pool. A corrupt or unreadable PDF is fatal for the request.

use anyhow::Context;

use crate::errors::AppError;

/// Extracts the text content of a PDF given its raw bytes.
/// `label` names the upload ("resume" / "job description") in error messages.
pub async fn extract_text(bytes: Vec<u8>, label: &str) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .context("PDF extraction task panicked")?
        .map_err(|e| AppError::Pdf(format!("could not read {label} PDF: {e}")))
}
