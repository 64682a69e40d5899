//! Axum route handler for PDF export.

use axum::{
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::pdf::{render_resume, PdfOptions};

/// POST /api/export/pdf?template=&colorScheme=&fontSize=&margins=
///
/// Renders the posted resume and returns it as a PDF attachment.
pub async fn handle_export_pdf(
    Query(options): Query<PdfOptions>,
    Json(resume): Json<Resume>,
) -> Result<Response, AppError> {
    // CPU-bound, so it runs on the blocking pool.
    let rendered = tokio::task::spawn_blocking(move || render_resume(&resume, &options))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF export: {e}")))?
        .map_err(|e| AppError::Render(e.to_string()))?;

    info!(
        file = %rendered.file_name,
        pages = rendered.page_count,
        "PDF exported"
    );

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", header_safe(&rendered.file_name)),
        ),
    ];
    Ok((headers, rendered.bytes).into_response())
}

/// Header values must be visible ASCII; anything else becomes `_`.
fn header_safe(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
