use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::models::resume::Resume;

pub const JSON_EXPORT_FILE_NAME: &str = "resume.json";

/// POST /api/export/json
///
/// Echoes the resume back pretty-printed as a `resume.json` download.
pub async fn handle_export_json(Json(resume): Json<Resume>) -> Result<Response, AppError> {
    let body = serde_json::to_string_pretty(&resume)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serializing resume export: {e}")))?;

    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{JSON_EXPORT_FILE_NAME}\""),
        ),
    ];
    Ok((headers, body).into_response())
}
