use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{info, warn};

use crate::backend::fallback::{fallback_enhancement, local_resume_id};
use crate::backend::{
    BackendError, EnhanceRequest, EnhanceResponse, ResumeBackend, ResumeListing, SavedResume,
};
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnhanceResumeRequest {
    pub resume: Resume,
    pub section: String,
}

#[derive(Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeListing>,
}

/// Asks the backend to rewrite `content`, substituting local text on any failure.
pub async fn enhance_or_fallback(
    backend: &dyn ResumeBackend,
    section: &str,
    content: &str,
) -> String {
    let request = EnhanceRequest {
        section: section.to_string(),
        content: content.to_string(),
    };
    match backend.enhance(&request).await {
        Ok(response) => response.enhanced_content,
        Err(e) => {
            warn!(section, "Enhancement backend failed, using fallback: {e}");
            fallback_enhancement(section, content)
        }
    }
}

/// POST /api/ai-enhance
///
/// The body is read as loose JSON so type mismatches get the same 400 as
/// missing fields. A body that is not JSON at all still gets fallback text.
pub async fn handle_ai_enhance(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!("Unreadable enhance request, using fallback: {rejection}");
            return Ok(Json(EnhanceResponse {
                enhanced_content: fallback_enhancement("general", ""),
            }));
        }
    };

    let section = body["section"].as_str().filter(|s| !s.is_empty());
    let content = body["content"].as_str();
    let (Some(section), Some(content)) = (section, content) else {
        return Err(AppError::Validation(
            "Section and content are required".to_string(),
        ));
    };

    let enhanced_content = enhance_or_fallback(state.backend.as_ref(), section, content).await;
    Ok(Json(EnhanceResponse { enhanced_content }))
}

/// POST /api/save-resume
///
/// Never fails once the name is present: backend problems produce a
/// locally generated id instead.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(resume): Json<Resume>,
) -> Response {
    if resume.personal_info.name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "message": "Name is required" })),
        )
            .into_response();
    }

    let body = match state.backend.save(&resume).await {
        Ok(saved) => {
            info!(id = ?saved.id, "Resume saved");
            merge_saved(saved)
        }
        Err(e) => {
            let message = match &e {
                BackendError::Status { .. } => "Resume saved locally (backend unavailable)",
                BackendError::Http(_) | BackendError::Parse(_) => "Resume saved locally (fallback)",
            };
            warn!("Save backend failed, keeping resume locally: {e}");
            json!({
                "success": true,
                "id": local_resume_id(),
                "message": message,
            })
        }
    };
    Json(body).into_response()
}

/// `{success: true}` overlaid with whatever the backend returned.
fn merge_saved(saved: SavedResume) -> Value {
    let mut body = Map::new();
    body.insert("success".to_string(), Value::Bool(true));
    if let Ok(Value::Object(fields)) = serde_json::to_value(saved) {
        body.extend(fields);
    }
    Value::Object(body)
}

/// GET /api/resume/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(AppError::Validation(format!("Invalid resume id '{id}'")));
    }
    state
        .backend
        .get_resume(&id)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

/// GET /api/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = state
        .backend
        .list_resumes()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;
    Ok(Json(ResumeListResponse { resumes }))
}

/// POST /api/resume/enhance
///
/// Enhances one section of the posted resume and returns the updated copy.
pub async fn handle_enhance_resume(
    State(state): State<AppState>,
    Json(req): Json<EnhanceResumeRequest>,
) -> Result<Json<Resume>, AppError> {
    let content = req
        .resume
        .section_content(&req.section)
        .ok_or_else(|| AppError::Validation(format!("Unknown section '{}'", req.section)))?;

    let enhanced = enhance_or_fallback(state.backend.as_ref(), &req.section, &content).await;
    Ok(Json(req.resume.apply_enhancement(&req.section, &enhanced)))
}
