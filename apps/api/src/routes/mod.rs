pub mod export;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats;
use crate::backend::handlers as backend;
use crate::pdf::handlers as pdf;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Backend proxy (falls back locally for enhance/save)
        .route("/api/ai-enhance", post(backend::handle_ai_enhance))
        .route("/api/save-resume", post(backend::handle_save_resume))
        .route("/api/resume/enhance", post(backend::handle_enhance_resume))
        .route("/api/resume/:id", get(backend::handle_get_resume))
        .route("/api/resumes", get(backend::handle_list_resumes))
        // Local computation
        .route("/api/ats-score", post(ats::handle_ats_score))
        .route("/api/export/pdf", post(pdf::handle_export_pdf))
        .route("/api/export/json", post(export::handle_export_json))
        .with_state(state)
}
