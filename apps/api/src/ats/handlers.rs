//! Axum route handler for ATS scoring.

use axum::Json;
use serde::Deserialize;

use crate::ats::keywords::Industry;
use crate::ats::scorer::{score_resume, score_resume_for, AtsReport};
use crate::models::resume::Resume;

#[derive(Debug, Deserialize)]
pub struct AtsScoreRequest {
    pub resume: Resume,
    #[serde(default)]
    pub industry: Option<Industry>,
}

/// POST /api/ats-score
///
/// Scores the resume and returns sub-scores plus improvement suggestions.
pub async fn handle_ats_score(Json(request): Json<AtsScoreRequest>) -> Json<AtsReport> {
    let report = match request.industry {
        Some(industry) => score_resume_for(&request.resume, industry),
        None => score_resume(&request.resume),
    };
    tracing::debug!(
        overall = report.score.overall,
        suggestions = report.suggestions.len(),
        "ATS analysis complete"
    );
    Json(report)
}
