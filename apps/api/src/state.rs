use std::sync::Arc;

use crate::backend::ResumeBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Resume service client. Tests swap in an in-process fake.
    pub backend: Arc<dyn ResumeBackend>,
}
