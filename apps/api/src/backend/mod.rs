//! Client for the external resume service. Every outbound call for
//! enhancement, saving and reading goes through `ResumeBackend`.
//!
//! No retries. Callers decide what to do on failure: enhancement and save
//! handlers substitute local fallbacks, read handlers surface an error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::resume::Resume;

pub mod fallback;
pub mod handlers;

const ENHANCE_PATH: &str = "/ai-enhance";
const SAVE_PATH: &str = "/save-resume";
const RESUME_PATH: &str = "/resume";
const LIST_PATH: &str = "/resumes";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid backend response: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceRequest {
    pub section: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceResponse {
    pub enhanced_content: String,
}

/// Body returned by the backend after a save. Unknown fields are kept so
/// the route can pass them through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedResume {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One row of the backend's resume listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeListing {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub saved_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListBody {
    #[serde(default)]
    resumes: Vec<ResumeListing>,
}

/// The resume backend. Carried in `AppState` as `Arc<dyn ResumeBackend>`
/// so handlers can be exercised against an in-process fake.
#[async_trait]
pub trait ResumeBackend: Send + Sync {
    async fn enhance(&self, request: &EnhanceRequest) -> Result<EnhanceResponse, BackendError>;

    async fn save(&self, resume: &Resume) -> Result<SavedResume, BackendError>;

    /// `Ok(None)` when the backend has no resume with this id.
    async fn get_resume(&self, id: &str) -> Result<Option<Resume>, BackendError>;

    async fn list_resumes(&self) -> Result<Vec<ResumeListing>, BackendError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP implementation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    enhance_timeout: Duration,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, enhance_timeout: Duration) -> Result<Self, BackendError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: Client::builder().build()?,
            base_url,
            enhance_timeout,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turns a non-2xx response into `BackendError::Status`.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(BackendError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| BackendError::Parse(e.to_string()))
}

#[async_trait]
impl ResumeBackend for HttpBackend {
    async fn enhance(&self, request: &EnhanceRequest) -> Result<EnhanceResponse, BackendError> {
        let response = self
            .client
            .post(self.url(ENHANCE_PATH))
            .timeout(self.enhance_timeout)
            .json(request)
            .send()
            .await?;
        let body: EnhanceResponse = read_json(check_status(response).await?).await?;
        debug!(section = %request.section, "Backend enhancement succeeded");
        Ok(body)
    }

    async fn save(&self, resume: &Resume) -> Result<SavedResume, BackendError> {
        let response = self
            .client
            .post(self.url(SAVE_PATH))
            .json(resume)
            .send()
            .await?;
        let saved: SavedResume = read_json(check_status(response).await?).await?;
        debug!(id = ?saved.id, "Backend save succeeded");
        Ok(saved)
    }

    async fn get_resume(&self, id: &str) -> Result<Option<Resume>, BackendError> {
        let response = self
            .client
            .get(self.url(&format!("{RESUME_PATH}/{id}")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resume = read_json(check_status(response).await?).await?;
        Ok(Some(resume))
    }

    async fn list_resumes(&self) -> Result<Vec<ResumeListing>, BackendError> {
        let response = self.client.get(self.url(LIST_PATH)).send().await?;
        let body: ListBody = read_json(check_status(response).await?).await?;
        Ok(body.resumes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        http::StatusCode as AxumStatus,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};

    /// Port 9 (discard) is not served in test environments.
    const UNREACHABLE: &str = "http://127.0.0.1:9";

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn stub_router() -> Router {
        Router::new()
            .route(
                "/ai-enhance",
                post(|Json(body): Json<Value>| async move {
                    Json(json!({ "enhanced_content": format!("better {}", body["content"].as_str().unwrap_or("")) }))
                }),
            )
            .route(
                "/save-resume",
                post(|| async { Json(json!({ "id": "resume_1", "message": "Resume saved successfully" })) }),
            )
            .route(
                "/resume/:id",
                get(|Path(id): Path<String>| async move {
                    if id == "known" {
                        Ok(Json(json!({ "id": "known", "personalInfo": { "name": "Ada" } })))
                    } else {
                        Err(AxumStatus::NOT_FOUND)
                    }
                }),
            )
            .route(
                "/resumes",
                get(|| async { Json(json!({ "resumes": [{ "id": "known", "name": "Ada", "saved_at": "File" }] })) }),
            )
    }

    fn client(base: &str) -> HttpBackend {
        HttpBackend::new(base, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_enhance_round_trip() {
        let backend = client(&spawn_stub(stub_router()).await);
        let response = backend
            .enhance(&EnhanceRequest {
                section: "summary".to_string(),
                content: "code".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.enhanced_content, "better code");
    }

    #[tokio::test]
    async fn test_save_returns_backend_id() {
        let backend = client(&spawn_stub(stub_router()).await);
        let saved = backend.save(&Resume::default()).await.unwrap();
        assert_eq!(saved.id.as_deref(), Some("resume_1"));
    }

    #[tokio::test]
    async fn test_get_resume_found_and_missing() {
        let backend = client(&spawn_stub(stub_router()).await);
        let found = backend.get_resume("known").await.unwrap().unwrap();
        assert_eq!(found.personal_info.name, "Ada");
        assert!(backend.get_resume("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_resumes() {
        let backend = client(&spawn_stub(stub_router()).await);
        let listed = backend.list_resumes().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Ada");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let router = Router::new().route(
            "/save-resume",
            post(|| async { (AxumStatus::SERVICE_UNAVAILABLE, "down") }),
        );
        let backend = client(&spawn_stub(router).await);
        let err = backend.save(&Resume::default()).await.unwrap_err();
        assert!(matches!(err, BackendError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let router = Router::new().route("/ai-enhance", post(|| async { "not json" }));
        let backend = client(&spawn_stub(router).await);
        let err = backend
            .enhance(&EnhanceRequest {
                section: "skills".to_string(),
                content: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_http_error() {
        let err = client(UNREACHABLE).list_resumes().await.unwrap_err();
        assert!(matches!(err, BackendError::Http(_)));
    }

    #[tokio::test]
    async fn test_enhance_times_out() {
        let router = Router::new().route(
            "/ai-enhance",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!({ "enhanced_content": "late" }))
            }),
        );
        let base = spawn_stub(router).await;
        let backend = HttpBackend::new(base, Duration::from_millis(100)).unwrap();
        let err = backend
            .enhance(&EnhanceRequest {
                section: "summary".to_string(),
                content: "x".to_string(),
            })
            .await
            .unwrap_err();
        match err {
            BackendError::Http(e) => assert!(e.is_timeout()),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let backend = client("http://localhost:8000/");
        assert_eq!(backend.url(SAVE_PATH), "http://localhost:8000/save-resume");
    }
}
