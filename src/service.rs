use async_trait::async_trait;

use crate::models::{AnalysisResult, AnalyzeRequest};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Server configuration error: API Key missing")]
    MissingApiKey,
    #[error("request to generative service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generative service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response from generative service: {0}")]
    MalformedResponse(String),
}

/// The generative backend that turns notes into a study pack.
#[async_trait]
pub trait StudyService: Send + Sync {
    async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisResult, ServiceError>;

    /// `Ok(None)` when the model answered without an image.
    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, ServiceError>;
}
