use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    models::{AnalysisResult, AnalyzeRequest},
    service::{ServiceError, StudyService},
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ANALYSIS_MODEL: &str = "gemini-2.0-flash-lite-preview-02-05";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-flash-preview";

const ANALYSIS_INSTRUCTIONS: &str = "Analyze these student notes and provide a structured learning experience including a summary, key highlights, 5 quiz questions, and quotes. Notes follow:\n";
const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<Value>,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .map(|c| c.content.parts.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    analysis_model: String,
    image_model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            analysis_model: DEFAULT_ANALYSIS_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_models(mut self, analysis: impl Into<String>, image: impl Into<String>) -> Self {
        self.analysis_model = analysis.into();
        self.image_model = image.into();
        self
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ServiceError> {
        let api_key = self.api_key.as_deref().ok_or(ServiceError::MissingApiKey)?;

        tracing::debug!("sending generateContent request to {model}");

        let response = self
            .client
            .post(format!("{}/models/{model}:generateContent", self.base_url))
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("generative service error {status}: {body}");
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl StudyService for GeminiClient {
    async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisResult, ServiceError> {
        let mut parts = vec![Part {
            text: Some(format!("{ANALYSIS_INSTRUCTIONS}{}", request.content)),
            inline_data: None,
        }];
        if let Some(image) = request.image.as_deref().and_then(inline_image) {
            parts.push(Part {
                text: None,
                inline_data: Some(image),
            });
        }

        let body = GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config: Some(json!({
                "responseMimeType": "application/json",
                "responseSchema": study_pack_schema(),
            })),
        };

        let response = self.generate_content(&self.analysis_model, &body).await?;
        let text: String = response
            .first_parts()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        parse_study_pack(&text)
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, ServiceError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(format!(
                        "Create a clean, artistic, high-quality educational illustration for: {prompt}. Use soft academic colors and professional design."
                    )),
                    inline_data: None,
                }],
            }],
            generation_config: None,
        };

        let response = self.generate_content(&self.image_model, &body).await?;

        Ok(response
            .first_parts()
            .first()
            .and_then(|p| p.inline_data.as_ref())
            .map(|d| format!("data:image/png;base64,{}", d.data)))
    }
}

/// Splits a `data:` URL into the inline part Gemini expects.
fn inline_image(data_url: &str) -> Option<InlineData> {
    let (header, data) = data_url.split_once(',')?;
    if data.is_empty() {
        return None;
    }
    let mime_type = header
        .strip_prefix("data:")
        .and_then(|h| h.split(';').next())
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_IMAGE_MIME);

    Some(InlineData {
        mime_type: mime_type.to_string(),
        data: data.to_string(),
    })
}

fn parse_study_pack(text: &str) -> Result<AnalysisResult, ServiceError> {
    serde_json::from_str(text).map_err(|e| ServiceError::MalformedResponse(e.to_string()))
}

fn study_pack_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "topicTitle": { "type": "STRING", "description": "A catchy title for the topic of the notes" },
            "summary": { "type": "STRING", "description": "A detailed summary of the notes" },
            "keyPoints": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "5-7 key takeaways or highlights"
            },
            "questions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": { "type": "STRING" },
                        "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "correctAnswer": { "type": "STRING", "description": "The text of the correct option" },
                        "explanation": { "type": "STRING", "description": "Detailed reasoning why this is correct" }
                    },
                    "required": ["question", "options", "correctAnswer", "explanation"]
                },
                "description": "5 framed multiple-choice questions based on the notes"
            },
            "quotes": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "3 inspiring or relevant quotes about this topic"
            },
            "imagePrompt": { "type": "STRING", "description": "A visual prompt to generate an image representing the topic" }
        },
        "required": ["topicTitle", "summary", "keyPoints", "questions", "quotes", "imagePrompt"]
    })
}
