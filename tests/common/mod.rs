#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use prepster::{
    models::{AnalysisResult, AnalyzeRequest, Question},
    router,
    service::{ServiceError, StudyService},
    AppState,
};
use tower::ServiceExt;

pub const BOUNDARY: &str = "prepster-test-boundary";

/// Stands in for the generative service with fixed answers.
pub struct FakeService {
    pub analysis: Result<AnalysisResult, u16>,
    pub image: Result<Option<String>, u16>,
    pub analyze_calls: AtomicUsize,
    pub last_request: Mutex<Option<AnalyzeRequest>>,
}

impl FakeService {
    pub fn new(analysis: Result<AnalysisResult, u16>, image: Result<Option<String>, u16>) -> Self {
        Self {
            analysis,
            image,
            analyze_calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.analyze_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StudyService for FakeService {
    async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisResult, ServiceError> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().expect("request lock") = Some(request);
        self.analysis.clone().map_err(|status| ServiceError::Status {
            status,
            body: "quota exceeded".to_string(),
        })
    }

    async fn generate_image(&self, _prompt: &str) -> Result<Option<String>, ServiceError> {
        self.image.clone().map_err(|status| ServiceError::Status {
            status,
            body: "upstream timeout".to_string(),
        })
    }
}

pub fn single_question_pack() -> AnalysisResult {
    AnalysisResult {
        topic_title: "Photosynthesis".to_string(),
        summary: "Plants turn light, water and carbon dioxide into sugar.".to_string(),
        key_points: vec![
            "Chlorophyll absorbs light".to_string(),
            "Oxygen is a by-product".to_string(),
        ],
        questions: vec![Question {
            question: "Pick the first letter".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            correct_answer: "A".to_string(),
            explanation: "A comes first.".to_string(),
        }],
        quotes: vec!["Leaves are tiny solar panels.".to_string()],
        image_prompt: "a sunlit leaf".to_string(),
    }
}

pub fn app(service: Arc<FakeService>) -> Router {
    router(AppState::new(service, false))
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

/// `name=value` part of the session cookie set by the response.
pub fn session_cookie(resp: &Response<Body>) -> String {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .expect("response should set the session cookie")
        .to_string()
}

pub fn notes_body(content: &str, image: Option<(&str, &[u8])>) -> Body {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"content\"\r\n\r\n{content}\r\n"
        )
        .as_bytes(),
    );
    let (mime, bytes) = image.unwrap_or(("application/octet-stream", b""));
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"notes.png\"\r\nContent-Type: {mime}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    Body::from(body)
}

/// Drives the screen routes the way htmx does, carrying the session cookie.
pub struct Browser {
    pub app: Router,
    pub cookie: String,
}

impl Browser {
    pub async fn open(app: Router) -> (Self, String) {
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .body(Body::empty())
                    .expect("request build should succeed"),
            )
            .await
            .expect("router should respond");
        let cookie = session_cookie(&resp);
        let page = body_text(resp).await;
        (Self { app, cookie }, page)
    }

    pub async fn send(&self, req: axum::http::request::Builder, body: Body) -> Response<Body> {
        let req = req
            .header("HX-Request", "true")
            .header(header::COOKIE, &self.cookie)
            .body(body)
            .expect("request build should succeed");
        self.app
            .clone()
            .oneshot(req)
            .await
            .expect("router should respond")
    }

    pub async fn post(&self, uri: &str) -> String {
        let resp = self
            .send(Request::builder().method(Method::POST).uri(uri), Body::empty())
            .await;
        body_text(resp).await
    }

    pub async fn get(&self, uri: &str) -> String {
        let resp = self
            .send(Request::builder().method(Method::GET).uri(uri), Body::empty())
            .await;
        body_text(resp).await
    }

    pub async fn answer(&self, option_idx: usize) -> String {
        let resp = self
            .send(
                Request::builder()
                    .method(Method::POST)
                    .uri("/answer")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded"),
                Body::from(format!("option={option_idx}")),
            )
            .await;
        body_text(resp).await
    }

    pub async fn submit_notes(&self, content: &str, image: Option<(&str, &[u8])>) -> String {
        let resp = self
            .send(
                Request::builder()
                    .method(Method::POST)
                    .uri("/notes")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    ),
                notes_body(content, image),
            )
            .await;
        body_text(resp).await
    }
}
