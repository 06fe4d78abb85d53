pub mod extractors;
pub mod gemini;
pub mod handlers;
pub mod history;
pub mod images;
pub mod models;
pub mod names;
pub mod quiz;
pub mod rejections;
pub mod service;
pub mod sessions;
pub mod statics;
pub mod study;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, middleware, Router};

use crate::{service::StudyService, sessions::Sessions};

#[derive(Clone)]
pub struct AppState {
    pub sessions: Sessions,
    pub service: Arc<dyn StudyService>,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(service: Arc<dyn StudyService>, secure_cookies: bool) -> Self {
        Self {
            sessions: Sessions::default(),
            service,
            secure_cookies,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::screens::routes())
        .layer(middleware::from_fn(csrf_check))
        .merge(handlers::api::routes())
        .nest("/static", statics::routes())
        .layer(DefaultBodyLimit::max(names::MAX_UPLOAD_BYTES))
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}
