//! JSON endpoints that forward to the generative service, keeping the API key
//! on the server.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use crate::{
    images,
    models::{ErrorBody, GenerateImageRequest, GenerateImageResponse, AnalyzeRequest},
    names, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            names::ANALYZE_API_URL,
            post(analyze).fallback(method_not_allowed),
        )
        .route(
            names::GENERATE_IMAGE_API_URL,
            post(generate_image).fallback(method_not_allowed),
        )
}

fn error_json(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: error.into(),
        }),
    )
        .into_response()
}

async fn method_not_allowed() -> Response {
    error_json(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("bad analyze request: {e}");
            return error_json(StatusCode::BAD_REQUEST, e.body_text());
        }
    };

    match state.service.analyze(request).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            tracing::error!("analysis failed: {e}");
            error_json(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Always answers 200 with something displayable.
async fn generate_image(
    State(state): State<AppState>,
    payload: Result<Json<GenerateImageRequest>, JsonRejection>,
) -> Json<GenerateImageResponse> {
    let image_data = match payload {
        Ok(Json(GenerateImageRequest { prompt })) => {
            match state.service.generate_image(&prompt).await {
                Ok(Some(data)) if !data.is_empty() => data,
                Ok(_) => images::placeholder_image_url(&prompt),
                Err(e) => {
                    tracing::error!("image generation failed: {e}");
                    images::placeholder_image_url("error")
                }
            }
        }
        Err(e) => {
            tracing::warn!("bad generate-image request: {e}");
            images::placeholder_image_url("error")
        }
    };

    Json(GenerateImageResponse { image_data })
}
