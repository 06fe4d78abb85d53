use axum::{
    extract::{Form, Multipart, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde::Deserialize;

use crate::{
    extractors::{IsHtmx, StudySessionId},
    names,
    rejections::{AppError, ResultExt},
    study::{self, StudySession, Submission},
    utils, views, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::HOME_URL, get(current_screen))
        .route(names::GO_HOME_URL, post(go_home))
        .route(names::START_URL, post(start))
        .route(names::NEW_NOTES_URL, post(new_notes))
        .route(names::SUBMIT_NOTES_URL, post(submit_notes))
        .route(names::TAKE_QUIZ_URL, post(take_quiz))
        .route(names::BACK_URL, post(back))
        .route(names::ANSWER_URL, post(answer))
        .route(names::NEXT_QUESTION_URL, post(next_question))
        .route(names::RETRY_QUIZ_URL, post(retry))
        .route(names::DONE_URL, post(done))
}

#[derive(Deserialize)]
struct AnswerBody {
    option: String,
}

/// Applies one user intent and renders whatever screen the session lands on.
/// Intents that make no sense for the current screen leave it unchanged.
async fn apply(
    state: &AppState,
    session_id: StudySessionId,
    is_htmx: bool,
    intent: &'static str,
    f: impl FnOnce(&mut StudySession) -> bool,
) -> Response {
    let page = state
        .sessions
        .with(&session_id.id, |session| {
            if !f(session) {
                tracing::debug!(
                    "ignored '{intent}' on {} screen",
                    session.screen().name()
                );
            }
            views::current(is_htmx, session)
        })
        .await;

    (session_id.headers(state.secure_cookies), page).into_response()
}

async fn current_screen(
    State(state): State<AppState>,
    session_id: StudySessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Response {
    let page = state
        .sessions
        .peek(&session_id.id, |session| views::current(is_htmx, session))
        .await;

    (session_id.headers(state.secure_cookies), page).into_response()
}

async fn go_home(
    State(state): State<AppState>,
    session_id: StudySessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Response {
    apply(&state, session_id, is_htmx, "home", StudySession::home).await
}

async fn start(
    State(state): State<AppState>,
    session_id: StudySessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Response {
    apply(&state, session_id, is_htmx, "start", StudySession::start).await
}

async fn new_notes(
    State(state): State<AppState>,
    session_id: StudySessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Response {
    apply(&state, session_id, is_htmx, "new notes", StudySession::new_notes).await
}

async fn take_quiz(
    State(state): State<AppState>,
    session_id: StudySessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Response {
    apply(&state, session_id, is_htmx, "take quiz", StudySession::take_quiz).await
}

async fn back(
    State(state): State<AppState>,
    session_id: StudySessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Response {
    apply(&state, session_id, is_htmx, "back", StudySession::back).await
}

async fn answer(
    State(state): State<AppState>,
    session_id: StudySessionId,
    IsHtmx(is_htmx): IsHtmx,
    Form(body): Form<AnswerBody>,
) -> Result<Response, AppError> {
    let option_idx = body
        .option
        .parse::<usize>()
        .reject_input("failed to parse option index")?;

    Ok(apply(&state, session_id, is_htmx, "answer", |session| {
        session.select_answer(option_idx)
    })
    .await)
}

async fn next_question(
    State(state): State<AppState>,
    session_id: StudySessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Response {
    apply(&state, session_id, is_htmx, "next", |session| {
        session.advance(Local::now())
    })
    .await
}

async fn retry(
    State(state): State<AppState>,
    session_id: StudySessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Response {
    apply(&state, session_id, is_htmx, "retry", StudySession::retry).await
}

async fn done(
    State(state): State<AppState>,
    session_id: StudySessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Response {
    apply(&state, session_id, is_htmx, "done", StudySession::done).await
}

fn upload_failed_notice() -> String {
    format!(
        "We couldn't read that upload. Photos must be smaller than {} MB.",
        names::MAX_UPLOAD_MB
    )
}

async fn read_submission(mut multipart: Multipart) -> Result<Submission, AppError> {
    let mut content = String::new();
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("failed to read multipart field: {e}");
        AppError::Input("failed to read multipart field")
    })? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "content" => {
                content = field.text().await.reject_input("failed to read notes text")?;
            }
            "image" => {
                let mime_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await.reject_input("failed to read notes image")?;
                if !bytes.is_empty() {
                    image = Some(utils::data_url(&mime_type, &bytes));
                }
            }
            other => tracing::debug!("ignoring multipart field '{other}'"),
        }
    }

    Ok(Submission::new(content, image))
}

async fn submit_notes(
    State(state): State<AppState>,
    session_id: StudySessionId,
    IsHtmx(is_htmx): IsHtmx,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let submission = match read_submission(multipart).await {
        Ok(submission) => submission,
        Err(e) => {
            tracing::warn!("could not read notes upload: {e:?}");
            return Ok(apply(&state, session_id, is_htmx, "upload failed", |session| {
                session.upload_failed(upload_failed_notice())
            })
            .await);
        }
    };

    let ticket = state
        .sessions
        .with(&session_id.id, |session| session.submit(&submission))
        .await;

    let ticket = match ticket {
        Ok(ticket) => ticket,
        Err(e) => {
            tracing::debug!("submission not accepted: {e:?}");
            return Ok(apply(&state, session_id, is_htmx, "submit", |_| false).await);
        }
    };

    tracing::info!("analyzing notes for session {}", session_id.id);
    let outcome = study::run_analysis(state.service.as_ref(), submission).await;

    Ok(apply(&state, session_id, is_htmx, "finish analysis", |session| {
        session.finish_analysis(ticket, outcome)
    })
    .await)
}
