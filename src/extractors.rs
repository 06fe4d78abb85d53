use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::SET_COOKIE, request::Parts, HeaderMap, HeaderValue},
};
use axum_extra::extract::CookieJar;

use crate::{names, sessions::Sessions, utils};

/// Extracts whether the request is an HTMX request by checking the `HX-Request` header.
pub struct IsHtmx(pub bool);

impl<S: Send + Sync> FromRequestParts<S> for IsHtmx {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts
            .headers
            .get("HX-Request")
            .and_then(|v: &HeaderValue| v.to_str().ok())
            .is_some_and(|v| v == "true");
        Ok(IsHtmx(is_htmx))
    }
}

/// The browser's study session, taken from the session cookie or freshly
/// minted when the cookie is absent.
pub struct StudySessionId {
    pub id: String,
    pub is_new: bool,
}

impl<S: Send + Sync> FromRequestParts<S> for StudySessionId {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let session = match jar
            .get(names::STUDY_SESSION_COOKIE_NAME)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
        {
            Some(id) => StudySessionId { id, is_new: false },
            None => StudySessionId {
                id: Sessions::new_id(),
                is_new: true,
            },
        };
        Ok(session)
    }
}

impl StudySessionId {
    /// `Set-Cookie` header for a session that was just created.
    pub fn headers(&self, secure: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if self.is_new {
            let cookie = utils::cookie(names::STUDY_SESSION_COOKIE_NAME, &self.id, secure);
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    headers.insert(SET_COOKIE, value);
                }
                Err(e) => tracing::error!("could not build session cookie: {e}"),
            }
        }
        headers
    }
}
