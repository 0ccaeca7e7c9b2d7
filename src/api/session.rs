//! Session cookie extractor

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use crate::infrastructure::AppState;
use crate::session::SessionId;

pub const SESSION_COOKIE: &str = "library_session";

/// The session of the requesting browser, created on first access
#[derive(Debug, Clone, Copy)]
pub struct CurrentSession {
    pub id: SessionId,
}

impl CurrentSession {
    /// Session cookie: no expiry, so the browser drops it when it closes
    pub fn cookie(&self) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, self.id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build()
    }

    /// Attach the session cookie to a response
    pub fn respond(&self, response: impl IntoResponse) -> Response {
        (CookieJar::new().add(self.cookie()), response).into_response()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state).await?;
        let presented = jar
            .get(SESSION_COOKIE)
            .and_then(|c| Uuid::parse_str(c.value()).ok());

        Ok(Self {
            id: state.sessions.resolve(presented),
        })
    }
}
