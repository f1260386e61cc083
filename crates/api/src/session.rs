//! Session extraction from the `token` cookie.
//!
//! Cookie absence or verification failure never hard-fails a request: pages
//! render anonymously and only the prediction form forces a login. The
//! outcome is an explicit three-state enum; "no cookie" and "dead cookie"
//! are distinct states.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::auth::jwt::{validate_token, Claims};
use crate::state::AppState;
use crate::views::PageContext;

/// Name of the cookie that carries the session token.
pub const SESSION_COOKIE: &str = "token";

/// Result of decoding the session cookie.
#[derive(Debug, Clone)]
pub enum Session {
    /// No cookie was presented.
    Anonymous,
    /// The cookie carried a token that verified.
    Authenticated(Claims),
    /// The cookie carried a token that failed verification; the response
    /// middleware clears it so the browser stops re-sending a dead token.
    Invalid,
}

impl Session {
    /// The authenticated user's email, if any.
    pub fn email(&self) -> Option<&str> {
        match self {
            Session::Authenticated(claims) => Some(&claims.sub),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    /// Navigation context for page rendering.
    pub fn page_context(&self) -> PageContext {
        PageContext {
            authenticated: self.is_authenticated(),
            user_email: self.email().map(str::to_string),
        }
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .unwrap_or_else(|never| match never {});

        Ok(match jar.get(SESSION_COOKIE) {
            None => Session::Anonymous,
            Some(cookie) => match validate_token(cookie.value(), &state.config.jwt) {
                Ok(claims) => Session::Authenticated(claims),
                Err(_) => Session::Invalid,
            },
        })
    }
}

/// Middleware that strips a non-verifying session cookie from the client.
///
/// Runs after the handler, so the anonymous fallthrough still renders the
/// requested page; only the Set-Cookie removal is added on top.
pub async fn clear_invalid_session(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let invalid = jar
        .get(SESSION_COOKIE)
        .is_some_and(|cookie| validate_token(cookie.value(), &state.config.jwt).is_err());

    let response = next.run(request).await;

    if invalid {
        let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
        return (jar.remove(removal), response).into_response();
    }

    response
}
