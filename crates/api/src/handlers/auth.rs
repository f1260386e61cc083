//! Registration, login, and logout.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use admitpath_db::models::user::CreateUser;
use admitpath_db::repositories::UserRepo;

use crate::auth::jwt::generate_session_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::session::{Session, SESSION_COOKIE};
use crate::state::AppState;
use crate::views::{render, LoginPage, RegisterPage};

/// Form body for POST /register.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Form body for POST /login.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// GET /register
pub async fn register_form(session: Session) -> AppResult<Html<String>> {
    render(&RegisterPage {
        ctx: session.page_context(),
    })
}

/// POST /register
///
/// Create the account, issue a session cookie, and land on the prediction
/// form. A duplicate email surfaces as a 409 through the database error
/// classification.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<RegisterForm>,
) -> AppResult<Response> {
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(email = %user.email, "User registered");

    let jar = issue_session_cookie(jar, &user.email, &state)?;
    Ok((jar, Redirect::to("/predict")).into_response())
}

/// GET /login
pub async fn login_form(session: Session) -> AppResult<Html<String>> {
    render(&LoginPage {
        ctx: session.page_context(),
    })
}

/// POST /login
///
/// Unknown email and password mismatch both return a plain failure message
/// rather than a structured error.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<LoginForm>,
) -> AppResult<Response> {
    let Some(user) = UserRepo::find_by_email(&state.pool, &input.email).await? else {
        return Ok(Html("Something is wrong".to_string()).into_response());
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Ok(Html("Something went wrong".to_string()).into_response());
    }

    tracing::info!(email = %user.email, "User logged in");

    let jar = issue_session_cookie(jar, &user.email, &state)?;
    Ok((jar, Redirect::to("/predict")).into_response())
}

/// GET /logout
///
/// Clears the session cookie and returns home. Safe to hit anonymously.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    (jar.remove(removal), Redirect::to("/"))
}

/// Sign a session token for `email` and add it to the cookie jar.
fn issue_session_cookie(jar: CookieJar, email: &str, state: &AppState) -> AppResult<CookieJar> {
    let token = generate_session_token(email, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(state.config.production);

    Ok(jar.add(cookie))
}
