//! Route table.
//!
//! ```text
//! GET  /                        home page (prediction form)
//! GET  /predict                 prediction form (login required)
//! POST /predict                 validate, run the matcher, render results
//! GET  /register                registration form
//! POST /register                create account, issue session cookie
//! GET  /login                   login form
//! POST /login                   verify credentials, issue session cookie
//! GET  /logout                  clear session cookie
//! GET  /colleges/read?name=...  exact-name college detail (404 on miss)
//! POST /colleges/read           case-insensitive substring search
//! GET  /contact                 contact form
//! POST /contact                 persist a contact message
//! GET  /about                   informational page
//! GET  /privacy-policy          informational page
//! GET  /terms-and-conditions    informational page
//! GET  /health                  JSON liveness probe
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{auth, colleges, contact, health, pages, predict};
use crate::state::AppState;

/// Build the application route tree. Middleware layers and static assets
/// are attached by the binary entrypoint.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/predict", get(predict::form).post(predict::submit))
        .route("/register", get(auth::register_form).post(auth::register))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route(
            "/colleges/read",
            get(colleges::read_exact).post(colleges::search),
        )
        .route("/contact", get(contact::form).post(contact::submit))
        .route("/about", get(pages::about))
        .route("/privacy-policy", get(pages::privacy_policy))
        .route("/terms-and-conditions", get(pages::terms_and_conditions))
        .route("/health", get(health::health_check))
}
