//! The contact form.

use axum::extract::State;
use axum::response::Html;
use axum::Form;

use admitpath_db::models::contact_message::CreateContactMessage;
use admitpath_db::repositories::ContactRepo;

use crate::error::AppResult;
use crate::session::Session;
use crate::state::AppState;
use crate::views::{render, ContactNotice, ContactPage};

/// GET /contact
pub async fn form(session: Session) -> AppResult<Html<String>> {
    render(&ContactPage {
        ctx: session.page_context(),
        notice: None,
    })
}

/// POST /contact
///
/// Persists the message and re-renders the form with a saved/failed notice;
/// a store failure is reported on the page, not as an error response.
pub async fn submit(
    session: Session,
    State(state): State<AppState>,
    Form(input): Form<CreateContactMessage>,
) -> AppResult<Html<String>> {
    let notice = match ContactRepo::create(&state.pool, &input).await {
        Ok(message) => {
            tracing::info!(contact_id = message.id, "Contact message saved");
            ContactNotice::Saved
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to save contact message");
            ContactNotice::Failed
        }
    };

    render(&ContactPage {
        ctx: session.page_context(),
        notice: Some(notice),
    })
}
