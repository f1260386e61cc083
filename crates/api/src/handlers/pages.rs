//! Static page handlers: home and the informational pages.

use axum::response::Html;

use admitpath_core::validation::PredictSubmission;

use crate::error::AppResult;
use crate::session::Session;
use crate::views::{render, AboutPage, HomePage, PrivacyPolicyPage, TermsPage};

/// GET /
pub async fn home(session: Session) -> AppResult<Html<String>> {
    render(&HomePage {
        ctx: session.page_context(),
        errors: Vec::new(),
        input: PredictSubmission::default(),
    })
}

/// GET /about
pub async fn about(session: Session) -> AppResult<Html<String>> {
    render(&AboutPage {
        ctx: session.page_context(),
    })
}

/// GET /privacy-policy
pub async fn privacy_policy(session: Session) -> AppResult<Html<String>> {
    render(&PrivacyPolicyPage {
        ctx: session.page_context(),
    })
}

/// GET /terms-and-conditions
pub async fn terms_and_conditions(session: Session) -> AppResult<Html<String>> {
    render(&TermsPage {
        ctx: session.page_context(),
    })
}
