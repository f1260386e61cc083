//! The prediction form and the matcher endpoint.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;

use admitpath_core::eligibility::{predict, CollegeSnapshot};
use admitpath_core::quota::QuotaTree;
use admitpath_core::validation::{validate, PredictSubmission};
use admitpath_db::models::college::College;
use admitpath_db::repositories::CollegeRepo;

use crate::error::AppResult;
use crate::session::Session;
use crate::state::AppState;
use crate::views::{render, HomePage, PredictPage};

/// GET /predict
///
/// The only page that requires a session: anonymous (or dead-cookie)
/// visitors are redirected to the login form.
pub async fn form(session: Session) -> AppResult<Response> {
    if !session.is_authenticated() {
        return Ok(Redirect::to("/login").into_response());
    }

    render(&PredictPage {
        ctx: session.page_context(),
        input: PredictSubmission::default(),
        results: None,
    })
    .map(IntoResponse::into_response)
}

/// POST /predict
///
/// Validation failure re-renders the home page with every violated rule and
/// the submitted values; a store failure re-renders it with a generic server
/// error, never the underlying cause. The matcher only runs on a valid
/// submission.
pub async fn submit(
    session: Session,
    State(state): State<AppState>,
    Form(input): Form<PredictSubmission>,
) -> AppResult<Response> {
    let query = match validate(&input) {
        Ok(query) => query,
        Err(errors) => {
            return render(&HomePage {
                ctx: session.page_context(),
                errors,
                input,
            })
            .map(IntoResponse::into_response);
        }
    };

    let colleges = match CollegeRepo::list_all(&state.pool).await {
        Ok(colleges) => colleges,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load colleges for prediction");
            return render(&HomePage {
                ctx: session.page_context(),
                errors: vec!["Server error. Please try again later".to_string()],
                input,
            })
            .map(IntoResponse::into_response);
        }
    };

    let snapshots = decode_snapshots(colleges);
    let predictions = predict(&query, &snapshots, &state.config.admission_year);

    tracing::debug!(
        candidates = snapshots.len(),
        matches = predictions.len(),
        "Prediction complete"
    );

    render(&PredictPage {
        ctx: session.page_context(),
        input,
        results: Some(predictions),
    })
    .map(IntoResponse::into_response)
}

/// Decode stored quota trees into matcher snapshots.
///
/// A row whose quota JSON does not match the expected shape is logged and
/// skipped; missing data means ineligibility, not a request failure.
fn decode_snapshots(colleges: Vec<College>) -> Vec<CollegeSnapshot> {
    colleges
        .into_iter()
        .filter_map(|college| {
            let College {
                institute_name,
                branch,
                quotas,
                ..
            } = college;

            match QuotaTree::from_value(quotas) {
                Ok(quotas) => Some(CollegeSnapshot {
                    institute_name,
                    branch,
                    quotas,
                }),
                Err(err) => {
                    tracing::warn!(
                        institute = %institute_name,
                        branch = %branch,
                        error = %err,
                        "Skipping college with malformed quota data"
                    );
                    None
                }
            }
        })
        .collect()
}
