//! College browser: exact-name detail and substring search.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use admitpath_core::error::CoreError;
use admitpath_core::naming::image_file_name;
use admitpath_db::repositories::BrowseCollegeRepo;

use crate::error::AppResult;
use crate::session::Session;
use crate::state::AppState;
use crate::views::{render, BrowseResult, CollegesPage};

/// Query string for GET /colleges/read.
#[derive(Debug, Deserialize)]
pub struct ReadParams {
    pub name: Option<String>,
}

/// Form body for POST /colleges/read.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub name: String,
}

/// GET /colleges/read?name=...
///
/// Exact-name lookup; no match is a 404.
pub async fn read_exact(
    session: Session,
    State(state): State<AppState>,
    Query(params): Query<ReadParams>,
) -> AppResult<Html<String>> {
    let name = params.name.unwrap_or_default();

    let college = BrowseCollegeRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "College",
            key: name,
        })?;

    render(&CollegesPage {
        ctx: session.page_context(),
        college: Some(college),
        results: Vec::new(),
        searched: false,
    })
}

/// POST /colleges/read
///
/// Case-insensitive substring search. A store failure on this path renders
/// an empty result list rather than an error page.
pub async fn search(
    session: Session,
    State(state): State<AppState>,
    Form(input): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let fragment = input.name.trim();

    let colleges = match BrowseCollegeRepo::search_by_name(&state.pool, fragment).await {
        Ok(colleges) => colleges,
        Err(err) => {
            tracing::error!(error = %err, "College search failed");
            Vec::new()
        }
    };

    let results: Vec<BrowseResult> = colleges
        .into_iter()
        .map(|college| {
            let file_name = image_file_name(&college.name);
            BrowseResult { college, file_name }
        })
        .collect();

    render(&CollegesPage {
        ctx: session.page_context(),
        college: None,
        results,
        searched: true,
    })
}
