//! Askama view models, one struct per rendered page.

use askama::Template;
use axum::response::Html;

use admitpath_core::eligibility::Prediction;
use admitpath_core::validation::PredictSubmission;
use admitpath_db::models::browse_college::BrowseCollege;

use crate::error::AppResult;

/// Session-derived context consumed by the base layout's navigation bar.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub authenticated: bool,
    pub user_email: Option<String>,
}

/// Render a template into an HTML response body.
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}

/// Home page: the prediction form plus validation errors from a failed
/// submission.
#[derive(Template)]
#[template(path = "index.html")]
pub struct HomePage {
    pub ctx: PageContext,
    pub errors: Vec<String>,
    pub input: PredictSubmission,
}

/// Prediction page: the form plus results once a submission has run.
///
/// `results` is `None` before any submission; `Some` with an empty list
/// renders the "no colleges found" notice.
#[derive(Template)]
#[template(path = "predict.html")]
pub struct PredictPage {
    pub ctx: PageContext,
    pub input: PredictSubmission,
    pub results: Option<Vec<Prediction>>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub ctx: PageContext,
}

/// One substring-search hit with its derived image file name.
#[derive(Debug, Clone)]
pub struct BrowseResult {
    pub college: BrowseCollege,
    pub file_name: String,
}

/// College browser page: either a single exact-match detail or a search
/// result list.
#[derive(Template)]
#[template(path = "colleges.html")]
pub struct CollegesPage {
    pub ctx: PageContext,
    pub college: Option<BrowseCollege>,
    pub results: Vec<BrowseResult>,
    /// True when rendering a search outcome (distinguishes "no results"
    /// from the detail view).
    pub searched: bool,
}

/// Outcome banner for the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactNotice {
    Saved,
    Failed,
}

impl ContactNotice {
    pub fn message(&self) -> &'static str {
        match self {
            ContactNotice::Saved => "Your message has been saved!",
            ContactNotice::Failed => "Error saving message. Please try again later.",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ContactNotice::Failed)
    }
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage {
    pub ctx: PageContext,
    pub notice: Option<ContactNotice>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "privacy_policy.html")]
pub struct PrivacyPolicyPage {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "terms.html")]
pub struct TermsPage {
    pub ctx: PageContext,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anonymous() -> PageContext {
        PageContext::default()
    }

    #[test]
    fn home_page_lists_validation_errors() {
        let page = HomePage {
            ctx: anonymous(),
            errors: vec![
                "CRL Rank is required and must be a number.".to_string(),
                "Gender is required.".to_string(),
            ],
            input: PredictSubmission::default(),
        };

        let html = page.render().expect("template should render");
        assert!(html.contains("CRL Rank is required and must be a number."));
        assert!(html.contains("Gender is required."));
    }

    #[test]
    fn home_page_preserves_submitted_values() {
        let mut input = PredictSubmission::default();
        input.crl_rank = "1234".to_string();
        input.home_state = "Delhi".to_string();

        let page = HomePage {
            ctx: anonymous(),
            errors: vec!["Category is required.".to_string()],
            input,
        };

        let html = page.render().expect("template should render");
        assert!(html.contains("1234"));
        assert!(html.contains("Delhi"));
    }

    #[test]
    fn predict_page_shows_sentinel_for_empty_results() {
        let page = PredictPage {
            ctx: anonymous(),
            input: PredictSubmission::default(),
            results: Some(Vec::new()),
        };

        let html = page.render().expect("template should render");
        assert!(html.contains("No colleges found for your criteria."));
    }

    #[test]
    fn predict_page_renders_result_rows() {
        let page = PredictPage {
            ctx: anonymous(),
            input: PredictSubmission::default(),
            results: Some(vec![Prediction {
                institute_name: "NIT Trichy".to_string(),
                branch: "CSE".to_string(),
                closing_rank: 812,
                counselling_type: "JoSAA".to_string(),
            }]),
        };

        let html = page.render().expect("template should render");
        assert!(html.contains("NIT Trichy"));
        assert!(html.contains("812"));
        assert!(!html.contains("No colleges found"));
    }

    #[test]
    fn nav_shows_email_when_authenticated() {
        let page = AboutPage {
            ctx: PageContext {
                authenticated: true,
                user_email: Some("aspirant@example.com".to_string()),
            },
        };

        let html = page.render().expect("template should render");
        assert!(html.contains("aspirant@example.com"));
        assert!(html.contains("/logout"));
    }

    #[test]
    fn contact_page_renders_notice() {
        let page = ContactPage {
            ctx: anonymous(),
            notice: Some(ContactNotice::Saved),
        };

        let html = page.render().expect("template should render");
        assert!(html.contains("Your message has been saved!"));
    }
}
