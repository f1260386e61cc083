//! Prediction form validation.
//!
//! Every violated rule is collected into one ordered list of messages so the
//! form can be re-rendered with all problems at once. The message wording and
//! order are part of the user-facing contract and must not change.

use serde::Deserialize;

use crate::eligibility::RankQuery;
use crate::quota::Category;

/// Raw prediction form fields, exactly as submitted.
///
/// Field names mirror the HTML form; all fields default to empty so a partial
/// submission still deserializes and re-renders with whatever the user typed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PredictSubmission {
    #[serde(rename = "crlRank")]
    pub crl_rank: String,
    pub category: String,
    #[serde(rename = "categoryRank")]
    pub category_rank: String,
    #[serde(rename = "homeStateStatus")]
    pub home_state_status: String,
    #[serde(rename = "homeState")]
    pub home_state: String,
    pub gender: String,
    #[serde(rename = "counsellingType")]
    pub counselling_type: String,
    #[serde(rename = "pwdStatus")]
    pub pwd_status: String,
    #[serde(rename = "pwdRank")]
    pub pwd_rank: String,
}

/// Validate a raw submission into a [`RankQuery`].
///
/// Returns the full ordered list of violation messages on failure; the
/// matcher must never run on an invalid submission.
pub fn validate(input: &PredictSubmission) -> Result<RankQuery, Vec<String>> {
    let mut errors = Vec::new();

    let crl_rank = parse_rank(&input.crl_rank);
    if crl_rank.is_none() {
        errors.push("CRL Rank is required and must be a number.".to_string());
    }

    // The category-rank rule keys off the raw string: an unrecognized
    // category is not GEN, so it still demands a category rank.
    let category_rank = parse_rank(&input.category_rank);
    if input.category != "GEN" && category_rank.is_none() {
        errors.push("Category Rank is required for non-General categories.".to_string());
    }

    let pwd_rank = parse_rank(&input.pwd_rank);
    if input.pwd_status == "yes" && pwd_rank.is_none() {
        errors.push("PwD Rank is required if PwD status is Yes.".to_string());
    }

    let category = Category::parse(&input.category);
    if category.is_none() {
        errors.push("Category is required.".to_string());
    }

    if input.home_state_status.is_empty() {
        errors.push("Home State Status is required.".to_string());
    }
    if input.home_state_status == "yes" && input.home_state.is_empty() {
        errors.push("Please select your Home State.".to_string());
    }

    if input.gender.is_empty() {
        errors.push("Gender is required.".to_string());
    }
    if input.counselling_type.is_empty() {
        errors.push("Counselling Type is required.".to_string());
    }

    match (crl_rank, category) {
        (Some(crl_rank), Some(category)) if errors.is_empty() => Ok(RankQuery {
            crl_rank,
            category,
            category_rank: if category == Category::General {
                None
            } else {
                category_rank
            },
            home_state: if input.home_state_status == "yes" {
                Some(input.home_state.clone())
            } else {
                None
            },
            gender: input.gender.clone(),
            counselling_type: input.counselling_type.clone(),
            pwd_rank: if input.pwd_status == "yes" {
                pwd_rank
            } else {
                None
            },
        }),
        _ => Err(errors),
    }
}

/// Parse a rank field. Empty or non-numeric input is `None`.
fn parse_rank(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_general() -> PredictSubmission {
        PredictSubmission {
            crl_rank: "300".to_string(),
            category: "GEN".to_string(),
            home_state_status: "no".to_string(),
            gender: "male".to_string(),
            counselling_type: "JoSAA".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_general_submission_passes() {
        let query = validate(&valid_general()).expect("submission should validate");
        assert_eq!(query.crl_rank, 300);
        assert_eq!(query.category, Category::General);
        assert_eq!(query.category_rank, None);
        assert_eq!(query.home_state, None);
        assert_eq!(query.pwd_rank, None);
    }

    #[test]
    fn empty_submission_reports_every_rule_in_order() {
        let errors = validate(&PredictSubmission::default()).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "CRL Rank is required and must be a number.",
                "Category Rank is required for non-General categories.",
                "Category is required.",
                "Home State Status is required.",
                "Gender is required.",
                "Counselling Type is required.",
            ]
        );
    }

    #[test]
    fn non_general_without_category_rank_fails() {
        let mut input = valid_general();
        input.category = "OBC-NCL".to_string();

        let errors = validate(&input).unwrap_err();
        assert_eq!(
            errors,
            vec!["Category Rank is required for non-General categories."]
        );
    }

    #[test]
    fn general_ignores_supplied_category_rank() {
        let mut input = valid_general();
        input.category_rank = "17".to_string();

        let query = validate(&input).expect("GEN with a category rank still validates");
        assert_eq!(query.category_rank, None);
    }

    #[test]
    fn non_numeric_crl_rank_fails() {
        let mut input = valid_general();
        input.crl_rank = "three hundred".to_string();

        let errors = validate(&input).unwrap_err();
        assert_eq!(errors, vec!["CRL Rank is required and must be a number."]);
    }

    #[test]
    fn pwd_status_requires_pwd_rank() {
        let mut input = valid_general();
        input.pwd_status = "yes".to_string();

        let errors = validate(&input).unwrap_err();
        assert_eq!(errors, vec!["PwD Rank is required if PwD status is Yes."]);

        input.pwd_rank = "42".to_string();
        let query = validate(&input).expect("PwD rank supplied");
        assert_eq!(query.pwd_rank, Some(42));
    }

    #[test]
    fn home_state_status_yes_requires_state() {
        let mut input = valid_general();
        input.home_state_status = "yes".to_string();

        let errors = validate(&input).unwrap_err();
        assert_eq!(errors, vec!["Please select your Home State."]);

        input.home_state = "Delhi".to_string();
        let query = validate(&input).expect("state supplied");
        assert_eq!(query.home_state.as_deref(), Some("Delhi"));
    }

    #[test]
    fn unrecognized_category_fails_validation() {
        let mut input = valid_general();
        input.category = "SUPER".to_string();
        input.category_rank = "10".to_string();

        let errors = validate(&input).unwrap_err();
        assert_eq!(errors, vec!["Category is required."]);
    }

    #[test]
    fn non_general_with_rank_validates() {
        let mut input = valid_general();
        input.category = "SC".to_string();
        input.category_rank = "120".to_string();

        let query = validate(&input).expect("SC with category rank validates");
        assert_eq!(query.category, Category::Sc);
        assert_eq!(query.category_rank, Some(120));
    }
}
