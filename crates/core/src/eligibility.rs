//! The eligibility matcher.
//!
//! A pure function of (user query, college snapshot): for each college/branch
//! row it selects the quota block, category block, and gender bucket, then
//! checks the user's ranks against the closing rank for the admission year.
//! College records never mutate during prediction and are loaded fresh per
//! request by the caller.

use serde::Serialize;

use crate::quota::{Category, QuotaBlock, QuotaTree, SeatRange};

/// A validated prediction request. Transient; lives for one request.
#[derive(Debug, Clone)]
pub struct RankQuery {
    /// Common rank list position.
    pub crl_rank: i64,
    pub category: Category,
    /// Present for every category except GEN.
    pub category_rank: Option<i64>,
    /// `Some(state)` when the applicant claimed home-state status.
    pub home_state: Option<String>,
    pub gender: String,
    pub counselling_type: String,
    /// `Some(rank)` when the applicant claimed PwD status.
    pub pwd_rank: Option<i64>,
}

/// One college/branch row as the matcher sees it.
///
/// The same institute appears once per branch; the matcher iterates rows,
/// not deduplicated institutes.
#[derive(Debug, Clone)]
pub struct CollegeSnapshot {
    pub institute_name: String,
    pub branch: String,
    pub quotas: QuotaTree,
}

/// A single eligible college/branch entry. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub institute_name: String,
    pub branch: String,
    pub closing_rank: i64,
    pub counselling_type: String,
}

/// Run the matcher over every college/branch row.
///
/// Results are sorted ascending by closing rank; the sort is stable, so ties
/// keep their discovery order. An empty result means no college matched and
/// the caller renders it as a "no colleges found" notice.
pub fn predict(query: &RankQuery, colleges: &[CollegeSnapshot], year: &str) -> Vec<Prediction> {
    let mut matches: Vec<Prediction> = colleges
        .iter()
        .filter_map(|college| match_college(query, college, year))
        .collect();

    matches.sort_by_key(|prediction| prediction.closing_rank);
    matches
}

/// Evaluate one college/branch row against the query.
fn match_college(
    query: &RankQuery,
    college: &CollegeSnapshot,
    year: &str,
) -> Option<Prediction> {
    let quota_block = select_quota_block(query, &college.quotas)?;
    let seats = quota_block.categories.get(query.category)?;

    // genderNeutral is the default bucket; femaleOnly replaces it only when
    // the applicant is female and the bucket is actually reported.
    let mut seat_table = seats.gender_neutral.as_ref();
    if query.gender.eq_ignore_ascii_case("female") {
        if let Some(female_only) = seats.female_only.as_ref() {
            seat_table = Some(female_only);
        }
    }

    let range = *seat_table?.get(year)?;

    if !is_eligible(query, quota_block, range, year) {
        return None;
    }

    Some(Prediction {
        institute_name: college.institute_name.clone(),
        branch: college.branch.clone(),
        closing_rank: range.closing_rank,
        counselling_type: query.counselling_type.clone(),
    })
}

/// Home-state block when claimed and reported, otherwise the other-state
/// block. `None` skips the college entirely.
fn select_quota_block<'a>(query: &RankQuery, quotas: &'a QuotaTree) -> Option<&'a QuotaBlock> {
    if let Some(state) = query.home_state.as_deref() {
        if let Some(block) = quotas.home_state.as_ref().and_then(|states| states.get(state)) {
            return Some(block);
        }
    }
    quotas.other_state.as_ref()
}

/// Logical OR of the three independent rank checks.
fn is_eligible(query: &RankQuery, quota_block: &QuotaBlock, range: SeatRange, year: &str) -> bool {
    // CRL check applies to everyone.
    if query.crl_rank <= range.closing_rank {
        return true;
    }

    // Category-rank check: non-GEN categories with a supplied rank.
    if query.category != Category::General {
        if let Some(category_rank) = query.category_rank {
            if category_rank <= range.closing_rank {
                return true;
            }
        }
    }

    // PwD check reads the genderNeutral PwD bucket regardless of the
    // applicant's gender.
    if let Some(pwd_rank) = query.pwd_rank {
        if let Some(pwd_closing) = pwd_closing_rank(quota_block, query.category, year) {
            if pwd_rank <= pwd_closing {
                return true;
            }
        }
    }

    false
}

/// Closing rank on the PwD path `PwD[category].genderNeutral[year]`, if the
/// full path is reported.
fn pwd_closing_rank(quota_block: &QuotaBlock, category: Category, year: &str) -> Option<i64> {
    quota_block
        .pwd
        .as_ref()?
        .get(category)?
        .gender_neutral
        .as_ref()?
        .get(year)
        .map(|range| range.closing_rank)
}
