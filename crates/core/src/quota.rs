//! Typed quota tree stored per college/branch row.
//!
//! The stored JSON mirrors the counselling data dumps: quota type (`OS`, or
//! `HS` keyed by state name) → category → gender bucket → year →
//! `{openingRank, closingRank}`. Every level is optional. A missing branch
//! means "no seats reported" for that path and the matcher treats it as
//! ineligible, never as an error; a branch that is present but malformed
//! fails decoding and the whole row is skipped by the caller.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Admission categories recognized in cutoff data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "GEN")]
    General,
    #[serde(rename = "EWS")]
    Ews,
    #[serde(rename = "OBC-NCL")]
    ObcNcl,
    #[serde(rename = "SC")]
    Sc,
    #[serde(rename = "ST")]
    St,
}

impl Category {
    /// All categories, in the order they appear in cutoff tables.
    pub const ALL: [Category; 5] = [
        Category::General,
        Category::Ews,
        Category::ObcNcl,
        Category::Sc,
        Category::St,
    ];

    /// The key used for this category in stored data and form submissions.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "GEN",
            Category::Ews => "EWS",
            Category::ObcNcl => "OBC-NCL",
            Category::Sc => "SC",
            Category::St => "ST",
        }
    }

    /// Parse a category key. Returns `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "GEN" => Some(Category::General),
            "EWS" => Some(Category::Ews),
            "OBC-NCL" => Some(Category::ObcNcl),
            "SC" => Some(Category::Sc),
            "ST" => Some(Category::St),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opening/closing rank pair for one admission year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRange {
    #[serde(rename = "openingRank")]
    pub opening_rank: i64,
    #[serde(rename = "closingRank")]
    pub closing_rank: i64,
}

/// Year key (e.g. `"2024"`) → rank pair.
pub type YearTable = BTreeMap<String, SeatRange>;

/// Gender-bucketed year tables for one category.
///
/// `femaleOnly` replaces `genderNeutral` for female applicants only when it
/// is actually reported; its presence matters even when it holds no usable
/// year, hence `Option` rather than a default empty map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySeats {
    #[serde(rename = "genderNeutral", default, skip_serializing_if = "Option::is_none")]
    pub gender_neutral: Option<YearTable>,
    #[serde(rename = "femaleOnly", default, skip_serializing_if = "Option::is_none")]
    pub female_only: Option<YearTable>,
}

/// Per-category seat data.
///
/// Used at two levels of the tree: the main quota block and the nested PwD
/// override inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    #[serde(rename = "GEN", default, skip_serializing_if = "Option::is_none")]
    pub general: Option<CategorySeats>,
    #[serde(rename = "EWS", default, skip_serializing_if = "Option::is_none")]
    pub ews: Option<CategorySeats>,
    #[serde(rename = "OBC-NCL", default, skip_serializing_if = "Option::is_none")]
    pub obc_ncl: Option<CategorySeats>,
    #[serde(rename = "SC", default, skip_serializing_if = "Option::is_none")]
    pub sc: Option<CategorySeats>,
    #[serde(rename = "ST", default, skip_serializing_if = "Option::is_none")]
    pub st: Option<CategorySeats>,
}

impl CategoryTable {
    /// Seat data for a category, if reported.
    pub fn get(&self, category: Category) -> Option<&CategorySeats> {
        match category {
            Category::General => self.general.as_ref(),
            Category::Ews => self.ews.as_ref(),
            Category::ObcNcl => self.obc_ncl.as_ref(),
            Category::Sc => self.sc.as_ref(),
            Category::St => self.st.as_ref(),
        }
    }
}

/// One quota block: the category table plus the optional PwD override.
///
/// The stored JSON keeps the categories and the `PwD` key as siblings, hence
/// the flattened table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaBlock {
    #[serde(flatten)]
    pub categories: CategoryTable,
    #[serde(rename = "PwD", default, skip_serializing_if = "Option::is_none")]
    pub pwd: Option<CategoryTable>,
}

/// Root of the stored quota structure for a college/branch row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaTree {
    /// Other-state quota.
    #[serde(rename = "OS", default, skip_serializing_if = "Option::is_none")]
    pub other_state: Option<QuotaBlock>,
    /// Home-state quota, keyed by state name.
    #[serde(rename = "HS", default, skip_serializing_if = "Option::is_none")]
    pub home_state: Option<BTreeMap<String, QuotaBlock>>,
}

impl QuotaTree {
    /// Decode a stored quota tree.
    ///
    /// Returns `Err` when the value does not match the expected shape; the
    /// caller logs and skips the college rather than failing the request.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_tree() {
        let tree = QuotaTree::from_value(json!({
            "OS": {
                "GEN": {
                    "genderNeutral": { "2024": { "openingRank": 1, "closingRank": 500 } },
                    "femaleOnly": { "2024": { "openingRank": 3, "closingRank": 900 } }
                },
                "PwD": {
                    "GEN": { "genderNeutral": { "2024": { "openingRank": 1, "closingRank": 40 } } }
                }
            },
            "HS": {
                "Delhi": {
                    "OBC-NCL": { "genderNeutral": { "2024": { "openingRank": 10, "closingRank": 1200 } } }
                }
            }
        }))
        .expect("well-formed tree should decode");

        let os = tree.other_state.as_ref().expect("OS block");
        let gen = os.categories.get(Category::General).expect("GEN seats");
        let neutral = gen.gender_neutral.as_ref().expect("genderNeutral table");
        assert_eq!(neutral["2024"].closing_rank, 500);

        let pwd = os.pwd.as_ref().expect("PwD table");
        let pwd_gen = pwd.get(Category::General).expect("PwD GEN seats");
        assert_eq!(
            pwd_gen.gender_neutral.as_ref().unwrap()["2024"].closing_rank,
            40
        );

        let hs = tree.home_state.as_ref().expect("HS map");
        let delhi = hs.get("Delhi").expect("Delhi block");
        assert!(delhi.categories.get(Category::ObcNcl).is_some());
        assert!(delhi.categories.get(Category::Sc).is_none());
    }

    #[test]
    fn missing_branches_decode_to_none() {
        let tree = QuotaTree::from_value(json!({})).expect("empty object is a valid tree");
        assert!(tree.other_state.is_none());
        assert!(tree.home_state.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let tree = QuotaTree::from_value(json!({
            "OS": {
                "GEN": { "genderNeutral": {} },
                "JK": { "genderNeutral": {} }
            }
        }))
        .expect("unknown category keys should not fail decoding");

        let os = tree.other_state.unwrap();
        assert!(os.categories.get(Category::General).is_some());
    }

    #[test]
    fn malformed_leaf_fails_decoding() {
        let result = QuotaTree::from_value(json!({
            "OS": {
                "GEN": { "genderNeutral": { "2024": { "openingRank": 1, "closingRank": "five hundred" } } }
            }
        }));
        assert!(result.is_err(), "non-numeric rank must fail to decode");
    }

    #[test]
    fn category_keys_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("OBC"), None);
        assert_eq!(Category::parse(""), None);
    }
}
