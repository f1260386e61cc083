//! Browse-college entity model (the public college browser).

use admitpath_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `browse_colleges` table.
///
/// Everything except the name is optional; records come from scraped
/// listings of uneven completeness.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BrowseCollege {
    pub id: DbId,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub college_type: Option<String>,
    pub university: Option<String>,
    pub is_autonomous: Option<bool>,
}

impl BrowseCollege {
    /// Display label for the autonomy flag, if reported.
    pub fn autonomous_label(&self) -> Option<&'static str> {
        self.is_autonomous.map(|a| if a { "Yes" } else { "No" })
    }
}
