//! College cutoff entity model.

use admitpath_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `colleges` table: one institute/branch pair with its
/// stored quota tree.
///
/// The quota tree stays raw JSON at this layer; the prediction handler
/// decodes it into `admitpath_core::quota::QuotaTree` and skips rows that
/// fail to decode.
#[derive(Debug, Clone, FromRow)]
pub struct College {
    pub id: DbId,
    pub institute_name: String,
    pub institute_type: String,
    pub branch: String,
    pub quotas: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
