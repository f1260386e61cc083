//! Repository for the `colleges` table.

use sqlx::PgPool;

use crate::models::college::College;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, institute_name, institute_type, branch, quotas, created_at, updated_at";

/// Read access to cutoff data.
pub struct CollegeRepo;

impl CollegeRepo {
    /// Load every college/branch row.
    ///
    /// The prediction handler reads the full table fresh on each request;
    /// there is no caching layer on top of this.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<College>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colleges ORDER BY id");
        sqlx::query_as::<_, College>(&query).fetch_all(pool).await
    }
}
