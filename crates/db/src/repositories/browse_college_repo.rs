//! Repository for the `browse_colleges` table.

use sqlx::PgPool;

use crate::models::browse_college::BrowseCollege;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, college_type, university, is_autonomous";

/// Read access to the public college browser records.
pub struct BrowseCollegeRepo;

impl BrowseCollegeRepo {
    /// Find a single college by exact name.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<BrowseCollege>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM browse_colleges WHERE name = $1");
        sqlx::query_as::<_, BrowseCollege>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Find every college whose name contains `fragment`, case-insensitively.
    pub async fn search_by_name(
        pool: &PgPool,
        fragment: &str,
    ) -> Result<Vec<BrowseCollege>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM browse_colleges WHERE name ILIKE $1 ORDER BY name"
        );
        sqlx::query_as::<_, BrowseCollege>(&query)
            .bind(format!("%{fragment}%"))
            .fetch_all(pool)
            .await
    }
}
