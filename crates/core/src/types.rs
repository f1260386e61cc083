/// Internal database identifier used by every entity.
pub type DbId = i64;

/// UTC timestamp type used across all entities.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
