//! Contact message entity model and DTOs.

use admitpath_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a contact message; doubles as the contact form body.
///
/// All fields default to empty so a partial submission still persists, same
/// as the rest of the create path.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateContactMessage {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
