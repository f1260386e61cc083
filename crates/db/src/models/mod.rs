//! Entity models: one module per table, row structs plus create DTOs.

pub mod browse_college;
pub mod college;
pub mod contact_message;
pub mod user;
