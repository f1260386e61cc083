//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod browse_college_repo;
pub mod college_repo;
pub mod contact_repo;
pub mod user_repo;

pub use browse_college_repo::BrowseCollegeRepo;
pub use college_repo::CollegeRepo;
pub use contact_repo::ContactRepo;
pub use user_repo::UserRepo;
