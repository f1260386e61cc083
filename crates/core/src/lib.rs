//! Domain logic for the admitpath college-admission predictor.
//!
//! This crate has no I/O and no internal dependencies: it holds the typed
//! quota-tree model, the eligibility matcher, prediction-form validation,
//! naming helpers, and the shared error/type aliases used by the db and api
//! crates.

pub mod eligibility;
pub mod error;
pub mod naming;
pub mod quota;
pub mod types;
pub mod validation;
