//! HTTP handlers, grouped by resource.

pub mod auth;
pub mod colleges;
pub mod contact;
pub mod health;
pub mod pages;
pub mod predict;
