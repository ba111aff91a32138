//! Shared types and models for the Prairie Farm Management Platform
//!
//! This crate contains types shared between the agronomy engine, the API
//! layer, and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
