//! Shared types and models for the Livestock Management Platform
//!
//! This crate contains the domain model shared between the analytics core,
//! the data store, and the presentation layer.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
