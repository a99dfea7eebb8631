//! Integration test utilities for the board
//!
//! This crate provides seeded boards and request builders for exercising
//! `PostService` end to end, in memory or against PostgreSQL.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
