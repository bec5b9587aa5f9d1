//! Persistence layer for Motorpool.
//!
//! This crate contains:
//! - Database connection management and schema application
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - The persistence error taxonomy

pub mod db;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;

pub use error::PersistenceError;
