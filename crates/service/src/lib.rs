//! Service layer for Motorpool.
//!
//! Thin facade over the persistence repositories. Each method is one logical
//! operation: the repository scopes its own transaction, the facade adds
//! instrumentation and keeps the error surface stable for callers.

pub mod user;

pub use user::{ServiceError, UserService};
