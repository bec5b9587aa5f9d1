//! Domain layer for Motorpool.
//!
//! This crate contains:
//! - Domain models (User, Car)
//!
//! Models are pure data holders; validation is a caller concern.

pub mod models;
