//! Repository implementations.

pub mod user;

pub use user::{UserMatch, UserRepository};
