//! Domain models for Motorpool.

pub mod car;
pub mod user;

pub use car::Car;
pub use user::User;
