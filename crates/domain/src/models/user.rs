//! User domain model.

use serde::{Deserialize, Serialize};

use crate::models::Car;

/// A person, optionally owning a single [`Car`].
///
/// The car's lifecycle is bound to its owner: it is persisted together with
/// the user and removed together with the user. It is never shared between
/// users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Surrogate key. `None` until the user has been persisted.
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub car: Option<Car>,
}

impl User {
    /// Creates an unsaved user without a car.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            car: None,
        }
    }

    /// Creates an unsaved user owning the given car.
    pub fn with_car(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        car: Car,
    ) -> Self {
        Self {
            car: Some(car),
            ..Self::new(first_name, last_name, email)
        }
    }
}
