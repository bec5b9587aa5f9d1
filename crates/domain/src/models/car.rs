//! Car domain model.

use serde::{Deserialize, Serialize};

/// A vehicle owned by exactly one [`User`](crate::models::User).
///
/// The owning user is not referenced from here; the association is navigated
/// only from user to car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Surrogate key. `None` until the car has been persisted.
    pub id: Option<i64>,
    pub model: String,
    /// Opaque discriminator such as a trim level or year.
    pub series: i32,
}

impl Car {
    /// Creates an unsaved car. The key is assigned on persist.
    pub fn new(model: impl Into<String>, series: i32) -> Self {
        Self {
            id: None,
            model: model.into(),
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_car_has_no_key() {
        let car = Car::new("model1", 1);
        assert_eq!(car.id, None);
        assert_eq!(car.model, "model1");
        assert_eq!(car.series, 1);
    }

    #[test]
    fn construction_accepts_unvalidated_values() {
        // Validation is out of scope for the model layer.
        let car = Car::new("", -7);
        assert_eq!(car.model, "");
        assert_eq!(car.series, -7);
    }
}
