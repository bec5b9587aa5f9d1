//! User entity (database row mapping).

use sqlx::FromRow;

/// Row mapping for a user joined with its optional car.
///
/// Produced by a single `LEFT JOIN cars` query so the car never needs a
/// second round-trip. The car columns are null when the user has no car.
#[derive(Debug, Clone, FromRow)]
pub struct UserWithCarEntity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub car_id: Option<i64>,
    pub car_model: Option<String>,
    pub car_series: Option<i32>,
}

impl From<UserWithCarEntity> for domain::models::User {
    fn from(entity: UserWithCarEntity) -> Self {
        let car = match (entity.car_id, entity.car_model, entity.car_series) {
            (Some(id), Some(model), Some(series)) => Some(domain::models::Car {
                id: Some(id),
                model,
                series,
            }),
            _ => None,
        };

        Self {
            id: Some(entity.id),
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            car,
        }
    }
}
