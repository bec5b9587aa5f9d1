//! User service facade.

use thiserror::Error;
use tracing::{info, instrument};

use domain::models::User;
use persistence::repositories::{UserMatch, UserRepository};
use persistence::PersistenceError;

/// Errors surfaced by the user service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A single-user lookup matched no rows.
    #[error("no user matched car model '{model}' series {series}")]
    NotFound { model: String, series: i32 },

    /// A single-user lookup matched more than one row.
    #[error("{count} users matched car model '{model}' series {series}")]
    Ambiguous {
        model: String,
        series: i32,
        count: usize,
    },

    /// Storage error, propagated unchanged. Never retried here.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Facade exposing user persistence operations under a stable interface.
#[derive(Clone)]
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    /// Creates a new UserService over the given repository.
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Persist a new user and, cascading, its car.
    ///
    /// The repository runs both inserts in one transaction, so a partial
    /// write (user without its car, or vice versa) is never observable.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn add(&self, user: &mut User) -> Result<(), ServiceError> {
        self.users.add(user).await?;
        info!(user_id = user.id, "user persisted");
        Ok(())
    }

    /// List every stored user.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.users.list_users().await?)
    }

    /// Find every user whose car matches the given model and series.
    ///
    /// Empty vec on no match.
    #[instrument(skip(self))]
    pub async fn find_by_car_model_and_series(
        &self,
        model: &str,
        series: i32,
    ) -> Result<Vec<User>, ServiceError> {
        Ok(self
            .users
            .find_by_car_model_and_series(model, series)
            .await?)
    }

    /// Strict single-user lookup by car model and series.
    ///
    /// Zero matches is [`ServiceError::NotFound`], more than one is
    /// [`ServiceError::Ambiguous`]; an arbitrary row is never returned.
    #[instrument(skip(self))]
    pub async fn get_by_car_model_and_series(
        &self,
        model: &str,
        series: i32,
    ) -> Result<User, ServiceError> {
        match self
            .users
            .find_one_by_car_model_and_series(model, series)
            .await?
        {
            UserMatch::One(user) => Ok(user),
            UserMatch::None => Err(ServiceError::NotFound {
                model: model.to_string(),
                series,
            }),
            UserMatch::Ambiguous(users) => Err(ServiceError::Ambiguous {
                model: model.to_string(),
                series,
                count: users.len(),
            }),
        }
    }

    /// Remove a user and its car. Returns whether the user existed.
    #[instrument(skip(self))]
    pub async fn remove(&self, user_id: i64) -> Result<bool, ServiceError> {
        Ok(self.users.remove(user_id).await?)
    }
}
