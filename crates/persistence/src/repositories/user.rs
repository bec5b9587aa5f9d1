//! User repository for database operations.

use sqlx::SqlitePool;

use domain::models::User;

use crate::entities::UserWithCarEntity;
use crate::error::PersistenceError;
use crate::metrics::QueryTimer;

const USER_WITH_CAR_COLUMNS: &str = r#"
    u.id, u.first_name, u.last_name, u.email,
    c.id AS car_id, c.model AS car_model, c.series AS car_series
"#;

/// Allocates the next surrogate key inside the caller's transaction.
///
/// Users and cars draw from this one keyspace, so a user's key is always
/// distinct from its car's. AUTOINCREMENT never reuses a key, so the
/// bookkeeping row can be deleted right away.
async fn next_id(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
) -> Result<i64, PersistenceError> {
    let id: i64 = sqlx::query_scalar("INSERT INTO ids DEFAULT VALUES RETURNING id")
        .fetch_one(&mut **tx)
        .await?;
    sqlx::query("DELETE FROM ids WHERE id = $1")
        .bind(id)
        .execute(&mut **tx)
        .await?;
    Ok(id)
}

/// Outcome of a lookup that the caller expects to match a single user.
///
/// Nothing in the schema makes (model, series) unique across cars, so the
/// zero-match and multi-match cases are first-class outcomes rather than an
/// arbitrary first row or an unchecked error.
#[derive(Debug, Clone)]
pub enum UserMatch {
    /// No user matched.
    None,
    /// Exactly one user matched.
    One(User),
    /// More than one user matched; all matches, in key order.
    Ambiguous(Vec<User>),
}

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Persist a new user, cascading to its car.
    ///
    /// Runs as one transaction: the car (if any) is inserted first, then the
    /// user referencing it. A concurrent reader never observes one row
    /// without the other. Assigns the surrogate keys onto `user` (and its
    /// car) as a side effect.
    pub async fn add(&self, user: &mut User) -> Result<(), PersistenceError> {
        let timer = QueryTimer::new("add_user");
        let mut tx = self.pool.begin().await?;

        let car_id = match user.car.as_mut() {
            Some(car) => {
                let id = next_id(&mut tx).await?;
                sqlx::query(
                    r#"
                    INSERT INTO cars (id, model, series)
                    VALUES ($1, $2, $3)
                    "#,
                )
                .bind(id)
                .bind(&car.model)
                .bind(car.series)
                .execute(&mut *tx)
                .await?;
                car.id = Some(id);
                Some(id)
            }
            None => None,
        };

        let id = next_id(&mut tx).await?;
        sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, email, car_id)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(car_id)
        .execute(&mut *tx)
        .await?;
        user.id = Some(id);

        tx.commit().await?;
        timer.record();
        Ok(())
    }

    /// List every stored user with its car populated when present.
    ///
    /// One query, storage default ordering (key order).
    pub async fn list_users(&self) -> Result<Vec<User>, PersistenceError> {
        let timer = QueryTimer::new("list_users");
        let rows = sqlx::query_as::<_, UserWithCarEntity>(&format!(
            r#"
            SELECT {USER_WITH_CAR_COLUMNS}
            FROM users u
            LEFT JOIN cars c ON c.id = u.car_id
            "#
        ))
        .fetch_all(&self.pool)
        .await?;
        timer.record();
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Find every user whose car matches the given model and series exactly.
    ///
    /// Returns an empty vec when nothing matches. Set-returning by policy:
    /// (model, series) is not unique across cars.
    pub async fn find_by_car_model_and_series(
        &self,
        model: &str,
        series: i32,
    ) -> Result<Vec<User>, PersistenceError> {
        let timer = QueryTimer::new("find_users_by_car_model_and_series");
        let rows = sqlx::query_as::<_, UserWithCarEntity>(&format!(
            r#"
            SELECT {USER_WITH_CAR_COLUMNS}
            FROM users u
            INNER JOIN cars c ON c.id = u.car_id
            WHERE c.model = $1 AND c.series = $2
            "#
        ))
        .bind(model)
        .bind(series)
        .fetch_all(&self.pool)
        .await?;
        timer.record();
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Single-user variant of [`find_by_car_model_and_series`].
    ///
    /// Distinguishes the zero-match and multi-match cases explicitly instead
    /// of truncating to an arbitrary row.
    ///
    /// [`find_by_car_model_and_series`]: UserRepository::find_by_car_model_and_series
    pub async fn find_one_by_car_model_and_series(
        &self,
        model: &str,
        series: i32,
    ) -> Result<UserMatch, PersistenceError> {
        let mut users = self.find_by_car_model_and_series(model, series).await?;
        Ok(match users.len() {
            0 => UserMatch::None,
            1 => UserMatch::One(users.remove(0)),
            _ => UserMatch::Ambiguous(users),
        })
    }

    /// Remove a user and, cascading, its car.
    ///
    /// Runs as one transaction; the user row goes first so the car is no
    /// longer referenced when it is deleted. Returns whether a user with the
    /// given key existed.
    pub async fn remove(&self, user_id: i64) -> Result<bool, PersistenceError> {
        let timer = QueryTimer::new("remove_user");
        let mut tx = self.pool.begin().await?;

        let car_id: Option<Option<i64>> =
            sqlx::query_scalar("SELECT car_id FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(car_id) = car_id else {
            timer.record();
            return Ok(false);
        };

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        if let Some(car_id) = car_id {
            sqlx::query("DELETE FROM cars WHERE id = $1")
                .bind(car_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        timer.record();
        Ok(true)
    }
}
