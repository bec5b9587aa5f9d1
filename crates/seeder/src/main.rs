use anyhow::Result;
use tracing::info;

use domain::models::{Car, User};
use persistence::repositories::UserRepository;
use service::UserService;

mod config;
mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    logging::init_logging(&config.logging);

    info!("Starting Motorpool seeder v{}", env!("CARGO_PKG_VERSION"));

    // Create database pool; a connectivity failure here is fatal
    let pool = persistence::db::create_pool(&config.database).await?;

    // Apply the configured schema mode
    persistence::db::apply_schema(&pool, config.database.schema_mode).await?;
    info!(mode = ?config.database.schema_mode, "schema applied");

    let service = UserService::new(UserRepository::new(pool));

    // Seed the standard scenario: four users with cars, one without
    let mut users = vec![
        User::with_car("User1", "Lastname1", "user1@mail.ru", Car::new("model1", 1)),
        User::with_car("User2", "Lastname2", "user2@mail.ru", Car::new("model2", 2)),
        User::with_car("User3", "Lastname3", "user3@mail.ru", Car::new("model3", 3)),
        User::with_car("User4", "Lastname4", "user4@mail.ru", Car::new("model4", 4)),
        User::new("User5", "Lastname5", "user5@mail.ru"),
    ];
    for user in &mut users {
        service.add(user).await?;
    }
    info!(count = users.len(), "seeded users");

    info!("=== all users ===");
    for user in service.list_users().await? {
        info!("{user:?}");
    }

    info!("=== users with car model2 / series 2 ===");
    for user in service.find_by_car_model_and_series("model2", 2).await? {
        info!("{user:?}");
    }

    Ok(())
}
