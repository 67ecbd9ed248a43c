//! Database seeder — reset both tables and insert sample users
//!
//! Mirrors what an admin would do out of band: users are never created
//! through the API.

use booking_server::config::Config;
use booking_server::db;
use booking_server::state::AppState;
use fake::Fake;
use fake::faker::name::en::FirstName;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt().init();

    let config = Config::from_env()?;
    let state = AppState::new(&config).await?;

    sqlx::query("TRUNCATE bookings, users RESTART IDENTITY CASCADE")
        .execute(&state.pool)
        .await?;

    for _ in 0..10 {
        let name: String = FirstName().fake();
        db::users::insert(&state.pool, &name).await?;
    }

    tracing::info!("Seeded 10 users");

    Ok(())
}
