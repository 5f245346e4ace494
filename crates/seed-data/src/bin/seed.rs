//! Default seed script - creates the admin account and all fixture problems
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```
//!
//! Every run inserts the full fixture set again unless
//! `SEED_INSERT_MODE=skip-existing` is set.

use problems::database::{Database, migrate};
use seed_data::config::SeedConfig;
use seed_data::db::Seeder;
use seed_data::fixtures;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    if config.run_migrations {
        if let Err(e) = migrate(&pool).await {
            tracing::error!("Migrations failed: {e}");
            pool.close().await;
            return Err(e.into());
        }
    }

    let summary = Seeder::new(Database::new(pool))
        .with_admin(config.admin)
        .with_insert_mode(config.insert_mode)
        .run(&fixtures::all())
        .await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Admin: {} (created: {})", summary.admin_id, summary.admin_created);
    tracing::info!("  Problems inserted: {}", summary.inserted);
    tracing::info!("  Problems skipped: {}", summary.skipped);

    Ok(())
}
