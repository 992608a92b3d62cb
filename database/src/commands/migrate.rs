use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::error::Error;
use tracing::{error, info};

use crate::config::DatabaseConfig;

/// Open a connection to the configured database
pub async fn connect() -> Result<DatabaseConnection, Box<dyn Error>> {
    let config = DatabaseConfig::from_env()?;

    info!("Connecting to database {} on {}:{}", config.name, config.host, config.port);

    Database::connect(&config.url).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        e.into()
    })
}

/// Execute the migrate command
pub async fn execute(connection: &DatabaseConnection, steps: Option<u32>) -> Result<(), Box<dyn Error>> {
    let all_migrations = Migrator::get_migration_files();
    info!("Found {} migration files", all_migrations.len());
    for m in &all_migrations {
        info!("Migration file: {}", m.name());
    }

    match steps {
        Some(n) => info!("Running {} migrations", n),
        None => info!("Running all pending migrations"),
    }

    Migrator::up(connection, steps).await.map_err(|e| {
        error!("Failed to run migrations: {}", e);
        error!("Migration error details: {:?}", e);
        e
    })?;

    info!("Migrations applied");
    Ok(())
}

/// Roll back every migration, then apply them all again
pub async fn reset(connection: &DatabaseConnection) -> Result<(), Box<dyn Error>> {
    info!("Resetting database: rolling back all migrations");
    Migrator::reset(connection).await.map_err(|e| {
        error!("Failed to roll back migrations: {}", e);
        e
    })?;

    Migrator::up(connection, None).await.map_err(|e| {
        error!("Failed to re-apply migrations: {}", e);
        e
    })?;

    info!("Database reset complete");
    Ok(())
}

/// Print applied and pending migrations
pub async fn status(connection: &DatabaseConnection) -> Result<(), Box<dyn Error>> {
    let applied = Migrator::get_applied_migrations(connection).await?;
    let pending = Migrator::get_pending_migrations(connection).await?;

    for m in &applied {
        info!("Applied: {}", m.name());
    }
    for m in &pending {
        info!("Pending: {}", m.name());
    }
    info!("{} applied, {} pending", applied.len(), pending.len());

    Ok(())
}
