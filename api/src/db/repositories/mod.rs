// Database repository management

pub mod asset_repository;

pub use asset_repository::AssetRepository;

use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Container for all database repositories
pub struct Repositories {
    pub asset: Arc<AssetRepository>,
}

impl Repositories {
    /// Creates a new repositories container with database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        Repositories {
            asset: Arc::new(AssetRepository::new(conn)),
        }
    }
}
