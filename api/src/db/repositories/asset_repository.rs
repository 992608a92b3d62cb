use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, TransactionTrait,
};

use crate::db::error::DbError;
use crate::entity::{asset_images, assets, prelude::*};

/// Repository for asset and asset image writes
#[derive(Clone)]
pub struct AssetRepository {
    db: DatabaseConnection,
}

impl AssetRepository {
    /// Create a new asset repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persist one asset row and its image rows in a single transaction.
    ///
    /// Either every row is committed or none is: on any insert failure the
    /// transaction is rolled back and the error returned. Returns the
    /// surrogate id of the inserted asset row.
    pub async fn save_submission(
        &self,
        asset: assets::ActiveModel,
        images: Vec<asset_images::ActiveModel>,
    ) -> Result<i32, DbError> {
        let txn = self.db.begin().await?;

        match Self::insert_rows(&txn, asset, images).await {
            Ok(id) => {
                txn.commit().await?;
                Ok(id)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!("Rollback after failed insert also failed: {}", rollback_err);
                }
                Err(err.into())
            }
        }
    }

    async fn insert_rows(
        txn: &DatabaseTransaction,
        asset: assets::ActiveModel,
        images: Vec<asset_images::ActiveModel>,
    ) -> Result<i32, DbErr> {
        let inserted = Assets::insert(asset).exec(txn).await?;

        for image in images {
            AssetImages::insert(image).exec(txn).await?;
        }

        Ok(inserted.last_insert_id)
    }
}
