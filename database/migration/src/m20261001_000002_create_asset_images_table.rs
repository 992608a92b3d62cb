use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Linked to assets by the asset_id value only, no foreign key
        manager
            .create_table(
                Table::create()
                    .table(AssetImages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AssetImages::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(AssetImages::AssetId).string_len(100))
                    .col(ColumnDef::new(AssetImages::ImageIndex).integer())
                    .col(ColumnDef::new(AssetImages::ImageData).text()) // Inline encoded payload (base64 data URI)
                    .col(ColumnDef::new(AssetImages::CapturedAt).timestamp())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AssetImages::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AssetImages {
    Table,
    Id,
    AssetId,
    ImageIndex,
    ImageData,
    CapturedAt,
}
