use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // asset_id is a free-text correlation key: no unique constraint, no index
        manager
            .create_table(
                Table::create()
                    .table(Assets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Assets::Id).integer().not_null().auto_increment().primary_key())
                    // Identification
                    .col(ColumnDef::new(Assets::AssetId).string_len(100))
                    .col(ColumnDef::new(Assets::Barcode).string_len(100))
                    .col(ColumnDef::new(Assets::AssetType).string_len(20))
                    .col(ColumnDef::new(Assets::ParentAssetId).string_len(100))
                    .col(ColumnDef::new(Assets::SerialNumber).string_len(100))
                    // Classification
                    .col(ColumnDef::new(Assets::AccountHead).string_len(100))
                    .col(ColumnDef::new(Assets::Category).string_len(100))
                    .col(ColumnDef::new(Assets::SubCategory).string_len(100))
                    .col(ColumnDef::new(Assets::AssetGroup).string_len(100))
                    .col(ColumnDef::new(Assets::AssetModel).string_len(100))
                    .col(ColumnDef::new(Assets::Manufacturer).string_len(100))
                    // Core details
                    .col(ColumnDef::new(Assets::AssetName).text())
                    .col(ColumnDef::new(Assets::PurchaseDate).date())
                    .col(ColumnDef::new(Assets::CapitalizationDate).date())
                    .col(ColumnDef::new(Assets::Vendor).string_len(150))
                    .col(ColumnDef::new(Assets::InvoiceNumber).string_len(100))
                    .col(ColumnDef::new(Assets::AssetValue).decimal())
                    .col(ColumnDef::new(Assets::WarrantyStart).date())
                    .col(ColumnDef::new(Assets::WarrantyEnd).date())
                    .col(ColumnDef::new(Assets::AmcApplicable).boolean())
                    // IT specifics
                    .col(ColumnDef::new(Assets::Cpu).string_len(100))
                    .col(ColumnDef::new(Assets::Ram).string_len(100))
                    .col(ColumnDef::new(Assets::Storage).string_len(100))
                    .col(ColumnDef::new(Assets::Os).string_len(100))
                    .col(ColumnDef::new(Assets::IpAddress).string_len(50))
                    .col(ColumnDef::new(Assets::MacAddress).string_len(50))
                    .col(ColumnDef::new(Assets::Hostname).string_len(100))
                    .col(ColumnDef::new(Assets::SoftwareLicense).text())
                    // Physical specifics
                    .col(ColumnDef::new(Assets::Dimensions).string_len(100))
                    .col(ColumnDef::new(Assets::Capacity).string_len(100))
                    .col(ColumnDef::new(Assets::MaterialType).string_len(100))
                    .col(ColumnDef::new(Assets::PowerRating).string_len(100))
                    .col(ColumnDef::new(Assets::InstallationDate).date())
                    // Assignment
                    .col(ColumnDef::new(Assets::Department).string_len(100))
                    .col(ColumnDef::new(Assets::CostCenter).string_len(100))
                    .col(ColumnDef::new(Assets::Location).string_len(100))
                    .col(ColumnDef::new(Assets::SubLocation).string_len(100))
                    .col(ColumnDef::new(Assets::AssignedTo).string_len(100))
                    .col(ColumnDef::new(Assets::Custodian).string_len(100))
                    // Status
                    .col(ColumnDef::new(Assets::AssetStatus).string_len(50))
                    .col(ColumnDef::new(Assets::VerificationStatus).string_len(50))
                    .col(ColumnDef::new(Assets::VerificationCycle).string_len(50))
                    .col(ColumnDef::new(Assets::Remarks).text())
                    // GPS
                    .col(ColumnDef::new(Assets::Latitude).decimal())
                    .col(ColumnDef::new(Assets::Longitude).decimal())
                    .col(ColumnDef::new(Assets::Accuracy).decimal())
                    // Capture metadata
                    .col(ColumnDef::new(Assets::CapturedBy).string_len(100))
                    .col(ColumnDef::new(Assets::CapturedAtLocation).string_len(150))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assets::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
    AssetId,
    Barcode,
    AssetType,
    ParentAssetId,
    SerialNumber,
    AccountHead,
    Category,
    SubCategory,
    AssetGroup,
    AssetModel,
    Manufacturer,
    AssetName,
    PurchaseDate,
    CapitalizationDate,
    Vendor,
    InvoiceNumber,
    AssetValue,
    WarrantyStart,
    WarrantyEnd,
    AmcApplicable,
    Cpu,
    Ram,
    Storage,
    Os,
    IpAddress,
    MacAddress,
    Hostname,
    SoftwareLicense,
    Dimensions,
    Capacity,
    MaterialType,
    PowerRating,
    InstallationDate,
    Department,
    CostCenter,
    Location,
    SubLocation,
    AssignedTo,
    Custodian,
    AssetStatus,
    VerificationStatus,
    VerificationCycle,
    Remarks,
    Latitude,
    Longitude,
    Accuracy,
    CapturedBy,
    CapturedAtLocation,
}
