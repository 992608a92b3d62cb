use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One captured asset. Every column except the surrogate `id` is nullable.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "assets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub asset_id: Option<String>, // Correlation key for asset_images, not unique
    pub barcode: Option<String>,
    pub asset_type: Option<String>,
    pub parent_asset_id: Option<String>,
    pub serial_number: Option<String>,

    pub account_head: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub asset_group: Option<String>,
    pub asset_model: Option<String>,
    pub manufacturer: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub asset_name: Option<String>,
    pub purchase_date: Option<Date>,
    pub capitalization_date: Option<Date>,
    pub vendor: Option<String>,
    pub invoice_number: Option<String>,
    pub asset_value: Option<Decimal>,
    pub warranty_start: Option<Date>,
    pub warranty_end: Option<Date>,
    pub amc_applicable: Option<bool>,

    pub cpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub os: Option<String>,
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    pub hostname: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub software_license: Option<String>,

    pub dimensions: Option<String>,
    pub capacity: Option<String>,
    pub material_type: Option<String>,
    pub power_rating: Option<String>,
    pub installation_date: Option<Date>,

    pub department: Option<String>,
    pub cost_center: Option<String>,
    pub location: Option<String>,
    pub sub_location: Option<String>,
    pub assigned_to: Option<String>,
    pub custodian: Option<String>,

    pub asset_status: Option<String>,
    pub verification_status: Option<String>,
    pub verification_cycle: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub remarks: Option<String>,

    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub accuracy: Option<Decimal>,

    pub captured_by: Option<String>,
    pub captured_at_location: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
