// Nested asset submission payload as sent by capture clients

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::lenient;

/// Request body for POST /api/assets
///
/// Every group is optional; an absent or `null` group reads as empty so all
/// of its fields come out as `None`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSubmission {
    #[serde(default, deserialize_with = "lenient::group")]
    pub asset_identification: AssetIdentification,
    #[serde(default, deserialize_with = "lenient::group")]
    pub classification: Classification,
    #[serde(default, deserialize_with = "lenient::group")]
    pub core_details: CoreDetails,
    #[serde(default, deserialize_with = "lenient::group")]
    pub specific_details: SpecificDetails,
    #[serde(default, deserialize_with = "lenient::group")]
    pub assignment: Assignment,
    #[serde(default, deserialize_with = "lenient::group")]
    pub status: AssetStatus,
    #[serde(default, deserialize_with = "lenient::group")]
    pub metadata: CaptureMetadata,
    #[serde(default, deserialize_with = "lenient::group")]
    pub images: Vec<ImagePayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetIdentification {
    #[serde(default, deserialize_with = "lenient::text")]
    pub asset_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub barcode: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub asset_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub parent_asset_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub serial_number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    #[serde(default, deserialize_with = "lenient::text")]
    pub account_head: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub sub_category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub asset_group: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub asset_model: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub manufacturer: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreDetails {
    #[serde(default, deserialize_with = "lenient::text")]
    pub asset_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub capitalization_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub vendor: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub invoice_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub asset_value: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub warranty_start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub warranty_end: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub amc_applicable: Option<bool>,
}

/// IT and physical specifics share one group in the payload
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificDetails {
    #[serde(default, deserialize_with = "lenient::text")]
    pub cpu: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub ram: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub storage: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub os: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub ip_address: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub mac_address: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub hostname: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub software_license: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub dimensions: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub capacity: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub material_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub power_rating: Option<String>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub installation_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(default, deserialize_with = "lenient::text")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub cost_center: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub sub_location: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub assigned_to: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub custodian: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetStatus {
    #[serde(default, deserialize_with = "lenient::text")]
    pub asset_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub verification_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub verification_cycle: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub remarks: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureMetadata {
    #[serde(default)]
    pub gps_coordinates: Option<GpsCoordinates>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub captured_by: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub captured_at_location: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GpsCoordinates {
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub latitude: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub longitude: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub accuracy: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub image_index: Option<i32>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image_data: Option<String>,
    #[serde(default, deserialize_with = "lenient::datetime")]
    pub captured_at: Option<NaiveDateTime>,
}
