use sea_orm::{NotSet, Set};
use std::sync::Arc;

use crate::db::repositories::AssetRepository;
use crate::db::DbError;
use crate::entity::{asset_images, assets};
use crate::models::{AssetSubmission, ImagePayload};

/// Service for asset ingest business logic
pub struct AssetService {
    asset_repository: Arc<AssetRepository>,
}

impl AssetService {
    /// Create a new asset service instance
    pub fn new(asset_repository: Arc<AssetRepository>) -> Self {
        Self { asset_repository }
    }

    /// Flatten a submission and store it as one asset row plus one row per image.
    /// Returns the surrogate id of the asset row.
    pub async fn ingest(&self, submission: AssetSubmission) -> Result<i32, DbError> {
        let asset_id = submission.asset_identification.asset_id.clone();
        let image_count = submission.images.len();
        let (asset, images) = flatten_submission(submission);

        let id = self.asset_repository.save_submission(asset, images).await?;

        tracing::info!(
            "Saved asset {} (asset_id={:?}) with {} image(s)",
            id,
            asset_id,
            image_count
        );

        Ok(id)
    }
}

/// Map the nested payload onto flat `assets` / `asset_images` rows.
/// Every image row carries the submission's `assetId` as its correlation key.
pub fn flatten_submission(
    submission: AssetSubmission,
) -> (assets::ActiveModel, Vec<asset_images::ActiveModel>) {
    let AssetSubmission {
        asset_identification: ident,
        classification,
        core_details: core,
        specific_details: specific,
        assignment,
        status,
        metadata,
        images,
    } = submission;

    let gps = metadata.gps_coordinates.unwrap_or_default();

    let image_rows = images
        .into_iter()
        .map(|image| image_row(ident.asset_id.clone(), image))
        .collect();

    let asset = assets::ActiveModel {
        id: NotSet,

        asset_id: Set(ident.asset_id),
        barcode: Set(ident.barcode),
        asset_type: Set(ident.asset_type),
        parent_asset_id: Set(ident.parent_asset_id),
        serial_number: Set(ident.serial_number),

        account_head: Set(classification.account_head),
        category: Set(classification.category),
        sub_category: Set(classification.sub_category),
        asset_group: Set(classification.asset_group),
        asset_model: Set(classification.asset_model),
        manufacturer: Set(classification.manufacturer),

        asset_name: Set(core.asset_name),
        purchase_date: Set(core.purchase_date),
        capitalization_date: Set(core.capitalization_date),
        vendor: Set(core.vendor),
        invoice_number: Set(core.invoice_number),
        asset_value: Set(core.asset_value),
        warranty_start: Set(core.warranty_start),
        warranty_end: Set(core.warranty_end),
        amc_applicable: Set(core.amc_applicable),

        cpu: Set(specific.cpu),
        ram: Set(specific.ram),
        storage: Set(specific.storage),
        os: Set(specific.os),
        ip_address: Set(specific.ip_address),
        mac_address: Set(specific.mac_address),
        hostname: Set(specific.hostname),
        software_license: Set(specific.software_license),

        dimensions: Set(specific.dimensions),
        capacity: Set(specific.capacity),
        material_type: Set(specific.material_type),
        power_rating: Set(specific.power_rating),
        installation_date: Set(specific.installation_date),

        department: Set(assignment.department),
        cost_center: Set(assignment.cost_center),
        location: Set(assignment.location),
        sub_location: Set(assignment.sub_location),
        assigned_to: Set(assignment.assigned_to),
        custodian: Set(assignment.custodian),

        asset_status: Set(status.asset_status),
        verification_status: Set(status.verification_status),
        verification_cycle: Set(status.verification_cycle),
        remarks: Set(status.remarks),

        latitude: Set(gps.latitude),
        longitude: Set(gps.longitude),
        accuracy: Set(gps.accuracy),

        captured_by: Set(metadata.captured_by),
        captured_at_location: Set(metadata.captured_at_location),
    };

    (asset, image_rows)
}

fn image_row(asset_id: Option<String>, image: ImagePayload) -> asset_images::ActiveModel {
    asset_images::ActiveModel {
        id: NotSet,
        asset_id: Set(asset_id),
        image_index: Set(image.image_index),
        image_data: Set(image.image_data),
        captured_at: Set(image.captured_at),
    }
}
