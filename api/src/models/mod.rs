// API request/response models

pub mod dates;
mod lenient;
mod submission;

use serde::Serialize;

pub use submission::{
    AssetIdentification, AssetStatus, AssetSubmission, Assignment, CaptureMetadata,
    Classification, CoreDetails, GpsCoordinates, ImagePayload, SpecificDetails,
};

/// Message returned with 201 Created
pub const ASSET_SAVED_MESSAGE: &str = "Asset saved successfully";

/// Response structure for POST /api/assets on success
#[derive(Debug, Serialize)]
pub struct AssetCreatedResponse {
    pub message: String,
}

impl Default for AssetCreatedResponse {
    fn default() -> Self {
        Self {
            message: ASSET_SAVED_MESSAGE.to_string(),
        }
    }
}

/// Response structure for GET /health
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
}
