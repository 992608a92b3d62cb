//! Entity module for database models

pub mod asset_images;
pub mod assets;
pub mod prelude;
