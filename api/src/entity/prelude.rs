//! Prelude module for convenient imports

pub use super::asset_images::Entity as AssetImages;
pub use super::assets::Entity as Assets;
