//! Catalog item domain — the storefront grid and the admin item table.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::ItemId;
use rust_decimal::Decimal;

/// A shop catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: u32,
    /// Server-relative image path; the host prefixes the API base URL.
    pub image: Option<String>,
}

/// Payload for creating or editing a catalog item.
///
/// Sent as multipart form data; the image part is only attached when a new
/// file was picked.
#[derive(Debug, Clone, Default)]
pub struct ItemForm {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: u32,
    pub image: Option<ImageUpload>,
}

/// An image file attached to an item form.
#[derive(Debug, Clone, Default)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}
