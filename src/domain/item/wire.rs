//! Wire types for catalog items.

use crate::shared::serde_util::lenient_decimal;
use crate::shared::ItemId;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Raw item record as the backend sends it.
#[derive(Deserialize, Debug, Clone)]
pub struct ItemRecord {
    #[serde(rename = "_id")]
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Mongoose sends a plain JSON number; legacy records may carry strings.
    #[serde(deserialize_with = "lenient_decimal::required")]
    pub price: Decimal,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub image: Option<String>,
}
