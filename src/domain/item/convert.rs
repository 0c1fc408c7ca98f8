//! Conversions: wire records → Item domain types.

use super::wire::ItemRecord;
use super::Item;

impl From<ItemRecord> for Item {
    fn from(rec: ItemRecord) -> Self {
        Item {
            id: rec.id,
            name: rec.name,
            description: rec.description,
            price: rec.price,
            stock: rec.stock,
            image: rec.image,
        }
    }
}
