//! Wire types matching the backend's Mongo-style order JSON.

use crate::shared::serde_util::lenient_decimal;
use crate::shared::OrderId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Raw order record as the backend sends it.
#[derive(Deserialize, Debug, Clone)]
pub struct OrderRecord {
    #[serde(rename = "_id")]
    pub id: OrderId,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "userEmail")]
    pub user_email: String,
    #[serde(rename = "userPhone", default)]
    pub user_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    pub design: String,
    pub quantity: u32,
    #[serde(
        rename = "pricePerUnit",
        default,
        deserialize_with = "lenient_decimal::deserialize"
    )]
    pub price_per_unit: Option<Decimal>,
    #[serde(
        rename = "totalAmount",
        default,
        deserialize_with = "lenient_decimal::deserialize"
    )]
    pub total_amount: Option<Decimal>,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// `PUT /api/orders/{id}` success body: `{"order": {...}}`.
#[derive(Deserialize, Debug, Clone)]
pub struct UpdatedOrderResponse {
    pub order: OrderRecord,
}

/// `GET /api/orders/track` success body: `{"order": {...}}`; misses carry a
/// `message` instead.
#[derive(Deserialize, Debug, Clone)]
pub struct TrackResponse {
    #[serde(default)]
    pub order: Option<OrderRecord>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /api/orders` response: `{success, message?, order?}`.
#[derive(Deserialize, Debug, Clone)]
pub struct PlaceOrderResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub order: Option<OrderRecord>,
}
