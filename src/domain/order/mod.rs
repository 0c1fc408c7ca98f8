//! Order domain — the customer order record, its status lifecycle, the
//! admin order-list state, and receipt rendering.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod receipt;
pub mod state;
pub mod wire;

use crate::shared::OrderId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use receipt::{render_receipt, ReceiptDocument};
pub use state::{
    filter_orders, page_bounds, total_pages, Notice, NoticeKind, OrderListView, UpdateTicket,
    ORDERS_PER_PAGE,
};

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Order lifecycle status.
///
/// Transitions are unconstrained here: the backend accepts any value for any
/// order, and this component only reflects what the backend confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(OrderStatus::Pending),
            "Processing" => Some(OrderStatus::Processing),
            "Completed" => Some(OrderStatus::Completed),
            "Cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// All statuses, in timeline order (the tracking page renders these as
    /// the four steps of the status timeline).
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// A customer order as held in the local mirror.
///
/// The backend owns the record; the copy here is overwritten by the
/// authoritative response on every confirmed status update.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub address: Option<String>,
    pub pincode: Option<String>,
    pub design: String,
    pub quantity: u32,
    pub price_per_unit: Option<Decimal>,
    pub total_amount: Option<Decimal>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for placing a new order from the storefront checkout.
///
/// `total_amount` is price × quantity at submission time; the backend stores
/// it as-is and it is never recomputed client-side afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    #[serde(rename = "userName")]
    pub customer_name: String,
    #[serde(rename = "userEmail")]
    pub customer_email: String,
    #[serde(rename = "userPhone")]
    pub customer_phone: String,
    pub address: String,
    pub pincode: String,
    pub design: String,
    pub quantity: u32,
    // Amounts go out as JSON numbers, matching what the backend casts.
    #[serde(
        rename = "pricePerUnit",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub price_per_unit: Decimal,
    #[serde(
        rename = "totalAmount",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub total_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_as_exact_strings() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            r#""Processing""#
        );
        let s: OrderStatus = serde_json::from_str(r#""Cancelled""#).unwrap();
        assert_eq!(s, OrderStatus::Cancelled);
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for s in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_str(s.as_str()), Some(s));
        }
        assert_eq!(OrderStatus::from_str("Shipped"), None);
    }
}
