//! Conversions: wire records → Order domain types.

use super::wire::OrderRecord;
use super::{Order, OrderStatus};

impl From<OrderRecord> for Order {
    fn from(rec: OrderRecord) -> Self {
        Order {
            id: rec.id,
            customer_name: rec.user_name,
            customer_email: rec.user_email,
            customer_phone: rec.user_phone.unwrap_or_default(),
            address: rec.address,
            pincode: rec.pincode,
            design: rec.design,
            quantity: rec.quantity,
            price_per_unit: rec.price_per_unit,
            total_amount: rec.total_amount,
            // Unknown status strings fall back to Pending rather than
            // rejecting the whole record.
            status: OrderStatus::from_str(&rec.status).unwrap_or_default(),
            created_at: rec.created_at,
            updated_at: rec.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_record_converts_to_domain_order() {
        let json = r#"{
            "_id": "A1",
            "userName": "Asha",
            "userEmail": "asha@example.com",
            "userPhone": "9876543210",
            "design": "Cardigan",
            "quantity": 2,
            "totalAmount": 500,
            "status": "Completed",
            "createdAt": "2025-10-02T08:15:00Z",
            "updatedAt": "2025-10-05T17:30:00Z"
        }"#;
        let rec: super::super::wire::OrderRecord = serde_json::from_str(json).unwrap();
        let order: Order = rec.into();
        assert_eq!(order.id.as_str(), "A1");
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.total_amount, Some(Decimal::new(500, 0)));
        assert!(order.address.is_none());
    }

    #[test]
    fn test_unknown_status_falls_back_to_pending() {
        let json = r#"{
            "_id": "A2",
            "userName": "N",
            "userEmail": "n@example.com",
            "design": "Scarf",
            "quantity": 1,
            "status": "Shipped",
            "createdAt": "2025-10-02T08:15:00Z",
            "updatedAt": "2025-10-02T08:15:00Z"
        }"#;
        let rec: super::super::wire::OrderRecord = serde_json::from_str(json).unwrap();
        let order: Order = rec.into();
        assert_eq!(order.status, OrderStatus::Pending);
    }
}
