//! Money receipt rendering — pure function from one order to one document.
//!
//! Layout is fixed: title block, receipt metadata line, customer details,
//! order details, shipping details, footer. No network, no status check —
//! the caller only offers the receipt affordance for Completed orders.

use super::Order;
use crate::error::ReceiptError;
use crate::shared::format_amount;
use std::io;
use std::path::{Path, PathBuf};

const SHOP_NAME: &str = "Meralay Wollen Designs";
const PAGE_WIDTH: usize = 72;

/// A rendered receipt ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptDocument {
    /// `Receipt_<customerName>_<orderId>.txt`
    pub filename: String,
    pub contents: Vec<u8>,
}

impl ReceiptDocument {
    /// The rendered document as text.
    pub fn text(&self) -> &str {
        // Rendering only ever produces UTF-8.
        std::str::from_utf8(&self.contents).unwrap_or_default()
    }

    /// Write the document under `dir` with its generated filename.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> io::Result<PathBuf> {
        let path = dir.as_ref().join(&self.filename);
        std::fs::write(&path, &self.contents)?;
        Ok(path)
    }
}

/// Render the money receipt for `order`.
///
/// Fails only on malformed input (an order missing the identifier or
/// customer name the filename is built from); the failure is an error value,
/// never a panic, and no partial document is produced.
pub fn render_receipt(order: &Order) -> Result<ReceiptDocument, ReceiptError> {
    if order.id.is_empty() {
        return Err(ReceiptError::MissingField("order id"));
    }
    if order.customer_name.trim().is_empty() {
        return Err(ReceiptError::MissingField("customer name"));
    }

    let divider = "-".repeat(PAGE_WIDTH);
    let date = order.updated_at.format("%d/%m/%Y, %H:%M:%S");

    let mut doc = String::new();
    doc.push_str(&format!("{SHOP_NAME}\n"));
    doc.push_str("Official Money Receipt\n");
    doc.push_str(&divider);
    doc.push('\n');
    doc.push_str(&format!(
        "Receipt No: {}    Date: {}\n\n",
        order.id, date
    ));

    doc.push_str("Customer Details\n");
    doc.push_str(&format!("  Name: {}\n", order.customer_name));
    doc.push_str(&format!("  Email: {}\n", order.customer_email));
    doc.push_str(&format!("  Phone: {}\n\n", order.customer_phone));

    doc.push_str("Order Details\n");
    doc.push_str(&format!("  Design: {}\n", order.design));
    doc.push_str(&format!("  Quantity: {}\n", order.quantity));
    doc.push_str(&format!(
        "  Price (INR): {}\n",
        format_amount(order.price_per_unit)
    ));
    doc.push_str(&format!(
        "  Total Amount (INR): {}\n",
        format_amount(order.total_amount)
    ));
    doc.push_str(&format!("  Status: {}\n\n", order.status));

    doc.push_str("Shipping Details\n");
    doc.push_str(&format!(
        "  Address: {}\n",
        order.address.as_deref().unwrap_or("N/A")
    ));
    doc.push_str(&format!(
        "  Postal Code: {}\n\n",
        order.pincode.as_deref().unwrap_or("N/A")
    ));

    doc.push_str(&divider);
    doc.push('\n');
    doc.push_str(&format!("Thank you for shopping with {SHOP_NAME}!\n"));
    doc.push_str("This is a system-generated receipt. No signature required.\n");

    Ok(ReceiptDocument {
        filename: format!("Receipt_{}_{}.txt", order.customer_name, order.id),
        contents: doc.into_bytes(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;
    use crate::shared::OrderId;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn completed_order() -> Order {
        Order {
            id: OrderId::from("A1"),
            customer_name: "Asha".to_string(),
            customer_email: "asha@example.com".to_string(),
            customer_phone: "9876543210".to_string(),
            address: Some("12 Wool Lane".to_string()),
            pincode: Some("560001".to_string()),
            design: "Himalayan Cardigan".to_string(),
            quantity: 2,
            price_per_unit: Some(Decimal::new(250, 0)),
            total_amount: Some(Decimal::new(500, 0)),
            status: OrderStatus::Completed,
            created_at: Utc.with_ymd_and_hms(2025, 10, 2, 8, 15, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 10, 5, 17, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_filename_pattern() {
        let doc = render_receipt(&completed_order()).unwrap();
        assert_eq!(doc.filename, "Receipt_Asha_A1.txt");
    }

    #[test]
    fn test_rendered_layout_block_order() {
        let doc = render_receipt(&completed_order()).unwrap();
        let text = doc.text();

        let positions: Vec<usize> = [
            "Meralay Wollen Designs",
            "Official Money Receipt",
            "Receipt No: A1",
            "Customer Details",
            "Order Details",
            "Shipping Details",
            "Thank you for shopping",
        ]
        .iter()
        .map(|needle| text.find(needle).expect(needle))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_total_amount_rendered() {
        let doc = render_receipt(&completed_order()).unwrap();
        assert!(doc.text().contains("Total Amount (INR): 500"));
        assert!(doc.text().contains("Date: 05/10/2025, 17:30:00"));
    }

    #[test]
    fn test_missing_numerics_render_as_dash() {
        let mut order = completed_order();
        order.price_per_unit = None;
        order.total_amount = None;
        let doc = render_receipt(&order).unwrap();
        assert!(doc.text().contains("Price (INR): -"));
        assert!(doc.text().contains("Total Amount (INR): -"));
    }

    #[test]
    fn test_missing_shipping_renders_na() {
        let mut order = completed_order();
        order.address = None;
        order.pincode = None;
        let doc = render_receipt(&order).unwrap();
        assert!(doc.text().contains("Address: N/A"));
        assert!(doc.text().contains("Postal Code: N/A"));
    }

    #[test]
    fn test_malformed_input_is_an_error_not_a_panic() {
        let mut order = completed_order();
        order.customer_name = "  ".to_string();
        assert!(matches!(
            render_receipt(&order),
            Err(ReceiptError::MissingField("customer name"))
        ));

        let mut order = completed_order();
        order.id = OrderId::from("");
        assert!(matches!(
            render_receipt(&order),
            Err(ReceiptError::MissingField("order id"))
        ));
    }

    #[test]
    fn test_save_to_writes_file() {
        let doc = render_receipt(&completed_order()).unwrap();
        let dir = std::env::temp_dir();
        let path = doc.save_to(&dir).unwrap();
        assert!(path.ends_with("Receipt_Asha_A1.txt"));
        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk, doc.contents);
        let _ = std::fs::remove_file(path);
    }
}
