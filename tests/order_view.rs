//! End-to-end scenarios for the admin order list: search, pagination,
//! status reconciliation, deletion, and receipt generation, exercised
//! through the public API only.

use chrono::{TimeZone, Utc};
use meralay_shop_sdk::prelude::*;
use rust_decimal::Decimal;

fn order(id: &str, name: &str, status: OrderStatus, total: Option<i64>) -> Order {
    Order {
        id: OrderId::from(id),
        customer_name: name.to_string(),
        customer_email: format!("{}@example.com", name.to_lowercase()),
        customer_phone: "9876543210".to_string(),
        address: Some("12 Wool Lane".to_string()),
        pincode: Some("560001".to_string()),
        design: "Himalayan Cardigan".to_string(),
        quantity: 1,
        price_per_unit: total.map(|t| Decimal::new(t, 0)),
        total_amount: total.map(|t| Decimal::new(t, 0)),
        status,
        created_at: Utc.with_ymd_and_hms(2025, 10, 2, 8, 15, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2025, 10, 5, 17, 30, 0).unwrap(),
    }
}

#[test]
fn search_then_page_then_complete_then_receipt() {
    let orders: Vec<Order> = (1..=7)
        .map(|i| {
            order(
                &format!("id{i}"),
                &format!("O{i}"),
                OrderStatus::Pending,
                Some(500),
            )
        })
        .collect();
    let mut view = OrderListView::with_orders(orders);

    // Searching "pending" matches all seven; page 1 shows six, page 2 one.
    view.set_query("pending");
    assert_eq!(view.filtered().len(), 7);
    assert_eq!(view.total_pages(), 2);
    assert_eq!(view.visible().len(), ORDERS_PER_PAGE);
    view.set_page(2);
    assert_eq!(view.visible().len(), 1);
    assert_eq!(view.visible()[0].customer_name, "O7");

    // Complete O7 via an authoritative response.
    let id = OrderId::from("id7");
    let ticket = view.begin_update(&id);
    let completed = order("id7", "O7", OrderStatus::Completed, Some(500));
    assert!(view.apply_update(&ticket, completed));

    // Narrowing to "completed" resets to page 1 with the single hit.
    view.set_query("completed");
    assert_eq!(view.page(), 1);
    let visible = view.visible();
    assert_eq!(visible.len(), 1);
    assert!(OrderListView::receipt_available(visible[0]));

    // The receipt renders the total and carries the filename pattern.
    let doc = render_receipt(visible[0]).unwrap();
    assert_eq!(doc.filename, "Receipt_O7_id7.txt");
    assert!(doc.text().contains("Total Amount (INR): 500"));
}

#[test]
fn receipt_scenario_named_order() {
    let asha = order("A1", "Asha", OrderStatus::Completed, Some(500));
    let doc = render_receipt(&asha).unwrap();
    assert_eq!(doc.filename, "Receipt_Asha_A1.txt");
    assert!(doc.text().contains("500"));
}

#[test]
fn deletion_keeps_every_other_record_intact() {
    let orders: Vec<Order> = (1..=3)
        .map(|i| {
            order(
                &format!("id{i}"),
                &format!("O{i}"),
                OrderStatus::Processing,
                Some(100 * i as i64),
            )
        })
        .collect();
    let snapshot = orders.clone();
    let mut view = OrderListView::with_orders(orders);

    assert!(view.remove(&OrderId::from("id2")));
    assert_eq!(view.orders().len(), 2);
    assert_eq!(view.orders()[0], snapshot[0]);
    assert_eq!(view.orders()[1], snapshot[2]);
}

#[test]
fn failed_update_records_error_notice_without_mutation() {
    let mut view = OrderListView::with_orders(vec![order(
        "id1",
        "O1",
        OrderStatus::Pending,
        Some(500),
    )]);

    let ticket = view.begin_update(&OrderId::from("id1"));
    assert!(view.fail_update(&ticket));

    assert_eq!(view.orders()[0].status, OrderStatus::Pending);
    let notice = view.take_notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
}

#[test]
fn out_of_order_responses_keep_last_issued_state() {
    let mut view = OrderListView::with_orders(vec![order(
        "id1",
        "O1",
        OrderStatus::Pending,
        Some(500),
    )]);
    let id = OrderId::from("id1");

    let first_issued = view.begin_update(&id);
    let second_issued = view.begin_update(&id);

    assert!(view.apply_update(&second_issued, order("id1", "O1", OrderStatus::Cancelled, Some(500))));
    assert!(!view.apply_update(&first_issued, order("id1", "O1", OrderStatus::Processing, Some(500))));

    assert_eq!(view.orders()[0].status, OrderStatus::Cancelled);
}
