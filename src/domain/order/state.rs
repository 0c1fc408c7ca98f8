//! Order list state — app-owned, SDK-provided update logic.
//!
//! [`OrderListView`] holds the local mirror of the backend's order
//! collection plus the admin table's UI sub-state (search query, 1-based
//! page). The backend response on a status update is the sole source of
//! truth: confirmed responses overwrite the matching local record by
//! identifier, and nothing mutates the mirror on failure.
//!
//! Status updates carry an [`UpdateTicket`] with a per-order sequence
//! number. Responses that arrive after a newer ticket for the same order
//! has already been applied are discarded, so the most recently *issued*
//! request determines final state, not the most recently arrived response.

use super::{Order, OrderStatus};
use crate::error::SdkError;
use crate::shared::OrderId;
use std::collections::HashMap;

/// Fixed page size of the admin order table.
pub const ORDERS_PER_PAGE: usize = 6;

// ─── Pure helpers ────────────────────────────────────────────────────────────

/// Narrows `orders` to those where `query` is a case-insensitive substring
/// of the customer name, email, or status string. Empty query matches all;
/// relative order is preserved.
pub fn filter_orders<'a>(orders: &'a [Order], query: &str) -> Vec<&'a Order> {
    if query.is_empty() {
        return orders.iter().collect();
    }
    let q = query.to_lowercase();
    orders
        .iter()
        .filter(|o| {
            o.customer_name.to_lowercase().contains(&q)
                || o.customer_email.to_lowercase().contains(&q)
                || o.status.as_str().to_lowercase().contains(&q)
        })
        .collect()
}

/// Total page count for `len` rows: `ceil(len / per_page)`, 0 when empty.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page)
}

/// Half-open index range `[(page-1)*per_page, page*per_page)` clamped to `len`.
pub fn page_bounds(len: usize, page: usize, per_page: usize) -> (usize, usize) {
    let start = (page.saturating_sub(1)) * per_page;
    let start = start.min(len);
    let end = (start + per_page).min(len);
    (start, end)
}

// ─── Notices ─────────────────────────────────────────────────────────────────

/// Outcome flavor of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient user-visible notice (the host UI's toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

// ─── Update tickets ──────────────────────────────────────────────────────────

/// Sequence token issued before dispatching a status-update request.
///
/// Tickets for the same order id are strictly increasing in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTicket {
    id: OrderId,
    seq: u64,
}

impl UpdateTicket {
    pub fn order_id(&self) -> &OrderId {
        &self.id
    }
}

// ─── OrderListView ───────────────────────────────────────────────────────────

/// The admin order table: local mirror + search + pagination + notices.
///
/// The app owns an instance and routes every mutation through its methods;
/// sub-clients never reach into the collection directly.
pub struct OrderListView {
    orders: Vec<Order>,
    query: String,
    /// 1-based; clamped into `[1, max(total_pages, 1)]` on every change.
    page: usize,
    next_seq: u64,
    /// Last applied sequence per order id. Responses at or below this are stale.
    applied: HashMap<OrderId, u64>,
    last_notice: Option<Notice>,
}

impl OrderListView {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            query: String::new(),
            page: 1,
            next_seq: 1,
            applied: HashMap::new(),
            last_notice: None,
        }
    }

    /// Loading → Loaded handoff: hand the fetched collection to the view.
    pub fn with_orders(orders: Vec<Order>) -> Self {
        let mut view = Self::new();
        view.set_orders(orders);
        view
    }

    /// Replace the whole mirror (e.g. after a refetch). Clamps the page.
    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
        self.clamp_page();
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Store the search text and reset to page 1, so narrowing results never
    /// lands on an out-of-range empty page.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.page = 1;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    /// Filtered subsequence for the current query, original order preserved.
    pub fn filtered(&self) -> Vec<&Order> {
        filter_orders(&self.orders, &self.query)
    }

    /// Rows of the current page, at most [`ORDERS_PER_PAGE`].
    pub fn visible(&self) -> Vec<&Order> {
        let filtered = self.filtered();
        let (start, end) = page_bounds(filtered.len(), self.page, ORDERS_PER_PAGE);
        filtered[start..end].to_vec()
    }

    /// Page count over the filtered set.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), ORDERS_PER_PAGE)
    }

    /// Whether the receipt affordance is shown for this order.
    pub fn receipt_available(order: &Order) -> bool {
        order.status == OrderStatus::Completed
    }

    // ── Status controller ────────────────────────────────────────────────

    /// Issue a ticket for an outgoing status-update request.
    pub fn begin_update(&mut self, id: &OrderId) -> UpdateTicket {
        let seq = self.next_seq;
        self.next_seq += 1;
        UpdateTicket {
            id: id.clone(),
            seq,
        }
    }

    /// Apply the backend's authoritative record for a confirmed update.
    ///
    /// Replaces the local record with the same identifier; every other
    /// record is untouched. Returns `false` (and leaves the mirror alone)
    /// when a newer ticket for this order has already been applied.
    pub fn apply_update(&mut self, ticket: &UpdateTicket, updated: Order) -> bool {
        if self.is_stale(ticket) {
            tracing::warn!(
                order_id = %ticket.id,
                seq = ticket.seq,
                "Discarding stale status-update response"
            );
            return false;
        }
        self.applied.insert(ticket.id.clone(), ticket.seq);

        let status = updated.status;
        if let Some(slot) = self.orders.iter_mut().find(|o| o.id == updated.id) {
            *slot = updated;
            self.last_notice = Some(Notice::success(format!(
                "Order status updated to {status}"
            )));
            true
        } else {
            // Deleted locally while the request was in flight; nothing to
            // overwrite and nothing to report.
            false
        }
    }

    /// Record a failed status update. The mirror is left exactly as it was.
    /// Returns `false` (recording nothing) when the ticket is stale.
    pub fn fail_update(&mut self, ticket: &UpdateTicket) -> bool {
        if self.is_stale(ticket) {
            return false;
        }
        self.last_notice = Some(Notice::error("Failed to update order status"));
        true
    }

    /// Reconcile a finished status-update request against the view.
    ///
    /// Returns the notice this outcome produced, or `None` when the outcome
    /// changed nothing (stale ticket, or the order was removed locally while
    /// the request was in flight). An earlier notice is never re-reported.
    pub fn resolve_update(
        &mut self,
        ticket: &UpdateTicket,
        result: Result<Order, SdkError>,
    ) -> Option<Notice> {
        let recorded = match result {
            Ok(updated) => self.apply_update(ticket, updated),
            Err(_) => self.fail_update(ticket),
        };
        if recorded {
            self.last_notice.clone()
        } else {
            None
        }
    }

    fn is_stale(&self, ticket: &UpdateTicket) -> bool {
        self.applied
            .get(&ticket.id)
            .is_some_and(|&applied| ticket.seq <= applied)
    }

    // ── Deletion ─────────────────────────────────────────────────────────

    /// Remove the record for a confirmed deletion. Clamps the page when the
    /// filtered set shrinks below the current page's start index.
    pub fn remove(&mut self, id: &OrderId) -> bool {
        let before = self.orders.len();
        self.orders.retain(|o| &o.id != id);
        let removed = self.orders.len() < before;
        if removed {
            self.applied.remove(id);
            self.clamp_page();
            self.last_notice = Some(Notice::success("Order deleted successfully"));
        }
        removed
    }

    /// Record a failed deletion. No local change.
    pub fn fail_remove(&mut self) {
        self.last_notice = Some(Notice::error("Failed to delete order"));
    }

    // ── Notices ──────────────────────────────────────────────────────────

    pub fn last_notice(&self) -> Option<&Notice> {
        self.last_notice.as_ref()
    }

    /// Take the pending notice, clearing it (the host UI shows it once).
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.last_notice.take()
    }

    fn clamp_page(&mut self) {
        let max = self.total_pages().max(1);
        self.page = self.page.clamp(1, max);
    }
}

impl Default for OrderListView {
    fn default() -> Self {
        Self::new()
    }
}
