//! Orders sub-client — list, track, place, status updates, deletion.
//!
//! Every endpoint here runs with `RetryPolicy::None`: a failed order action
//! becomes a notice and the user re-triggers it (see `http::retry`).

use super::state::{Notice, OrderListView};
use super::wire::{OrderRecord, PlaceOrderResponse, TrackResponse, UpdatedOrderResponse};
use super::{NewOrder, Order, OrderStatus};
use crate::client::ShopClient;
use crate::error::{HttpError, SdkError};
use crate::http::RetryPolicy;
use crate::shared::OrderId;

use serde::Serialize;

#[derive(Serialize)]
struct UpdateStatusBody {
    status: OrderStatus,
}

/// Sub-client for order operations.
pub struct Orders<'a> {
    pub(crate) client: &'a ShopClient,
}

impl<'a> Orders<'a> {
    /// Fetch the full order collection (admin view's one-shot load).
    pub async fn list(&self) -> Result<Vec<Order>, SdkError> {
        let url = format!("{}/api/orders", self.client.http.base_url());
        let records: Vec<OrderRecord> = self.client.http.get(&url, RetryPolicy::None).await?;
        Ok(records.into_iter().map(Order::from).collect())
    }

    /// Track an order by the customer's registered email.
    pub async fn track_by_email(&self, email: &str) -> Result<Order, SdkError> {
        let url = format!(
            "{}/api/orders/track?email={}",
            self.client.http.base_url(),
            urlencoding::encode(email.trim())
        );
        self.track(&url).await
    }

    /// Track an order by its identifier.
    pub async fn track_by_id(&self, id: &OrderId) -> Result<Order, SdkError> {
        let url = format!(
            "{}/api/orders/track?id={}",
            self.client.http.base_url(),
            urlencoding::encode(id.as_str())
        );
        self.track(&url).await
    }

    async fn track(&self, url: &str) -> Result<Order, SdkError> {
        let resp: TrackResponse = self.client.http.get(url, RetryPolicy::None).await?;
        match resp.order {
            Some(rec) => Ok(rec.into()),
            None => Err(SdkError::Http(HttpError::NotFound(
                resp.message.unwrap_or_else(|| "Order not found".to_string()),
            ))),
        }
    }

    /// Place a new order from the storefront checkout.
    ///
    /// The backend answers `{success, message?, order?}`; a rejected order
    /// surfaces as [`SdkError::Validation`] with the backend's message.
    pub async fn place(&self, order: &NewOrder) -> Result<Option<Order>, SdkError> {
        let url = format!("{}/api/orders", self.client.http.base_url());
        let resp: PlaceOrderResponse = self
            .client
            .http
            .post(&url, order, RetryPolicy::None)
            .await?;
        if resp.success {
            Ok(resp.order.map(Order::from))
        } else {
            Err(SdkError::Validation(
                resp.message
                    .unwrap_or_else(|| "Failed to place order".to_string()),
            ))
        }
    }

    /// Send a status change and return the backend's authoritative record.
    pub async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, SdkError> {
        let url = format!("{}/api/orders/{}", self.client.http.base_url(), id);
        let resp: UpdatedOrderResponse = self
            .client
            .http
            .put(&url, &UpdateStatusBody { status }, RetryPolicy::None)
            .await?;
        Ok(resp.order.into())
    }

    /// Delete an order. The caller has already obtained user confirmation.
    pub async fn delete(&self, id: &OrderId) -> Result<(), SdkError> {
        let url = format!("{}/api/orders/{}", self.client.http.base_url(), id);
        self.client.http.delete(&url, RetryPolicy::None).await?;
        Ok(())
    }

    // ── View drivers ─────────────────────────────────────────────────────
    //
    // The app owns the OrderListView; these tie one request to one state
    // transition. Errors never propagate out — they become notices on the
    // view, and the local mirror is only touched on confirmed success.

    /// Full status-update round trip: ticket → PUT → reconcile.
    pub async fn update_status_in(
        &self,
        view: &mut OrderListView,
        id: &OrderId,
        status: OrderStatus,
    ) -> Option<Notice> {
        let ticket = view.begin_update(id);
        let result = self.update_status(id, status).await;
        if let Err(err) = &result {
            tracing::debug!(order_id = %id, error = %err, "Status update failed");
        }
        view.resolve_update(&ticket, result)
    }

    /// Full delete round trip. Refuses to dispatch without confirmation —
    /// the destructive action requires an explicit user yes first.
    pub async fn delete_in(
        &self,
        view: &mut OrderListView,
        id: &OrderId,
        confirmed: bool,
    ) -> Option<Notice> {
        if !confirmed {
            return None;
        }
        match self.delete(id).await {
            Ok(()) => {
                // Already gone from the mirror means nothing to report.
                if !view.remove(id) {
                    return None;
                }
            }
            Err(err) => {
                tracing::debug!(order_id = %id, error = %err, "Delete failed");
                view.fail_remove();
            }
        }
        view.last_notice().cloned()
    }
}
