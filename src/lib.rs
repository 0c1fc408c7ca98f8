//! # Meralay Shop SDK
//!
//! A Rust client SDK for the Meralay Wollen Designs shop backend: order
//! management for the admin dashboard, storefront catalog, order tracking,
//! contact form, and money-receipt rendering.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, receipt rendering, the
//!    app-owned order-list state (always available, no network needed)
//! 2. **Auth** — Single-session login/logout with bearer injection
//! 3. **HTTP API** — `ShopHttp` with per-endpoint retry policies
//! 4. **High-Level Client** — `ShopClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use meralay_shop_sdk::prelude::*;
//!
//! let client = ShopClient::builder()
//!     .base_url("https://shop-backend-91h1.onrender.com")
//!     .build()?;
//!
//! let mut view = OrderListView::with_orders(client.orders().list().await?);
//! view.set_query("pending");
//! for order in view.visible() {
//!     println!("{} — {}", order.customer_name, order.status);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: session lifecycle, login/register/logout.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `ShopClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{ItemId, OrderId};

    // Domain types — order (includes the list view + receipt)
    pub use crate::domain::order::{
        filter_orders, render_receipt, NewOrder, Notice, NoticeKind, Order, OrderListView,
        OrderStatus, ReceiptDocument, UpdateTicket, ORDERS_PER_PAGE,
    };

    // Domain types — item, contact
    pub use crate::domain::contact::ContactMessage;
    pub use crate::domain::item::{ImageUpload, Item, ItemForm};

    // Auth
    pub use crate::auth::Session;

    // Errors
    pub use crate::error::{HttpError, ReceiptError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, ContactClient, ItemsClient, OrdersClient, ShopClient, ShopClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::RetryPolicy;
}
