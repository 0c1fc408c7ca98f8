//! High-level client — `ShopClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared session slot, the catalog
//! cache, and the accessor methods.

use crate::auth::client::Auth;
use crate::auth::Session;
use crate::domain::contact::client::Contact;
use crate::domain::item::client::Items;
use crate::domain::item::Item;
use crate::domain::order::client::Orders;
use crate::error::SdkError;
use crate::http::ShopHttp;

use async_lock::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::contact::client::Contact as ContactClient;
pub use crate::domain::item::client::Items as ItemsClient;
pub use crate::domain::order::client::Orders as OrdersClient;

/// The primary entry point for the shop SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.orders()`, `client.items()`, `client.contact()`, `client.auth()`.
pub struct ShopClient {
    pub(crate) http: ShopHttp,
    /// The one authoritative session slot.
    pub(crate) session: Arc<RwLock<Option<Session>>>,
    /// Catalog cache: (items, fetched_at). Mutations invalidate it.
    pub(crate) catalog_cache: Arc<RwLock<Option<(Vec<Item>, Instant)>>>,
    pub(crate) catalog_cache_ttl: Duration,
}

impl ShopClient {
    pub fn builder() -> ShopClientBuilder {
        ShopClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn items(&self) -> Items<'_> {
        Items { client: self }
    }

    pub fn contact(&self) -> Contact<'_> {
        Contact { client: self }
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    /// Drop the cached catalog.
    pub async fn clear_catalog_cache(&self) {
        *self.catalog_cache.write().await = None;
    }
}

impl Clone for ShopClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            session: self.session.clone(),
            catalog_cache: self.catalog_cache.clone(),
            catalog_cache_ttl: self.catalog_cache_ttl,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ShopClientBuilder {
    base_url: String,
    catalog_cache_ttl: Duration,
}

impl Default for ShopClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            catalog_cache_ttl: Duration::from_secs(60),
        }
    }
}

impl ShopClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn catalog_cache_ttl(mut self, ttl: Duration) -> Self {
        self.catalog_cache_ttl = ttl;
        self
    }

    pub fn build(self) -> Result<ShopClient, SdkError> {
        Ok(ShopClient {
            http: ShopHttp::new(&self.base_url),
            session: Arc::new(RwLock::new(None)),
            catalog_cache: Arc::new(RwLock::new(None)),
            catalog_cache_ttl: self.catalog_cache_ttl,
        })
    }
}
