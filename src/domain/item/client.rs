//! Items sub-client — catalog listing and admin CRUD.
//!
//! Listing is served through a TTL cache on the client; any mutation
//! invalidates it.

use super::wire::ItemRecord;
use super::{Item, ItemForm};
use crate::client::ShopClient;
use crate::error::SdkError;
use crate::http::RetryPolicy;
use crate::shared::ItemId;

use reqwest::multipart::{Form, Part};
use std::time::Instant;

/// Sub-client for catalog item operations.
pub struct Items<'a> {
    pub(crate) client: &'a ShopClient,
}

impl<'a> Items<'a> {
    /// Fetch the catalog. Served from the TTL cache when fresh; the catalog
    /// read is idempotent, so it is the one endpoint that retries.
    pub async fn list(&self) -> Result<Vec<Item>, SdkError> {
        {
            let cache = self.client.catalog_cache.read().await;
            if let Some((items, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < self.client.catalog_cache_ttl {
                    return Ok(items.clone());
                }
            }
        }

        let url = format!("{}/api/items", self.client.http.base_url());
        let records: Vec<ItemRecord> =
            self.client.http.get(&url, RetryPolicy::Idempotent).await?;
        let items: Vec<Item> = records.into_iter().map(Item::from).collect();

        *self.client.catalog_cache.write().await = Some((items.clone(), Instant::now()));
        Ok(items)
    }

    /// Add a new catalog item.
    pub async fn create(&self, form: &ItemForm) -> Result<Item, SdkError> {
        let url = format!("{}/api/items", self.client.http.base_url());
        let rec: ItemRecord = self
            .client
            .http
            .send_multipart(reqwest::Method::POST, &url, build_form(form))
            .await?;
        self.invalidate_cache().await;
        Ok(rec.into())
    }

    /// Edit an existing catalog item.
    pub async fn update(&self, id: &ItemId, form: &ItemForm) -> Result<Item, SdkError> {
        let url = format!("{}/api/items/{}", self.client.http.base_url(), id);
        let rec: ItemRecord = self
            .client
            .http
            .send_multipart(reqwest::Method::PUT, &url, build_form(form))
            .await?;
        self.invalidate_cache().await;
        Ok(rec.into())
    }

    /// Remove a catalog item.
    pub async fn delete(&self, id: &ItemId) -> Result<(), SdkError> {
        let url = format!("{}/api/items/{}", self.client.http.base_url(), id);
        self.client.http.delete(&url, RetryPolicy::None).await?;
        self.invalidate_cache().await;
        Ok(())
    }

    async fn invalidate_cache(&self) {
        *self.client.catalog_cache.write().await = None;
    }
}

fn build_form(form: &ItemForm) -> Form {
    let mut multipart = Form::new()
        .text("name", form.name.clone())
        .text("description", form.description.clone().unwrap_or_default())
        .text("price", form.price.to_string())
        .text("stock", form.stock.to_string());

    if let Some(image) = &form.image {
        multipart = multipart.part(
            "image",
            Part::bytes(image.bytes.clone()).file_name(image.filename.clone()),
        );
    }

    multipart
}
