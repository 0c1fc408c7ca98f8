//! HTTP client layer — `ShopHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::ShopHttp;
pub use retry::RetryPolicy;
