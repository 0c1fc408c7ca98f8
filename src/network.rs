//! Network URL constants for the shop SDK.

/// Default REST API base URL (hosted shop backend).
pub const DEFAULT_API_URL: &str = "https://shop-backend-91h1.onrender.com";
