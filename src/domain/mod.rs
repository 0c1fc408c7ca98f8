//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `From` conversions
//! - `state.rs` — State containers with update methods (order list view)
//! - `client.rs` — Sub-client with HTTP methods

pub mod contact;
pub mod item;
pub mod order;
