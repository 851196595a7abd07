//! Remote bill store
//!
//! This crate defines the `BillStore` trait the submission workflow talks
//! to, and the HTTP implementation backed by the Billed store API.

pub mod http;
pub mod traits;

pub use http::HttpBillStore;
pub use traits::{BillStore, StoreError, StoreResult};
