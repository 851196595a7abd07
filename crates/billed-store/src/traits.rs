//! Bill store abstraction trait
//!
//! This module defines the `BillStore` trait every store backend must
//! implement. The submission and listing services only see this trait,
//! which keeps them testable against in-memory doubles.

use async_trait::async_trait;
use billed_core::models::{AttachmentResponse, Bill, SelectedReceipt, UpdateAck};
use thiserror::Error;

/// Store operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Remote bill store abstraction
///
/// Two-phase persistence: `create_attachment` stores the receipt file and
/// opens the record, `update_bill` fills the record in. The create response
/// is returned raw; callers run the sentinel validation themselves.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Upload a receipt and open a bill record for it.
    ///
    /// The payload carries the file bytes and the submitting user's email.
    async fn create_attachment(
        &self,
        receipt: &SelectedReceipt,
        email: &str,
    ) -> StoreResult<AttachmentResponse>;

    /// Update the record identified by `selector` with the serialized draft.
    async fn update_bill(&self, selector: &str, data: String) -> StoreResult<UpdateAck>;

    /// List the bills submitted by `email`.
    async fn list_bills(&self, email: &str) -> StoreResult<Vec<Bill>>;
}
