//! Validation modules

pub mod receipt;

pub use receipt::{ReceiptValidator, ValidationError, ACCEPTED_MEDIA_TYPES};
