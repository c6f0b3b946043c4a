//! Receipt uploads for expenses.
//!
//! A receipt is streamed into object storage under a time-derived key and its
//! public URL is then written onto the expense row. The expense is not looked
//! up first; uploading for an unknown expense stores the object and reports
//! that no row was updated.

mod error;
mod service;
mod types;

pub use error::ReceiptError;
pub use service::{ReceiptRepository, ReceiptService, ReceiptUpload};
pub use types::Receipt;
