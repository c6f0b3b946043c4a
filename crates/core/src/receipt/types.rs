//! Receipt types.

use serde::Serialize;

/// Outcome of a completed receipt upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    /// Expense the receipt was uploaded for.
    pub expense_id: i64,
    /// Storage key.
    pub key: String,
    /// Public URL, also written to the expense row.
    pub url: String,
    /// Bytes stored.
    pub size: u64,
    /// Expense rows whose receipt URL was updated (0 when the expense does not exist).
    pub expense_updated: u64,
}
