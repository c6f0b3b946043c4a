//! Receipt service implementation.

use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use super::error::ReceiptError;
use super::types::Receipt;
use crate::storage::{ObjectWriter, StorageService};

/// Repository trait for linking receipts to expenses.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait ReceiptRepository: Send + Sync {
    /// Set the receipt URL of an expense, returning the number of rows updated.
    fn attach_receipt(
        &self,
        expense_id: i64,
        url: String,
    ) -> impl std::future::Future<Output = Result<u64, ReceiptError>> + Send;
}

/// Receipt service for streaming uploads into storage.
pub struct ReceiptService<R: ReceiptRepository> {
    storage: Arc<StorageService>,
    repo: Arc<R>,
}

impl<R: ReceiptRepository> ReceiptService<R> {
    /// Create a new receipt service.
    #[must_use]
    pub fn new(storage: Arc<StorageService>, repo: Arc<R>) -> Self {
        Self { storage, repo }
    }

    /// Start an upload for `expense_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage writer cannot be opened.
    pub async fn begin(
        &self,
        expense_id: i64,
        uploaded_at: DateTime<Utc>,
    ) -> Result<ReceiptUpload, ReceiptError> {
        let key = StorageService::receipt_key(expense_id, uploaded_at.timestamp());
        let writer = self.storage.open_writer(&key).await?;
        Ok(ReceiptUpload { expense_id, writer })
    }

    /// Commit the object and record its URL on the expense.
    ///
    /// If the expense row cannot be updated the stored object is removed again.
    ///
    /// # Errors
    ///
    /// Returns an error if the final write or the expense update fails.
    pub async fn finish(&self, upload: ReceiptUpload) -> Result<Receipt, ReceiptError> {
        let expense_id = upload.expense_id;
        let stored = upload.writer.close().await?;

        let expense_updated = match self
            .repo
            .attach_receipt(expense_id, stored.url.clone())
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                if let Err(cleanup) = self.storage.delete(&stored.key).await {
                    tracing::warn!(key = %stored.key, error = %cleanup, "Failed to remove unlinked receipt");
                }
                return Err(e);
            }
        };

        Ok(Receipt {
            expense_id,
            key: stored.key,
            url: stored.url,
            size: stored.size,
            expense_updated,
        })
    }
}

/// A receipt upload that has been started but not committed.
pub struct ReceiptUpload {
    expense_id: i64,
    writer: ObjectWriter,
}

impl ReceiptUpload {
    /// Storage key the receipt is written to.
    #[must_use]
    pub fn key(&self) -> &str {
        self.writer.key()
    }

    /// Append a chunk of the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub async fn write(&mut self, chunk: Bytes) -> Result<(), ReceiptError> {
        self.writer.write(chunk).await?;
        Ok(())
    }

    /// Abandon the upload.
    pub async fn abort(self) {
        self.writer.abort().await;
    }
}
