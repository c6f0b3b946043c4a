//! Storage service implementation using Apache OpenDAL.

use bytes::Bytes;
use opendal::{Operator, Writer, services};

use super::config::{StorageConfig, StorageProvider};
use super::error::StorageError;

/// Key prefix for receipt objects.
pub const RECEIPT_PREFIX: &str = "receipts";

/// An object that has been fully written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Storage key.
    pub key: String,
    /// Public URL of the object.
    pub url: String,
    /// Bytes written.
    pub size: u64,
}

/// Storage service for receipt files.
#[derive(Debug)]
pub struct StorageService {
    operator: Operator,
    config: StorageConfig,
}

impl StorageService {
    /// Create a new storage service from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        let operator = Self::create_operator(&config.provider)?;
        Ok(Self { operator, config })
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        let operator = match provider {
            StorageProvider::S3 {
                bucket,
                region,
                endpoint,
            } => {
                let mut builder = services::S3::default().bucket(bucket).region(region);
                if let Some(endpoint) = endpoint {
                    builder = builder.endpoint(endpoint);
                }
                Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish()
            }
            StorageProvider::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                );
                Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish()
            }
            StorageProvider::Memory => Operator::new(services::Memory::default())
                .map_err(|e| StorageError::configuration(e.to_string()))?
                .finish(),
        };

        Ok(operator)
    }

    /// Generate storage key for a receipt.
    ///
    /// Format: `receipts/{unix_seconds}_{expense_id}`. The original filename is
    /// not part of the key.
    #[must_use]
    pub fn receipt_key(expense_id: i64, uploaded_at: i64) -> String {
        format!("{RECEIPT_PREFIX}/{uploaded_at}_{expense_id}")
    }

    /// Public URL for `key` in the configured bucket.
    #[must_use]
    pub fn public_url(&self, key: &str) -> String {
        self.config.provider.public_url(key)
    }

    /// Open a streaming writer for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer cannot be created.
    pub async fn open_writer(&self, key: &str) -> Result<ObjectWriter, StorageError> {
        let writer = self
            .operator
            .writer_with(key)
            .chunk(self.config.write_chunk_size)
            .await?;

        Ok(ObjectWriter {
            key: key.to_string(),
            url: self.public_url(key),
            writer,
            written: 0,
        })
    }

    /// Read a whole object.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist or cannot be read.
    pub async fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let buffer = self.operator.read(key).await?;
        Ok(buffer.to_vec())
    }

    /// Delete a file from storage.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.operator.delete(key).await.map_err(StorageError::from)
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.config.provider.name()
    }
}

/// In-progress streamed write of one object.
pub struct ObjectWriter {
    key: String,
    url: String,
    writer: Writer,
    written: u64,
}

impl ObjectWriter {
    /// Storage key being written.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append a chunk.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub async fn write(&mut self, chunk: Bytes) -> Result<(), StorageError> {
        let len = chunk.len() as u64;
        self.writer.write(chunk).await?;
        self.written += len;
        Ok(())
    }

    /// Flush remaining data and commit the object.
    ///
    /// A failed commit aborts the write before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the final upload fails.
    pub async fn close(mut self) -> Result<StoredObject, StorageError> {
        if let Err(e) = self.writer.close().await {
            self.abort().await;
            return Err(e.into());
        }
        Ok(StoredObject {
            key: self.key,
            url: self.url,
            size: self.written,
        })
    }

    /// Abandon the write; nothing becomes visible under the key.
    pub async fn abort(mut self) {
        if let Err(e) = self.writer.abort().await {
            tracing::warn!(key = %self.key, error = %e, "Failed to abort object write");
        }
    }
}
