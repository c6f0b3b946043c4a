//! Receipt object storage using Apache OpenDAL.
//!
//! Production writes go to a single S3 bucket; the local filesystem and an
//! in-memory store are available for development and tests.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               Apache OpenDAL                 │
//! ├──────────────────────────────────────────────┤
//! │ op.writer_with("key").chunk(n)  (streamed)   │
//! │ op.read("key")      │ op.delete("key")       │
//! └──────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod service;

pub use config::{StorageConfig, StorageProvider};
pub use error::StorageError;
pub use service::{ObjectWriter, RECEIPT_PREFIX, StorageService, StoredObject};
