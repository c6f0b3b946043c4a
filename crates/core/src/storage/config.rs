//! Storage configuration types.

use std::path::PathBuf;

use sitebook_shared::config::{StorageKind, StorageSettings};

/// Storage provider configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageProvider {
    /// AWS S3. Credentials come from the ambient AWS environment/profile.
    S3 {
        /// S3 bucket name.
        bucket: String,
        /// AWS region.
        region: String,
        /// Custom endpoint (S3-compatible stores); AWS when `None`.
        endpoint: Option<String>,
    },
    /// Local filesystem (development only)
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
    /// In-process memory (tests only)
    Memory,
}

impl StorageProvider {
    /// Create an AWS S3 provider.
    #[must_use]
    pub fn s3(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self::S3 {
            bucket: bucket.into(),
            region: region.into(),
            endpoint: None,
        }
    }

    /// Create local filesystem provider (development only).
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Get the provider name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::LocalFs { .. } => "local",
            Self::Memory => "memory",
        }
    }

    /// Public URL under which `key` is reachable.
    ///
    /// S3 uses virtual-hosted style (`https://{bucket}.s3.amazonaws.com/{key}`)
    /// unless a custom endpoint is configured, in which case path style is used.
    #[must_use]
    pub fn public_url(&self, key: &str) -> String {
        match self {
            Self::S3 {
                bucket,
                endpoint: None,
                ..
            } => format!("https://{bucket}.s3.amazonaws.com/{key}"),
            Self::S3 {
                bucket,
                endpoint: Some(endpoint),
                ..
            } => format!("{}/{bucket}/{key}", endpoint.trim_end_matches('/')),
            Self::LocalFs { root } => format!("file://{}/{key}", root.display()),
            Self::Memory => format!("memory:///{key}"),
        }
    }
}

impl From<&StorageSettings> for StorageProvider {
    fn from(settings: &StorageSettings) -> Self {
        match settings.provider {
            StorageKind::S3 => Self::S3 {
                bucket: settings.bucket.clone(),
                region: settings.region.clone(),
                endpoint: settings.endpoint.clone(),
            },
            StorageKind::Fs => Self::local_fs(&settings.root),
            StorageKind::Memory => Self::Memory,
        }
    }
}

/// Storage service configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider configuration.
    pub provider: StorageProvider,
    /// Buffer size for streamed writes. S3 multipart parts need at least 5 MiB.
    pub write_chunk_size: usize,
}

impl StorageConfig {
    /// Default write chunk: 8 MiB.
    pub const DEFAULT_WRITE_CHUNK_SIZE: usize = 8 * 1024 * 1024;

    /// Create a new storage config with default settings.
    #[must_use]
    pub fn new(provider: StorageProvider) -> Self {
        Self {
            provider,
            write_chunk_size: Self::DEFAULT_WRITE_CHUNK_SIZE,
        }
    }
}

impl From<&StorageSettings> for StorageConfig {
    fn from(settings: &StorageSettings) -> Self {
        Self::new(StorageProvider::from(settings))
    }
}
