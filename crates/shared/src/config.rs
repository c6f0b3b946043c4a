//! Application configuration management.

use std::fmt;

use serde::Deserialize;

use crate::types::IdStrategy;

/// Legacy connection variables that override `database.*` when set.
const POSTGRES_ENV_OVERRIDES: [(&str, &str); 5] = [
    ("database.host", "POSTGRES_HOST"),
    ("database.port", "POSTGRES_PORT"),
    ("database.user", "POSTGRES_USER"),
    ("database.password", "POSTGRES_PASSWORD"),
    ("database.name", "POSTGRES_DB"),
];

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Receipt storage configuration.
    #[serde(default)]
    pub storage: StorageSettings,
    /// Identifier assignment configuration.
    #[serde(default)]
    pub ids: IdConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database server host.
    pub host: String,
    /// Database server port.
    #[serde(default = "default_db_port")]
    pub port: u16,
    /// Login role.
    pub user: String,
    /// Login password.
    pub password: String,
    /// Database name.
    pub name: String,
    /// libpq-style SSL mode.
    #[serde(default = "default_ssl_mode")]
    pub ssl_mode: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_db_port() -> u16 {
    5432
}

fn default_ssl_mode() -> String {
    "require".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish()
    }
}

/// Object store backing receipt uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    /// AWS S3 with ambient credentials.
    #[default]
    S3,
    /// Local filesystem (development only).
    Fs,
    /// In-process memory (tests only).
    Memory,
}

/// Receipt storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Which object store to use.
    #[serde(default)]
    pub provider: StorageKind,
    /// Bucket receiving receipts.
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Bucket region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Custom S3 endpoint; AWS default when unset.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Root directory for the `fs` provider.
    #[serde(default = "default_storage_root")]
    pub root: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            provider: StorageKind::default(),
            bucket: default_bucket(),
            region: default_region(),
            endpoint: None,
            root: default_storage_root(),
        }
    }
}

fn default_bucket() -> String {
    "construction-expenses".to_string()
}

fn default_region() -> String {
    "us-east-2".to_string()
}

fn default_storage_root() -> String {
    "./storage".to_string()
}

/// Identifier assignment configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct IdConfig {
    /// How new project and expense identifiers are generated.
    #[serde(default)]
    pub strategy: IdStrategy,
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// `SITEBOOK__*` variables, then the `POSTGRES_*` connection variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SITEBOOK").separator("__"));

        for (key, var) in POSTGRES_ENV_OVERRIDES {
            builder = builder.set_override_option(key, std::env::var(var).ok())?;
        }

        builder.build()?.try_deserialize()
    }
}
