use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level service configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub registration: RegistrationConfig,
    pub catalog: CatalogConfig,
}

/// Arc-wrapped config, cheap to clone into every subsystem.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths (PEM).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Subscriber settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn`, `error` or `off`.
    pub level: String,
    /// Rolling log files are written here when set.
    pub directory: Option<PathBuf>,
    /// JSON lines instead of plain text in the log files.
    pub json: bool,
    /// Extra filter directives, e.g. `paw_registration=debug`.
    pub filter: Option<String>,
}

/// Registration wizard settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Drafts untouched for this long are discarded.
    pub session_ttl_seconds: u64,
    /// Maximum number of concurrent drafts.
    pub session_capacity: u64,
    /// Upper bound of the approximate age picker.
    pub max_approximate_age: u16,
}

/// Where the pet type and breed catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub seed: CatalogSeed,
}

/// `builtin`, `empty`, or a path to a JSON seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CatalogSeed {
    #[default]
    Builtin,
    Empty,
    File(PathBuf),
}

impl From<String> for CatalogSeed {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "builtin" | "" => Self::Builtin,
            "empty" | "none" => Self::Empty,
            _ => Self::File(PathBuf::from(value.trim())),
        }
    }
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false, filter: None }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self { session_ttl_seconds: 3600, session_capacity: 10_000, max_approximate_age: 20 }
    }
}
