use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`PAW__SERVER__PORT=8080`).
pub const ENV_PREFIX: &str = "PAW";
const DEFAULT_BASE: &str = "server";

#[paw_derive::paw_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a base file overlaid with environment variables.
///
/// 1. **Base file**: `path`, or `server` in the working directory. The
///    extension may be omitted; every format the `config` crate knows is tried.
/// 2. **Environment**: variables prefixed with `PAW__`, nested with `__`
///    (`PAW__REGISTRATION__SESSION_TTL_SECONDS` maps to
///    `registration.session_ttl_seconds`).
///
/// # Errors
///
/// Fails when the base file is missing or the merged values do not fit `T`.
///
/// ```rust
/// use paw_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let base = path.map_or_else(|| PathBuf::from(DEFAULT_BASE), |p| p.as_ref().to_path_buf());
    info!(path = %base.display(), "Loading configuration");

    let config = Config::builder()
        .add_source(File::from(base.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
