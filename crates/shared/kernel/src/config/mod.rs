use crate::domain::config::Settings;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment map accepted by [`load_config_with_env`].
pub use config::Map as EnvMap;

/// Default configuration file stem, resolved against any supported extension (`guidex.toml`, ...).
pub const DEFAULT_CONFIG: &str = "guidex";

/// Prefix of environment overrides (`GUIDEX__SCAN__SDK_BUILD=19041`).
pub const ENV_PREFIX: &str = "GUIDEX";

/// Custom error type for config loading.
#[guidex_derive::guidex_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader: file settings overlaid by environment variables.
///
/// 1. **Base File**: the given path (must exist), or `guidex.*` in the working directory
///    (optional, defaults apply when it is missing).
/// 2. **Environment Overrides**: variables prefixed with `GUIDEX__`; nested keys are
///    separated by double underscores (`GUIDEX__EXPORT__OUTPUT_DIR` maps to `export.output_dir`).
///
/// # Errors
/// * An explicitly given file does not exist or cannot be parsed.
/// * The merged values do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`], reading overrides from `env` instead of the process environment.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<EnvMap<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("export.formats")
                .with_list_parse_key("scan.subfolders")
                .source(env),
        );

    if required {
        info!("Loading config from {}", effective_path.display());
    } else {
        debug!("Looking for optional config '{}'", effective_path.display());
    }

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads the tool [`Settings`].
///
/// # Errors
/// See [`load_config`].
pub fn load_settings(path: Option<impl AsRef<Path>>) -> Result<Settings, ConfigError> {
    load_config(path)
}
