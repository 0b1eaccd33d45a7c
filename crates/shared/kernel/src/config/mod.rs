use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "FOLIO";

/// Custom error type for config loading.
#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Parses configuration from TOML text, typically a file embedded with `include_str!`.
///
/// On native targets values can be overridden by environment variables prefixed with
/// `FOLIO__`; nested keys are separated by double underscores
/// (`FOLIO__GALLERY__HIDE_DELAY_MS` maps to `gallery.hide_delay_ms`).
///
/// # Errors
/// Returns an error if the text is not valid TOML or does not match `T`.
pub fn parse_config<T>(source: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let builder = with_env_overrides(
        Config::builder().add_source(File::from_str(source, FileFormat::Toml)),
    );

    info!("Parsing embedded config ({} bytes)", source.len());

    finish(builder)
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Loads settings from a file (e.g., `site.toml`); without a path it defaults to `"site"`
/// in the working directory, and the extension is resolved by the `config` crate. Values
/// are then overlaid from `FOLIO__` environment variables, as in [`parse_config`].
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     volume: f32,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("site"), |p| p.as_ref().to_path_buf());

    let builder =
        with_env_overrides(Config::builder().add_source(File::from(effective_path.as_path())));

    info!("Loading config from {}", effective_path.display());

    finish(builder)
}

fn finish<T>(builder: ConfigBuilder<DefaultState>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(not(target_arch = "wasm32"))]
fn with_env_overrides(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}

#[cfg(target_arch = "wasm32")]
const fn with_env_overrides(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder
}
