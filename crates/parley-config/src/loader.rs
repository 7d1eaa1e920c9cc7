//! Config file discovery, env overrides, and validation.
//!
//! Loads `parley.json5` from an explicit path, the working directory, or the
//! user config directory, then layers env overrides on top and validates the
//! effective config.

use crate::error::ConfigError;
use crate::model::ParleyConfig;
use directories::BaseDirs;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config filename.
const DEFAULT_CONFIG_FILE: &str = "parley.json5";
/// Default config directory under the user home.
const DEFAULT_CONFIG_DIR: &str = ".parley";

/// Env var holding the endpoint API key. Never read from config files.
pub const API_KEY_ENV: &str = "NVIDIA_API_KEY";

const ENV_MODEL: &str = "PARLEY_MODEL";
const ENV_BASE_URL: &str = "PARLEY_BASE_URL";
const ENV_TEMPERATURE: &str = "PARLEY_TEMPERATURE";
const ENV_TOP_P: &str = "PARLEY_TOP_P";
const ENV_MAX_TOKENS: &str = "PARLEY_MAX_TOKENS";
const ENV_WINDOW_SIZE: &str = "PARLEY_WINDOW_SIZE";

/// Load the effective config: file (if any), env overrides, validation.
///
/// An explicit `path` must exist; discovered locations are optional and the
/// defaults apply when none is present.
pub fn load(path: Option<&Path>) -> Result<ParleyConfig, ConfigError> {
    let mut config = match resolve_config_path(path)? {
        Some(file) => {
            info!("loading config (path={})", file.display());
            let text = fs::read_to_string(&file)?;
            parse(&text)?
        }
        None => {
            debug!("no config file found, using defaults");
            ParleyConfig::default()
        }
    };
    apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;
    validate(&config)?;
    Ok(config)
}

/// Parse and validate a config from JSON5 text.
pub fn load_from_str(text: &str) -> Result<ParleyConfig, ConfigError> {
    let config = parse(text)?;
    validate(&config)?;
    Ok(config)
}

/// Read the endpoint API key through a lookup, trimming blank values to None.
pub fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup(API_KEY_ENV).and_then(|value| {
        let value = value.trim().to_string();
        if value.is_empty() { None } else { Some(value) }
    })
}

/// Apply env overrides through a lookup so tests never touch process env.
pub fn apply_env_overrides(
    config: &mut ParleyConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    if let Some(value) = lookup(ENV_MODEL) {
        config.model.model_name = value;
    }
    if let Some(value) = lookup(ENV_BASE_URL) {
        config.model.base_url = value;
    }
    if let Some(value) = lookup(ENV_TEMPERATURE) {
        config.model.temperature = parse_env(ENV_TEMPERATURE, &value)?;
    }
    if let Some(value) = lookup(ENV_TOP_P) {
        config.model.top_p = parse_env(ENV_TOP_P, &value)?;
    }
    if let Some(value) = lookup(ENV_MAX_TOKENS) {
        config.model.max_tokens = parse_env(ENV_MAX_TOKENS, &value)?;
    }
    if let Some(value) = lookup(ENV_WINDOW_SIZE) {
        config.memory.window_size = parse_env(ENV_WINDOW_SIZE, &value)?;
    }
    Ok(())
}

/// Validate the effective config, reporting the failing field path.
pub fn validate(config: &ParleyConfig) -> Result<(), ConfigError> {
    if config.model.model_name.trim().is_empty() {
        return Err(ConfigError::invalid_field(
            "model.model_name",
            "must not be empty",
        ));
    }
    if config.model.base_url.trim().is_empty() {
        return Err(ConfigError::invalid_field(
            "model.base_url",
            "must not be empty",
        ));
    }
    if !(0.0..=2.0).contains(&config.model.temperature) {
        return Err(ConfigError::invalid_field(
            "model.temperature",
            "must be within [0, 2]",
        ));
    }
    if !(config.model.top_p > 0.0 && config.model.top_p <= 1.0) {
        return Err(ConfigError::invalid_field(
            "model.top_p",
            "must be within (0, 1]",
        ));
    }
    if config.model.max_tokens == 0 {
        return Err(ConfigError::invalid_field(
            "model.max_tokens",
            "must be at least 1",
        ));
    }
    if config.memory.window_size == 0 {
        return Err(ConfigError::invalid_field(
            "memory.window_size",
            "must be at least 1",
        ));
    }
    Ok(())
}

fn parse(text: &str) -> Result<ParleyConfig, ConfigError> {
    Ok(json5::from_str(text)?)
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid_field(name, format!("cannot parse {value:?}")))
}

/// Resolve the config path: explicit, cwd, then user config directory.
fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigError::ReadFailed(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            )));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return Ok(Some(local));
    }

    if let Some(base) = BaseDirs::new() {
        let user = base
            .home_dir()
            .join(DEFAULT_CONFIG_DIR)
            .join(DEFAULT_CONFIG_FILE);
        if user.exists() {
            return Ok(Some(user));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::{api_key_from, apply_env_overrides, load, load_from_str, validate};
    use crate::model::{DEFAULT_MODEL_NAME, ParleyConfig};
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_validate() {
        let config = ParleyConfig::default();
        assert_eq!(config.model.model_name, DEFAULT_MODEL_NAME);
        assert_eq!(config.memory.window_size, 5);
        validate(&config).expect("defaults valid");
    }

    #[test]
    fn parses_json5_with_comments() {
        let config = load_from_str(
            r#"{
                // hosted endpoint settings
                model: { model_name: "llama-3.1-8b-instruct", temperature: 0.2 },
                memory: { window_size: 8 },
            }"#,
        )
        .expect("parse");
        assert_eq!(config.model.model_name, "llama-3.1-8b-instruct");
        assert_eq!(config.model.temperature, 0.2);
        assert_eq!(config.model.top_p, 0.9);
        assert_eq!(config.memory.window_size, 8);
    }

    #[test]
    fn env_overrides_take_precedence() {
        let mut config = ParleyConfig::default();
        apply_env_overrides(&mut config, |name| match name {
            "PARLEY_MODEL" => Some("override-model".to_string()),
            "PARLEY_TEMPERATURE" => Some("1.5".to_string()),
            "PARLEY_WINDOW_SIZE" => Some("9".to_string()),
            _ => None,
        })
        .expect("overrides");
        assert_eq!(config.model.model_name, "override-model");
        assert_eq!(config.model.temperature, 1.5);
        assert_eq!(config.memory.window_size, 9);
    }

    #[test]
    fn unparseable_override_reports_the_var() {
        let mut config = ParleyConfig::default();
        let err = apply_env_overrides(&mut config, |name| {
            (name == "PARLEY_TOP_P").then(|| "warm".to_string())
        })
        .expect_err("bad override");
        assert!(err.to_string().contains("PARLEY_TOP_P"));
    }

    #[test]
    fn out_of_range_fields_fail_validation() {
        let mut config = ParleyConfig::default();
        config.model.top_p = 0.0;
        let err = validate(&config).expect_err("invalid top_p");
        assert!(err.to_string().contains("model.top_p"));

        let mut config = ParleyConfig::default();
        config.memory.window_size = 0;
        let err = validate(&config).expect_err("invalid window");
        assert!(err.to_string().contains("memory.window_size"));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing = temp.path().join("nope.json5");
        assert!(load(Some(&missing)).is_err());
    }

    #[test]
    fn explicit_path_loads() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("parley.json5");
        std::fs::write(&path, r#"{ memory: { window_size: 2 } }"#).expect("write");
        let config = load(Some(&path)).expect("load");
        assert_eq!(config.memory.window_size, 2);
    }

    #[test]
    fn blank_api_key_reads_as_absent() {
        assert_eq!(api_key_from(|_| Some("  ".to_string())), None);
        assert_eq!(
            api_key_from(|_| Some("nvapi-123".to_string())),
            Some("nvapi-123".to_string())
        );
        assert_eq!(api_key_from(|_| None), None);
    }
}
