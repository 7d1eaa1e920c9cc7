//! Configuration schema for Parley.

use serde::{Deserialize, Serialize};

/// Default hosted model, matching the NVIDIA-hosted endpoint catalog name.
pub const DEFAULT_MODEL_NAME: &str = "mixtral-8x7b-instruct-v0.1";
/// Default OpenAI-compatible base URL for the hosted endpoint.
pub const DEFAULT_BASE_URL: &str = "https://integrate.api.nvidia.com/v1";
/// Default number of exchanges kept in the memory window.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Root config for Parley.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ParleyConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Generation endpoint parameters, fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    /// Model name passed to the endpoint.
    pub model_name: String,
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus sampling cutoff.
    pub top_p: f32,
    /// Maximum output length in tokens.
    pub max_tokens: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 200,
        }
    }
}

/// Memory window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MemoryConfig {
    /// Number of exchanges to remember.
    pub window_size: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

/// Cache store settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CacheConfig {
    /// Root directory for the file-backed store. `None` disables caching.
    pub path: Option<String>,
    /// Default entry lifetime in seconds. `None` means no expiry.
    pub default_ttl_secs: Option<u64>,
}
