use crate::error::Result;
use crate::io;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Single JSON blob on disk — the portable, zero-setup default.
    Local,
    /// redb document store.
    Doc,
}

impl std::str::FromStr for Backend {
    type Err = crate::error::InktrackError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "local" => Ok(Backend::Local),
            "doc" => Ok(Backend::Doc),
            _ => Err(crate::error::InktrackError::InvalidBackend(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// AssistantConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key. The key itself
    /// never lands in the config file.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The fixed owner identity assigned on successful login.
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Hex SHA-256 of the owner passphrase; see `inktrack hash`.
    #[serde(default = "default_password_sha256")]
    pub password_sha256: String,
    #[serde(default = "default_backend")]
    pub backend: Backend,
    /// Quota for the local blob, modelled on browser local-storage limits.
    #[serde(default = "default_local_capacity")]
    pub local_capacity_bytes: u64,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

fn default_owner() -> String {
    "inkwell".to_string()
}

fn default_password_sha256() -> String {
    // SHA-256 of "password" — replace via `inktrack hash <passphrase>`.
    "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8".to_string()
}

fn default_backend() -> Backend {
    Backend::Local
}

fn default_local_capacity() -> u64 {
    5 * 1024 * 1024
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            password_sha256: default_password_sha256(),
            backend: default_backend(),
            local_capacity_bytes: default_local_capacity(),
            assistant: AssistantConfig::default(),
        }
    }
}

impl Config {
    /// Load the config, falling back to defaults when the file is missing.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
