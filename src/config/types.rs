use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::persistence::USERS_KEY;
use crate::remote::DEFAULT_USERS_URL;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
}

/// Where the users list is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one file per storage key.
    /// Defaults to the platform data directory.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Key of the users list (default: "@users_list").
    #[serde(default = "default_users_key")]
    pub users_key: String,
}

/// Remote bootstrap source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Endpoint returning the users collection.
    #[serde(default = "default_users_url")]
    pub users_url: String,
}

/// Profile wizard behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Simulated submit latency in milliseconds (default: 1000).
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

fn default_users_key() -> String {
    USERS_KEY.to_string()
}

fn default_users_url() -> String {
    DEFAULT_USERS_URL.to_string()
}

fn default_submit_delay_ms() -> u64 {
    1000
}

impl StorageConfig {
    /// The configured directory, or `<data dir>/slicestore`.
    /// Falls back to `./.slicestore` if no data directory is known.
    pub fn resolved_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .map(|dir| dir.join("slicestore"))
                .unwrap_or_else(|| PathBuf::from(".slicestore")),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            users_key: default_users_key(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            users_url: default_users_url(),
        }
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}
