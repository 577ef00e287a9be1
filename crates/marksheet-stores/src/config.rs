//! Store configuration and factory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use marksheet_core::traits::{AchievementSource, CredentialSink};

use crate::local::{LocalSink, LocalStore};
use crate::remote::{RemoteSink, RemoteStore};

/// Configuration for a single achievement store.
///
/// Note: Custom Debug impl masks API tokens to prevent accidental
/// exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreConfig {
    Local {
        data_dir: PathBuf,
    },
    Remote {
        base_url: String,
        #[serde(default)]
        api_token: Option<String>,
    },
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreConfig::Local { data_dir } => f
                .debug_struct("Local")
                .field("data_dir", data_dir)
                .finish(),
            StoreConfig::Remote {
                base_url,
                api_token: _,
            } => f
                .debug_struct("Remote")
                .field("base_url", base_url)
                .field("api_token", &"***")
                .finish(),
        }
    }
}

/// Top-level marksheet configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarksheetConfig {
    /// Store configurations keyed by name.
    #[serde(default)]
    pub stores: HashMap<String, StoreConfig>,
    /// Default store to use.
    #[serde(default = "default_store")]
    pub default_store: String,
    /// Public base URL embedded in verification links.
    #[serde(default = "default_verification_base_url")]
    pub verification_base_url: String,
    /// Pinned issue year; unset means the current UTC year.
    #[serde(default)]
    pub issue_year: Option<i32>,
    /// Output directory for saved transcript reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_store() -> String {
    "local".to_string()
}
fn default_verification_base_url() -> String {
    "https://marksheet.dev".to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./marksheet-reports")
}

impl Default for MarksheetConfig {
    fn default() -> Self {
        let mut stores = HashMap::new();
        stores.insert(
            "local".to_string(),
            StoreConfig::Local {
                data_dir: PathBuf::from("./data"),
            },
        );
        Self {
            stores,
            default_store: default_store(),
            verification_base_url: default_verification_base_url(),
            issue_year: None,
            output_dir: default_output_dir(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Resolve env vars in a store config.
fn resolve_store_config(config: &StoreConfig) -> StoreConfig {
    match config {
        StoreConfig::Local { data_dir } => StoreConfig::Local {
            data_dir: data_dir.clone(),
        },
        StoreConfig::Remote {
            base_url,
            api_token,
        } => StoreConfig::Remote {
            base_url: resolve_env_vars(base_url),
            api_token: api_token.as_ref().map(|t| resolve_env_vars(t)),
        },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `marksheet.toml` in the current directory
/// 2. `~/.config/marksheet/config.toml`
///
/// Environment variable override: `MARKSHEET_API_TOKEN` fills the remote
/// store's token.
pub fn load_config() -> Result<MarksheetConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<MarksheetConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("marksheet.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<MarksheetConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => MarksheetConfig::default(),
    };

    // Apply env var override for the remote store token
    if let Ok(token) = std::env::var("MARKSHEET_API_TOKEN") {
        if let Some(StoreConfig::Remote { api_token, .. }) = config.stores.get_mut("remote") {
            *api_token = Some(token);
        }
    }

    // Resolve env vars in all store configs
    let resolved: HashMap<String, StoreConfig> = config
        .stores
        .iter()
        .map(|(k, v)| (k.clone(), resolve_store_config(v)))
        .collect();
    config.stores = resolved;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("marksheet"))
}

/// Create an achievement source from its configuration.
pub fn create_source(config: &StoreConfig) -> Result<Box<dyn AchievementSource>> {
    match config {
        StoreConfig::Local { data_dir } => Ok(Box::new(LocalStore::new(data_dir.clone()))),
        StoreConfig::Remote {
            base_url,
            api_token,
        } => Ok(Box::new(RemoteStore::new(base_url, api_token.clone()))),
    }
}

/// Create a credential sink from the same configuration. Local stores
/// write snapshots under `<data_dir>/issued`.
pub fn create_sink(config: &StoreConfig) -> Result<Box<dyn CredentialSink>> {
    match config {
        StoreConfig::Local { data_dir } => Ok(Box::new(LocalSink::new(data_dir.join("issued")))),
        StoreConfig::Remote {
            base_url,
            api_token,
        } => Ok(Box::new(RemoteSink::new(base_url, api_token.clone()))),
    }
}
