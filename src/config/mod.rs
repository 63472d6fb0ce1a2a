use crate::constants::{
    DEFAULT_API_VERSION, DEFAULT_CDN_HOST, DEFAULT_DATASET, DEFAULT_HEADLINE, ENV_API_VERSION,
    ENV_DATASET, ENV_PROJECT_ID, ENV_TOKEN,
};
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub project_id: String,
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_use_cdn")]
    pub use_cdn: bool,
    /// Overrides `https://<project>.api.sanity.io`.
    #[serde(default)]
    pub api_host: Option<String>,
    /// Overrides `https://<project>.apicdn.sanity.io` for cached reads.
    /// Falls back to `api_host` when only that is set.
    #[serde(default)]
    pub api_cdn_host: Option<String>,
    #[serde(default = "default_cdn_host")]
    pub cdn_host: String,
    /// Only ever taken from the environment.
    #[serde(skip)]
    pub token: Option<String>,
}

fn default_dataset() -> String {
    DEFAULT_DATASET.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_use_cdn() -> bool {
    true
}

fn default_cdn_host() -> String {
    DEFAULT_CDN_HOST.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: default_dataset(),
            api_version: default_api_version(),
            use_cdn: default_use_cdn(),
            api_host: None,
            api_cdn_host: None,
            cdn_host: default_cdn_host(),
            token: None,
        }
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("project_id", &self.project_id)
            .field("dataset", &self.dataset)
            .field("api_version", &self.api_version)
            .field("use_cdn", &self.use_cdn)
            .field("api_host", &self.api_host)
            .field("api_cdn_host", &self.api_cdn_host)
            .field("cdn_host", &self.cdn_host)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl StoreConfig {
    pub fn validate(&self) -> AppResult<()> {
        if self.project_id.trim().is_empty() {
            return Err(AppError::Config(format!(
                "Missing project id, set {} or store.project_id",
                ENV_PROJECT_ID
            )));
        }
        if self.dataset.trim().is_empty() {
            return Err(AppError::Config("Dataset name cannot be empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_headline")]
    pub headline: String,
}

fn default_headline() -> String {
    DEFAULT_HEADLINE.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            headline: default_headline(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

/// Read the YAML file at `config_path` (defaults when missing or unreadable)
/// and overlay the process environment.
pub fn load_config(config_path: &Path) -> Config {
    let mut config = read_config_file(config_path);
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    config
}

fn read_config_file(config_path: &Path) -> Config {
    if !config_path.exists() {
        info!("No config file at {:?}, using defaults", config_path);
        return Config::default();
    }

    match fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            warn!("Invalid config file {:?}: {}", config_path, e);
            Config::default()
        }),
        Err(e) => {
            warn!("Failed to read config file {:?}: {}", config_path, e);
            Config::default()
        }
    }
}

/// Overlay environment values on `config`. `lookup` is the environment, passed
/// in so tests do not touch process-wide state.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(project_id) = non_empty(ENV_PROJECT_ID) {
        config.store.project_id = project_id;
    }
    if let Some(dataset) = non_empty(ENV_DATASET) {
        config.store.dataset = dataset;
    }
    if let Some(api_version) = non_empty(ENV_API_VERSION) {
        config.store.api_version = api_version;
    }
    config.store.token = non_empty(ENV_TOKEN);
}
