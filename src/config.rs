//! Configuration management for migration-dash.
//!
//! Supports layered configuration: defaults → project → user → env

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-level config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".migration-dash.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub data: DataConfig,
}

impl DashboardConfig {
    /// Load configuration with hierarchy: defaults → project → user → env
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        let user_config_dir =
            directories::ProjectDirs::from("com", "migration-dash", "migration-dash")
                .map(|dirs| dirs.config_dir().to_path_buf());

        Self::load_layers(project_root, user_config_dir.as_deref(), None)
    }

    /// Build the layered configuration from explicit sources.
    ///
    /// `env` replaces the process environment when set.
    fn load_layers(
        project_root: Option<&Path>,
        user_config_dir: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. Project-specific config (.migration-dash.toml in project root)
        if let Some(root) = project_root {
            let project_config = root.join(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }
        }

        // 3. User config (~/.config/migration-dash/config.toml)
        if let Some(config_dir) = user_config_dir {
            let user_config = config_dir.join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 4. Environment variables (MIGRATION_DASH__*)
        builder = builder.add_source(
            Environment::with_prefix("MIGRATION_DASH")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    #[serde(default = "default_refresh_rate_ms")]
    pub refresh_rate_ms: u64,
    /// Enable vim-style navigation (j/k/h/l)
    #[serde(default = "default_vim_navigation")]
    pub vim_navigation: bool,
    /// Dashboard heading
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: default_refresh_rate_ms(),
            vim_navigation: default_vim_navigation(),
            title: default_title(),
        }
    }
}

fn default_refresh_rate_ms() -> u64 {
    250
}

fn default_vim_navigation() -> bool {
    true
}

fn default_title() -> String {
    "Migration Dashboard".to_string()
}

/// Dataset configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON file with the application list; the built-in sample is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}
