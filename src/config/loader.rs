//! Configuration loading from file, environment, and CLI arguments.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::graph::TraversalOrder;
use crate::types::{GraphError, GraphResult, DEFAULT_MAX_DEPTH, DEFAULT_MAX_RESULTS};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "UGRAPH_CONFIG";

/// Config file picked up from the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "ugraph.toml";

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON objects on stdout.
    Json,
}

/// CLI configuration. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Output format when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,
    /// Traversal order when `--order` is not given: "dfs" or "bfs".
    #[serde(default = "default_order")]
    pub order: String,
    /// Maximum traversal depth.
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    /// Maximum vertices a traversal returns.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Log level used when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_order() -> String {
    TraversalOrder::default().name().to_string()
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            order: default_order(),
            max_depth: default_max_depth(),
            max_results: default_max_results(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// The configured traversal order.
    pub fn traversal_order(&self) -> GraphResult<TraversalOrder> {
        self.order.parse()
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> GraphResult<CliConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        GraphError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read config file {}: {e}", path.display()),
        ))
    })?;
    Ok(toml::from_str(&content)?)
}

/// Resolve the config file path using priority order:
/// 1. Explicit path (CLI arg)
/// 2. UGRAPH_CONFIG environment variable
/// 3. ugraph.toml in current directory
///
/// Returns `None` when no config file applies.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    let cwd_config = PathBuf::from(DEFAULT_CONFIG_FILE);
    if cwd_config.exists() {
        return Some(cwd_config);
    }

    None
}

/// Resolve and load the configuration, falling back to defaults.
pub fn load_or_default(explicit: Option<&Path>) -> GraphResult<CliConfig> {
    match resolve_config_path(explicit) {
        Some(path) => load_config(&path),
        None => Ok(CliConfig::default()),
    }
}
