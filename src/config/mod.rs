//! Configuration for the `ugraph` command-line tool.

pub mod loader;

pub use loader::{
    load_config, load_or_default, resolve_config_path, CliConfig, OutputFormat, CONFIG_ENV_VAR,
    DEFAULT_CONFIG_FILE,
};
