//! Configuration module for termenu
//!
//! Configuration hierarchy:
//! 1. Environment variables (TERMENU_*, highest priority)
//! 2. Explicit `--config` file, else user config (~/.config/termenu/config.toml)
//! 3. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, user_config_path, with_env_overrides, ConfigWarning,
};
pub use types::{ColorConfig, Config, DisplayConfig, KeysConfig, ModifierKey};
