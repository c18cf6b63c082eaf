//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.draftpad/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::storage::STORAGE_KEY;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DraftpadConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub storage_path: Option<String>,
    pub storage_key: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EditorConfig {
    pub show_hints: Option<bool>,
    pub save_on_ctrl_s: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DATA_DIR_NAME: &str = ".draftpad";
pub const DEFAULT_STORAGE_FILE: &str = "local_storage.json";
pub const DEFAULT_LOG_FILE: &str = "draftpad.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub storage_path: PathBuf,
    pub storage_key: String,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub show_hints: bool,
    pub save_on_ctrl_s: bool,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub storage_path: Option<PathBuf>,
    pub storage_key: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.draftpad/`, or `./.draftpad/` when there is no home directory.
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Returns the path to `~/.draftpad/config.toml`.
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

/// Load config from `~/.draftpad/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DraftpadConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DraftpadConfig, ConfigError> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<DraftpadConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DraftpadConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: DraftpadConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Draftpad Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# storage_path = "~/.draftpad/local_storage.json"   # Or set DRAFTPAD_STORAGE
# storage_key = "editorContent"
# log_file = "~/.draftpad/draftpad.log"
# log_level = "debug"                              # Or set DRAFTPAD_LOG_LEVEL

# [editor]
# show_hints = true          # Show the trigger character hints under the editor
# save_on_ctrl_s = true      # Ctrl/Cmd+S saves; false leaves the key unbound
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DraftpadConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Storage file: CLI → env → config → default
    let storage_path = cli
        .storage_path
        .clone()
        .or_else(|| std::env::var("DRAFTPAD_STORAGE").ok().map(PathBuf::from))
        .or_else(|| config.general.storage_path.as_deref().map(expand_home))
        .unwrap_or_else(|| data_dir().join(DEFAULT_STORAGE_FILE));

    let storage_key = cli
        .storage_key
        .clone()
        .or_else(|| config.general.storage_key.clone())
        .unwrap_or_else(|| STORAGE_KEY.to_string());

    let log_file = config
        .general
        .log_file
        .as_deref()
        .map(expand_home)
        .unwrap_or_else(|| data_dir().join(DEFAULT_LOG_FILE));

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("DRAFTPAD_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| parse_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        storage_path,
        storage_key,
        log_file,
        log_level,
        show_hints: config.editor.show_hints.unwrap_or(true),
        save_on_ctrl_s: config.editor.save_on_ctrl_s.unwrap_or(true),
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level '{}', using default", level);
            None
        }
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
