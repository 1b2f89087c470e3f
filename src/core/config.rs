//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.talkdocs/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::samples::Language;
use crate::core::navigation::{DEFAULT_EXPANDED_GROUPS, LANDING_SECTION, Tab};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DocsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub samples: SamplesConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<String>,
    pub default_tab: Option<String>,
    pub landing_section: Option<String>,
    pub expanded_groups: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SamplesConfig {
    pub default_language: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub dark_mode: bool,
    pub tab: Tab,
    pub landing_section: String,
    pub expanded_groups: Vec<String>,
    pub language: Language,
}

/// Values that only the command line can supply.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub tab: Option<Tab>,
    pub section: Option<String>,
    pub light: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.talkdocs/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".talkdocs").join("config.toml"))
}

/// Load config from the default location.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DocsConfig::default()`.
pub fn load_config() -> Result<DocsConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path, true),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(DocsConfig::default())
        }
    }
}

/// Load config from an explicit path. `generate` controls whether a missing
/// file is created with the commented default.
pub fn load_config_from(path: &Path, generate: bool) -> Result<DocsConfig, ConfigError> {
    if !path.exists() {
        if generate {
            info!("No config file found, generating default at {}", path.display());
            generate_default_config(path);
        } else {
            warn!("Config file {} not found, using defaults", path.display());
        }
        return Ok(DocsConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<DocsConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# talkdocs configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "dark"                     # "dark" or "light" (or TALKDOCS_THEME)
# default_tab = "documentation"      # "documentation", "api-reference", "changelog" (or TALKDOCS_TAB)
# landing_section = "introduction"
# expanded_groups = ["getting-started", "sms"]

# [samples]
# default_language = "javascript"    # "javascript", "python", "php", "curl" (or TALKDOCS_LANGUAGE)
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
pub fn resolve(config: &DocsConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as `resolve`, with the environment lookup injected (for tests).
pub fn resolve_with_env<F>(config: &DocsConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Theme: CLI --light → env → config → dark
    let dark_mode = if cli.light {
        false
    } else {
        [env("TALKDOCS_THEME"), config.general.theme.clone()]
            .into_iter()
            .flatten()
            .find_map(|theme| parse_theme(&theme))
            .unwrap_or(true)
    };

    // Tab: CLI → env → config → default. Unknown ids fall through to the next layer.
    let tab = cli.tab.unwrap_or_else(|| {
        [env("TALKDOCS_TAB"), config.general.default_tab.clone()]
            .into_iter()
            .flatten()
            .find_map(|id| match id.parse::<Tab>() {
                Ok(tab) => Some(tab),
                Err(e) => {
                    warn!("Ignoring tab setting: {}", e);
                    None
                }
            })
            .unwrap_or_default()
    });

    let language = [env("TALKDOCS_LANGUAGE"), config.samples.default_language.clone()]
        .into_iter()
        .flatten()
        .find_map(|key| match key.parse::<Language>() {
            Ok(lang) => Some(lang),
            Err(e) => {
                warn!("Ignoring language setting: {}", e);
                None
            }
        })
        .unwrap_or_default();

    let landing_section = cli
        .section
        .clone()
        .or_else(|| config.general.landing_section.clone())
        .unwrap_or_else(|| LANDING_SECTION.to_string());

    let expanded_groups = config.general.expanded_groups.clone().unwrap_or_else(|| {
        DEFAULT_EXPANDED_GROUPS
            .iter()
            .map(|g| g.to_string())
            .collect()
    });

    ResolvedConfig {
        dark_mode,
        tab,
        landing_section,
        expanded_groups,
        language,
    }
}

/// `Some(true)` for dark, `Some(false)` for light, `None` (logged) otherwise.
fn parse_theme(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "dark" => Some(true),
        "light" => Some(false),
        other => {
            warn!("Ignoring unknown theme '{}'", other);
            None
        }
    }
}
