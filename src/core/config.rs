//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.kalike/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::quiz::vocab::DataPaths;
use crate::{Activity, Subject};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KalikeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub subject: Option<Subject>,
    pub activity: Option<Activity>,
    pub question_count: Option<usize>,
    pub theme: Option<Theme>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DataConfig {
    pub kannada: Option<PathBuf>,
    pub hindi: Option<PathBuf>,
    pub geography: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_QUESTION_COUNT: usize = 10;
pub const MIN_QUESTION_COUNT: usize = 1;
pub const MAX_QUESTION_COUNT: usize = 100;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub subject: Subject,
    pub activity: Activity,
    pub question_count: usize,
    pub theme: Theme,
    /// `None` seeds the random source from entropy.
    pub seed: Option<u64>,
    pub data: DataPaths,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub subject: Option<Subject>,
    pub activity: Option<Activity>,
    pub question_count: Option<usize>,
    pub theme: Option<Theme>,
    pub seed: Option<u64>,
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

/// Returns the path to `~/.kalike/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".kalike").join("config.toml"))
}

/// Load config from `~/.kalike/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `KalikeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<KalikeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(KalikeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(KalikeConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<KalikeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: KalikeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG: &str = r#"# Kalike Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# subject = "kannada"          # "kannada", "hindi" or "geography"
# activity = "quiz"            # "quiz", "flash-cards" (kannada), "capital-map" (geography)
# question_count = 10          # 1 to 100
# theme = "light"              # "light" or "dark", Ctrl+T toggles at runtime
# seed = 42                    # fixed seed for reproducible question batches

# [data]
# Replace the bundled vocabulary for a subject with your own JSON file.
# kannada = "/home/me/kalike/kannada.json"
# hindi = "/home/me/kalike/hindi.json"
# geography = "/home/me/kalike/geography.json"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &KalikeConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env<F>(config: &KalikeConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Subject: CLI → env → config → default
    let subject = cli
        .subject
        .or_else(|| env_enum(&env, "KALIKE_SUBJECT"))
        .or(config.general.subject)
        .unwrap_or_default();

    // Activity: CLI → config → default, then checked against the subject
    let requested = cli
        .activity
        .or(config.general.activity)
        .unwrap_or_default();
    let activity = subject.resolve_activity(requested);
    if activity != requested {
        warn!(
            "{} does not offer {}, using {}",
            subject.label(),
            requested.label(),
            activity.label()
        );
    }

    let question_count = cli
        .question_count
        .or_else(|| env_number(&env, "KALIKE_QUESTION_COUNT"))
        .or(config.general.question_count)
        .unwrap_or(DEFAULT_QUESTION_COUNT)
        .clamp(MIN_QUESTION_COUNT, MAX_QUESTION_COUNT);

    let theme = cli
        .theme
        .or_else(|| env_enum(&env, "KALIKE_THEME"))
        .or(config.general.theme)
        .unwrap_or_default();

    let seed = cli
        .seed
        .or_else(|| env_number(&env, "KALIKE_SEED"))
        .or(config.general.seed);

    ResolvedConfig {
        subject,
        activity,
        question_count,
        theme,
        seed,
        data: DataPaths {
            kannada: config.data.kannada.clone(),
            hindi: config.data.hindi.clone(),
            geography: config.data.geography.clone(),
        },
    }
}

fn env_enum<T: ValueEnum, F: Fn(&str) -> Option<String>>(env: &F, key: &str) -> Option<T> {
    let value = env(key)?;
    match T::from_str(value.trim(), true) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring {}={}: {}", key, value, e);
            None
        }
    }
}

fn env_number<T: std::str::FromStr, F: Fn(&str) -> Option<String>>(env: &F, key: &str) -> Option<T> {
    let value = env(key)?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring {}={}: not a number", key, value);
            None
        }
    }
}
