//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.nftctl/config.toml`. If missing on first run, a
//! commented-out default is generated so operators can discover all options.
//!
//! Loading and resolution happen before the file logger exists, so anything
//! worth logging is collected in a [`StartupLog`] and replayed by `main`.

use log::{Level, LevelFilter, log};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::auth::{DEFAULT_SECRET, Secret};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NftctlConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub actions: ActionsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ActionsConfig {
    pub latency_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub fail: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "nftctl.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_LATENCY_MS: u64 = 800;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub secret: Secret,
    /// True when no password was configured and the built-in one is in use.
    pub default_secret: bool,
    pub latency_ms: u64,
    pub timeout_secs: u64,
    pub fail_actions: bool,
}

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_file: Option<PathBuf>,
    pub log_level: Option<LevelFilter>,
    pub latency_ms: Option<u64>,
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
// Startup Log
// ============================================================================

/// Messages produced while loading config, held until a logger is installed.
#[derive(Debug, Default)]
pub struct StartupLog {
    entries: Vec<(Level, String)>,
}

impl StartupLog {
    fn info(&mut self, message: impl Into<String>) {
        self.entries.push((Level::Info, message.into()));
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.entries.push((Level::Warn, message.into()));
    }

    /// Warning messages, in the order they were recorded.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message.as_str())
    }

    /// Sends everything recorded so far to the installed logger.
    pub fn replay(self) {
        for (level, message) in self.entries {
            log!(level, "{}", message);
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.nftctl/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".nftctl").join("config.toml"))
}

/// Load config from `path`, or from `~/.nftctl/config.toml` when `None`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `NftctlConfig::default()`. An explicitly given path must exist.
pub fn load_config(
    path: Option<&Path>,
    startup: &mut StartupLog,
) -> Result<NftctlConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => {
                if !p.exists() {
                    startup.info(format!(
                        "No config file found, generating default at {}",
                        p.display()
                    ));
                    generate_default_config(&p, startup);
                    return Ok(NftctlConfig::default());
                }
                p
            }
            None => {
                startup.warn("Could not determine home directory, using default config");
                return Ok(NftctlConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    startup.info(format!("Loaded config from {}", path.display()));
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<NftctlConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, startup: &mut StartupLog) {
    let default_content = r#"# nftctl Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "nftctl.log"           # Or --log-file
# log_level = "debug"               # "error", "warn", "info", "debug", "trace"

# [auth]
# password = "change-me"            # Or set NFTCTL_PASSWORD env var

# [actions]
# latency_ms = 800                  # Simulated latency of the dry-run actions
# timeout_secs = 30                 # Give up on an action after this long
# fail = false                      # Make every action fail (for rehearsals)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            startup.warn(format!("Failed to create config directory: {e}"));
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        startup.warn(format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &NftctlConfig,
    cli: &CliOverrides,
    startup: &mut StartupLog,
) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok(), startup)
}

fn resolve_with_env(
    config: &NftctlConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
    startup: &mut StartupLog,
) -> ResolvedConfig {
    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("NFTCTL_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: CLI (already parsed by clap) → env → config → default
    let log_level = cli.log_level.unwrap_or_else(|| {
        let (source, raw) = match env("NFTCTL_LOG_LEVEL") {
            Some(raw) => ("NFTCTL_LOG_LEVEL", Some(raw)),
            None => ("general.log_level", config.general.log_level.clone()),
        };
        match raw.map(|raw| (raw.parse::<LevelFilter>(), raw)) {
            Some((Ok(level), _)) => level,
            Some((Err(_), raw)) => {
                startup.warn(format!("Invalid {source} {raw:?}, using {DEFAULT_LOG_LEVEL}"));
                DEFAULT_LOG_LEVEL
            }
            None => DEFAULT_LOG_LEVEL,
        }
    });

    // Password: env → config → default
    let (secret, default_secret) =
        match env("NFTCTL_PASSWORD").or_else(|| config.auth.password.clone()) {
            Some(password) if !password.is_empty() => (Secret::new(password), false),
            _ => {
                startup.warn("No password configured, falling back to the built-in default");
                (Secret::new(DEFAULT_SECRET), true)
            }
        };

    // Latency: CLI → env → config → default
    let latency_ms = cli
        .latency_ms
        .or_else(|| env("NFTCTL_LATENCY_MS").and_then(|v| v.parse().ok()))
        .or(config.actions.latency_ms)
        .unwrap_or(DEFAULT_LATENCY_MS);

    ResolvedConfig {
        log_file,
        log_level,
        secret,
        default_secret,
        latency_ms,
        timeout_secs: config
            .actions
            .timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
        fail_actions: config.actions.fail.unwrap_or(false),
    }
}
