//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/polycalc/polycalc.toml`
//! 3. Local config: `./.polycalc.toml` (working directory)
//! 4. Environment variables: `POLYCALC_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::services::SUPPORTED_PRIMES;
use crate::application::ApplicationError;

/// Default prime field for calculations.
pub const DEFAULT_PRIME: u32 = 5;

/// Default cap on trial divisors for irreducibility checks.
pub const DEFAULT_IRREDUCIBILITY_LIMIT: u64 = 1_000_000;

/// Unified configuration for polycalc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Prime P of the coefficient field Z_P
    pub prime: u32,
    /// Maximum number of trial divisors an irreducibility check may try
    pub irreducibility_limit: u64,
    /// Navigation script used by `docs` commands instead of the built-in tree
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navtree: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prime: DEFAULT_PRIME,
            irreducibility_limit: DEFAULT_IRREDUCIBILITY_LIMIT,
            navtree: None,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub prime: Option<u32>,
    pub irreducibility_limit: Option<u64>,
    pub navtree: Option<PathBuf>,
}

/// Get the XDG config directory for polycalc.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "polycalc").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("polycalc.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".polycalc.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    ///
    /// A relative `navtree` path is resolved against `base_dir`, the directory
    /// holding the config file.
    fn merge_with(&self, overlay: &RawSettings, base_dir: Option<&Path>) -> Self {
        let navtree = overlay.navtree.as_ref().map(|p| match base_dir {
            Some(dir) if p.is_relative() => dir.join(p),
            _ => p.clone(),
        });
        Self {
            prime: overlay.prime.unwrap_or(self.prime),
            irreducibility_limit: overlay
                .irreducibility_limit
                .unwrap_or(self.irreducibility_limit),
            navtree: navtree.or_else(|| self.navtree.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory searched for `.polycalc.toml`
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/polycalc/polycalc.toml`
    /// 3. Local config: `<local_dir>/.polycalc.toml`
    /// 4. Environment variables: `POLYCALC_*` prefix
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw, global_path.parent());
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw, Some(dir));
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;

        Ok(current)
    }

    /// Apply POLYCALC_* environment variables as explicit overrides.
    ///
    /// A variable that is set but does not parse is an error, not a fallback
    /// to the lower layers.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("POLYCALC").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("prime") {
            settings.prime = parse_env("POLYCALC_PRIME", &val)?;
        }
        if let Ok(val) = config.get_string("irreducibility_limit") {
            settings.irreducibility_limit = parse_env("POLYCALC_IRREDUCIBILITY_LIMIT", &val)?;
        }
        if let Ok(val) = config.get_string("navtree") {
            settings.navtree = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Reject settings the calculator cannot run with.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if !SUPPORTED_PRIMES.contains(&self.prime) {
            return Err(ApplicationError::Config {
                message: format!(
                    "prime {} is not supported, choose one of {:?}",
                    self.prime, SUPPORTED_PRIMES
                ),
            });
        }
        if self.irreducibility_limit == 0 {
            return Err(ApplicationError::Config {
                message: "irreducibility_limit must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# polycalc configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/polycalc/polycalc.toml
#   Local:  ./.polycalc.toml
#   Env:    POLYCALC_* environment variables (explicit overrides)

# Prime P of the coefficient field Z_P (2..=97)
# prime = 5

# Maximum number of trial divisors tried when checking irreducibility
# irreducibility_limit = 1000000

# Navigation script for `polycalc docs` (default: built-in tree)
# navtree = "doxygen_docs/html/navtreedata.js"
"#
        .to_string()
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ApplicationError>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| ApplicationError::Config {
        message: format!("{name}={value}: {e}"),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
