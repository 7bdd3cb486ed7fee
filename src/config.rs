//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/model-traits/model-traits.toml`
//! 3. Explicit config file passed to [`Settings::load_from`]
//! 4. Environment variables: `MODEL_TRAITS_*` prefix

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::backends::{BackendKind, ImportError};

const ENV_PREFIX: &str = "MODEL_TRAITS";

/// Per-backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BackendSettings {
    /// Accepted file extensions, without the dot. Empty accepts any file.
    pub extensions: Vec<String>,
}

/// Raw settings for intermediate parsing; `None` means "not specified".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub default_backend: Option<String>,
    pub backends: BTreeMap<String, RawBackendSettings>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawBackendSettings {
    pub extensions: Option<Vec<String>>,
}

/// Unified configuration for model-traits importers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Backend used by `Importer::import_default` (default: simmetrix)
    pub default_backend: String,
    /// Settings keyed by backend tag
    pub backends: BTreeMap<String, BackendSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        let mut backends = BTreeMap::new();
        backends.insert(
            BackendKind::Simmetrix.as_str().to_string(),
            BackendSettings {
                extensions: vec!["smd".into(), "sms".into()],
            },
        );
        Self {
            default_backend: BackendKind::Simmetrix.as_str().to_string(),
            backends,
        }
    }
}

/// Get the XDG config directory for model-traits.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "model-traits").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("model-traits.toml"))
}

fn config_err(e: ConfigError) -> ImportError {
    ImportError::Config {
        message: e.to_string(),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ImportError> {
    let content = std::fs::read_to_string(path).map_err(|e| ImportError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ImportError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Accepted extensions for `kind`; empty when the backend is not configured.
    pub fn extensions_for(&self, kind: BackendKind) -> &[String] {
        self.backends
            .get(kind.as_str())
            .map(|b| b.extensions.as_slice())
            .unwrap_or(&[])
    }

    /// Overlay wins where it specifies a value; extension lists are replaced,
    /// not merged. Backend table names are lowercased to match
    /// [`BackendKind::as_str`].
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        let mut backends = self.backends.clone();
        for (name, raw) in &overlay.backends {
            if let Some(extensions) = &raw.extensions {
                backends.entry(name.to_lowercase()).or_default().extensions = extensions.clone();
            }
        }
        Self {
            default_backend: overlay
                .default_backend
                .clone()
                .unwrap_or_else(|| self.default_backend.clone()),
            backends,
        }
    }

    /// Load settings from defaults, global config and environment.
    pub fn load() -> Result<Self, ImportError> {
        Self::load_from(None)
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional config file layered over the global one;
    ///   it must exist when given.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ImportError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            debug!(path = %path.display(), "loading config file");
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        Self::apply_env_overrides(current)
    }

    /// Apply MODEL_TRAITS_* environment variables as explicit overrides.
    ///
    /// `MODEL_TRAITS_DEFAULT_BACKEND=simmetrix`
    /// `MODEL_TRAITS_BACKENDS__SIMMETRIX__EXTENSIONS=smd,sms`
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ImportError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("default_backend") {
            settings.default_backend = val;
        }

        let names: Vec<String> = BackendKind::ALL
            .iter()
            .map(|k| k.as_str().to_string())
            .chain(settings.backends.keys().cloned())
            .collect();
        for name in names {
            if let Ok(val) = config.get_string(&format!("backends.{name}.extensions")) {
                let extensions = val
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
                settings.backends.entry(name).or_default().extensions = extensions;
            }
        }

        Ok(settings)
    }
}
