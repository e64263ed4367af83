//! Configuration file support for mrbconf.
//!
//! mrbconf supports two configuration file locations:
//! - Global: `~/.mrbconf/config.toml` - User-wide defaults
//! - Project: `.mrbconf/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. Command-line flags
//! take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::configurator::BuildConfigurator;
use crate::core::errors::ParseError;
use crate::core::platform::Platform;
use crate::emit::EmitFormat;

/// mrbconf configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directive settings
    pub build: BuildConfig,

    /// Output settings
    pub emit: EmitConfig,
}

/// Settings that feed the configurator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Environment variable holding the build type (default: TSC_BUILD_TYPE)
    pub build_type_var: Option<String>,

    /// Platform identifier to use instead of the host's
    pub platform: Option<String>,
}

/// Settings for rendered output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    /// Output format (ruby, json)
    pub format: Option<String>,

    /// mruby checkout, relative to the rendered script
    pub mruby_dir: Option<String>,

    /// File to write instead of stdout
    pub output: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        // Build settings
        if other.build.build_type_var.is_some() {
            self.build.build_type_var = other.build.build_type_var;
        }
        if other.build.platform.is_some() {
            self.build.platform = other.build.platform;
        }

        // Emit settings
        if other.emit.format.is_some() {
            self.emit.format = other.emit.format;
        }
        if other.emit.mruby_dir.is_some() {
            self.emit.mruby_dir = other.emit.mruby_dir;
        }
        if other.emit.output.is_some() {
            self.emit.output = other.emit.output;
        }
    }

    /// Build a configurator honoring `build.build_type_var`.
    pub fn configurator(&self) -> BuildConfigurator {
        match &self.build.build_type_var {
            Some(var) => BuildConfigurator::new().with_build_type_var(var),
            None => BuildConfigurator::new(),
        }
    }

    /// The configured platform, or the host platform.
    pub fn platform(&self) -> Platform {
        self.build
            .platform
            .as_deref()
            .map(Platform::new)
            .unwrap_or_else(Platform::host)
    }

    /// Parse the configured output format, if any.
    pub fn format(&self) -> Result<Option<EmitFormat>, ParseError> {
        self.emit.format.as_deref().map(str::parse::<EmitFormat>).transpose()
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.mrbconf/config.toml)
/// 2. Global config (~/.mrbconf/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    // Load global config first
    if global_path.exists() {
        let global = Config::load_or_default(global_path);
        config.merge(global);
    }

    // Project config overrides global
    if project_path.exists() {
        let project = Config::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Get the global mrbconf config directory (~/.mrbconf).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".mrbconf"))
}

/// Get the global config path (~/.mrbconf/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.mrbconf/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".mrbconf").join("config.toml")
}

/// Load configuration for a project directory.
pub fn load_project_config(project_root: &Path) -> Config {
    let project_path = project_config_path(project_root);
    match global_config_path() {
        Some(global) => load_config(&global, &project_path),
        None => load_config(&PathBuf::new(), &project_path),
    }
}
