//! Configuration for the demo binary.
//!
//! YAML file with precedence: CLI > file > defaults. Every field has a
//! default so partial files are fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grammar::{build_marginal_layers, Layer, SizeSpec};

/// Marginal layer defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginalConfig {
    /// Sides string, e.g. `"tr"`.
    #[serde(default = "default_sides")]
    pub sides: String,

    /// Margin size: omitted, one number, or one per side.
    #[serde(default)]
    pub size: SizeSpec,

    /// Use boxplots instead of histogram + density.
    #[serde(default)]
    pub boxplot: bool,
}

fn default_sides() -> String {
    "tr".to_string()
}

impl Default for MarginalConfig {
    fn default() -> Self {
        Self {
            sides: default_sides(),
            size: SizeSpec::Absent,
            boxplot: false,
        }
    }
}

/// Spec output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON.
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Output file, stdout when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            path: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Marginal layer defaults.
    #[serde(default)]
    pub marginal: MarginalConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            marginal: MarginalConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/ggmarginal/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ggmarginal").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads the file at `path` if given, else the default location if it
    /// exists, else defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file is missing or invalid.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::load(path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Check the marginal defaults with the same rules `ggmarginal` applies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for bad sides or sizes.
    pub fn validate(&self) -> Result<()> {
        build_marginal_layers(&self.marginal.sides, self.marginal.size.clone(), &Layer::density())
            .map(|_| ())
    }
}
