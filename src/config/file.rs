//! Configuration file data structures

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::cost::{CostModel, DEFAULT_RATE_PER_MINUTE, SIMULATOR_BACKEND};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".qdoc.toml";

/// Default directory holding markdown sources
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// qdoc configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Host name the documentation is served from (for link attribution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_host: Option<String>,

    /// Directory holding markdown sources
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    /// Cost estimation settings
    #[serde(default)]
    pub cost: CostSettings,
}

fn default_docs_dir() -> String {
    DEFAULT_DOCS_DIR.to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            site_host: None,
            docs_dir: default_docs_dir(),
            cost: CostSettings::default(),
        }
    }
}

/// Cost estimation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CostSettings {
    /// Hardware rate in currency units per minute
    #[serde(default = "default_rate")]
    pub hardware_rate_per_minute: f64,

    /// Backends billed at zero
    #[serde(default = "default_free_backends")]
    pub free_backends: Vec<String>,
}

fn default_rate() -> f64 {
    DEFAULT_RATE_PER_MINUTE
}

fn default_free_backends() -> Vec<String> {
    vec![SIMULATOR_BACKEND.to_string()]
}

impl Default for CostSettings {
    fn default() -> Self {
        Self {
            hardware_rate_per_minute: default_rate(),
            free_backends: default_free_backends(),
        }
    }
}

impl CostSettings {
    /// Validate the rate and backend names
    ///
    /// # Examples
    ///
    /// ```
    /// use qdoc_kit::config::file::CostSettings;
    ///
    /// assert!(CostSettings::default().validate().is_ok());
    ///
    /// let negative = CostSettings {
    ///     hardware_rate_per_minute: -1.0,
    ///     ..Default::default()
    /// };
    /// assert!(negative.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if !self.hardware_rate_per_minute.is_finite() {
            anyhow::bail!(
                "Hardware rate must be a finite number, got {}",
                self.hardware_rate_per_minute
            );
        }
        if self.hardware_rate_per_minute < 0.0 {
            anyhow::bail!(
                "Hardware rate ({}) cannot be negative",
                self.hardware_rate_per_minute
            );
        }
        if self.free_backends.iter().any(|b| b.trim().is_empty()) {
            anyhow::bail!("Free backend names cannot be empty");
        }
        Ok(())
    }

    /// Build the billing model these settings describe
    pub fn to_model(&self) -> CostModel {
        CostModel {
            rate_per_minute: self.hardware_rate_per_minute,
            free_backends: self.free_backends.clone(),
        }
    }
}
