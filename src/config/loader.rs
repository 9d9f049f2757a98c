//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading generator
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{Demographics, GeneratorConfig, GeneratorSettings};

/// Loads and provides access to generator configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── generator.yaml     # Timing, coordinator, private activity, company
/// └── demographics.yaml  # Sampling tables and location pools
/// ```
///
/// # Example
///
/// ```no_run
/// use activity_calendar::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Travel buffer: {} min", loader.config().travel_buffer());
/// # Ok::<(), activity_calendar::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: GeneratorConfig,
}

impl ConfigLoader {
    /// Loads and validates configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any value is out of range or inconsistent with another
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<GeneratorSettings>(&path.join("generator.yaml"))?;
        let demographics = Self::load_yaml::<Demographics>(&path.join("demographics.yaml"))?;

        let config = GeneratorConfig::new(settings, demographics)?;
        Ok(Self { config })
    }

    /// Wraps the built-in default configuration.
    pub fn builtin() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying generator configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}
