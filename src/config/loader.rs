//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading cost
//! configuration records from a directory of YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CostConfigSet, CostConfiguration};

/// Loads and provides access to the cost configuration set.
///
/// The `ConfigLoader` reads one YAML file per configuration record from a
/// directory and builds the sorted [`CostConfigSet`] used for resolution.
///
/// # Directory Structure
///
/// ```text
/// config/cost/
/// ├── 2024-01-01-clt.yaml   # CLT configuration effective from this date
/// ├── 2024-06-01-clt.yaml
/// └── 2024-01-01-estagio.yaml
/// ```
///
/// File names are free-form; the effective date and contract type come from
/// the file contents.
///
/// # Example
///
/// ```no_run
/// use vigencia_engine::config::ConfigLoader;
/// use vigencia_engine::models::ContractTypeId;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/cost").unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// if let Some(config) = loader.config().resolve(date, ContractTypeId(1)) {
///     println!("FGTS percent: {}", config.fgts_percent);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CostConfigSet,
}

impl ConfigLoader {
    /// Loads every `.yaml` file in the given directory as a configuration
    /// record.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the directory does not exist or
    ///   cannot be read.
    /// - [`EngineError::ConfigParseError`] if any file is not valid YAML for
    ///   a [`CostConfiguration`].
    /// - [`EngineError::InvalidConfiguration`] if two records share an
    ///   (effective date, contract type) key or a record declares zero
    ///   working days.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        if !path.exists() {
            return Err(EngineError::ConfigNotFound { path: path_str });
        }

        let entries = fs::read_dir(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut configurations = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: path_str.clone(),
            })?;
            let file_path = entry.path();
            if file_path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            configurations.push(Self::load_yaml::<CostConfiguration>(&file_path)?);
        }

        Self::validate(&configurations)?;

        Ok(Self {
            config: CostConfigSet::new(configurations),
        })
    }

    /// Builds a loader directly from records, bypassing the filesystem.
    pub fn from_configurations(configurations: Vec<CostConfiguration>) -> EngineResult<Self> {
        Self::validate(&configurations)?;
        Ok(Self {
            config: CostConfigSet::new(configurations),
        })
    }

    /// Returns the loaded configuration set.
    pub fn config(&self) -> &CostConfigSet {
        &self.config
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

    /// Rejects duplicate (effective date, contract type) keys and degenerate
    /// divisors. At most one record may be effective per key by construction.
    fn validate(configurations: &[CostConfiguration]) -> EngineResult<()> {
        let mut keys = std::collections::HashSet::new();
        for config in configurations {
            if config.working_days_per_month == Some(0) {
                return Err(EngineError::InvalidConfiguration {
                    field: "working_days_per_month".to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
            if !keys.insert((config.effective_date, config.contract_type)) {
                return Err(EngineError::InvalidConfiguration {
                    field: "effective_date".to_string(),
                    message: format!(
                        "duplicate configuration for {} / contract type {}",
                        config.effective_date, config.contract_type
                    ),
                });
            }
        }
        Ok(())
    }
}
