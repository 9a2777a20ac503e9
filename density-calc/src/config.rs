//! Calculator configuration file support.
//!
//! Reads the default target, the default units and the formatting options from a TOML file. Every section and key
//! is optional:
//!
//! ```toml
//! [defaults]
//! target = "density"
//! mass_unit = "kg"
//! volume_unit = "m3"
//! density_unit = "kg/m3"
//!
//! [format]
//! significant_digits = 6
//! exponent_digits = 6
//! lower = 0.001
//! upper = 1000000.0
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{CalcError, Result};
use crate::form::{CalculatorForm, FormDefaults};
use crate::format::FormatOptions;
use crate::selection::{DensityUnit, MassUnit, Target, VolumeUnit};

/// Environment variable holding an explicit configuration path.
pub const CONFIG_ENV_VAR: &str = "DENSITY_CALC_CONFIG";

/// Calculator configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub defaults: DefaultSettings,
    #[serde(default)]
    pub format: FormatOptions,
}

/// Initial state of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultSettings {
    pub target: Target,
    pub mass_unit: MassUnit,
    pub volume_unit: VolumeUnit,
    pub density_unit: DensityUnit,
}

impl CalculatorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CalcError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: CalculatorConfig = content.parse()?;
        log::info!("Loaded calculator configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the first existing standard location.
    ///
    /// Searches for `density-calc.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> Result<Option<Self>> {
        let search_paths = [
            PathBuf::from("density-calc.toml"),
            PathBuf::from("config/density-calc.toml"),
            PathBuf::from("../density-calc.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }

        log::debug!("No density-calc.toml found in standard locations");
        Ok(None)
    }

    /// Resolve the configuration the way the binary does: `DENSITY_CALC_CONFIG` if set, then the standard
    /// locations, then built-in defaults.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(PathBuf::from(path)),
            None => Ok(Self::from_default_location()?.unwrap_or_default()),
        }
    }

    /// Check the formatting options.
    pub fn validate(&self) -> Result<()> {
        let format = &self.format;
        if !(1..=17).contains(&format.significant_digits) {
            return Err(CalcError::Configuration(format!(
                "significant_digits must be between 1 and 17, got {}",
                format.significant_digits
            )));
        }
        if format.exponent_digits > 17 {
            return Err(CalcError::Configuration(format!(
                "exponent_digits must be at most 17, got {}",
                format.exponent_digits
            )));
        }
        if !(format.lower > 0.0 && format.lower < format.upper) {
            return Err(CalcError::Configuration(format!(
                "expected 0 < lower < upper, got lower = {}, upper = {}",
                format.lower, format.upper
            )));
        }
        Ok(())
    }

    pub fn form_defaults(&self) -> FormDefaults {
        FormDefaults {
            target: self.defaults.target,
            mass_unit: self.defaults.mass_unit,
            volume_unit: self.defaults.volume_unit,
            density_unit: self.defaults.density_unit,
        }
    }

    /// A fresh form initialised from this configuration.
    pub fn build_form(&self) -> CalculatorForm {
        CalculatorForm::new(self.form_defaults(), self.format)
    }
}

impl FromStr for CalculatorConfig {
    type Err = CalcError;

    fn from_str(content: &str) -> Result<Self> {
        let config: CalculatorConfig = toml::from_str(content).map_err(|e| {
            CalcError::Configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
