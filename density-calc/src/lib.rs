//! Density calculator.
//!
//! Solves `ρ = m / V` for whichever of density, mass or volume is missing. Inputs may be given in several units;
//! everything is converted to SI, solved with the typed quantities of `units-core`, then expressed in the unit
//! chosen for the result.
//!
//! ```rust
//! use density_calc::{CalculatorForm, DensityUnit};
//!
//! let mut form = CalculatorForm::default();
//! form.set_mass_value("10");
//! form.set_volume_value("2");
//! assert_eq!(form.result().value, "5");
//!
//! form.set_density_unit(DensityUnit::GramPerCubicCentimeter);
//! assert_eq!(form.result().value, "0.005");
//! ```

pub mod config;
pub mod console;
pub mod convert;
pub mod error;
pub mod form;
pub mod format;
pub mod selection;
pub mod solve;

pub use config::{CalculatorConfig, DefaultSettings, CONFIG_ENV_VAR};
pub use console::{Command, Console, Reply};
pub use error::{CalcError, Result};
pub use form::{CalculatorForm, Field, FieldInput, FormDefaults, ResultLine};
pub use format::{format_default, format_number, FormatOptions};
pub use selection::{DensityUnit, MassUnit, Target, VolumeUnit};
pub use solve::{compute, parse_input, solve, OutputUnits, SiInputs, Solution};
