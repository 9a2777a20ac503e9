//! Density aliases (`Mass / Volume`).
//!
//! There is no standalone density unit: every density is a [`Per`] of a mass unit over a volume unit, and converts
//! through the ratios of those two units.
//!
//! ```rust
//! use units_core::mass::Kilograms;
//! use units_core::volume::CubicMeters;
//! use units_core::density::{GramPerCubicCentimeter, KilogramsPerCubicMeter};
//!
//! let rho: KilogramsPerCubicMeter = Kilograms::new(10.0) / CubicMeters::new(2.0);
//! assert_eq!(rho.value(), 5.0);
//! assert!((rho.to::<GramPerCubicCentimeter>().value() - 0.005).abs() < 1e-15);
//! ```

use crate::units::mass::{Gram, Kilogram, Mass};
use crate::units::volume::{CubicCentimeter, CubicMeter, Volume};
use crate::{DivDim, Per, Quantity, Unit};

/// Dimension alias for densities (`Mass / Volume`).
pub type DensityDim = DivDim<Mass, Volume>;

/// Marker trait for any unit whose dimension is [`DensityDim`].
pub trait DensityUnit: Unit<Dim = DensityDim> {}
impl<T: Unit<Dim = DensityDim>> DensityUnit for T {}

/// A density parameterised by its mass and volume units.
pub type Density<N, D> = Quantity<Per<N, D>>;

/// Kilogram per cubic metre, the SI unit of density.
pub type KilogramPerCubicMeter = Per<Kilogram, CubicMeter>;
/// A density measured in kg/m³.
pub type KilogramsPerCubicMeter = Density<Kilogram, CubicMeter>;

/// Gram per cubic centimetre: `1 g/cm³ = 1000 kg/m³`.
pub type GramPerCubicCentimeter = Per<Gram, CubicCentimeter>;
/// A density measured in g/cm³.
pub type GramsPerCubicCentimeter = Density<Gram, CubicCentimeter>;
