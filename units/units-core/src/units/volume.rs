//! Volume units.
//!
//! The canonical scaling unit for this dimension is [`CubicMeter`] (`CubicMeter::RATIO == 1.0`).
//! Millilitre and cubic centimetre are the same size and convert into each other exactly.
//!
//! ```rust
//! use units_core::volume::{CubicCentimeter, Liters};
//!
//! let v = Liters::new(2.0);
//! assert_eq!(v.to::<CubicCentimeter>().value(), 2000.0);
//! ```

use crate::{Dimension, Quantity, Unit};
use units_derive::Unit;

/// Dimension tag for volume.
#[derive(Debug)]
pub enum Volume {}
impl Dimension for Volume {}

/// Marker trait for any [`Unit`] whose dimension is [`Volume`].
pub trait VolumeUnit: Unit<Dim = Volume> {}
impl<T: Unit<Dim = Volume>> VolumeUnit for T {}

/// Cubic metre, the SI unit of volume.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m³", dimension = Volume, ratio = 1.0)]
pub struct CubicMeter;
/// Shorthand alias for [`CubicMeter`].
pub type M3 = CubicMeter;
/// A quantity measured in cubic metres.
pub type CubicMeters = Quantity<M3>;
/// One cubic metre.
pub const CUBIC_METER: CubicMeters = CubicMeters::new(1.0);

/// Litre: `1 L = 1e-3 m³`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "L", dimension = Volume, ratio = 1e-3, name = "liter")]
pub struct Liter;
/// Shorthand alias for [`Liter`].
pub type L = Liter;
/// A quantity measured in litres.
pub type Liters = Quantity<L>;
/// One litre.
pub const LITER: Liters = Liters::new(1.0);

/// Cubic centimetre: `1 cm³ = 1e-6 m³`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm³", dimension = Volume, ratio = 1e-6)]
pub struct CubicCentimeter;
/// Shorthand alias for [`CubicCentimeter`].
pub type Cm3 = CubicCentimeter;
/// A quantity measured in cubic centimetres.
pub type CubicCentimeters = Quantity<Cm3>;
/// One cubic centimetre.
pub const CUBIC_CENTIMETER: CubicCentimeters = CubicCentimeters::new(1.0);

/// Millilitre: `1 mL = 1 cm³ = 1e-6 m³`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mL", dimension = Volume, ratio = 1e-6, name = "milliliter")]
pub struct Milliliter;
/// Shorthand alias for [`Milliliter`].
pub type Ml = Milliliter;
/// A quantity measured in millilitres.
pub type Milliliters = Quantity<Ml>;
/// One millilitre.
pub const MILLILITER: Milliliters = Milliliters::new(1.0);

crate::impl_unit_conversions!(CubicMeter, Liter, CubicCentimeter, Milliliter);
