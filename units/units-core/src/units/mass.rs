//! Mass units.
//!
//! The canonical scaling unit for this dimension is [`Kilogram`] (`Kilogram::RATIO == 1.0`).
//!
//! ```rust
//! use units_core::mass::{Gram, Kilograms};
//!
//! let m = Kilograms::new(0.25);
//! assert_eq!(m.to::<Gram>().value(), 250.0);
//! ```

use crate::{Dimension, Quantity, Unit};
use units_derive::Unit;

/// Dimension tag for mass.
#[derive(Debug)]
pub enum Mass {}
impl Dimension for Mass {}

/// Marker trait for any [`Unit`] whose dimension is [`Mass`].
pub trait MassUnit: Unit<Dim = Mass> {}
impl<T: Unit<Dim = Mass>> MassUnit for T {}

/// Kilogram, the SI base unit of mass.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", dimension = Mass, ratio = 1.0)]
pub struct Kilogram;
/// Shorthand alias for [`Kilogram`].
pub type Kg = Kilogram;
/// A quantity measured in kilograms.
pub type Kilograms = Quantity<Kg>;
/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);

/// Gram: `1 g = 1e-3 kg`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", dimension = Mass, ratio = 1e-3)]
pub struct Gram;
/// Shorthand alias for [`Gram`].
pub type G = Gram;
/// A quantity measured in grams.
pub type Grams = Quantity<G>;
/// One gram.
pub const GRAM: Grams = Grams::new(1.0);

crate::impl_unit_conversions!(Kilogram, Gram);
