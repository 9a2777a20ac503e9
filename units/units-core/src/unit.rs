//! Unit types and traits.

use crate::dimension::{Dimension, DivDim};
use crate::Quantity;
use core::fmt::{Debug, Display, Formatter, Result};
use core::marker::PhantomData;

/// Trait implemented by every unit marker type.
///
/// - `RATIO` is the factor that converts one of this unit into the canonical unit of its dimension. The canonical
///   units here are SI: kilogram for mass, cubic metre for volume.
/// - `Dim` ties the unit to its dimension, so conversions across dimensions do not type-check.
/// - `SYMBOL` is the display symbol, `NAME` the human readable name.
///
/// Implement it through `#[derive(Unit)]` rather than by hand.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Unit-to-canonical conversion factor.
    const RATIO: f64;

    /// Dimension this unit belongs to.
    type Dim: Dimension;

    /// Printable symbol, shown by `Display`.
    const SYMBOL: &'static str;

    /// Human readable unit name.
    const NAME: &'static str;

    /// Writes the symbol. Derived units compose the symbols of their parts.
    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        f.write_str(Self::SYMBOL)
    }
}

/// `Display` adapter for the symbol of `U`.
///
/// ```rust
/// use units_core::density::KilogramPerCubicMeter;
/// use units_core::Symbol;
///
/// assert_eq!(Symbol::<KilogramPerCubicMeter>::new().to_string(), "kg/m³");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Symbol<U: Unit>(PhantomData<U>);

impl<U: Unit> Symbol<U> {
    /// Symbol of `U`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<U: Unit> Default for Symbol<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Unit> Display for Symbol<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        U::fmt_symbol(f)
    }
}

/// Unit representing the division of two other units.
///
/// `Per<N, D>` is the result of `Quantity<N> / Quantity<D>` and carries the ratio `N::RATIO / D::RATIO`, so that
/// `Per<Gram, CubicCentimeter>` converts to `Per<Kilogram, CubicMeter>` through the usual [`Quantity::to`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    const RATIO: f64 = N::RATIO / D::RATIO;
    type Dim = DivDim<N::Dim, D::Dim>;
    const SYMBOL: &'static str = "";
    const NAME: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        N::fmt_symbol(f)?;
        f.write_str("/")?;
        D::fmt_symbol(f)
    }
}

impl<N: Unit, D: Unit> Display for Quantity<Per<N, D>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ", self.value())?;
        Per::<N, D>::fmt_symbol(f)
    }
}

/// Collapse a nested ratio into a simpler unit.
///
/// Dividing a mass by a density yields `Per<Kg, Per<Kg, M3>>`; simplifying it gives back the volume unit.
///
/// ```rust
/// use units_core::mass::Kilograms;
/// use units_core::density::KilogramsPerCubicMeter;
/// use units_core::Simplify;
///
/// let v = (Kilograms::new(10.0) / KilogramsPerCubicMeter::new(5.0)).simplify();
/// assert_eq!(v.value(), 2.0);
/// ```
pub trait Simplify {
    /// Simplified unit.
    type Out: Unit;
    /// Convert to the simplified unit, keeping the numeric value.
    fn simplify(self) -> Quantity<Self::Out>;
}

impl<N: Unit, D: Unit> Simplify for Quantity<Per<N, Per<N, D>>> {
    type Out = D;
    fn simplify(self) -> Quantity<D> {
        Quantity::new(self.value())
    }
}
