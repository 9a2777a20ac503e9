//! Quantity type and its implementations.

use crate::unit::{Per, Unit};
use core::marker::PhantomData;
use core::ops::*;


/// A value tagged with its unit.
///
/// `Quantity<U>` wraps an `f64` together with phantom information about the unit `U`. Mixing dimensions is a type
/// error, while conversions inside one dimension go through [`Quantity::to`].
///
/// ```rust
/// use units_core::mass::{Gram, Kilograms};
///
/// let m = Kilograms::new(2.5);
/// assert_eq!(m.to::<Gram>().value(), 2500.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Quantity<U: Unit>(f64, PhantomData<U>);

impl<U: Unit + Copy> Quantity<U> {
    /// A NaN quantity, used as the "no value" marker by conversions fed non-finite input.
    ///
    /// ```rust
    /// use units_core::volume::CubicMeters;
    /// assert!(CubicMeters::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// Creates a new quantity with the given value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use units_core::mass::Grams;
    /// assert_eq!(Grams::new(-10.0).abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            Self::new(self.0.abs())
        }
        #[cfg(not(feature = "std"))]
        {
            Self::new(libm::fabs(self.0))
        }
    }

    /// `true` when the value is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// ```rust
    /// use units_core::volume::{Liters, Milliliter};
    ///
    /// let v = Liters::new(1.5);
    /// assert_eq!(v.to::<Milliliter>().value(), 1500.0);
    /// ```
    #[inline]
    pub const fn to<T: Unit<Dim = U::Dim>>(self) -> Quantity<T> {
        Quantity::<T>::new(self.0 * (U::RATIO / T::RATIO))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;
    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

// density * volume = mass
impl<N: Unit, D: Unit> Mul<Quantity<D>> for Quantity<Per<N, D>> {
    type Output = Quantity<N>;

    #[inline]
    fn mul(self, rhs: Quantity<D>) -> Self::Output {
        Quantity::<N>::new(self.0 * rhs.value())
    }
}

impl<N: Unit, D: Unit> Mul<Quantity<Per<N, D>>> for Quantity<D> {
    type Output = Quantity<N>;

    #[inline]
    fn mul(self, rhs: Quantity<Per<N, D>>) -> Self::Output {
        rhs * self
    }
}

// mass / volume = density
impl<N: Unit, D: Unit> Div<Quantity<D>> for Quantity<N> {
    type Output = Quantity<Per<N, D>>;
    #[inline]
    fn div(self, rhs: Quantity<D>) -> Self::Output {
        Quantity::new(self.value() / rhs.value())
    }
}

impl<U: Unit> PartialEq<f64> for Quantity<U> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U: Unit> From<f64> for Quantity<U> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

/// Serde helper writing a quantity as `{"value": .., "unit": ..}`.
///
/// Use with `#[serde(serialize_with = "units_core::serde_with_unit::serialize")]`, or `with` on a struct that only
/// derives `Serialize`. Derived units get their composed symbol (`kg/m³`). A non-finite value is handed to the
/// serializer as is; `serde_json` writes it as `null`.
///
/// ```rust
/// use serde::Serialize;
/// use units_core::density::KilogramsPerCubicMeter;
/// use units_core::mass::Kilograms;
///
/// #[derive(Serialize)]
/// struct Sample {
///     #[serde(with = "units_core::serde_with_unit")]
///     mass: Kilograms,
///     #[serde(with = "units_core::serde_with_unit")]
///     density: KilogramsPerCubicMeter,
/// }
/// # let _ = Sample { mass: Kilograms::new(1.0), density: KilogramsPerCubicMeter::new(1.0) };
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use crate::unit::{Symbol, Unit};
    use crate::Quantity;
    use serde::ser::{SerializeStruct, Serializer};

    struct UnitField<U: Unit>(Symbol<U>);

    impl<U: Unit> serde::Serialize for UnitField<U> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(&self.0)
        }
    }

    /// Serializes a `Quantity<U>` as `{"value": .., "unit": ..}`.
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", &UnitField(Symbol::<U>::new()))?;
        state.end()
    }
}
