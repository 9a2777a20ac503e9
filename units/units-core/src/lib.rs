//! Core type system for the strongly typed quantities used by the density calculator.
//!
//! `units-core` provides a minimal, zero-cost units model:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`].
//! - A value tagged with a unit is a [`Quantity<U>`], backed by an `f64`.
//! - Conversion is an explicit, type-checked scaling via [`Quantity::to`].
//! - Derived units like density are expressed as [`Per<N, D>`] (e.g. `Kilogram/CubicMeter`).
//!
//! Only the units the calculator offers are defined: kilogram and gram, cubic metre, litre, cubic centimetre and
//! millilitre, and the densities built from them. Canonical units are SI (kg, m³).
//!
//! # Quick start
//!
//! ```rust
//! use units_core::mass::Kilograms;
//! use units_core::volume::{CubicMeters, Liter};
//! use units_core::density::{GramPerCubicCentimeter, KilogramsPerCubicMeter};
//!
//! let rho: KilogramsPerCubicMeter = Kilograms::new(10.0) / CubicMeters::new(2.0);
//! assert_eq!(rho.value(), 5.0);
//!
//! let v = CubicMeters::new(2.0).to::<Liter>();
//! assert_eq!(v.value(), 2000.0);
//! # let _ = rho.to::<GramPerCubicCentimeter>();
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use units_core::mass::Kilograms;
//! use units_core::volume::CubicMeters;
//!
//! let _ = Kilograms::new(1.0) + CubicMeters::new(1.0);
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support. Without it the crate is `no_std` and uses `libm`.
//! - `serde`: [`serde_with_unit`] serializes a quantity together with its unit symbol.
//!
//! # Panics and errors
//!
//! No operation here returns `Result`. Arithmetic follows IEEE-754: NaN and infinities propagate, which is what
//! callers use to detect missing input.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod macros;
mod quantity;
mod unit;

pub use dimension::{Dimension, DivDim};
pub use quantity::Quantity;
pub use unit::{Per, Simplify, Symbol, Unit};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod units;

pub use units::density;
pub use units::mass;
pub use units::volume;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    pub enum TestDim {}
    impl Dimension for TestDim {}

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub enum TestUnit {}
    impl Unit for TestUnit {
        const RATIO: f64 = 1.0;
        type Dim = TestDim;
        const SYMBOL: &'static str = "tu";
        const NAME: &'static str = "test unit";
    }

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub enum KiloTestUnit {}
    impl Unit for KiloTestUnit {
        const RATIO: f64 = 1000.0;
        type Dim = TestDim;
        const SYMBOL: &'static str = "ktu";
        const NAME: &'static str = "kilo test unit";
    }

    type TU = Quantity<TestUnit>;
    type Ktu = Quantity<KiloTestUnit>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Quantity core behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn quantity_new_and_value() {
        assert_eq!(TU::new(42.0).value(), 42.0);
    }

    #[test]
    fn quantity_nan_is_not_finite() {
        assert!(TU::NAN.value().is_nan());
        assert!(!TU::NAN.is_finite());
        assert!(!TU::new(f64::INFINITY).is_finite());
        assert!(TU::new(0.0).is_finite());
    }

    #[test]
    fn quantity_abs() {
        assert_eq!(TU::new(-5.0).abs().value(), 5.0);
        assert_eq!(TU::new(0.0).abs().value(), 0.0);
    }

    #[test]
    fn quantity_from_f64() {
        let q: TU = 123.456.into();
        assert_eq!(q.value(), 123.456);
    }

    #[test]
    fn conversion_scales_by_ratio() {
        assert_eq!(Ktu::new(2.0).to::<TestUnit>().value(), 2000.0);
        assert_eq!(TU::new(500.0).to::<KiloTestUnit>().value(), 0.5);
    }

    #[test]
    fn conversion_preserves_nan() {
        assert!(TU::NAN.to::<KiloTestUnit>().value().is_nan());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn arithmetic_operators() {
        assert_eq!((TU::new(3.0) + TU::new(4.0)).value(), 7.0);
        assert_eq!((TU::new(3.0) - TU::new(4.0)).value(), -1.0);
        assert_eq!((TU::new(3.0) * 2.0).value(), 6.0);
        assert_eq!((2.0 * TU::new(3.0)).value(), 6.0);
        assert_eq!((TU::new(3.0) / 2.0).value(), 1.5);
        assert_eq!((-TU::new(3.0)).value(), -3.0);
        assert!(TU::new(3.0) == 3.0);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let per = TU::new(1.0) / Ktu::new(0.0);
        assert!(per.value().is_infinite());
        assert!(!per.is_finite());
    }

    #[test]
    fn per_ratio_combines_units() {
        assert_eq!(<Per<TestUnit, KiloTestUnit> as Unit>::RATIO, 1e-3);
        let per: Quantity<Per<KiloTestUnit, TestUnit>> = Ktu::new(6.0) / TU::new(3.0);
        assert_eq!(per.value(), 2.0);
        assert_eq!(per.to::<Per<TestUnit, TestUnit>>().value(), 2000.0);
    }

    #[test]
    fn per_display_uses_both_symbols() {
        let per = Ktu::new(6.0) / TU::new(3.0);
        assert_eq!(format!("{}", per), "2 ktu/tu");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::density::KilogramsPerCubicMeter;
    use crate::mass::Kilograms;
    use crate::volume::CubicMeters;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        #[serde(with = "crate::serde_with_unit")]
        mass: Kilograms,
        #[serde(with = "crate::serde_with_unit")]
        volume: CubicMeters,
        #[serde(with = "crate::serde_with_unit")]
        density: KilogramsPerCubicMeter,
    }

    #[test]
    fn serializes_value_and_unit() {
        let sample = Sample {
            mass: Kilograms::new(10.0),
            volume: CubicMeters::new(2.0),
            density: KilogramsPerCubicMeter::new(5.0),
        };
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(
            json,
            r#"{"mass":{"value":10.0,"unit":"kg"},"volume":{"value":2.0,"unit":"m³"},"density":{"value":5.0,"unit":"kg/m³"}}"#
        );
    }

    #[test]
    fn missing_value_serializes_as_null() {
        let sample = Sample {
            mass: Kilograms::NAN,
            volume: CubicMeters::new(1.0),
            density: KilogramsPerCubicMeter::NAN,
        };
        let value = serde_json::to_value(&sample).unwrap();
        assert!(value["mass"]["value"].is_null());
        assert_eq!(value["mass"]["unit"], "kg");
        assert!(value["density"]["value"].is_null());
    }
}
