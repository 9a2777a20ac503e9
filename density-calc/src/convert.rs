//! Conversions between the selectable units and SI.
//!
//! Each function dispatches from a run-time unit choice to the matching typed unit of `units-core`, so the scaling
//! factors live in one place (the unit ratios). A non-finite input converts to NaN, which downstream code treats as
//! "no value".

use units_core::density::{
    GramPerCubicCentimeter, GramsPerCubicCentimeter, KilogramPerCubicMeter,
    KilogramsPerCubicMeter,
};
use units_core::mass::{Gram, Grams, Kilogram, Kilograms};
use units_core::volume::{
    CubicCentimeter, CubicCentimeters, CubicMeter, CubicMeters, Liter, Liters, Milliliter,
    Milliliters,
};

use crate::selection::{DensityUnit, MassUnit, VolumeUnit};

/// Converts a mass expressed in `unit` into kilograms.
pub fn to_kilograms(value: f64, unit: MassUnit) -> Kilograms {
    if !value.is_finite() {
        return Kilograms::NAN;
    }
    match unit {
        MassUnit::Kilogram => Kilograms::new(value),
        MassUnit::Gram => Grams::new(value).to::<Kilogram>(),
    }
}

/// Converts kilograms into the value shown for `target`.
pub fn from_kilograms(mass: Kilograms, target: MassUnit) -> f64 {
    if !mass.is_finite() {
        return f64::NAN;
    }
    match target {
        MassUnit::Kilogram => mass.value(),
        MassUnit::Gram => mass.to::<Gram>().value(),
    }
}

/// Converts a volume expressed in `unit` into cubic metres.
pub fn to_cubic_meters(value: f64, unit: VolumeUnit) -> CubicMeters {
    if !value.is_finite() {
        return CubicMeters::NAN;
    }
    match unit {
        VolumeUnit::CubicMeter => CubicMeters::new(value),
        VolumeUnit::Liter => Liters::new(value).to::<CubicMeter>(),
        VolumeUnit::Milliliter => Milliliters::new(value).to::<CubicMeter>(),
        VolumeUnit::CubicCentimeter => CubicCentimeters::new(value).to::<CubicMeter>(),
    }
}

/// Converts cubic metres into the value shown for `target`.
pub fn from_cubic_meters(volume: CubicMeters, target: VolumeUnit) -> f64 {
    if !volume.is_finite() {
        return f64::NAN;
    }
    match target {
        VolumeUnit::CubicMeter => volume.value(),
        VolumeUnit::Liter => volume.to::<Liter>().value(),
        VolumeUnit::Milliliter => volume.to::<Milliliter>().value(),
        VolumeUnit::CubicCentimeter => volume.to::<CubicCentimeter>().value(),
    }
}

/// Converts a density expressed in `unit` into kg/m³.
pub fn to_kg_per_m3(value: f64, unit: DensityUnit) -> KilogramsPerCubicMeter {
    if !value.is_finite() {
        return KilogramsPerCubicMeter::NAN;
    }
    match unit {
        DensityUnit::KilogramPerCubicMeter => KilogramsPerCubicMeter::new(value),
        DensityUnit::GramPerCubicCentimeter => {
            GramsPerCubicCentimeter::new(value).to::<KilogramPerCubicMeter>()
        }
    }
}

/// Converts kg/m³ into the value shown for `target`.
pub fn from_kg_per_m3(density: KilogramsPerCubicMeter, target: DensityUnit) -> f64 {
    if !density.is_finite() {
        return f64::NAN;
    }
    match target {
        DensityUnit::KilogramPerCubicMeter => density.value(),
        DensityUnit::GramPerCubicCentimeter => density.to::<GramPerCubicCentimeter>().value(),
    }
}
