//! Solving for the missing quantity.
//!
//! All three inputs are brought to SI first (kg, m³, kg/m³). The target quantity is then computed from the other
//! two with the typed operators of `units-core`, and finally expressed in the unit selected for the target.

use serde::Serialize;
use units_core::density::KilogramsPerCubicMeter;
use units_core::mass::Kilograms;
use units_core::volume::CubicMeters;
use units_core::Simplify;

use crate::convert::{from_cubic_meters, from_kg_per_m3, from_kilograms};
use crate::selection::{DensityUnit, MassUnit, Target, VolumeUnit};

/// Parses a raw form value.
///
/// Surrounding whitespace is ignored. Empty or unparsable text is NaN, i.e. "no value".
pub fn parse_input(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// The three quantities in SI units. The one being solved for is ignored.
///
/// Serializes each quantity as `{"value": .., "unit": ..}`, a missing value being `null` in JSON.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SiInputs {
    #[serde(with = "units_core::serde_with_unit")]
    pub mass: Kilograms,
    #[serde(with = "units_core::serde_with_unit")]
    pub volume: CubicMeters,
    #[serde(with = "units_core::serde_with_unit")]
    pub density: KilogramsPerCubicMeter,
}

impl Default for SiInputs {
    fn default() -> Self {
        Self {
            mass: Kilograms::NAN,
            volume: CubicMeters::NAN,
            density: KilogramsPerCubicMeter::NAN,
        }
    }
}

/// Output units, one per quantity. Only the target's unit is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputUnits {
    pub mass: MassUnit,
    pub volume: VolumeUnit,
    pub density: DensityUnit,
}

impl OutputUnits {
    pub fn symbol_for(&self, target: Target) -> &'static str {
        match target {
            Target::Density => self.density.symbol(),
            Target::Mass => self.mass.symbol(),
            Target::Volume => self.volume.symbol(),
        }
    }
}

/// Computes the target quantity in SI units.
///
/// Returns `None` when an operand is missing or non-finite, or when the division would be by zero (volume when
/// solving for density, density when solving for volume).
pub fn solve(target: Target, inputs: SiInputs) -> Option<f64> {
    let SiInputs {
        mass,
        volume,
        density,
    } = inputs;

    match target {
        Target::Density => {
            if !mass.is_finite() || !volume.is_finite() || volume == 0.0 {
                return None;
            }
            let rho: KilogramsPerCubicMeter = mass / volume;
            Some(rho.value())
        }
        Target::Mass => {
            if !density.is_finite() || !volume.is_finite() {
                return None;
            }
            let m: Kilograms = density * volume;
            Some(m.value())
        }
        Target::Volume => {
            if !mass.is_finite() || !density.is_finite() || density == 0.0 {
                return None;
            }
            let v: CubicMeters = (mass / density).simplify();
            Some(v.value())
        }
    }
}

/// A solved target, expressed in its output unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Solution {
    pub target: Target,
    /// `None` when the result is blank.
    pub value: Option<f64>,
    pub unit_symbol: &'static str,
}

impl Solution {
    pub fn is_blank(&self) -> bool {
        self.value.is_none()
    }
}

/// Solves for `target` and converts the SI result into the selected output unit.
pub fn compute(target: Target, inputs: SiInputs, units: &OutputUnits) -> Solution {
    let value = solve(target, inputs)
        .map(|si| match target {
            Target::Density => from_kg_per_m3(KilogramsPerCubicMeter::new(si), units.density),
            Target::Mass => from_kilograms(Kilograms::new(si), units.mass),
            Target::Volume => from_cubic_meters(CubicMeters::new(si), units.volume),
        })
        .filter(|v| v.is_finite());

    log::debug!("solved {} -> {:?} {}", target.id(), value, units.symbol_for(target));

    Solution {
        target,
        value,
        unit_symbol: units.symbol_for(target),
    }
}
