//! Form state: the target selector, three raw inputs with their units, and the derived result line.
//!
//! Raw values are kept as typed by the user. Every read of [`CalculatorForm::result`] recomputes from them, so the
//! result always reflects the current state.

use serde::Serialize;

use crate::convert::{to_cubic_meters, to_kg_per_m3, to_kilograms};
use crate::format::{format_number, FormatOptions};
use crate::selection::{DensityUnit, MassUnit, Target, VolumeUnit};
use crate::solve::{compute, parse_input, OutputUnits, SiInputs, Solution};

/// A raw text value paired with its unit.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FieldInput<U> {
    pub raw: String,
    pub unit: U,
}

impl<U> FieldInput<U> {
    fn new(unit: U) -> Self {
        Self {
            raw: String::new(),
            unit,
        }
    }
}

/// A piece of the form shown for the current target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Output unit selector for density, shown without a value.
    DensityUnit,
    Mass,
    Volume,
    Density,
}

/// The line displayed under the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultLine {
    pub label: &'static str,
    /// Formatted value, empty when the result is blank.
    pub value: String,
    pub unit: &'static str,
}

impl ResultLine {
    pub fn is_blank(&self) -> bool {
        self.value.is_empty()
    }
}

/// Starting values for a form.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormDefaults {
    pub target: Target,
    pub mass_unit: MassUnit,
    pub volume_unit: VolumeUnit,
    pub density_unit: DensityUnit,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculatorForm {
    target: Target,
    mass: FieldInput<MassUnit>,
    volume: FieldInput<VolumeUnit>,
    density: FieldInput<DensityUnit>,
    #[serde(skip)]
    format: FormatOptions,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self::new(FormDefaults::default(), FormatOptions::default())
    }
}

impl CalculatorForm {
    pub fn new(defaults: FormDefaults, format: FormatOptions) -> Self {
        Self {
            target: defaults.target,
            mass: FieldInput::new(defaults.mass_unit),
            volume: FieldInput::new(defaults.volume_unit),
            density: FieldInput::new(defaults.density_unit),
            format,
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn mass(&self) -> &FieldInput<MassUnit> {
        &self.mass
    }

    pub fn volume(&self) -> &FieldInput<VolumeUnit> {
        &self.volume
    }

    pub fn density(&self) -> &FieldInput<DensityUnit> {
        &self.density
    }

    pub fn set_target(&mut self, target: Target) {
        self.target = target;
    }

    pub fn set_mass_value(&mut self, raw: impl Into<String>) {
        self.mass.raw = raw.into();
    }

    pub fn set_mass_unit(&mut self, unit: MassUnit) {
        self.mass.unit = unit;
    }

    pub fn set_volume_value(&mut self, raw: impl Into<String>) {
        self.volume.raw = raw.into();
    }

    pub fn set_volume_unit(&mut self, unit: VolumeUnit) {
        self.volume.unit = unit;
    }

    pub fn set_density_value(&mut self, raw: impl Into<String>) {
        self.density.raw = raw.into();
    }

    pub fn set_density_unit(&mut self, unit: DensityUnit) {
        self.density.unit = unit;
    }

    /// Clears the three raw values. Units and target are kept.
    pub fn reset(&mut self) {
        self.mass.raw.clear();
        self.volume.raw.clear();
        self.density.raw.clear();
    }

    /// Fields shown for the current target, in display order.
    pub fn visible_fields(&self) -> &'static [Field] {
        match self.target {
            Target::Density => &[Field::DensityUnit, Field::Mass, Field::Volume],
            Target::Mass => &[Field::Volume, Field::Density],
            Target::Volume => &[Field::Mass, Field::Density],
        }
    }

    /// Current inputs in SI units.
    pub fn si_inputs(&self) -> SiInputs {
        SiInputs {
            mass: to_kilograms(parse_input(&self.mass.raw), self.mass.unit),
            volume: to_cubic_meters(parse_input(&self.volume.raw), self.volume.unit),
            density: to_kg_per_m3(parse_input(&self.density.raw), self.density.unit),
        }
    }

    fn output_units(&self) -> OutputUnits {
        OutputUnits {
            mass: self.mass.unit,
            volume: self.volume.unit,
            density: self.density.unit,
        }
    }

    /// Unformatted solution for the current state.
    pub fn solution(&self) -> Solution {
        compute(self.target, self.si_inputs(), &self.output_units())
    }

    pub fn result(&self) -> ResultLine {
        let solution = self.solution();
        ResultLine {
            label: self.target.label(),
            value: solution
                .value
                .map(|v| format_number(v, &self.format))
                .unwrap_or_default(),
            unit: solution.unit_symbol,
        }
    }
}
