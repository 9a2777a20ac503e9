//! Runtime unit and quantity choices.
//!
//! The typed units of `units-core` fix the unit at compile time; the form lets the user pick one at run time. The
//! enums below are that run-time selection, with the ASCII identifiers used in config files and JSON (`m3`,
//! `kg/m3`, ...) and the display symbols shown to the user (`m³`, `kg/m³`, ...).

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CalcError, Result};

/// Declares a run-time unit choice.
///
/// Each invocation defines, for one dimension:
/// - the enum itself, serialized as the ASCII id of each variant,
/// - `ALL`, `id()` and `symbol()`,
/// - `Display` (the symbol) and `FromStr` (id, symbol or alias, ASCII case-insensitive),
/// - `Deserialize` going through `FromStr`, so config files may use any accepted spelling.
macro_rules! unit_choice {
    (
        $(#[$meta:meta])*
        $name:ident, kind = $kind:literal, default = $default:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $id:literal, $symbol:literal, [$($alias:literal),*]
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $id)]
                $variant,
            )+
        }

        impl $name {
            /// Every choice, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// ASCII identifier used in configuration and JSON.
            pub fn id(self) -> &'static str {
                match self {
                    $($name::$variant => $id),+
                }
            }

            /// Display symbol.
            pub fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.symbol())
            }
        }

        impl FromStr for $name {
            type Err = CalcError;

            fn from_str(s: &str) -> Result<Self> {
                let input = s.trim();
                $(
                    if input.eq_ignore_ascii_case($id)
                        || input.eq_ignore_ascii_case($symbol)
                        $(|| input.eq_ignore_ascii_case($alias))*
                    {
                        return Ok($name::$variant);
                    }
                )+
                Err(CalcError::unknown_unit($kind, input))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(de::Error::custom)
            }
        }
    };
}

unit_choice! {
    /// Mass unit offered by the form.
    MassUnit, kind = "mass", default = Kilogram {
        Kilogram => "kg", "kg", ["kilogram", "kilograms"],
        Gram => "g", "g", ["gram", "grams"],
    }
}

unit_choice! {
    /// Volume unit offered by the form.
    VolumeUnit, kind = "volume", default = CubicMeter {
        CubicMeter => "m3", "m³", ["m^3"],
        Liter => "L", "L", ["liter", "litre", "liters", "litres"],
        Milliliter => "mL", "mL", ["milliliter", "millilitre"],
        CubicCentimeter => "cm3", "cm³", ["cm^3", "cc"],
    }
}

unit_choice! {
    /// Density unit offered by the form.
    DensityUnit, kind = "density", default = KilogramPerCubicMeter {
        KilogramPerCubicMeter => "kg/m3", "kg/m³", ["kg/m^3"],
        GramPerCubicCentimeter => "g/cm3", "g/cm³", ["g/cm^3", "g/mL"],
    }
}

/// The quantity being solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Density,
    Mass,
    Volume,
}

impl Target {
    pub const ALL: &'static [Target] = &[Target::Density, Target::Mass, Target::Volume];

    pub fn id(self) -> &'static str {
        match self {
            Target::Density => "density",
            Target::Mass => "mass",
            Target::Volume => "volume",
        }
    }

    /// Label shown in front of the result.
    pub fn label(self) -> &'static str {
        match self {
            Target::Density => "Density",
            Target::Mass => "Mass",
            Target::Volume => "Volume",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Target {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "density" | "densite" | "densité" | "rho" => Ok(Target::Density),
            "mass" | "masse" => Ok(Target::Mass),
            "volume" => Ok(Target::Volume),
            _ => Err(CalcError::UnknownTarget(s.trim().to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Target {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
