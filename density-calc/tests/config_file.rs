//! Integration tests for loading the calculator configuration from disk.

use std::io::Write;

use density_calc::{CalcError, CalculatorConfig, MassUnit, Target, VolumeUnit};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_from_file_reads_defaults_and_format() {
    let file = write_config(
        r#"
[defaults]
target = "mass"
mass_unit = "grams"
volume_unit = "cm³"

[format]
significant_digits = 3
"#,
    );

    let config = CalculatorConfig::from_file(file.path()).unwrap();
    assert_eq!(config.defaults.target, Target::Mass);
    assert_eq!(config.defaults.mass_unit, MassUnit::Gram);
    assert_eq!(config.defaults.volume_unit, VolumeUnit::CubicCentimeter);

    let mut form = config.build_form();
    form.set_volume_value("3");
    form.set_density_value("1234.5");
    // 3 cm³ of 1234.5 kg/m³ is 3.7035 g, kept to 3 significant digits
    assert_eq!(form.result().value, "3.7");
    assert_eq!(form.result().unit, "g");
}

#[test]
fn test_from_file_missing_file_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CalculatorConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CalcError::Configuration(_)));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_from_file_rejects_invalid_toml() {
    let file = write_config("[defaults\ntarget = ");
    let err = CalculatorConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, CalcError::Configuration(_)));
}

#[test]
fn test_from_file_rejects_unknown_target() {
    let file = write_config("[defaults]\ntarget = \"weight\"\n");
    assert!(CalculatorConfig::from_file(file.path()).is_err());
}

#[test]
fn test_config_serializes_back_to_toml() {
    let file = write_config("[defaults]\ndensity_unit = \"g/mL\"\n");
    let config = CalculatorConfig::from_file(file.path()).unwrap();
    let rendered = toml::to_string(&config).unwrap();
    assert!(rendered.contains("density_unit = \"g/cm3\""));

    let reparsed: CalculatorConfig = rendered.parse().unwrap();
    assert_eq!(reparsed, config);
}
