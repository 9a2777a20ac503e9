//! Integration tests driving the console with scripted input.

use std::io::Cursor;

use density_calc::console::{split_commands, Console};
use density_calc::{CalculatorConfig, Target};

fn run_session(script: &str) -> (Console, String) {
    let mut console = Console::default();
    let mut output = Vec::new();
    console
        .run(Cursor::new(script.to_string()), &mut output)
        .expect("session should not fail");
    (console, String::from_utf8(output).expect("output is UTF-8"))
}

#[test]
fn test_session_prints_result_after_each_change() {
    let (_, output) = run_session("mass 10 kg\nvolume 2 m3\ndensity g/cm3\nquit\n");
    assert!(output.starts_with("Density calculator"));
    assert!(output.contains("Density: —"));
    assert!(output.contains("Density: 5 kg/m³"));
    assert!(output.contains("Density: 0.005 g/cm³"));
}

#[test]
fn test_session_reports_errors_and_continues() {
    let (console, output) = run_session("mass 10 lb\nweigh\nmass 4\nvolume 2\n");
    assert!(output.contains("error: Unknown mass unit: 'lb'"));
    assert!(output.contains("error: Unknown command: 'weigh'"));
    assert!(output.contains("Density: 2 kg/m³"));
    assert_eq!(console.form().mass().raw, "4");
}

#[test]
fn test_session_stops_at_quit() {
    let (console, output) = run_session("mass 1\nvolume 1\nquit\nmass 2\n");
    assert_eq!(console.form().mass().raw, "1");
    assert!(output.contains("Density: 1 kg/m³"));
    assert!(!output.contains("Density: 2 kg/m³"));
}

#[test]
fn test_session_target_switch_and_reset() {
    let (console, output) = run_session("target mass\nvolume 3 L\ndensity 1 g/cm3\nreset\n");
    assert!(output.contains("Mass: 3 kg"));
    assert!(output.contains("Mass: —"));
    assert_eq!(console.form().target(), Target::Mass);
    assert!(console.form().volume().raw.is_empty());
}

#[test]
fn test_one_shot_commands_from_arguments() {
    let args = ["mass", "250", "g;", "volume", "0.25", "L;", "density", "g/mL"];
    let commands = split_commands(args);
    assert_eq!(commands.len(), 3);

    let mut console = Console::default();
    let output = console.run_commands(&commands).unwrap();
    assert!(output.contains("Density: 1 g/cm³"));
}

#[test]
fn test_one_shot_json_output() {
    let config: CalculatorConfig = "[defaults]\ntarget = \"volume\"\nvolume_unit = \"L\"\n"
        .parse()
        .unwrap();
    let mut console = Console::new(config.build_form());
    let output = console
        .run_commands(["mass 2", "density 1000", "json"])
        .unwrap();

    let json_end = output.find("\nDensity calculator").unwrap();
    let value: serde_json::Value = serde_json::from_str(&output[..json_end]).unwrap();
    assert_eq!(value["target"], "volume");
    assert_eq!(value["volume"]["unit"], "L");
    assert_eq!(value["result"]["label"], "Volume");
    assert_eq!(value["result"]["value"], "2");
    assert_eq!(value["si"]["mass"]["value"], 2.0);
    assert_eq!(value["si"]["density"]["unit"], "kg/m³");
}
