//! Density calculator binary.
//!
//! # Usage
//!
//! ```bash
//! # Interactive form on the terminal
//! density-calc
//!
//! # One-shot: commands separated by ';'
//! density-calc "mass 10 kg; volume 2 L; density g/cm3"
//! ```
//!
//! # Environment Variables
//!
//! - `DENSITY_CALC_CONFIG`: path to a TOML configuration file (default: search `density-calc.toml`)
//! - `RUST_LOG`: Log level (default: warn)

use std::env;
use std::io;

use anyhow::Context;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use density_calc::console::{split_commands, Console};
use density_calc::CalculatorConfig;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so one-shot output stays clean.
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let config = CalculatorConfig::load().context("failed to load calculator configuration")?;
    debug!(?config, "configuration resolved");

    let mut console = Console::new(config.build_form());
    let commands = split_commands(env::args().skip(1));

    if commands.is_empty() {
        let stdin = io::stdin();
        console.run(stdin.lock(), io::stdout())?;
    } else {
        let output = console.run_commands(&commands)?;
        println!("{}", output);
    }

    Ok(())
}
