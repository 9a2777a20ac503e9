//! Terminal front-end for the form.
//!
//! Each input line is one [`Command`]. State-changing commands print the refreshed result line, `show` renders the
//! whole form with only the fields relevant to the current target.

use serde::Serialize;
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{CalcError, Result};
use crate::form::{CalculatorForm, Field, FieldInput, ResultLine};
use crate::selection::{DensityUnit, MassUnit, Target, VolumeUnit};
use crate::solve::SiInputs;

const PROMPT: &str = "> ";
const BLANK: &str = "—";

pub const HELP: &str = "\
Commands:
  target <density|mass|volume>   choose the quantity to compute (alias: solve)
  mass [VALUE] [UNIT]            set the mass and/or its unit (kg, g)
  volume [VALUE] [UNIT]          set the volume and/or its unit (m3, L, mL, cm3)
  density [VALUE] [UNIT]         set the density and/or its unit (kg/m3, g/cm3)
  reset                          clear the three values
  show                           display the form
  json                           print the form state as JSON
  help                           this message
  quit                           leave
A field command without arguments clears its value.";

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Target(Target),
    Mass(FieldUpdate<MassUnit>),
    Volume(FieldUpdate<VolumeUnit>),
    Density(FieldUpdate<DensityUnit>),
    Reset,
    Show,
    Json,
    Help,
    Quit,
}

/// New raw value and/or unit for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdate<U> {
    pub value: Option<String>,
    pub unit: Option<U>,
}

impl<U: FromStr<Err = CalcError>> FieldUpdate<U> {
    fn parse(args: &[&str]) -> Result<Self> {
        match args {
            [] => Ok(Self {
                value: Some(String::new()),
                unit: None,
            }),
            [single] => match single.parse::<U>() {
                Ok(unit) => Ok(Self {
                    value: None,
                    unit: Some(unit),
                }),
                Err(CalcError::UnknownUnit { kind, .. })
                    if single.parse::<f64>().is_err() && is_any_unit(single) =>
                {
                    Err(CalcError::InvalidArgument(format!(
                        "'{}' is not a {} unit",
                        single, kind
                    )))
                }
                Err(_) => Ok(Self {
                    value: Some(single.to_string()),
                    unit: None,
                }),
            },
            [value, unit] => Ok(Self {
                value: Some(value.to_string()),
                unit: Some(unit.parse()?),
            }),
            _ => Err(CalcError::InvalidArgument(format!(
                "expected at most a value and a unit, got '{}'",
                args.join(" ")
            ))),
        }
    }
}

/// `true` when `s` names a unit of any dimension.
fn is_any_unit(s: &str) -> bool {
    s.parse::<MassUnit>().is_ok() || s.parse::<VolumeUnit>().is_ok() || s.parse::<DensityUnit>().is_ok()
}

impl FromStr for Command {
    type Err = CalcError;

    fn from_str(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = tokens.collect();

        let no_args = |command: Command| {
            if args.is_empty() {
                Ok(command)
            } else {
                Err(CalcError::InvalidArgument(format!(
                    "'{}' takes no arguments",
                    keyword
                )))
            }
        };

        match keyword.as_str() {
            "target" | "solve" => match args.as_slice() {
                [target] => Ok(Command::Target(target.parse()?)),
                _ => Err(CalcError::InvalidArgument(
                    "expected one of density, mass, volume".to_string(),
                )),
            },
            "mass" | "masse" => Ok(Command::Mass(FieldUpdate::parse(&args)?)),
            "volume" => Ok(Command::Volume(FieldUpdate::parse(&args)?)),
            "density" | "densite" | "densité" => Ok(Command::Density(FieldUpdate::parse(&args)?)),
            "reset" => no_args(Command::Reset),
            "show" => no_args(Command::Show),
            "json" => no_args(Command::Json),
            "help" | "?" => no_args(Command::Help),
            "quit" | "exit" | "q" => no_args(Command::Quit),
            _ => Err(CalcError::UnknownCommand(keyword.clone())),
        }
    }
}

/// What the console should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// `json` output: the raw form, its inputs in SI units and the result line.
#[derive(Serialize)]
struct Snapshot<'a> {
    #[serde(flatten)]
    form: &'a CalculatorForm,
    si: SiInputs,
    result: ResultLine,
}

/// Form plus the command loop driving it.
#[derive(Debug, Clone, Default)]
pub struct Console {
    form: CalculatorForm,
}

impl Console {
    pub fn new(form: CalculatorForm) -> Self {
        Self { form }
    }

    pub fn form(&self) -> &CalculatorForm {
        &self.form
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        log::debug!("executing {:?}", command);
        match command {
            Command::Target(target) => self.form.set_target(target),
            Command::Mass(update) => {
                if let Some(value) = update.value {
                    self.form.set_mass_value(value);
                }
                if let Some(unit) = update.unit {
                    self.form.set_mass_unit(unit);
                }
            }
            Command::Volume(update) => {
                if let Some(value) = update.value {
                    self.form.set_volume_value(value);
                }
                if let Some(unit) = update.unit {
                    self.form.set_volume_unit(unit);
                }
            }
            Command::Density(update) => {
                if let Some(value) = update.value {
                    self.form.set_density_value(value);
                }
                if let Some(unit) = update.unit {
                    self.form.set_density_unit(unit);
                }
            }
            Command::Reset => self.form.reset(),
            Command::Show => return Ok(Reply::Text(render(&self.form))),
            Command::Json => {
                let snapshot = Snapshot {
                    form: &self.form,
                    si: self.form.si_inputs(),
                    result: self.form.result(),
                };
                return Ok(Reply::Text(serde_json::to_string_pretty(&snapshot)?));
            }
            Command::Help => return Ok(Reply::Text(HELP.to_string())),
            Command::Quit => return Ok(Reply::Quit),
        }
        Ok(Reply::Text(result_line(&self.form.result())))
    }

    /// Parses and executes one line. Blank lines do nothing.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Reply>> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let command: Command = line.parse()?;
        self.execute(command).map(Some)
    }

    /// Interactive loop: reads commands until `quit` or end of input.
    ///
    /// Command errors are reported on `output` and do not stop the loop; only I/O errors do.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", render(&self.form))?;
        writeln!(output, "Type 'help' for the list of commands.")?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            match self.execute_line(&line) {
                Ok(Some(Reply::Quit)) => return Ok(()),
                Ok(Some(Reply::Text(text))) => writeln!(output, "{}", text)?,
                Ok(None) => {}
                Err(e) => {
                    log::warn!("rejected command '{}': {}", line.trim(), e);
                    writeln!(output, "error: {}", e)?;
                }
            }
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }

    /// One-shot mode: applies every command in order, then renders the form.
    ///
    /// Only `show`, `json` and `help` output is kept; the result echo of state changes is dropped since the final
    /// rendering shows it. Unlike [`Console::run`], the first bad command aborts.
    pub fn run_commands<I, S>(&mut self, commands: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut printed = String::new();
        for line in commands {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            let command: Command = line.parse()?;
            let keep = matches!(command, Command::Show | Command::Json | Command::Help);
            match self.execute(command)? {
                Reply::Quit => break,
                Reply::Text(text) if keep => {
                    printed.push_str(&text);
                    printed.push('\n');
                }
                Reply::Text(_) => {}
            }
        }
        printed.push_str(&render(&self.form));
        Ok(printed)
    }
}

/// Splits process arguments into commands: arguments are joined with spaces and cut at `;`.
///
/// `mass 10 kg ; volume 2 m3` and `"mass 10 kg" ";" "volume 2 m3"` give the same two commands.
pub fn split_commands<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = args
        .into_iter()
        .map(|arg| arg.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    joined
        .split(|c: char| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|command| !command.is_empty())
        .map(str::to_string)
        .collect()
}

/// `Density: 5 kg/m³`, or `Density: —` when blank.
pub fn result_line(result: &ResultLine) -> String {
    if result.is_blank() {
        format!("{}: {}", result.label, BLANK)
    } else {
        format!("{}: {} {}", result.label, result.value, result.unit)
    }
}

fn input_line<U: std::fmt::Display>(label: &str, field: &FieldInput<U>) -> String {
    let value = if field.raw.trim().is_empty() {
        BLANK
    } else {
        field.raw.trim()
    };
    format!("  {:<14}{} {}", label, value, field.unit)
}

/// Renders the form for the current target.
pub fn render(form: &CalculatorForm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Density calculator");
    let _ = writeln!(out, "  {:<14}{}", "Solve for", form.target());
    for field in form.visible_fields() {
        let line = match field {
            Field::DensityUnit => format!("  {:<14}{}", "Density unit", form.density().unit),
            Field::Mass => input_line("Mass", form.mass()),
            Field::Volume => input_line("Volume", form.volume()),
            Field::Density => input_line("Density", form.density()),
        };
        let _ = writeln!(out, "{}", line);
    }
    let _ = writeln!(out, "  {}", result_line(&form.result()));
    let _ = write!(out, "  1 g/cm³ = 1000 kg/m³ · 1 L = 0.001 m³ · 1 mL = 1 cm³");
    out
}
