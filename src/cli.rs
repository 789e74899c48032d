//! Command-line arguments and run mode selection.

use crate::calculator::Operation;
use clap::Parser;
use clap::builder::PossibleValuesParser;
use thiserror::Error;

/// Basic calculator (+, -, *, /).
///
/// Opens the graphical keypad by default. Pass an operation and two numbers
/// for a one-shot calculation, or `--interactive` to be prompted on the console.
#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about)]
pub struct Cli {
    /// Operation to perform
    #[arg(value_parser = PossibleValuesParser::new(Operation::KEYS))]
    pub operation: Option<String>,

    /// First number
    #[arg(allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Second number
    #[arg(allow_negative_numbers = true)]
    pub b: Option<f64>,

    /// Prompt for the operation and numbers on the console
    #[arg(short, long)]
    pub interactive: bool,

    /// Open the graphical calculator
    #[arg(short, long)]
    pub gui: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What the process should do once arguments are parsed.
#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    OneShot { operation: String, a: f64, b: f64 },
    Interactive,
    Gui,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("two numbers (a and b) are required")]
    MissingOperands,
}

impl Cli {
    /// Resolve the run mode. A one-shot calculation needs all three positionals.
    pub fn mode(&self) -> Result<Mode, CliError> {
        if let Some(operation) = &self.operation {
            let (Some(a), Some(b)) = (self.a, self.b) else {
                return Err(CliError::MissingOperands);
            };
            return Ok(Mode::OneShot {
                operation: operation.clone(),
                a,
                b,
            });
        }

        if self.interactive {
            Ok(Mode::Interactive)
        } else {
            Ok(Mode::Gui)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("keycalc").chain(args.iter().copied()))
    }

    #[test]
    fn test_one_shot() {
        let cli = parse(&["add", "2", "3"]).unwrap();
        assert_eq!(
            cli.mode(),
            Ok(Mode::OneShot {
                operation: "add".to_string(),
                a: 2.0,
                b: 3.0
            })
        );
    }

    #[test]
    fn test_negative_operands() {
        let cli = parse(&["sub", "-1.5", "-2"]).unwrap();
        assert_eq!(
            cli.mode(),
            Ok(Mode::OneShot {
                operation: "sub".to_string(),
                a: -1.5,
                b: -2.0
            })
        );
    }

    #[test]
    fn test_missing_operands() {
        let cli = parse(&["add", "2"]).unwrap();
        assert_eq!(cli.mode(), Err(CliError::MissingOperands));

        let cli = parse(&["div"]).unwrap();
        assert_eq!(cli.mode(), Err(CliError::MissingOperands));
    }

    #[test]
    fn test_unknown_operation_rejected() {
        assert!(parse(&["pow", "2", "3"]).is_err());
    }

    #[test]
    fn test_non_numeric_operand_rejected() {
        assert!(parse(&["add", "two", "3"]).is_err());
    }

    #[test]
    fn test_default_is_gui() {
        assert_eq!(parse(&[]).unwrap().mode(), Ok(Mode::Gui));
        assert_eq!(parse(&["--gui"]).unwrap().mode(), Ok(Mode::Gui));
    }

    #[test]
    fn test_interactive_flag() {
        assert_eq!(parse(&["-i"]).unwrap().mode(), Ok(Mode::Interactive));
        assert_eq!(
            parse(&["--interactive"]).unwrap().mode(),
            Ok(Mode::Interactive)
        );
    }

    #[test]
    fn test_operation_wins_over_flags() {
        let cli = parse(&["-i", "mul", "4", "5"]).unwrap();
        assert!(matches!(cli.mode(), Ok(Mode::OneShot { .. })));
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(parse(&["-vv"]).unwrap().verbose, 2);
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
