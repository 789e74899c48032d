//! Console prompt mode.

use crate::calculator::{CalcError, Operation, format_result, run_calculation};
use std::io::{self, BufRead, Write};
use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InteractiveError {
    #[error(transparent)]
    Calc(#[from] CalcError),
    #[error("invalid number '{input}': {source}")]
    InvalidNumber {
        input: String,
        source: ParseFloatError,
    },
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Run one prompt session: list the operations, read the operation and
/// both operands, then print the result.
///
/// On failure the error line is written to `output` before returning, so the
/// caller only has to pick an exit status.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<f64, InteractiveError> {
    writeln!(output, "=== Interactive calculator ===")?;
    writeln!(output, "Available operations:")?;
    for op in Operation::ALL {
        writeln!(output, "- {}: {}", op.key(), op.label())?;
    }

    match session(&mut input, &mut output) {
        Ok(result) => {
            writeln!(output, "Result: {}", format_result(result))?;
            output.flush()?;
            Ok(result)
        }
        Err(e) => {
            // The calculation error wins over a failure to report it
            if let Err(io_err) = write_error(&mut output, &e) {
                tracing::warn!(error = %io_err, "failed to print interactive error");
            }
            Err(e)
        }
    }
}

fn write_error<W: Write>(output: &mut W, error: &InteractiveError) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Error: {error}")?;
    output.flush()
}

fn session<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<f64, InteractiveError> {
    let key = prompt(input, output, "Choose the operation: ")?;
    let a = parse_number(prompt(input, output, "First number: ")?)?;
    let b = parse_number(prompt(input, output, "Second number: ")?)?;
    tracing::debug!(%key, a, b, "interactive input read");
    Ok(run_calculation(&key, a, b)?)
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String, InteractiveError> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InteractiveError::UnexpectedEof);
    }
    Ok(line.trim().to_string())
}

fn parse_number(input: String) -> Result<f64, InteractiveError> {
    match input.parse() {
        Ok(value) => Ok(value),
        Err(source) => Err(InteractiveError::InvalidNumber { input, source }),
    }
}
