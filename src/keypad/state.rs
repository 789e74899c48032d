//! Transient keypad state.

use super::Key;
use crate::calculator::{CalcError, Operation, calculate, format_result};
use thiserror::Error;

/// Errors surfaced to the user as a notification.
///
/// The state has already been reset by the time one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeypadError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Calc(#[from] CalcError),
}

/// Display text plus the operand and operator waiting for "=".
#[derive(Clone, Debug, PartialEq)]
pub struct KeypadState {
    display: String,
    stored: Option<f64>,
    pending: Option<Operation>,
    reset_on_input: bool,
}

impl Default for KeypadState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadState {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            stored: None,
            pending: None,
            reset_on_input: true,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn stored(&self) -> Option<f64> {
        self.stored
    }

    pub fn pending(&self) -> Option<Operation> {
        self.pending
    }

    /// Whether the next digit overwrites the display instead of appending.
    pub fn resets_on_input(&self) -> bool {
        self.reset_on_input
    }

    /// Apply one key press.
    pub fn press(&mut self, key: Key) -> Result<(), KeypadError> {
        tracing::debug!(key = key.label(), display = %self.display, "key pressed");
        match key {
            Key::Digit(d) => {
                self.push_digit(d);
                Ok(())
            }
            Key::Decimal => {
                self.push_decimal();
                Ok(())
            }
            Key::Clear => {
                self.clear();
                Ok(())
            }
            Key::Operator(op) => self.set_operator(op),
            Key::Equals => self.evaluate(),
        }
    }

    fn push_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "digit key out of range: {digit}");
        let Some(digit) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.reset_on_input || self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
        self.reset_on_input = false;
    }

    fn push_decimal(&mut self) {
        if self.reset_on_input {
            self.display = "0.".to_string();
            self.reset_on_input = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Reset everything to the start-up state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn set_operator(&mut self, op: Operation) -> Result<(), KeypadError> {
        self.stored = Some(self.parse_display()?);
        self.pending = Some(op);
        self.reset_on_input = true;
        Ok(())
    }

    fn evaluate(&mut self) -> Result<(), KeypadError> {
        let (Some(op), Some(stored)) = (self.pending, self.stored) else {
            return Ok(());
        };

        let second = self.parse_display()?;
        let result = match calculate(op, stored, second) {
            Ok(result) => result,
            Err(e) => {
                self.clear();
                return Err(e.into());
            }
        };

        self.display = format_result(result);
        self.stored = Some(result);
        self.pending = None;
        self.reset_on_input = true;
        Ok(())
    }

    /// Parse the display, resetting the state if it is not a number.
    fn parse_display(&mut self) -> Result<f64, KeypadError> {
        match self.display.parse::<f64>() {
            Ok(value) => Ok(value),
            Err(_) => {
                let text = std::mem::take(&mut self.display);
                self.clear();
                Err(KeypadError::InvalidInput(text))
            }
        }
    }
}
