//! Calculator core shared by every front end.
//!
//! This module provides:
//! - The fixed registry of binary operations
//! - A dispatcher that resolves an operation key and applies it
//! - Formatting of results for printing and display

mod evaluation;
mod format;
mod operation;

pub use evaluation::{CalcError, calculate, run_calculation};
pub use format::format_result;
pub use operation::Operation;
