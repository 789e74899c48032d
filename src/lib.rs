//! A four-operation calculator with command-line, console prompt, and
//! graphical keypad front ends sharing one dispatcher.

pub mod calculator;
pub mod cli;
pub mod interactive;
pub mod keypad;
pub mod logging;
pub mod ui;
