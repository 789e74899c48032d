pub mod calculator;
pub mod display;
pub mod theme;

pub use calculator::{CalculatorView, open_window};
pub use theme::{KeypadTheme, theme};
