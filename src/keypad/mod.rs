//! Keypad model behind the graphical calculator.
//!
//! Holds the key set, the button layout, and the state machine that turns
//! key presses into display updates. Nothing here depends on the window, so
//! the view only has to forward clicks and render the state.

mod key;
mod state;

pub use key::{KEYPAD_COLUMNS, KEYPAD_ROWS, Key, KeyCell};
pub use state::{KeypadError, KeypadState};
