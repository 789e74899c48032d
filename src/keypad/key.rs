//! Keypad keys and their layout.

use crate::calculator::Operation;

/// A single button on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A digit, `0..=9`.
    Digit(u8),
    Decimal,
    Clear,
    Operator(Operation),
    Equals,
}

impl Key {
    /// Digit key for `d`, or `None` when `d` is not a single decimal digit.
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self::Digit(d))
    }

    /// Text printed on the button.
    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Self::Digit(d) => {
                debug_assert!(d <= 9, "digit key out of range: {d}");
                DIGITS.get(usize::from(d)).copied().unwrap_or("?")
            }
            Self::Decimal => ".",
            Self::Clear => "C",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
        }
    }

    /// Stable element id fragment for the button.
    pub fn id(self) -> String {
        match self {
            Self::Digit(d) => format!("key-digit-{d}"),
            Self::Decimal => "key-decimal".to_string(),
            Self::Clear => "key-clear".to_string(),
            Self::Operator(op) => format!("key-op-{}", op.key()),
            Self::Equals => "key-equals".to_string(),
        }
    }
}

/// A key placed in the grid, with how many columns it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyCell {
    pub key: Key,
    pub span: usize,
}

const fn cell(key: Key) -> KeyCell {
    KeyCell { key, span: 1 }
}

/// Number of columns in the keypad grid.
pub const KEYPAD_COLUMNS: usize = 4;

/// Button rows, top to bottom. Every row covers exactly [`KEYPAD_COLUMNS`].
pub const KEYPAD_ROWS: &[&[KeyCell]] = &[
    &[
        cell(Key::Digit(7)),
        cell(Key::Digit(8)),
        cell(Key::Digit(9)),
        cell(Key::Operator(Operation::Div)),
    ],
    &[
        cell(Key::Digit(4)),
        cell(Key::Digit(5)),
        cell(Key::Digit(6)),
        cell(Key::Operator(Operation::Mul)),
    ],
    &[
        cell(Key::Digit(1)),
        cell(Key::Digit(2)),
        cell(Key::Digit(3)),
        cell(Key::Operator(Operation::Sub)),
    ],
    &[
        cell(Key::Clear),
        cell(Key::Digit(0)),
        cell(Key::Decimal),
        cell(Key::Operator(Operation::Add)),
    ],
    &[KeyCell {
        key: Key::Equals,
        span: KEYPAD_COLUMNS,
    }],
];
