//! Visual constants for the calculator window.

use gpui::{Hsla, Pixels, hsla, px};
use lazy_static::lazy_static;

/// Sizes and colours used when rendering the calculator.
#[derive(Clone, Debug)]
pub struct KeypadTheme {
    pub window_width: Pixels,
    pub window_height: Pixels,
    pub window_padding: Pixels,
    pub window_background: Hsla,

    pub display_height: Pixels,
    pub display_padding_x: Pixels,
    pub display_border_radius: Pixels,
    pub display_background: Hsla,
    pub display_text_color: Hsla,
    /// Colour of the "72 +" line above the number.
    pub expression_color: Hsla,

    /// Space between keys, both horizontally and vertically.
    pub key_gap: Pixels,
}

impl Default for KeypadTheme {
    fn default() -> Self {
        Self {
            window_width: px(320.0),
            window_height: px(440.0),
            window_padding: px(10.0),
            window_background: hsla(0.0, 0.0, 0.12, 1.0),

            display_height: px(84.0),
            display_padding_x: px(14.0),
            display_border_radius: px(8.0),
            display_background: hsla(0.0, 0.0, 0.97, 1.0),
            display_text_color: hsla(0.0, 0.0, 0.1, 1.0),
            expression_color: hsla(210.0 / 360.0, 0.15, 0.45, 1.0),

            key_gap: px(10.0),
        }
    }
}

lazy_static! {
    static ref THEME: KeypadTheme = KeypadTheme::default();
}

/// The theme shared by every calculator window.
pub fn theme() -> &'static KeypadTheme {
    &THEME
}
