//! Calculator display rendering.
//!
//! Shows the pending expression as a muted line above the current number.

use crate::calculator::format_result;
use crate::keypad::KeypadState;
use crate::ui::theme::theme;
use gpui::{Div, SharedString, div, prelude::*};

/// Render the read-only display for the given keypad state.
pub fn render_display(state: &KeypadState) -> Div {
    let t = theme();

    let expression = match (state.stored(), state.pending()) {
        (Some(stored), Some(op)) => format!("{} {}", format_result(stored), op.symbol()),
        _ => String::new(),
    };

    let expression_element = div()
        .w_full()
        .h_4()
        .flex()
        .justify_end()
        .text_xs()
        .text_color(t.expression_color)
        .whitespace_nowrap()
        .overflow_hidden()
        .child(SharedString::from(expression));

    let value_element = div()
        .w_full()
        .flex()
        .justify_end()
        .text_3xl()
        .font_weight(gpui::FontWeight::MEDIUM)
        .text_color(t.display_text_color)
        .whitespace_nowrap()
        .overflow_hidden()
        .text_ellipsis()
        .child(SharedString::from(state.display().to_string()));

    div()
        .w_full()
        .h(t.display_height)
        .flex_shrink_0()
        .px(t.display_padding_x)
        .bg(t.display_background)
        .rounded(t.display_border_radius)
        .flex()
        .flex_col()
        .justify_center()
        .overflow_hidden()
        .child(expression_element)
        .child(value_element)
}
