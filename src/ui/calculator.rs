//! The calculator window.

use crate::keypad::{KEYPAD_COLUMNS, KEYPAD_ROWS, Key, KeyCell, KeypadState};
use crate::ui::display::render_display;
use crate::ui::theme::theme;
use anyhow::Result;
use gpui::{
    AnyView, App, Bounds, ClickEvent, Context, Div, PromptLevel, SharedString, TitlebarOptions,
    Window, WindowBounds, WindowOptions, div, prelude::*, relative, size,
};
use gpui_component::Root;
use gpui_component::button::{Button, ButtonVariants as _};

const WINDOW_TITLE: &str = "Calculator";

/// View owning the keypad state of one calculator window.
#[derive(Default)]
pub struct CalculatorView {
    state: KeypadState,
}

impl CalculatorView {
    /// Forward a key press to the state and surface any error as a prompt.
    fn press(&mut self, key: Key, window: &mut Window, cx: &mut Context<Self>) {
        if let Err(e) = self.state.press(key) {
            tracing::warn!(error = %e, "keypad input rejected");
            let detail = e.to_string();
            // The answer is irrelevant, the state has already been reset.
            let _ = window.prompt(PromptLevel::Critical, "Error", Some(&detail), &["OK"], cx);
        }
        cx.notify();
    }

    fn render_row(&self, row: &[KeyCell], cx: &mut Context<Self>) -> Div {
        let t = theme();
        div()
            .w_full()
            .flex_1()
            .flex()
            .flex_row()
            .children(row.iter().map(|cell| {
                let width = cell.span as f32 / KEYPAD_COLUMNS as f32;
                div()
                    .w(relative(width))
                    .h_full()
                    .px(t.key_gap / 2.0)
                    .child(self.render_key(cell.key, cx))
            }))
    }

    fn render_key(&self, key: Key, cx: &mut Context<Self>) -> Button {
        let button = Button::new(SharedString::from(key.id()))
            .label(key.label())
            .w_full()
            .h_full()
            .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                this.press(key, window, cx);
            }));

        match key {
            Key::Equals => button.primary(),
            Key::Clear => button.danger(),
            Key::Digit(_) | Key::Decimal | Key::Operator(_) => button,
        }
    }
}

impl Render for CalculatorView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme();

        let keypad = div()
            .w_full()
            .flex_1()
            .flex()
            .flex_col()
            .gap(t.key_gap)
            .children(KEYPAD_ROWS.iter().map(|row| self.render_row(row, cx)));

        div()
            .size_full()
            .p(t.window_padding)
            .bg(t.window_background)
            .flex()
            .flex_col()
            .gap(t.key_gap)
            .child(render_display(&self.state))
            .child(keypad)
    }
}

/// Open a calculator window.
pub fn open_window(cx: &mut App) -> Result<()> {
    let t = theme();
    let bounds = Bounds::centered(None, size(t.window_width, t.window_height), cx);

    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(WINDOW_TITLE.into()),
            ..Default::default()
        }),
        is_resizable: false,
        ..Default::default()
    };

    cx.open_window(options, |window, cx| {
        let view = cx.new(|_| CalculatorView::default());
        cx.new(|cx| Root::new(AnyView::from(view), window, cx))
    })?;

    tracing::info!("calculator window opened");
    Ok(())
}
