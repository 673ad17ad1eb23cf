//! Form components for the calculator screen.
//!
//! Input fields with labels, and the read-only result display.

use iced::widget::{column, container, text, text_input};
use iced::{Element, Length};

use crate::theme::{SPACING_XS, result_display, text_input_default};

/// Creates a labeled operand entry field.
///
/// Keystrokes go to `on_input` and stay view-local; Enter fires
/// `on_submit`, which is the commit gesture.
pub fn operand_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> M + 'a,
    on_submit: M,
) -> Element<'a, M> {
    let label_text = text(label).size(13);

    let input = text_input("0", value)
        .on_input(on_input)
        .on_submit(on_submit)
        .padding(10.0)
        .size(14)
        .width(Length::Fill)
        .style(text_input_default);

    column![label_text, input].spacing(SPACING_XS).into()
}

/// Creates the read-only result field.
///
/// There is no input path: the value only changes when a state
/// notification repaints the display buffer.
pub fn result_field<'a, M: 'a>(label: &'a str, value: String) -> Element<'a, M> {
    let label_text = text(label).size(13);

    let value_text = container(text(value).size(14))
        .padding(10.0)
        .width(Length::Fill)
        .style(result_display);

    column![label_text, value_text].spacing(SPACING_XS).into()
}
