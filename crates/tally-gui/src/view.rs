//! The calculator screen.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::app::App;
use crate::component::{operand_field, result_field};
use crate::message::Message;
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XL, button_primary, button_secondary};

/// Render the calculator form: two operand fields, the read-only result,
/// and the action row.
pub fn calculator(app: &App) -> Element<'_, Message> {
    let operand_a = operand_field(
        "Value A",
        app.operand_a_input(),
        Message::OperandAEdited,
        Message::OperandACommitted,
    );

    let operand_b = operand_field(
        "Value B",
        app.operand_b_input(),
        Message::OperandBEdited,
        Message::OperandBCommitted,
    );

    let result = result_field("Result", app.result_text());

    let form = column![
        operand_a,
        operand_b,
        result,
        Space::new().height(SPACING_SM),
        view_actions(),
    ]
    .spacing(SPACING_MD)
    .max_width(320.0);

    container(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(SPACING_XL)
        .into()
}

/// Render the action row. Each button mirrors an Alt accelerator
/// (Alt+S, Alt+D, Alt+R).
fn view_actions<'a>() -> Element<'a, Message> {
    let sum_btn = button(text("Sum").size(14))
        .on_press(Message::Sum)
        .padding([SPACING_SM, SPACING_MD])
        .style(button_primary);

    let difference_btn = button(text("Difference").size(14))
        .on_press(Message::Difference)
        .padding([SPACING_SM, SPACING_MD])
        .style(button_primary);

    let reset_btn = button(text("Reset").size(14))
        .on_press(Message::Reset)
        .padding([SPACING_SM, SPACING_MD])
        .style(button_secondary);

    row![
        sum_btn,
        Space::new().width(SPACING_SM),
        difference_btn,
        Space::new().width(Length::Fill),
        reset_btn,
    ]
    .align_y(Alignment::Center)
    .into()
}
