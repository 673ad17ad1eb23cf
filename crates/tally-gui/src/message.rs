//! Messages for the calculator view.
//!
//! Every user interaction and runtime event flows through [`Message`];
//! `App::update` is the single consumer.

use iced::keyboard;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Operand entry
    // =========================================================================
    /// Keystroke in the first operand field (view-local edit, no
    /// view-model traffic).
    OperandAEdited(String),

    /// Keystroke in the second operand field.
    OperandBEdited(String),

    /// Commit the first operand buffer into the view-model.
    OperandACommitted,

    /// Commit the second operand buffer into the view-model.
    OperandBCommitted,

    // =========================================================================
    // Actions
    // =========================================================================
    /// Compute `operand_a + operand_b`.
    Sum,

    /// Compute `operand_a - operand_b`.
    Difference,

    /// Return all state to zero.
    Reset,

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event from the runtime subscription.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation - used for subscription events with no mapping.
    Noop,
}
