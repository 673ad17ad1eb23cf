//! Main application module.
//!
//! `App` hosts the `tally_core` view-model inside the Iced update loop.
//! All state changes happen in [`App::update`]; the view is a pure
//! function of state.
//!
//! The view registers its render callback with the view-model once, at
//! construction. Every view-model mutation synchronously repaints the
//! shared [`DisplayBuffer`], which the widget tree is rebuilt from.

use std::sync::{Arc, Mutex};

use iced::keyboard;
use iced::{Element, Subscription, Task, Theme};

use tally_core::{CalcState, ViewModel};

use crate::message::Message;
use crate::theme::tally_theme;
use crate::view::calculator;

// =============================================================================
// DISPLAY BUFFER
// =============================================================================

/// Formatted state, written by the render callback and read by the
/// widget tree. One field per on-screen value.
#[derive(Debug, Clone, Default)]
pub struct DisplayBuffer {
    pub operand_a: String,
    pub operand_b: String,
    pub result: String,
}

impl DisplayBuffer {
    /// Overwrites every field from `state`; the previous contents are
    /// fully superseded.
    fn render(&mut self, state: &CalcState) {
        self.operand_a = state.operand_a.to_string();
        self.operand_b = state.operand_b.to_string();
        self.result = state.result.to_string();
    }
}

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
pub struct App {
    /// Single source of truth for calculator state.
    viewmodel: ViewModel,
    /// Render target shared with the subscriber registered in [`App::new`].
    /// Uncontended: the subscriber only runs inside `update`, on the UI
    /// thread.
    display: Arc<Mutex<DisplayBuffer>>,
    /// In-progress edit of the first operand field.
    operand_a_input: String,
    /// In-progress edit of the second operand field.
    operand_b_input: String,
}

impl App {
    /// Create a new application instance.
    ///
    /// Registers the render callback with the view-model and performs the
    /// initial render (subscribing alone never invokes the callback).
    pub fn new() -> (Self, Task<Message>) {
        let display = Arc::new(Mutex::new(DisplayBuffer::default()));
        let mut viewmodel = ViewModel::new();

        let sink = Arc::clone(&display);
        viewmodel.subscribe(move |state: &CalcState| sink.lock().unwrap().render(state));

        // Initial render of the pristine state
        display.lock().unwrap().render(viewmodel.state());

        let mut app = Self {
            viewmodel,
            display,
            operand_a_input: String::new(),
            operand_b_input: String::new(),
        };
        app.refresh_inputs();

        (app, Task::none())
    }

    /// Update application state in response to a message.
    ///
    /// This is the only place view-model methods are called, so every
    /// notification pass completes before the next message is processed.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Operand entry
            // =================================================================
            Message::OperandAEdited(text) => {
                self.operand_a_input = text;
                Task::none()
            }

            Message::OperandBEdited(text) => {
                self.operand_b_input = text;
                Task::none()
            }

            Message::OperandACommitted => {
                self.viewmodel.set_operand_a(&self.operand_a_input);
                self.refresh_inputs();
                Task::none()
            }

            Message::OperandBCommitted => {
                self.viewmodel.set_operand_b(&self.operand_b_input);
                self.refresh_inputs();
                Task::none()
            }

            // =================================================================
            // Actions
            // =================================================================
            Message::Sum => {
                self.commit_operands();
                self.viewmodel.compute_sum();
                self.refresh_inputs();
                Task::none()
            }

            Message::Difference => {
                self.commit_operands();
                self.viewmodel.compute_difference();
                self.refresh_inputs();
                Task::none()
            }

            Message::Reset => {
                self.viewmodel.reset();
                self.refresh_inputs();
                Task::none()
            }

            // =================================================================
            // Global events
            // =================================================================
            Message::KeyPressed(key, modifiers) => {
                if let Some(action) = accelerator(&key, modifiers) {
                    self.update(action)
                } else {
                    Task::none()
                }
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        calculator(self)
    }

    /// Window title.
    pub fn title(&self) -> String {
        String::from("Tally")
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        tally_theme()
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        // Keyboard events, for the Alt accelerators
        keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        })
    }

    // =========================================================================
    // View accessors
    // =========================================================================

    /// Text currently shown in the first operand field.
    pub fn operand_a_input(&self) -> &str {
        &self.operand_a_input
    }

    /// Text currently shown in the second operand field.
    pub fn operand_b_input(&self) -> &str {
        &self.operand_b_input
    }

    /// Rendered result text (read-only field).
    pub fn result_text(&self) -> String {
        self.display.lock().unwrap().result.clone()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Push both pending edit buffers into the view-model.
    ///
    /// Compute and reset gestures land here before acting, standing in
    /// for the focus-loss commit of a classic forms toolkit: whatever is
    /// typed when an action fires is what the action computes with.
    fn commit_operands(&mut self) {
        self.viewmodel.set_operand_a(&self.operand_a_input);
        self.viewmodel.set_operand_b(&self.operand_b_input);
    }

    /// Copy the rendered operand text back into the edit buffers.
    ///
    /// Runs after every view-model call, so a committed field shows the
    /// canonical form of what was stored (`" 2.50 "` becomes `2.5`,
    /// `"abc"` becomes `0`).
    fn refresh_inputs(&mut self) {
        let display = self.display.lock().unwrap();
        self.operand_a_input = display.operand_a.clone();
        self.operand_b_input = display.operand_b.clone();
    }
}

// =============================================================================
// KEYBOARD ACCELERATORS
// =============================================================================

/// Maps Alt+S / Alt+D / Alt+R to the matching action.
fn accelerator(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    match key.as_ref() {
        keyboard::Key::Character("s" | "S") if modifiers.alt() => Some(Message::Sum),
        keyboard::Key::Character("d" | "D") if modifiers.alt() => Some(Message::Difference),
        keyboard::Key::Character("r" | "R") if modifiers.alt() => Some(Message::Reset),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new().0
    }

    #[test]
    fn initial_render_shows_zeroes() {
        let app = app();
        assert_eq!(app.operand_a_input(), "0");
        assert_eq!(app.operand_b_input(), "0");
        assert_eq!(app.result_text(), "0");
    }

    #[test]
    fn commit_canonicalizes_the_field_text() {
        let mut app = app();
        let _ = app.update(Message::OperandAEdited("  2.50 ".into()));
        let _ = app.update(Message::OperandACommitted);
        assert_eq!(app.operand_a_input(), "2.5");
    }

    #[test]
    fn invalid_commit_falls_back_to_zero() {
        let mut app = app();
        let _ = app.update(Message::OperandAEdited("abc".into()));
        let _ = app.update(Message::OperandACommitted);
        assert_eq!(app.operand_a_input(), "0");
    }

    #[test]
    fn sum_commits_pending_edits_first() {
        let mut app = app();
        let _ = app.update(Message::OperandAEdited("3".into()));
        let _ = app.update(Message::OperandBEdited("4".into()));
        let _ = app.update(Message::Sum);
        assert_eq!(app.operand_a_input(), "3");
        assert_eq!(app.operand_b_input(), "4");
        assert_eq!(app.result_text(), "7");
    }

    #[test]
    fn difference_uses_committed_operands() {
        let mut app = app();
        let _ = app.update(Message::OperandAEdited("3".into()));
        let _ = app.update(Message::OperandBEdited("4".into()));
        let _ = app.update(Message::Difference);
        assert_eq!(app.result_text(), "-1");
    }

    #[test]
    fn reset_discards_pending_edits() {
        let mut app = app();
        let _ = app.update(Message::OperandAEdited("3".into()));
        let _ = app.update(Message::OperandBEdited("4".into()));
        let _ = app.update(Message::Sum);
        let _ = app.update(Message::OperandAEdited("9".into()));
        let _ = app.update(Message::Reset);
        assert_eq!(app.operand_a_input(), "0");
        assert_eq!(app.operand_b_input(), "0");
        assert_eq!(app.result_text(), "0");
    }

    #[test]
    fn alt_accelerators_map_to_actions() {
        let alt = keyboard::Modifiers::ALT;
        assert!(matches!(
            accelerator(&keyboard::Key::Character("s".into()), alt),
            Some(Message::Sum)
        ));
        assert!(matches!(
            accelerator(&keyboard::Key::Character("d".into()), alt),
            Some(Message::Difference)
        ));
        assert!(matches!(
            accelerator(&keyboard::Key::Character("r".into()), alt),
            Some(Message::Reset)
        ));
    }

    #[test]
    fn unmodified_keys_are_not_accelerators() {
        let none = keyboard::Modifiers::empty();
        assert!(accelerator(&keyboard::Key::Character("s".into()), none).is_none());
    }

    #[test]
    fn alt_s_computes_the_sum() {
        let mut app = app();
        let _ = app.update(Message::OperandAEdited("10".into()));
        let _ = app.update(Message::OperandBEdited("4".into()));
        let _ = app.update(Message::KeyPressed(
            keyboard::Key::Character("s".into()),
            keyboard::Modifiers::ALT,
        ));
        assert_eq!(app.result_text(), "14");
    }
}
