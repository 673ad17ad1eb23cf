//! View-model: single source of truth for calculator state.
//!
//! The view-model mediates between raw user text and the arithmetic in
//! [`crate::model`], and fans out a synchronous notification to every
//! registered subscriber after each mutation.

use crate::model;
use crate::state::CalcState;

/// Callback invoked with the current state after every mutation.
///
/// The `Send` bound keeps the view-model embeddable in a GUI shell
/// regardless of where the runtime constructs it.
pub type Subscriber = Box<dyn FnMut(&CalcState) + Send>;

/// Owns the [`CalcState`] and the subscriber list.
///
/// Notification is synchronous and depth-first: every subscriber runs to
/// completion, in registration order, before the mutating call returns.
/// Exactly one notification pass happens per mutating call.
pub struct ViewModel {
    state: CalcState,
    subscribers: Vec<Subscriber>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self {
            state: CalcState::default(),
            subscribers: Vec::new(),
        }
    }

    /// Current state.
    ///
    /// Views read this once for their initial render; afterwards they are
    /// driven by notifications.
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Registers a callback to run after every mutation.
    ///
    /// Append-only: there is no unsubscribe, and no de-duplication — a
    /// callback registered twice is invoked twice per notification.
    /// Subscribing does not itself invoke the callback.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&CalcState) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Sets the first operand from raw text, then notifies.
    pub fn set_operand_a(&mut self, text: &str) {
        self.state.operand_a = parse_operand(text);
        self.notify();
    }

    /// Sets the second operand from raw text, then notifies.
    pub fn set_operand_b(&mut self, text: &str) {
        self.state.operand_b = parse_operand(text);
        self.notify();
    }

    /// Stores `operand_a + operand_b` into the result, then notifies.
    pub fn compute_sum(&mut self) {
        self.state.result = model::add(self.state.operand_a, self.state.operand_b);
        self.notify();
    }

    /// Stores `operand_a - operand_b` into the result, then notifies.
    pub fn compute_difference(&mut self) {
        self.state.result = model::subtract(self.state.operand_a, self.state.operand_b);
        self.notify();
    }

    /// Returns all three fields to `0.0`, then notifies.
    pub fn reset(&mut self) {
        self.state = CalcState::default();
        self.notify();
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Parsing policy for operand text: anything `f64` accepts (after
/// trimming surrounding whitespace) is stored as-is; everything else
/// becomes `0.0` with no error surfaced to the caller.
fn parse_operand(text: &str) -> f64 {
    match text.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!(text, "operand text is not a number, storing 0.0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Subscriber that appends every observed state to a shared log.
    fn recorder(log: &Arc<Mutex<Vec<CalcState>>>) -> impl FnMut(&CalcState) + Send + 'static {
        let log = Arc::clone(log);
        move |state: &CalcState| log.lock().unwrap().push(*state)
    }

    #[test]
    fn setters_store_parsed_values() {
        let mut vm = ViewModel::new();
        vm.set_operand_a("3");
        vm.set_operand_b("-2.5");
        assert_eq!(vm.state().operand_a, 3.0);
        assert_eq!(vm.state().operand_b, -2.5);
    }

    #[test]
    fn setters_accept_scientific_notation_and_whitespace() {
        let mut vm = ViewModel::new();
        vm.set_operand_a("1e3");
        vm.set_operand_b("  4.5  ");
        assert_eq!(vm.state().operand_a, 1000.0);
        assert_eq!(vm.state().operand_b, 4.5);
    }

    #[test]
    fn invalid_text_stores_zero() {
        let mut vm = ViewModel::new();
        for bad in ["abc", "", "1,5", "not-a-number", "--3"] {
            vm.set_operand_a("9");
            vm.set_operand_a(bad);
            assert_eq!(vm.state().operand_a, 0.0, "input {bad:?}");
        }
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut vm = ViewModel::new();
        vm.set_operand_a("3");
        vm.set_operand_b("4");
        vm.compute_sum();
        vm.reset();
        assert_eq!(*vm.state(), CalcState::default());
    }

    #[test]
    fn one_notification_per_mutating_call() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut vm = ViewModel::new();
        vm.subscribe(recorder(&log));

        vm.set_operand_a("3");
        vm.set_operand_b("4");
        vm.compute_sum();
        vm.compute_difference();
        vm.reset();

        let observed = log.lock().unwrap();
        assert_eq!(observed.len(), 5);
        assert_eq!(observed[2].result, 7.0);
        assert_eq!(observed[3].result, -1.0);
        assert_eq!(*observed.last().unwrap(), CalcState::default());
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut vm = ViewModel::new();
        for tag in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            vm.subscribe(move |_: &CalcState| order.lock().unwrap().push(tag));
        }

        vm.compute_sum();
        assert_eq!(*order.lock().unwrap(), ["first", "second", "third"]);
    }

    #[test]
    fn duplicate_registration_fires_twice() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut vm = ViewModel::new();
        vm.subscribe(recorder(&log));
        vm.subscribe(recorder(&log));

        vm.compute_sum();
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[test]
    fn subscribing_does_not_invoke_the_callback() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut vm = ViewModel::new();
        vm.subscribe(recorder(&log));
        assert!(log.lock().unwrap().is_empty());
    }
}
