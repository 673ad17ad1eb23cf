/// Calculator state: the two operands and the last computed result.
///
/// Owned by [`crate::viewmodel::ViewModel`]; subscribers only ever see a
/// shared reference handed out during notification, so all mutation flows
/// through view-model methods.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalcState {
    /// First operand.
    pub operand_a: f64,
    /// Second operand.
    pub operand_b: f64,
    /// Result of the last compute action.
    pub result: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zeroes() {
        let state = CalcState::default();
        assert_eq!(state.operand_a, 0.0);
        assert_eq!(state.operand_b, 0.0);
        assert_eq!(state.result, 0.0);
    }
}
