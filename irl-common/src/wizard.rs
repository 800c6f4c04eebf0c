//! Wizard step sequence and navigation state machine
//!
//! The wizard is a fixed, linear five-step sequence. Navigation is expressed
//! as pure transitions over an explicit step index, so that what the caller
//! renders is always a function of (state, selection, store contents) and
//! never of a hidden refresh flag.

use serde::{Deserialize, Serialize};

/// One stage of the fixed five-stage wizard sequence.
///
/// The variant order is the wizard order; `as_str()` values are the
/// canonical step names stored in feedback records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Introduction,
    MethodCategories,
    ParentAttributes,
    ChildAttributes,
    FinalComments,
}

impl WizardStep {
    /// All steps in wizard order.
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Introduction,
        WizardStep::MethodCategories,
        WizardStep::ParentAttributes,
        WizardStep::ChildAttributes,
        WizardStep::FinalComments,
    ];

    /// Canonical step name as persisted in the `feedback.step` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Introduction => "Introduction",
            WizardStep::MethodCategories => "Method Categories",
            WizardStep::ParentAttributes => "Parent Attributes",
            WizardStep::ChildAttributes => "Child Attributes",
            WizardStep::FinalComments => "Final Comments",
        }
    }

    /// Parse a canonical step name back into a step.
    pub fn from_name(name: &str) -> Option<WizardStep> {
        WizardStep::ALL.iter().copied().find(|s| s.as_str() == name)
    }

    /// Zero-based position of this step in the wizard order.
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Introduction => 0,
            WizardStep::MethodCategories => 1,
            WizardStep::ParentAttributes => 2,
            WizardStep::ChildAttributes => 3,
            WizardStep::FinalComments => 4,
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-session wizard position.
///
/// Invariant: the index is always in `[0, ALL.len() - 1]`. Both transitions
/// clamp at the boundaries and never fail; callers present the boundary
/// no-ops as disabled buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    current_step_index: usize,
}

impl WizardState {
    /// Fresh state at the Introduction step. Created at login.
    pub fn new() -> Self {
        WizardState {
            current_step_index: 0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_step_index
    }

    pub fn current_step(&self) -> WizardStep {
        WizardStep::ALL[self.current_step_index]
    }

    pub fn total_steps(&self) -> usize {
        WizardStep::ALL.len()
    }

    pub fn is_first(&self) -> bool {
        self.current_step_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_step_index == WizardStep::ALL.len() - 1
    }

    /// Move one step back, clamping at Introduction.
    pub fn previous(&mut self) {
        self.current_step_index = self.current_step_index.saturating_sub(1);
    }

    /// Move one step forward, clamping at Final Comments.
    pub fn next(&mut self) {
        self.current_step_index = (self.current_step_index + 1).min(WizardStep::ALL.len() - 1);
    }
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_introduction() {
        let state = WizardState::new();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.current_step(), WizardStep::Introduction);
        assert!(state.is_first());
        assert!(!state.is_last());
    }

    #[test]
    fn test_previous_at_first_step_is_noop() {
        let mut state = WizardState::new();
        state.previous();
        assert_eq!(state.current_index(), 0);

        // Repeated calls stay clamped
        state.previous();
        state.previous();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_next_at_last_step_is_noop() {
        let mut state = WizardState::new();
        for _ in 0..10 {
            state.next();
        }
        assert_eq!(state.current_index(), WizardStep::ALL.len() - 1);
        assert_eq!(state.current_step(), WizardStep::FinalComments);
        assert!(state.is_last());
    }

    #[test]
    fn test_full_forward_and_back_traversal() {
        let mut state = WizardState::new();
        let forward: Vec<WizardStep> = (0..WizardStep::ALL.len())
            .map(|_| {
                let step = state.current_step();
                state.next();
                step
            })
            .collect();
        assert_eq!(forward, WizardStep::ALL.to_vec());

        for expected in WizardStep::ALL.iter().rev() {
            assert_eq!(state.current_step(), *expected);
            state.previous();
        }
        assert_eq!(state.current_step(), WizardStep::Introduction);
    }

    #[test]
    fn test_step_name_round_trip() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_name(step.as_str()), Some(step));
        }
        assert_eq!(WizardStep::from_name("Nonexistent Step"), None);
    }
}
