//! Button phases and inbound signals
//!
//! The trigger button moves through five visual phases driven by four
//! external signals: the host page announcing readiness, the user clicking,
//! and the asynchronous action resolving one way or the other. The action
//! itself lives entirely in the host; this vocabulary only names what the
//! button reacts to.

use crate::fsm::Transitions;

/// Externally-triggered signals the button reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    /// The host page finished initializing; the action is available.
    Ready,
    /// The user clicked the control, starting the asynchronous action.
    Click,
    /// The asynchronous action resolved successfully.
    Success,
    /// The asynchronous action failed.
    Failure,
}

/// Visual phases of the trigger button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Initial phase while the host page is still loading.
    IdleDisabled,
    /// Enabled, default styling.
    Ready,
    /// Disabled with loading styling while the action runs.
    Busy,
    /// Terminal success styling. No further interaction.
    Succeeded,
    /// Terminal failure styling. No further interaction, no retry path.
    Failed,
}

impl Phase {
    /// The phase a freshly constructed button rests in.
    pub const INITIAL: Phase = Phase::IdleDisabled;

    /// Whether this phase has no interactive exit.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Succeeded | Phase::Failed)
    }
}

impl Transitions for Phase {
    type Signal = Signal;

    fn on_signal(self, signal: Signal) -> Option<Phase> {
        match (self, signal) {
            // Host init may fire from any phase, including after a terminal
            // outcome. It only re-enables the control; terminal styling is
            // not undone.
            (_, Signal::Ready) => Some(Phase::Ready),
            (Phase::Ready, Signal::Click) => Some(Phase::Busy),
            (Phase::Busy, Signal::Success) => Some(Phase::Succeeded),
            (Phase::Busy, Signal::Failure) => Some(Phase::Failed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsm::StateMachine;

    #[test]
    fn test_nominal_success_path() {
        let mut machine = StateMachine::new(Phase::INITIAL);

        assert_eq!(machine.send(Signal::Ready), Some(Phase::Ready));
        assert_eq!(machine.send(Signal::Click), Some(Phase::Busy));
        assert_eq!(machine.send(Signal::Success), Some(Phase::Succeeded));
    }

    #[test]
    fn test_nominal_failure_path() {
        let mut machine = StateMachine::new(Phase::INITIAL);

        machine.send(Signal::Ready).unwrap();
        machine.send(Signal::Click).unwrap();
        assert_eq!(machine.send(Signal::Failure), Some(Phase::Failed));
    }

    #[test]
    fn test_ready_accepted_from_any_phase() {
        for phase in [
            Phase::IdleDisabled,
            Phase::Ready,
            Phase::Busy,
            Phase::Succeeded,
            Phase::Failed,
        ] {
            assert_eq!(phase.on_signal(Signal::Ready), Some(Phase::Ready));
        }
    }

    #[test]
    fn test_ready_is_idempotent() {
        let mut machine = StateMachine::new(Phase::INITIAL);
        machine.send(Signal::Ready).unwrap();
        machine.send(Signal::Ready).unwrap();
        assert_eq!(machine.current(), Phase::Ready);
    }

    #[test]
    fn test_click_requires_ready() {
        assert_eq!(Phase::IdleDisabled.on_signal(Signal::Click), None);
        assert_eq!(Phase::Busy.on_signal(Signal::Click), None);
    }

    #[test]
    fn test_outcomes_require_busy() {
        assert_eq!(Phase::Ready.on_signal(Signal::Success), None);
        assert_eq!(Phase::Ready.on_signal(Signal::Failure), None);
        assert_eq!(Phase::IdleDisabled.on_signal(Signal::Failure), None);
    }

    #[test]
    fn test_terminal_phases_reject_interaction() {
        for phase in [Phase::Succeeded, Phase::Failed] {
            assert!(phase.is_terminal());
            assert_eq!(phase.on_signal(Signal::Click), None);
            assert_eq!(phase.on_signal(Signal::Success), None);
            assert_eq!(phase.on_signal(Signal::Failure), None);
        }
        assert!(!Phase::Busy.is_terminal());
    }
}
