//! Guarded state machine runtime
//!
//! A typed take on flat statecharts: the state enum itself owns the
//! transition table. Sending a signal with no defined transition from the
//! current state is a rejected no-op, which makes caller misuse observable
//! instead of silently mutating state.

use std::fmt::Debug;

use tracing::trace;

/// Trait for state enums that define their own transition table.
///
/// Implement this on a state enum and return `None` from [`on_signal`] for
/// every transition the machine must reject.
///
/// [`on_signal`]: Transitions::on_signal
pub trait Transitions: Copy + Eq + Debug {
    /// The signal type that drives transitions.
    type Signal: Copy + Eq + Debug;

    /// The state reached by `signal`, or `None` if no transition is defined
    /// from `self`.
    fn on_signal(self, signal: Self::Signal) -> Option<Self>;
}

/// A state machine instance over a [`Transitions`] state enum.
pub struct StateMachine<S: Transitions> {
    current: S,
    /// History of accepted transitions (for debugging)
    history: Vec<(S, S::Signal, S)>,
}

impl<S: Transitions> StateMachine<S> {
    /// Create a machine resting in `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    /// Get the current state.
    pub fn current(&self) -> S {
        self.current
    }

    /// Check if the machine is in a specific state.
    pub fn is_in(&self, state: S) -> bool {
        self.current == state
    }

    /// Check if a signal would trigger a transition from the current state.
    pub fn can_send(&self, signal: S::Signal) -> bool {
        self.current.on_signal(signal).is_some()
    }

    /// Send a signal to the machine.
    ///
    /// Returns the state reached, or `None` if the transition is undefined —
    /// in which case the machine is left untouched.
    pub fn send(&mut self, signal: S::Signal) -> Option<S> {
        let next = self.current.on_signal(signal)?;
        trace!(from = ?self.current, signal = ?signal, to = ?next, "transition");
        self.history.push((self.current, signal, next));
        self.current = next;
        Some(next)
    }

    /// Get the accepted-transition history.
    pub fn history(&self) -> &[(S, S::Signal, S)] {
        &self.history
    }

    /// Clear the transition history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
