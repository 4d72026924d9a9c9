//! Pressmark Core
//!
//! Foundational primitives for the pressmark trigger button:
//!
//! - **Guarded state machines**: typed transition tables where undefined
//!   transitions are rejected, not performed
//! - **Phase vocabulary**: the visual phases of the button and the external
//!   signals that move it between them
//!
//! # Example
//!
//! ```rust
//! use pressmark_core::{Phase, Signal, StateMachine};
//!
//! let mut machine = StateMachine::new(Phase::IdleDisabled);
//!
//! machine.send(Signal::Ready).unwrap();
//! machine.send(Signal::Click).unwrap();
//! machine.send(Signal::Success).unwrap();
//! assert_eq!(machine.current(), Phase::Succeeded);
//!
//! // Terminal: a second click is rejected
//! assert_eq!(machine.send(Signal::Click), None);
//! ```

pub mod fsm;
pub mod phase;

pub use fsm::{StateMachine, Transitions};
pub use phase::{Phase, Signal};
