//! Pressmark widget library
//!
//! The trigger-button state presenter and the retained page model it
//! mutates. See [`button::ButtonPresenter`] for the state machine and
//! [`element::Page`] for the host markup contract.

pub mod button;
pub mod element;

pub use button::{ids, tags, ButtonPresenter};
pub use element::{Element, ElementKey, Page, PageError};
