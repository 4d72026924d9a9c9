//! Trigger-button state presenter
//!
//! Owns handles to the host page's control and label elements and applies
//! the visual effect of each accepted phase transition: enable on host
//! readiness, disable with loading styling while the action runs, then
//! terminal success or failure styling with a swapped glyph.
//!
//! Signals with no defined transition from the current phase are rejected
//! no-ops: the page is left untouched and the rejection is logged.
//!
//! # Example
//!
//! ```rust
//! use pressmark_widgets::{ids, ButtonPresenter, Element, Page};
//!
//! let mut page = Page::new();
//! page.insert(Element::new(ids::CONTROL).disabled(true).class("btn-primary"));
//! page.insert(Element::new(ids::LABEL).markup("Trigger"));
//!
//! let mut button = ButtonPresenter::new(&page).unwrap();
//! button.mark_ready(&mut page);
//! button.mark_busy(&mut page);
//! button.mark_succeeded(&mut page);
//! ```

use pressmark_core::{Phase, Signal, StateMachine};
use pressmark_icons::Icon;
use tracing::{debug, warn};

use crate::element::{ElementKey, Page, Result};

/// Host markup contract: element ids resolved once at construction.
pub mod ids {
    /// The clickable control.
    pub const CONTROL: &str = "load-button";
    /// The sub-element whose content is swapped on terminal outcomes.
    pub const LABEL: &str = "button-text";
}

/// Stylesheet contract: class tags toggled on the control.
pub mod tags {
    /// Present while the asynchronous action runs.
    pub const LOADING: &str = "button-loading";
    /// Default styling. Removed when a terminal tag is added.
    pub const PRIMARY: &str = "btn-primary";
    /// Terminal success styling.
    pub const SUCCESS: &str = "btn-success";
    /// Terminal failure styling.
    pub const DANGER: &str = "btn-danger";
}

/// Presenter for the single trigger button.
///
/// Constructed once at startup from the host page; the four `mark_*`
/// operations are driven by the host's own callbacks (page load, the
/// control's click handler, and the action's completion handlers).
pub struct ButtonPresenter {
    control: ElementKey,
    label: ElementKey,
    machine: StateMachine<Phase>,
}

impl ButtonPresenter {
    /// Resolve the control and label elements and start in
    /// [`Phase::IdleDisabled`].
    ///
    /// Fails with [`PageError::ElementNotFound`] if the host page is missing
    /// either element.
    ///
    /// [`PageError::ElementNotFound`]: crate::element::PageError::ElementNotFound
    pub fn new(page: &Page) -> Result<Self> {
        let control = page.lookup(ids::CONTROL)?;
        let label = page.lookup(ids::LABEL)?;

        Ok(Self {
            control,
            label,
            machine: StateMachine::new(Phase::INITIAL),
        })
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.machine.current()
    }

    /// The host page finished initializing: enable the control.
    ///
    /// Accepted from any phase; entering a terminal phase first does not
    /// undo its styling.
    pub fn mark_ready(&mut self, page: &mut Page) -> bool {
        self.signal(page, Signal::Ready)
    }

    /// The control was clicked: disable it and show loading styling.
    pub fn mark_busy(&mut self, page: &mut Page) -> bool {
        self.signal(page, Signal::Click)
    }

    /// The action succeeded: terminal success styling and checkmark glyph.
    pub fn mark_succeeded(&mut self, page: &mut Page) -> bool {
        self.signal(page, Signal::Success)
    }

    /// The action failed: terminal failure styling and X glyph.
    pub fn mark_failed(&mut self, page: &mut Page) -> bool {
        self.signal(page, Signal::Failure)
    }

    /// Send a signal and apply the entry effect of the phase reached.
    /// Returns whether the transition was accepted.
    fn signal(&mut self, page: &mut Page, signal: Signal) -> bool {
        let from = self.machine.current();
        let Some(next) = self.machine.send(signal) else {
            warn!(phase = ?from, signal = ?signal, "signal rejected");
            return false;
        };

        debug!(from = ?from, signal = ?signal, to = ?next, "phase change");
        self.apply(page, next);
        true
    }

    fn apply(&self, page: &mut Page, phase: Phase) {
        match phase {
            // Initial phase only; never re-entered.
            Phase::IdleDisabled => {}
            Phase::Ready => {
                page.get_mut(self.control).set_disabled(false);
            }
            Phase::Busy => {
                let control = page.get_mut(self.control);
                control.set_disabled(true);
                control.add_class(tags::LOADING);
            }
            Phase::Succeeded => self.finish(page, Icon::Checkmark, tags::SUCCESS),
            Phase::Failed => self.finish(page, Icon::Cross, tags::DANGER),
        }
    }

    /// Shared terminal effect: clear loading, swap the glyph, trade the
    /// default tag for the outcome tag, and keep the control disabled.
    fn finish(&self, page: &mut Page, icon: Icon, outcome_tag: &str) {
        let control = page.get_mut(self.control);
        control.remove_class(tags::LOADING);
        control.add_class(outcome_tag);
        control.remove_class(tags::PRIMARY);
        control.set_disabled(true);

        page.get_mut(self.label).set_inner_markup(icon.markup());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, PageError};

    /// Build the host markup contract: disabled primary control + label.
    fn host_page() -> (Page, ButtonPresenter) {
        let mut page = Page::new();
        page.insert(
            Element::new(ids::CONTROL)
                .disabled(true)
                .class(tags::PRIMARY),
        );
        page.insert(Element::new(ids::LABEL).markup("Trigger"));

        let button = ButtonPresenter::new(&page).unwrap();
        (page, button)
    }

    fn control(page: &Page) -> &Element {
        page.get(page.lookup(ids::CONTROL).unwrap())
    }

    fn label(page: &Page) -> &Element {
        page.get(page.lookup(ids::LABEL).unwrap())
    }

    #[test]
    fn test_construction_requires_both_elements() {
        let mut page = Page::new();
        assert_eq!(
            ButtonPresenter::new(&page).err(),
            Some(PageError::ElementNotFound(ids::CONTROL.to_string()))
        );

        page.insert(Element::new(ids::CONTROL));
        assert_eq!(
            ButtonPresenter::new(&page).err(),
            Some(PageError::ElementNotFound(ids::LABEL.to_string()))
        );

        page.insert(Element::new(ids::LABEL));
        assert!(ButtonPresenter::new(&page).is_ok());
    }

    #[test]
    fn test_ready_enables_control() {
        let (mut page, mut button) = host_page();
        assert!(control(&page).is_disabled());

        assert!(button.mark_ready(&mut page));
        assert!(!control(&page).is_disabled());
        assert_eq!(button.phase(), Phase::Ready);
    }

    #[test]
    fn test_ready_is_idempotent() {
        let (mut page, mut button) = host_page();
        button.mark_ready(&mut page);

        let before = control(&page).clone();
        assert!(button.mark_ready(&mut page));

        let after = control(&page);
        assert_eq!(after.is_disabled(), before.is_disabled());
        assert_eq!(after.classes(), before.classes());
        assert_eq!(button.phase(), Phase::Ready);
    }

    #[test]
    fn test_busy_disables_and_adds_loading() {
        let (mut page, mut button) = host_page();
        button.mark_ready(&mut page);

        assert!(button.mark_busy(&mut page));
        assert!(control(&page).is_disabled());
        assert!(control(&page).has_class(tags::LOADING));
        assert_eq!(button.phase(), Phase::Busy);
    }

    #[test]
    fn test_succeeded_styles_and_swaps_glyph() {
        let (mut page, mut button) = host_page();
        button.mark_ready(&mut page);
        button.mark_busy(&mut page);

        assert!(button.mark_succeeded(&mut page));
        let c = control(&page);
        assert!(!c.has_class(tags::LOADING));
        assert!(c.has_class(tags::SUCCESS));
        assert!(!c.has_class(tags::PRIMARY));
        assert!(c.is_disabled());
        assert_eq!(label(&page).inner_markup(), Icon::Checkmark.markup());
    }

    #[test]
    fn test_failed_styles_and_swaps_glyph() {
        let (mut page, mut button) = host_page();
        button.mark_ready(&mut page);
        button.mark_busy(&mut page);

        assert!(button.mark_failed(&mut page));
        let c = control(&page);
        assert!(!c.has_class(tags::LOADING));
        assert!(c.has_class(tags::DANGER));
        assert!(!c.has_class(tags::PRIMARY));
        assert!(c.is_disabled());
        assert_eq!(label(&page).inner_markup(), Icon::Cross.markup());
    }

    #[test]
    fn test_rejected_signal_leaves_page_untouched() {
        let (mut page, mut button) = host_page();

        // Click before ready
        assert!(!button.mark_busy(&mut page));
        assert!(control(&page).is_disabled());
        assert!(!control(&page).has_class(tags::LOADING));
        assert_eq!(button.phase(), Phase::IdleDisabled);

        // Outcome before any click
        button.mark_ready(&mut page);
        assert!(!button.mark_succeeded(&mut page));
        assert!(!control(&page).has_class(tags::SUCCESS));
        assert_eq!(label(&page).inner_markup(), "Trigger");
        assert_eq!(button.phase(), Phase::Ready);
    }

    #[test]
    fn test_terminal_phases_reject_further_interaction() {
        let (mut page, mut button) = host_page();
        button.mark_ready(&mut page);
        button.mark_busy(&mut page);
        button.mark_succeeded(&mut page);

        assert!(!button.mark_busy(&mut page));
        assert!(!button.mark_failed(&mut page));
        assert_eq!(button.phase(), Phase::Succeeded);
        assert!(control(&page).has_class(tags::SUCCESS));
    }

    #[test]
    fn test_ready_after_terminal_keeps_styling() {
        let (mut page, mut button) = host_page();
        button.mark_ready(&mut page);
        button.mark_busy(&mut page);
        button.mark_failed(&mut page);

        // Host re-init re-enables the control but does not undo the outcome
        assert!(button.mark_ready(&mut page));
        let c = control(&page);
        assert!(!c.is_disabled());
        assert!(c.has_class(tags::DANGER));
        assert_eq!(label(&page).inner_markup(), Icon::Cross.markup());
    }

    #[test]
    fn test_full_success_scenario() {
        let (mut page, mut button) = host_page();

        button.mark_ready(&mut page);
        assert!(!control(&page).is_disabled());

        button.mark_busy(&mut page);
        assert!(control(&page).is_disabled());
        assert!(control(&page).has_class(tags::LOADING));

        button.mark_succeeded(&mut page);
        assert!(control(&page).is_disabled());
        assert!(control(&page).has_class(tags::SUCCESS));
        assert!(!control(&page).has_class(tags::LOADING));
        assert_eq!(label(&page).inner_markup(), Icon::Checkmark.markup());
    }
}
