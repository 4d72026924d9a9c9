//! Trigger button demo
//!
//! Replays the host page's flow against an in-memory page: page load fires
//! ready, a click starts the action, and the action eventually resolves.
//! The control's disabled flag and class tags are printed after each signal.
//!
//! Run with:
//! `cargo run -p pressmark_widgets --example trigger_demo`

use pressmark_widgets::{ids, tags, ButtonPresenter, Element, Page, PageError};

fn dump(page: &Page, what: &str) {
    let control = page.get(page.lookup(ids::CONTROL).expect("control present"));
    let label = page.get(page.lookup(ids::LABEL).expect("label present"));
    println!(
        "{what}: disabled={} classes={:?} label={:?}",
        control.is_disabled(),
        control.classes(),
        label.inner_markup()
    );
}

fn main() -> Result<(), PageError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // The host markup contract: a disabled primary control plus its label.
    let mut page = Page::new();
    page.insert(
        Element::new(ids::CONTROL)
            .disabled(true)
            .class(tags::PRIMARY),
    );
    page.insert(Element::new(ids::LABEL).markup("Trigger"));

    let mut button = ButtonPresenter::new(&page)?;
    dump(&page, "initial");

    // Page finished loading.
    button.mark_ready(&mut page);
    dump(&page, "after ready");

    // The user clicks; the host kicks off its asynchronous action.
    button.mark_busy(&mut page);
    dump(&page, "after click");

    // A second click while busy is host misuse: rejected, nothing changes.
    button.mark_busy(&mut page);
    dump(&page, "after duplicate click");

    // The action resolves.
    button.mark_succeeded(&mut page);
    dump(&page, "after success");

    Ok(())
}
