//! Retained page element model
//!
//! A minimal slotmap-backed page: elements are looked up by string id once
//! at startup, then addressed by key. Pages are insert-only — the host owns
//! element lifecycle — so stored keys stay valid for the life of the page.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use thiserror::Error;

new_key_type! {
    /// Stable handle to an element in a page
    pub struct ElementKey;
}

/// Page lookup errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PageError {
    /// No element with the requested id exists in the page
    #[error("element not found: #{0}")]
    ElementNotFound(String),
}

/// Result type for page operations
pub type Result<T> = std::result::Result<T, PageError>;

/// A single page element: enabled/disabled flag, class tags, inner markup.
#[derive(Clone, Debug, Default)]
pub struct Element {
    id: String,
    disabled: bool,
    classes: SmallVec<[String; 4]>,
    inner_markup: String,
}

impl Element {
    /// Create an element with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the initial disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Add an initial class tag.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    /// Set the initial inner markup.
    pub fn markup(mut self, markup: impl Into<String>) -> Self {
        self.inner_markup = markup.into();
        self
    }

    /// The element's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the element is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Set the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether a class tag is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class tag. Adding a tag that is already present is a no-op,
    /// matching class-list semantics.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove a class tag if present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// The current class tags.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The current inner markup.
    pub fn inner_markup(&self) -> &str {
        &self.inner_markup
    }

    /// Replace the inner markup wholesale.
    pub fn set_inner_markup(&mut self, markup: impl Into<String>) {
        self.inner_markup = markup.into();
    }
}

/// An insert-only tree of elements with an id index.
pub struct Page {
    elements: SlotMap<ElementKey, Element>,
    by_id: FxHashMap<String, ElementKey>,
}

impl Page {
    /// Create an empty page.
    pub fn new() -> Self {
        Self {
            elements: SlotMap::with_key(),
            by_id: FxHashMap::default(),
        }
    }

    /// Insert an element and index it by id. Inserting a second element
    /// with the same id re-points the index to the newer element.
    pub fn insert(&mut self, element: Element) -> ElementKey {
        let id = element.id().to_string();
        let key = self.elements.insert(element);
        self.by_id.insert(id, key);
        key
    }

    /// Resolve an element id to its key.
    pub fn lookup(&self, id: &str) -> Result<ElementKey> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| PageError::ElementNotFound(id.to_string()))
    }

    /// Get an element by key.
    ///
    /// Panics if the key came from a different page. Keys handed out by
    /// [`Page::insert`] stay valid because pages never remove elements.
    pub fn get(&self, key: ElementKey) -> &Element {
        &self.elements[key]
    }

    /// Get a mutable element by key. Same key contract as [`Page::get`].
    pub fn get_mut(&mut self, key: ElementKey) -> &mut Element {
        &mut self.elements[key]
    }

    /// Number of elements in the page.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the page has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
