//! # Pressmark Icons
//!
//! Outcome glyphs for the trigger button, shipped as inline SVG markup.
//!
//! The two glyphs are Bootstrap-icons shapes (`check-lg` and `x-lg`) on a
//! 16×16 viewBox. Their markup is a fixed contract with the host page's
//! stylesheet — the `bi` classes and the checkmark's `id` attribute are
//! styling hooks — so the full strings are carried verbatim rather than
//! assembled at runtime.
//!
//! ## Usage
//!
//! ```rust
//! use pressmark_icons::Icon;
//!
//! let svg = Icon::Checkmark.markup();
//! assert!(svg.starts_with("<svg"));
//! ```

/// SVG path data for each glyph (inner `d` attribute content).
pub mod glyphs {
    /// Bootstrap `check-lg`.
    pub const CHECKMARK: &str = "M12.736 3.97a.733.733 0 0 1 1.047 0c.286.289.29.756.01 1.05L7.88 12.01a.733.733 0 0 1-1.065.02L3.217 8.384a.757.757 0 0 1 0-1.06.733.733 0 0 1 1.047 0l3.052 3.093 5.4-6.425a.247.247 0 0 1 .02-.022Z";

    /// Bootstrap `x-lg`.
    pub const CROSS: &str = "M2.146 2.854a.5.5 0 1 1 .708-.708L8 7.293l5.146-5.147a.5.5 0 0 1 .708.708L8.707 8l5.147 5.146a.5.5 0 0 1-.708.708L8 8.707l-5.146 5.147a.5.5 0 0 1-.708-.708L7.293 8 2.146 2.854Z";
}

/// Shared viewBox (both glyphs are 16x16).
pub const VIEW_BOX: &str = "0 0 16 16";

const CHECKMARK_MARKUP: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"checkmark\" class=\"bi bi-check-lg\" viewBox=\"0 0 16 16\"><path d=\"M12.736 3.97a.733.733 0 0 1 1.047 0c.286.289.29.756.01 1.05L7.88 12.01a.733.733 0 0 1-1.065.02L3.217 8.384a.757.757 0 0 1 0-1.06.733.733 0 0 1 1.047 0l3.052 3.093 5.4-6.425a.247.247 0 0 1 .02-.022Z\"/></svg>";

const CROSS_MARKUP: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"bi bi-x-lg\" viewBox=\"0 0 16 16\"><path d=\"M2.146 2.854a.5.5 0 1 1 .708-.708L8 7.293l5.146-5.147a.5.5 0 0 1 .708.708L8.707 8l5.147 5.146a.5.5 0 0 1-.708.708L8 8.707l-5.146 5.147a.5.5 0 0 1-.708-.708L7.293 8 2.146 2.854Z\"/></svg>";

/// The fixed set of outcome glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Checkmark shown on success.
    Checkmark,
    /// X shown on failure.
    Cross,
}

impl Icon {
    /// The glyph's SVG path data.
    pub fn path_data(self) -> &'static str {
        match self {
            Icon::Checkmark => glyphs::CHECKMARK,
            Icon::Cross => glyphs::CROSS,
        }
    }

    /// The complete inline `<svg>` markup written into the label.
    pub fn markup(self) -> &'static str {
        match self {
            Icon::Checkmark => CHECKMARK_MARKUP,
            Icon::Cross => CROSS_MARKUP,
        }
    }
}
