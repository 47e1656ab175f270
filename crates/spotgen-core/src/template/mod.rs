//! Template module - region substitution over an opaque HTML document
//!
//! The template is never parsed as HTML. Three regions are located by fixed
//! signatures and their inner text is spliced out:
//!
//! - **Title**: the inner content of the unique `<title>...</title>` pair
//! - **Location heading**: the inner content of the unique element whose
//!   opening tag matches an exact attribute signature
//! - **Sub-location**: the label immediately before the ` • Last updated`
//!   anchor phrase
//!
//! The two tag regions are strict (missing or duplicated openers are errors).
//! The anchor substitution is lenient and reports a warning instead.
//!
//! Replacement text is inserted verbatim. Escaping is the caller's concern.

pub mod engine;
pub mod error;
pub mod signature;

mod document;

pub use document::{RenderedPage, Template};
pub use engine::{
    Span, TemplateEngine, TemplateInspection, render_location_heading, render_sub_location,
    render_title,
};
pub use error::{RenderError, RenderWarning, Stage};
pub use signature::{Signatures, TagRegion};
