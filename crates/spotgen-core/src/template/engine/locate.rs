//! Region location over raw template text
//!
//! Markers are found with forward-only literal scans over the whole text.
//! Nothing here backtracks: a tag region is the unique opener plus the
//! nearest closer, and an anchor label is bounded by the previous anchor.

use crate::template::signature::TagRegion;
use serde::Serialize;

/// Byte range into the template, always on char boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice of `text` covered by this span
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Outcome of locating a tag region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagMatch {
    /// Inner span between the opener and the nearest closer
    Found(Span),
    /// Opener does not appear
    Missing,
    /// Opener appears but no closer follows it
    Unterminated,
    /// Opener appears this many times
    Ambiguous(usize),
}

/// Locate the inner content of a tag region
///
/// The opener must appear exactly once. Matching is non-greedy: the region
/// ends at the first closer after the opener, not the last one in the text.
pub(crate) fn locate_tag_region(text: &str, region: &TagRegion) -> TagMatch {
    if region.open.is_empty() || region.close.is_empty() {
        return TagMatch::Missing;
    }

    let mut openers = text.match_indices(region.open.as_str()).map(|(at, _)| at);
    let Some(first) = openers.next() else {
        return TagMatch::Missing;
    };
    let others = openers.count();
    if others > 0 {
        return TagMatch::Ambiguous(others + 1);
    }

    let inner_start = first + region.open.len();
    match text[inner_start..].find(region.close.as_str()) {
        Some(offset) => TagMatch::Found(Span {
            start: inner_start,
            end: inner_start + offset,
        }),
        None => TagMatch::Unterminated,
    }
}

/// Characters allowed in a sub-location label
///
/// Word characters, whitespace, apostrophes and hyphens.
fn is_label_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c.is_whitespace() || c == '\'' || c == '-'
}

/// Whitespace that must separate a label from the text before it
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Locate every label that directly precedes an occurrence of `anchor`
///
/// Spans are returned in ascending order and never overlap.
pub(crate) fn locate_anchor_labels(text: &str, anchor: &str) -> Vec<Span> {
    if anchor.is_empty() {
        return Vec::new();
    }

    let mut spans = Vec::new();
    let mut floor = 0;

    for (at, _) in text.match_indices(anchor) {
        if let Some(span) = label_before(text, floor, at) {
            spans.push(span);
        }
        floor = at + anchor.len();
    }

    spans
}

/// Find the label ending at `anchor_at`, not reaching below `floor`
///
/// The stretch of label characters before the anchor must contain a
/// separator run; the label is whatever follows the first such run. Text
/// before the separator (and the separator itself) is left untouched.
fn label_before(text: &str, floor: usize, anchor_at: usize) -> Option<Span> {
    let window = &text[floor..anchor_at];

    let stretch_start = window
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_label_char(c))
        .last()
        .map(|(i, _)| i)?;
    let stretch = &window[stretch_start..];

    let separator_start = stretch.find(is_separator)?;
    let label_offset = stretch[separator_start..]
        .find(|c: char| !is_separator(c))
        .map(|i| separator_start + i)?;

    Some(Span {
        start: floor + stretch_start + label_offset,
        end: anchor_at,
    })
}
