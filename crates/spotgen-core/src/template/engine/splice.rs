//! Span replacement

use super::locate::Span;

/// Replace each span of `text` with `replacement`
///
/// Spans must be sorted and non-overlapping. Bytes outside the spans are
/// copied verbatim into a freshly allocated string.
pub(crate) fn splice(text: &str, spans: &[Span], replacement: &str) -> String {
    let removed: usize = spans.iter().map(Span::len).sum();
    let mut output =
        String::with_capacity(text.len() - removed + spans.len() * replacement.len());
    let mut cursor = 0;

    for span in spans {
        debug_assert!(span.start >= cursor, "spans must be sorted and disjoint");
        output.push_str(&text[cursor..span.start]);
        output.push_str(replacement);
        cursor = span.end;
    }

    output.push_str(&text[cursor..]);
    output
}
