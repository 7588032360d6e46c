use super::normalizer::MarkupNormalizer;

// @module: Plain-text transcript rendering

/// Produces the readable transcript from raw markup.
///
/// The text normalization pass already embodies the whole conversion; the
/// converter returns its output as-is. Empty input yields empty output, and
/// malformed markup degrades to best-effort stripped text rather than an
/// error.
pub struct PlainTextConverter;

impl PlainTextConverter {
    pub fn render(markup: &str) -> String {
        MarkupNormalizer::text_pass(markup)
    }
}
