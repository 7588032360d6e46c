/*!
 * Transcript conversion for timed-text markup.
 *
 * This module turns a timed-text transcript document into two derived
 * artifacts: a plain-text transcript and a numbered subtitle document.
 * It is split into several submodules:
 *
 * - `normalizer`: Tag-aware markup normalization passes
 * - `plain_text`: Plain-text transcript rendering
 * - `captions`: Sentence-cue extraction from normalized markup
 * - `subtitle`: Subtitle block rendering
 *
 * Both conversions are pure text-to-text functions over the same immutable
 * input document; regenerating one never requires or affects the other.
 */

// Re-export main types for easier usage
pub use self::captions::{Caption, CaptionExtractor};
pub use self::normalizer::MarkupNormalizer;
pub use self::plain_text::PlainTextConverter;
pub use self::subtitle::SubtitleFormatter;

use crate::errors::TranscriptError;

// Submodules
pub mod captions;
pub mod normalizer;
pub mod plain_text;
pub mod subtitle;

/// Render the plain-text transcript from raw markup.
///
/// Never fails on well-formed-enough input; malformed markup degrades to
/// best-effort stripped text.
pub fn render_plain_text(markup: &str) -> String {
    PlainTextConverter::render(markup)
}

/// Render the numbered subtitle document from raw markup.
pub fn render_subtitles(markup: &str) -> Result<String, TranscriptError> {
    let normalized = MarkupNormalizer::caption_pass(markup);
    let captions = CaptionExtractor::extract(&normalized)?;
    Ok(SubtitleFormatter::render(&captions))
}
