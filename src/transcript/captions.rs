use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::TranscriptError;
use crate::timecode::TimeCode;

// @module: Caption extraction from normalized transcript markup

// @const: Sentence cue pattern, matched against one normalized line
static SENTENCE_CUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^<span begin="(?P<begin>[\d:]+)\.(?P<begin_ms>\d{3})" end="(?P<end>[\d:]+)\.(?P<end_ms>\d{3})" podcasts:unit="sentence">(?P<text>[^<]+)</span>$"#,
    )
    .unwrap()
});

/// Trimmed lengths at or below this are markup residue, skipped silently.
/// Longer lines that fail to match the cue pattern are hard errors; the
/// filter and the failure are two deliberately different policies.
const NOISE_LINE_MAX_CHARS: usize = 3;

// @struct: Single subtitle cue
#[derive(Debug, Clone)]
pub struct Caption {
    // @field: 1-based sequence number
    pub index: usize,

    // @field: Cue start clock
    pub start: TimeCode,

    // @field: Start milliseconds (0-999)
    pub start_ms: u32,

    // @field: Cue end clock
    pub end: TimeCode,

    // @field: End milliseconds (0-999)
    pub end_ms: u32,

    // @field: Sentence text, non-empty after trim
    pub text: String,
}

/// Walks normalized caption-pass output and recovers the ordered sequence
/// of sentence cues.
pub struct CaptionExtractor;

impl CaptionExtractor {
    /// Extract captions from caption-pass output, one candidate per line.
    ///
    /// Lines of trimmed length 3 or less never produce a caption or an
    /// error. A longer line that does not match the sentence-cue pattern is
    /// an input-format violation and fails the whole document rather than
    /// being skipped. The caption index increments only for matched lines.
    pub fn extract(normalized: &str) -> Result<Vec<Caption>, TranscriptError> {
        let mut captions = Vec::new();
        let mut index = 0;

        for (line_at, line) in normalized.lines().enumerate() {
            let line = line.trim();
            if line.chars().count() <= NOISE_LINE_MAX_CHARS {
                continue;
            }

            let malformed = || TranscriptError::MalformedCaptionLine {
                line_number: line_at + 1,
                content: line.to_string(),
            };

            let cue = SENTENCE_CUE_REGEX.captures(line).ok_or_else(malformed)?;

            let start = TimeCode::parse(&cue["begin"])?;
            let end = TimeCode::parse(&cue["end"])?;
            // Three digits by construction of the pattern
            let start_ms: u32 = cue["begin_ms"].parse().unwrap_or(0);
            let end_ms: u32 = cue["end_ms"].parse().unwrap_or(0);

            let text = cue["text"].trim();
            if text.is_empty() {
                return Err(malformed());
            }

            index += 1;
            captions.push(Caption {
                index,
                start,
                start_ms,
                end,
                end_ms,
                text: text.to_string(),
            });
        }

        Ok(captions)
    }
}
