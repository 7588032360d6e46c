/*!
 * Tests for subtitle rendering
 */

use podex::transcript::{self, CaptionExtractor, MarkupNormalizer, SubtitleFormatter};

use crate::common;

/// Test the exact block layout for a single cue
#[test]
fn test_render_subtitles_withSingleCue_shouldMatchExactOutput() {
    let output = transcript::render_subtitles(&common::single_cue_transcript()).unwrap();
    assert_eq!(output, "1\n00:01:02,500 --> 00:01:05,250\nHello world\n\n");
}

/// Test an empty caption sequence renders to an empty string
#[test]
fn test_render_withNoCaptions_shouldYieldEmptyString() {
    assert_eq!(SubtitleFormatter::render(&[]), "");
}

/// Test non-empty output always ends with a blank line
#[test]
fn test_render_subtitles_withSampleTranscript_shouldEndWithBlankLine() {
    let output = transcript::render_subtitles(&common::sample_transcript()).unwrap();
    assert!(!output.is_empty());
    assert!(output.ends_with("\n\n"));
}

/// Test block indices match extraction order with no renumbering
#[test]
fn test_render_withExtractedCaptions_shouldKeepCaptionIndices() {
    let normalized = MarkupNormalizer::caption_pass(&common::sample_transcript());
    let captions = CaptionExtractor::extract(&normalized).unwrap();
    let output = SubtitleFormatter::render(&captions);

    let indices: Vec<&str> = output
        .split("\n\n")
        .filter(|block| !block.is_empty())
        .map(|block| block.lines().next().unwrap())
        .collect();
    assert_eq!(indices, vec!["1", "2", "3"]);
}

/// Test the range separator and millisecond punctuation
#[test]
fn test_render_subtitles_withSampleTranscript_shouldUseCompatiblePunctuation() {
    let output = transcript::render_subtitles(&common::sample_transcript()).unwrap();

    assert!(output.contains("00:00:00,000 --> 00:00:02,500"));
    assert!(output.contains("00:00:06,000 --> 01:02:03,250"));
    // No decimal-point timestamps may survive into the subtitle output
    for line in output.lines().filter(|line| line.contains("-->")) {
        assert!(!line.contains('.'), "unexpected separator in: {}", line);
    }
}
