/*!
 * Tests for markup normalization passes
 */

use podex::transcript::MarkupNormalizer;

use crate::common;

/// Test text pass strips every tag
#[test]
fn test_text_pass_withSampleTranscript_shouldContainNoTags() {
    let output = MarkupNormalizer::text_pass(&common::sample_transcript());
    assert!(!output.contains('<'));
    assert!(!output.contains('>'));
}

/// Test text pass puts speaker labels on their own lines
#[test]
fn test_text_pass_withSpeakerParagraphs_shouldIsolateSpeakerLabels() {
    let output = MarkupNormalizer::text_pass(&common::sample_transcript());
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines.contains(&"SPEAKER_1"));
    assert!(lines.contains(&"SPEAKER_2"));
}

/// Test text pass converts span closes to spaces and paragraph closes to newlines
#[test]
fn test_text_pass_withSpansAndParagraphs_shouldRewriteBreaks() {
    let markup = r#"<p begin="0:00" podcasts:speaker="SPEAKER_1"><span>Hi there.</span></p>"#;
    let output = MarkupNormalizer::text_pass(markup);
    assert_eq!(output, "\nSPEAKER_1\nHi there. \n");
}

/// Test text pass leaves paragraphs without a speaker attribute unlabeled
#[test]
fn test_text_pass_withPlainParagraph_shouldOnlyBreakLine() {
    let output = MarkupNormalizer::text_pass("<p>Hello.</p><p>Goodbye.</p>");
    assert_eq!(output, "Hello.\nGoodbye.\n");
}

/// Test text pass on empty input
#[test]
fn test_text_pass_withEmptyInput_shouldYieldEmptyOutput() {
    assert_eq!(MarkupNormalizer::text_pass(""), "");
}

/// Test caption pass puts one sentence cue per line
#[test]
fn test_caption_pass_withSampleTranscript_shouldEmitOneCuePerLine() {
    let output = MarkupNormalizer::caption_pass(&common::sample_transcript());
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert!(line.starts_with("<span begin="), "unexpected line: {}", line);
        assert!(line.ends_with("</span>"), "unexpected line: {}", line);
    }
}

/// Test caption pass unwraps word spans and discards their timing
#[test]
fn test_caption_pass_withWordSpans_shouldUnwrapToText() {
    let output = MarkupNormalizer::caption_pass(&common::sample_transcript());
    assert!(output.contains(">Hello world. </span>"));
    assert!(!output.contains(r#"podcasts:unit="word""#));
}

/// Test caption pass removes structural wrapper tags
#[test]
fn test_caption_pass_withStructuralTags_shouldRemoveThem() {
    let output = MarkupNormalizer::caption_pass(&common::sample_transcript());
    for tag in ["<tt", "<head", "<metadata", "<body", "<div", "<p"] {
        assert!(!output.contains(tag), "expected {} to be removed", tag);
    }
}

/// Test caption pass drops whitespace-only lines
#[test]
fn test_caption_pass_withBlankLines_shouldDropThem() {
    let output = MarkupNormalizer::caption_pass(&common::sample_transcript());
    assert!(output.lines().all(|line| !line.trim().is_empty()));
}

/// Test caption pass re-emits non-structural tags it does not understand
#[test]
fn test_caption_pass_withUnknownTag_shouldKeepItVerbatim() {
    let output = MarkupNormalizer::caption_pass("<body><style id=\"s1\"/>text</body>");
    assert!(output.contains("<style id=\"s1\"/>"));
}

/// Test the two passes are independent views of the same input
#[test]
fn test_passes_withSameInput_shouldNotInterfere() {
    let markup = common::sample_transcript();
    let text_first = MarkupNormalizer::text_pass(&markup);
    let captions = MarkupNormalizer::caption_pass(&markup);
    let text_again = MarkupNormalizer::text_pass(&markup);

    assert_eq!(text_first, text_again);
    assert!(captions.contains("podcasts:unit=\"sentence\""));
}
