use std::fmt;

use super::captions::Caption;

// @module: Subtitle rendering in the numbered, timestamp-ranged format

impl fmt::Display for Caption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(
            f,
            "{},{:03} --> {},{:03}",
            self.start.render(),
            self.start_ms,
            self.end.render(),
            self.end_ms
        )?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Renders an ordered caption sequence into subtitle text.
///
/// Blocks are concatenated in sequence order with the caption's own index;
/// no renumbering is performed. The comma between seconds and milliseconds
/// and the `-->` range separator are compatibility requirements for common
/// subtitle consumers.
pub struct SubtitleFormatter;

impl SubtitleFormatter {
    /// Render all captions. An empty sequence yields an empty string.
    pub fn render(captions: &[Caption]) -> String {
        let mut out = String::new();
        for caption in captions {
            out.push_str(&caption.to_string());
        }
        out
    }
}
