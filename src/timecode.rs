use std::fmt;

use crate::errors::TranscriptError;

// @module: Timecode parsing and normalization

/// A point in time expressed as hours, minutes, seconds and milliseconds.
///
/// Transcript markup writes clock values with higher-order units omitted for
/// short durations ("5" is five seconds, "1:02" is one minute two seconds)
/// and without any leading-zero padding. Parsing normalizes both: missing
/// groups default to zero by position from the right, and rendering always
/// yields zero-padded `HH:MM:SS`. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeCode {
    hours: u32,
    minutes: u32,
    seconds: u32,
    milliseconds: u32,
}

impl TimeCode {
    /// Parse a clock string of 1-3 colon-separated digit groups, with an
    /// optional fractional-seconds suffix (`1:02:03.500`).
    ///
    /// Fails with `MalformedTimecode` if any group is non-numeric or more
    /// than three groups are present.
    pub fn parse(raw: &str) -> Result<Self, TranscriptError> {
        let malformed = || TranscriptError::MalformedTimecode {
            raw: raw.to_string(),
        };

        let (clock, fraction) = match raw.split_once('.') {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (raw, None),
        };

        let milliseconds = match fraction {
            Some(digits) => {
                if digits.is_empty()
                    || digits.len() > 3
                    || !digits.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(malformed());
                }
                let value: u32 = digits.parse().map_err(|_| malformed())?;
                // Fractional seconds: "5" means 500ms, not 5ms
                value * 10u32.pow(3 - digits.len() as u32)
            }
            None => 0,
        };

        let groups: Vec<&str> = clock.split(':').collect();
        if groups.len() > 3 {
            return Err(malformed());
        }

        // Missing higher-order groups default to zero, assigned by position
        // from the right: a single group is seconds, two are minutes:seconds.
        let mut fields = [0u32; 3];
        for (field, group) in fields.iter_mut().rev().zip(groups.iter().rev()) {
            if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            *field = group.parse().map_err(|_| malformed())?;
        }

        Ok(TimeCode {
            hours: fields[0],
            minutes: fields[1],
            seconds: fields[2],
            milliseconds,
        })
    }

    /// Render as zero-padded `HH:MM:SS`, regardless of input padding.
    pub fn render(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Fractional-seconds component (0-999); not part of the rendered clock.
    pub fn milliseconds(&self) -> u32 {
        self.milliseconds
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
