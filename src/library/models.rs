/*!
 * Library catalog entity models.
 *
 * These structures map rows of the Podcasts library database to type-safe
 * values for the export pipeline.
 */

use chrono::{DateTime, TimeZone, Utc};

/// Seconds between the Unix epoch and the 2001-01-01 reference date the
/// library database counts from.
const APPLE_EPOCH_OFFSET_SECS: i64 = 978_307_200;

/// One downloaded episode row from the library catalog
#[derive(Debug, Clone)]
pub struct Episode {
    /// Show author
    pub author: String,

    /// Show title
    pub podcast: String,

    /// Episode title
    pub title: String,

    /// `file://` URL of the downloaded media asset
    pub asset_url: String,

    /// Publication date
    pub pub_date: DateTime<Utc>,

    /// Episode duration in seconds
    pub duration: f64,

    /// Identifier of the cached transcript document, when one exists
    pub transcript_id: Option<String>,
}

impl Episode {
    /// Convert the library's reference-date seconds to a UTC date.
    pub fn date_from_reference_secs(secs: f64) -> DateTime<Utc> {
        Utc.timestamp_opt(APPLE_EPOCH_OFFSET_SECS + secs as i64, 0)
            .single()
            .unwrap_or_default()
    }

    /// Display identity used in per-item progress and error reporting.
    pub fn identity(&self) -> String {
        format!("{} - {}", self.podcast, self.title)
    }
}
