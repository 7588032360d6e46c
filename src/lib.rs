/*!
 * # podex - Podcasts episode and transcript exporter
 *
 * A Rust library for exporting downloaded podcast episodes and converting
 * their timed-text transcripts.
 *
 * ## Features
 *
 * - Enumerate downloaded episodes from the Podcasts library catalog
 * - Copy media files and cached transcript documents out of the library
 * - Convert timed-text transcripts to plain text
 * - Convert timed-text transcripts to SRT subtitles
 * - Batch processing with per-item failure reporting
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `timecode`: Timecode parsing and normalization
 * - `transcript`: Timed-text transcript conversion:
 *   - `transcript::normalizer`: Tag-aware markup normalization passes
 *   - `transcript::plain_text`: Plain-text transcript rendering
 *   - `transcript::captions`: Sentence-cue extraction
 *   - `transcript::subtitle`: Subtitle block rendering
 * - `library`: Read-only Podcasts library catalog access
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod library;
pub mod timecode;
pub mod transcript;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{BatchSummary, Controller};
pub use errors::{AppError, LibraryError, TranscriptError};
pub use library::{Episode, LibraryStore};
pub use timecode::TimeCode;
pub use transcript::{Caption, render_plain_text, render_subtitles};
