use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use url::Url;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::library::{Episode, LibraryStore};
use crate::transcript;

// @module: Application controller for episode export and transcript conversion

/// Outcome counts for a batch operation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Items fully processed
    pub succeeded: usize,
    /// Items skipped because their outputs already exist
    pub skipped: usize,
    /// Items that failed and were reported without aborting the batch
    pub failed: usize,
}

/// Main application controller for episode export
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Export every downloaded episode in the library to the output directory.
    ///
    /// Episodes are processed strictly sequentially; a failure on one is
    /// reported with the episode's identity and never aborts the batch.
    pub fn run_export(&self, output_dir: &Path) -> Result<BatchSummary> {
        let start_time = std::time::Instant::now();

        let store = match &self.config.library_container {
            Some(container) => LibraryStore::open(container)?,
            None => LibraryStore::open_default()?,
        };

        let episodes = store.downloaded_episodes()?;
        if episodes.is_empty() {
            warn!("No downloaded episodes found in the library");
            return Ok(BatchSummary::default());
        }

        FileManager::ensure_dir(output_dir)?;

        let progress = Self::batch_progress_bar(episodes.len(), "episodes");

        let mut summary = BatchSummary::default();
        for episode in &episodes {
            progress.set_message(format!("Exporting: {}", episode.identity()));

            match self.export_episode(&store, episode, output_dir) {
                Ok(()) => summary.succeeded += 1,
                Err(e) => {
                    error!("Error exporting {}: {}", episode.identity(), e);
                    summary.failed += 1;
                }
            }

            progress.inc(1);
        }

        progress.finish_with_message("Export complete");

        info!(
            "Export completed in {:.1?}: {} exported, {} errors",
            start_time.elapsed(),
            summary.succeeded,
            summary.failed
        );

        Ok(summary)
    }

    /// Export one episode: media copy, transcript copy, and both conversions.
    fn export_episode(&self, store: &LibraryStore, episode: &Episode, output_dir: &Path) -> Result<()> {
        let podcast_dir = output_dir.join(FileManager::sanitize_component(&episode.podcast));
        FileManager::ensure_dir(&podcast_dir)?;

        let base_name = self.destination_base_name(episode);
        let source_media = Self::asset_path(&episode.asset_url)?;

        if self.config.export.copy_media {
            let extension = source_media
                .extension()
                .map(|ext| ext.to_string_lossy().to_string())
                .unwrap_or_else(|| "mp3".to_string());
            let dest_media = podcast_dir.join(format!("{}.{}", base_name, extension));

            if extension == "movpkg" {
                // Packaged streaming download, not a flat media file
                warn!(
                    "{}: media is a streaming package and may require further conversion",
                    episode.identity()
                );
                FileManager::copy_dir(&source_media, &dest_media)?;
            } else {
                FileManager::copy_file(&source_media, &dest_media)?;
            }
        }

        let Some(transcript_id) = &episode.transcript_id else {
            debug!("{}: no transcript available", episode.identity());
            return Ok(());
        };

        let source_transcript = store.transcript_path(transcript_id);
        if !FileManager::file_exists(&source_transcript) {
            warn!(
                "{}: transcript {:?} is not cached locally",
                episode.identity(),
                source_transcript
            );
            return Ok(());
        }

        if self.config.export.keep_transcript_source {
            FileManager::copy_file(&source_transcript, podcast_dir.join(format!("{}.ttml", base_name)))?;
        }

        let markup = FileManager::read_to_string(&source_transcript)?;
        self.write_conversions(&markup, &podcast_dir, &base_name)
    }

    /// Convert a single transcript document to its sibling text and
    /// subtitle outputs.
    pub fn convert_file(&self, input_file: &Path, output_dir: &Path, force_overwrite: bool) -> Result<()> {
        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let base_name = input_file
            .file_stem()
            .ok_or_else(|| anyhow!("Input file has no name: {:?}", input_file))?
            .to_string_lossy()
            .to_string();

        // Base names routinely contain dots, so extensions are appended
        // rather than substituted.
        let text_path = output_dir.join(format!("{}.txt", base_name));
        let subtitle_path = output_dir.join(format!("{}.srt", base_name));
        if text_path.exists() && subtitle_path.exists() && !force_overwrite {
            warn!("Skipping file, outputs already exist (use -f to force overwrite)");
            return Ok(());
        }

        let markup = FileManager::read_to_string(input_file)?;
        self.write_conversions(&markup, output_dir, &base_name)
    }

    /// Convert every transcript document under a directory.
    ///
    /// Outputs are written beside their inputs. Files that fail conversion
    /// are reported and the remaining files still processed.
    pub fn convert_folder(&self, input_dir: &Path, force_overwrite: bool) -> Result<BatchSummary> {
        if !input_dir.exists() {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let transcripts = FileManager::find_files(input_dir, "ttml")?;
        if transcripts.is_empty() {
            return Err(anyhow!(
                "No transcript documents found in directory: {:?}",
                input_dir
            ));
        }

        let progress = Self::batch_progress_bar(transcripts.len(), "files");

        let mut summary = BatchSummary::default();
        for transcript_file in &transcripts {
            let file_name = transcript_file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            progress.set_message(format!("Converting: {}", file_name));

            let output_dir = transcript_file
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| input_dir.to_path_buf());

            let base_name = transcript_file
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy();
            if output_dir.join(format!("{}.txt", base_name)).exists()
                && output_dir.join(format!("{}.srt", base_name)).exists()
                && !force_overwrite
            {
                warn!("Skipping file, outputs already exist (use -f to force overwrite)");
                summary.skipped += 1;
                progress.inc(1);
                continue;
            }

            match self.convert_file(transcript_file, &output_dir, force_overwrite) {
                Ok(()) => summary.succeeded += 1,
                Err(e) => {
                    error!("Error converting {}: {}", file_name, e);
                    summary.failed += 1;
                }
            }

            progress.inc(1);
        }

        progress.finish_with_message("Conversion complete");

        info!(
            "Folder conversion completed: {} converted, {} skipped, {} errors",
            summary.succeeded, summary.skipped, summary.failed
        );

        Ok(summary)
    }

    /// Render and write both derived artifacts for one transcript document.
    ///
    /// The plain-text output is written first so a caption failure still
    /// leaves the readable transcript behind, matching the per-item error
    /// reporting at the batch level.
    fn write_conversions(&self, markup: &str, output_dir: &Path, base_name: &str) -> Result<()> {
        let plain_text = transcript::render_plain_text(markup);
        FileManager::write_to_file(output_dir.join(format!("{}.txt", base_name)), &plain_text)?;

        let subtitles = transcript::render_subtitles(markup)
            .with_context(|| format!("Failed to extract captions for {}", base_name))?;
        FileManager::write_to_file(output_dir.join(format!("{}.srt", base_name)), &subtitles)?;

        Ok(())
    }

    /// Destination base name: `<date>-<title>-(<author>)`, sanitized and
    /// truncated the same way for every artifact of an episode.
    fn destination_base_name(&self, episode: &Episode) -> String {
        let title = FileManager::sanitize_component(&episode.title);
        let author = FileManager::sanitize_component(&episode.author);

        format!(
            "{}-{}-({})",
            episode.pub_date.format("%Y.%m.%d"),
            FileManager::truncate_chars(&title, self.config.export.max_title_chars),
            FileManager::truncate_chars(&author, self.config.export.max_author_chars),
        )
    }

    /// Resolve a catalog `file://` asset URL to a filesystem path.
    fn asset_path(asset_url: &str) -> Result<PathBuf> {
        let url = Url::parse(asset_url)
            .with_context(|| format!("Invalid asset URL: {}", asset_url))?;
        url.to_file_path()
            .map_err(|_| anyhow!("Asset URL is not a local file: {}", asset_url))
    }

    /// Progress bar for batch processing
    fn batch_progress_bar(total: usize, noun: &str) -> ProgressBar {
        let progress = ProgressBar::new(total as u64);
        let template = format!(
            "{{spinner:.green}} [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {} ({{percent}}%) {{msg}}",
            noun
        );
        let style = ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress.set_style(style.progress_chars("█▓▒░"));
        progress
    }
}
