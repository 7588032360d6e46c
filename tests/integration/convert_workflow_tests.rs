/*!
 * End-to-end transcript conversion tests
 */

use std::fs;

use anyhow::Result;
use rusqlite::Connection;

use podex::app_config::Config;
use podex::app_controller::Controller;
use podex::file_utils::FileManager;

use crate::common;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Test converting one transcript file produces both artifacts
#[test]
fn test_convert_file_withSampleTranscript_shouldWriteBothOutputs() -> Result<()> {
    init_logging();
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_file(&dir, "episode.ttml", &common::sample_transcript())?;

    let controller = Controller::new_for_test()?;
    controller.convert_file(&input, &dir, false)?;

    let text = FileManager::read_to_string(dir.join("episode.txt"))?;
    assert!(text.contains("SPEAKER_1"));
    assert!(!text.contains('<'));
    assert!(!text.contains('>'));

    let subtitles = FileManager::read_to_string(dir.join("episode.srt"))?;
    assert!(subtitles.starts_with("1\n00:00:00,000 --> 00:00:02,500\nHello world.\n"));
    assert!(subtitles.ends_with("\n\n"));
    Ok(())
}

/// Test the exact subtitle block for the compatibility contract document
#[test]
fn test_convert_file_withSingleCue_shouldMatchContractOutput() -> Result<()> {
    init_logging();
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_file(&dir, "cue.ttml", &common::single_cue_transcript())?;

    let controller = Controller::new_for_test()?;
    controller.convert_file(&input, &dir, false)?;

    let subtitles = FileManager::read_to_string(dir.join("cue.srt"))?;
    assert_eq!(subtitles, "1\n00:01:02,500 --> 00:01:05,250\nHello world\n\n");
    Ok(())
}

/// Test one malformed document does not abort the rest of the batch
#[test]
fn test_convert_folder_withOneMalformedFile_shouldContinueBatch() -> Result<()> {
    init_logging();
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, "a_first.ttml", &common::sample_transcript())?;
    common::create_test_file(&dir, "b_broken.ttml", &common::malformed_transcript())?;
    common::create_test_file(&dir, "c_last.ttml", &common::single_cue_transcript())?;

    let controller = Controller::new_for_test()?;
    let summary = controller.convert_folder(&dir, false)?;

    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.skipped, 0);

    // The healthy documents still produced both outputs
    for stem in ["a_first", "c_last"] {
        assert!(FileManager::file_exists(dir.join(format!("{}.txt", stem))));
        assert!(FileManager::file_exists(dir.join(format!("{}.srt", stem))));
    }

    // The malformed document keeps its best-effort text output but no subtitles
    assert!(FileManager::file_exists(dir.join("b_broken.txt")));
    assert!(!FileManager::file_exists(dir.join("b_broken.srt")));
    Ok(())
}

/// Test existing outputs are skipped unless forced
#[test]
fn test_convert_folder_withExistingOutputs_shouldSkipUnlessForced() -> Result<()> {
    init_logging();
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "episode.ttml", &common::sample_transcript())?;

    let controller = Controller::new_for_test()?;

    let first = controller.convert_folder(&dir, false)?;
    assert_eq!(first.succeeded, 1);

    let second = controller.convert_folder(&dir, false)?;
    assert_eq!(second.succeeded, 0);
    assert_eq!(second.skipped, 1);

    let forced = controller.convert_folder(&dir, true)?;
    assert_eq!(forced.succeeded, 1);
    assert_eq!(forced.skipped, 0);
    Ok(())
}

/// Test converting an empty folder is an error, not a silent success
#[test]
fn test_convert_folder_withNoTranscripts_shouldFail() -> Result<()> {
    init_logging();
    let temp_dir = common::create_temp_dir()?;

    let controller = Controller::new_for_test()?;
    assert!(controller.convert_folder(temp_dir.path(), false).is_err());
    Ok(())
}

/// Build a complete fake library container: catalog, media and transcripts.
fn create_populated_container(container: &std::path::Path) -> Result<()> {
    let documents = container.join("Documents");
    fs::create_dir_all(&documents)?;

    let media_dir = container.join("Library/Cache/Media");
    fs::create_dir_all(&media_dir)?;
    let media_path = media_dir.join("ep1.mp3");
    fs::write(&media_path, b"not really audio")?;

    let cache_dir = container.join("Library/Cache/Assets/TTML/PodcastContent");
    fs::create_dir_all(&cache_dir)?;
    fs::write(
        cache_dir.join("transcript_abc123-abc123"),
        common::sample_transcript(),
    )?;

    let conn = Connection::open(documents.join("MTLibrary.sqlite"))?;
    conn.execute_batch(&format!(
        "CREATE TABLE ZMTPODCAST (ZUUID TEXT, ZAUTHOR TEXT, ZTITLE TEXT);
         CREATE TABLE ZMTEPISODE (
             ZTITLE TEXT,
             ZASSETURL TEXT,
             ZPUBDATE REAL,
             ZDURATION REAL,
             ZFREETRANSCRIPTIDENTIFIER TEXT,
             ZPODCASTUUID TEXT
         );
         INSERT INTO ZMTPODCAST VALUES ('uuid-1', 'Jane Host', 'Tech Talk');
         INSERT INTO ZMTEPISODE VALUES
             ('Episode One', 'file://{}', 0.0, 1800.0,
              'PodcastContent/transcript_abc123', 'uuid-1');",
        media_path.display()
    ))?;

    Ok(())
}

/// Test the full library export flow over a fake container
#[test]
fn test_run_export_withPopulatedLibrary_shouldExportAllArtifacts() -> Result<()> {
    init_logging();
    let container_dir = common::create_temp_dir()?;
    create_populated_container(container_dir.path())?;

    let output_dir = common::create_temp_dir()?;

    let mut config = Config::default();
    config.library_container = Some(container_dir.path().to_path_buf());
    let controller = Controller::with_config(config)?;

    let summary = controller.run_export(output_dir.path())?;
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 0);

    let podcast_dir = output_dir.path().join("Tech Talk");
    let base_name = "2001.01.01-Episode One-(Jane Host)";
    for extension in ["mp3", "ttml", "txt", "srt"] {
        assert!(
            FileManager::file_exists(podcast_dir.join(format!("{}.{}", base_name, extension))),
            "missing {} artifact",
            extension
        );
    }

    let subtitles =
        FileManager::read_to_string(podcast_dir.join(format!("{}.srt", base_name)))?;
    assert!(subtitles.starts_with("1\n00:00:00,000 --> 00:00:02,500\n"));
    Ok(())
}

/// Test transcripts-only export leaves media in place
#[test]
fn test_run_export_withCopyMediaDisabled_shouldSkipMediaFiles() -> Result<()> {
    init_logging();
    let container_dir = common::create_temp_dir()?;
    create_populated_container(container_dir.path())?;

    let output_dir = common::create_temp_dir()?;

    let mut config = Config::default();
    config.library_container = Some(container_dir.path().to_path_buf());
    config.export.copy_media = false;
    let controller = Controller::with_config(config)?;

    let summary = controller.run_export(output_dir.path())?;
    assert_eq!(summary.succeeded, 1);

    let podcast_dir = output_dir.path().join("Tech Talk");
    let base_name = "2001.01.01-Episode One-(Jane Host)";
    assert!(!FileManager::file_exists(podcast_dir.join(format!("{}.mp3", base_name))));
    assert!(FileManager::file_exists(podcast_dir.join(format!("{}.txt", base_name))));
    assert!(FileManager::file_exists(podcast_dir.join(format!("{}.srt", base_name))));
    Ok(())
}
