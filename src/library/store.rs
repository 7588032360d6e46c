/*!
 * Read-only access to the Podcasts library database.
 *
 * The library lives inside the app's group container; this module opens the
 * catalog database read-only, enumerates downloaded episodes, and resolves
 * cached transcript documents from their identifiers. Nothing here ever
 * writes to the container.
 */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use rusqlite::{Connection, OpenFlags};

use super::models::Episode;
use crate::errors::LibraryError;

/// Group container of the Podcasts app, relative to the user's home
const GROUP_CONTAINER: &str = "Library/Group Containers/243LU875E5.groups.com.apple.podcasts";

/// Catalog database path inside the group container
const LIBRARY_DB: &str = "Documents/MTLibrary.sqlite";

/// Cached transcript documents inside the group container
const TRANSCRIPT_CACHE: &str = "Library/Cache/Assets/TTML";

/// Downloaded episodes with their show metadata. Rows without a local asset
/// are not downloads and are excluded here rather than filtered later.
const DOWNLOADED_EPISODES_SQL: &str = "\
SELECT p.ZAUTHOR, p.ZTITLE, e.ZTITLE, e.ZASSETURL, e.ZPUBDATE, e.ZDURATION, e.ZFREETRANSCRIPTIDENTIFIER
FROM ZMTEPISODE e
JOIN ZMTPODCAST p
    ON e.ZPODCASTUUID = p.ZUUID
WHERE ZASSETURL NOTNULL";

/// Read-only handle on the Podcasts library
pub struct LibraryStore {
    /// Group container the catalog was opened from
    container: PathBuf,
    /// Catalog database connection
    connection: Connection,
}

impl LibraryStore {
    /// Open the library at its default location under the user's home.
    pub fn open_default() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
        Self::open(home.join(GROUP_CONTAINER))
    }

    /// Open the library inside the given group container.
    pub fn open<P: AsRef<Path>>(container: P) -> Result<Self> {
        let container = container.as_ref().to_path_buf();
        let db_path = container.join(LIBRARY_DB);

        if !db_path.is_file() {
            return Err(LibraryError::DatabaseNotFound(db_path).into());
        }

        info!("Opening library catalog at: {:?}", db_path);

        let connection = Connection::open_with_flags(
            &db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(LibraryError::Query)
        .with_context(|| format!("Failed to open library catalog: {:?}", db_path))?;

        Ok(Self {
            container,
            connection,
        })
    }

    /// Enumerate all downloaded episodes in catalog order.
    pub fn downloaded_episodes(&self) -> Result<Vec<Episode>> {
        let mut statement = self
            .connection
            .prepare(DOWNLOADED_EPISODES_SQL)
            .map_err(LibraryError::Query)?;

        let rows = statement
            .query_map([], |row| {
                Ok(Episode {
                    author: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                    podcast: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    title: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    asset_url: row.get(3)?,
                    pub_date: Episode::date_from_reference_secs(row.get(4)?),
                    duration: row.get::<_, Option<f64>>(5)?.unwrap_or_default(),
                    transcript_id: row.get(6)?,
                })
            })
            .map_err(LibraryError::Query)?;

        let episodes = rows
            .collect::<Result<Vec<_>, _>>()
            .map_err(LibraryError::Query)?;

        debug!("Catalog lists {} downloaded episode(s)", episodes.len());
        Ok(episodes)
    }

    /// Path of the cached transcript document for an identifier.
    ///
    /// The cache stores each document as `<identifier>-<basename>`, where
    /// the basename is the identifier's final path component with its
    /// `transcript_` prefix removed.
    pub fn transcript_path(&self, transcript_id: &str) -> PathBuf {
        let basename = Path::new(transcript_id)
            .file_name()
            .map(|name| name.to_string_lossy().replace("transcript_", ""))
            .unwrap_or_default();

        self.container
            .join(TRANSCRIPT_CACHE)
            .join(format!("{}-{}", transcript_id, basename))
    }
}
