use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use rusqlite::{params, Connection, OpenFlags};

use crate::error::{SearchError, Stream};
use crate::models::{TermRow, TitleRow};
use crate::search::query::FtsPhrase;
use crate::search::schema;

/// Maximum rows read from each index per search. There is no paging past it.
pub const STREAM_ROW_LIMIT: usize = 30;

const TITLE_SQL: &str = "
    SELECT t.title, ti.anchor, d.path, s.site_name, rank
    FROM titles t
    JOIN title_instances ti ON ti.title_id = t.rowid
    JOIN documents d ON d.id = ti.document_id
    JOIN sites s ON s.id = d.site_id
    WHERE t.title MATCH ?1
    ORDER BY rank
    LIMIT ?2
";

const TERM_SQL: &str = "
    SELECT t.term, ti.context, d.path, d.title, s.site_name, rank
    FROM terms t
    JOIN term_instances ti ON ti.term_id = t.rowid
    JOIN documents d ON d.id = ti.document_id
    JOIN sites s ON s.id = d.site_id
    WHERE t.term MATCH ?1
    ORDER BY rank
    LIMIT ?2
";

/// Read access to the two ranked full-text indices.
///
/// Both methods return rows in ascending rank order (best match first),
/// at most [`STREAM_ROW_LIMIT`] of them, and never modify the store.
pub trait IndexReader: Send + Sync {
    fn title_rows(&self, phrase: &FtsPhrase) -> Result<Vec<TitleRow>, SearchError>;
    fn term_rows(&self, phrase: &FtsPhrase) -> Result<Vec<TermRow>, SearchError>;
}

/// Lazily opened, read-only handle to the SQLite index store.
///
/// Nothing touches the filesystem until the first lookup. A successful open
/// is kept for the life of the store; a failed one is retried on the next
/// lookup, but only the first failure per outage is logged at `warn`.
pub struct FtsStore {
    path: PathBuf,
    conn: Mutex<Option<Connection>>,
    unavailable_logged: AtomicBool,
}

impl FtsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            conn: Mutex::new(None),
            unavailable_logged: AtomicBool::new(false),
        }
    }

    /// Open the store if needed and report whether it is usable.
    pub fn is_available(&self) -> bool {
        self.with_connection(|_| Ok(())).is_ok()
    }

    /// Run `f` against the shared handle, opening it first if necessary.
    ///
    /// rusqlite connections are not `Sync`, so callers take turns on the
    /// one handle. Each search holds it for two bounded reads.
    fn with_connection<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, SearchError>,
    ) -> Result<T, SearchError> {
        let mut guard = self.conn.lock();
        let conn = match guard.take() {
            Some(conn) => conn,
            None => self.open()?,
        };
        let result = f(&conn);
        *guard = Some(conn);
        result
    }

    fn open(&self) -> Result<Connection, SearchError> {
        match open_read_only(&self.path) {
            Ok(conn) => {
                if self.unavailable_logged.swap(false, Ordering::Relaxed) {
                    tracing::info!(path = %self.path.display(), "Index store is available again");
                } else {
                    tracing::debug!(path = %self.path.display(), "Opened index store");
                }
                Ok(conn)
            }
            Err(reason) => {
                if !self.unavailable_logged.swap(true, Ordering::Relaxed) {
                    tracing::warn!(
                        path = %self.path.display(),
                        %reason,
                        "Index store unavailable, searches will return no results"
                    );
                } else {
                    tracing::debug!(path = %self.path.display(), "Index store still unavailable");
                }
                Err(SearchError::StoreUnavailable {
                    path: self.path.clone(),
                    reason,
                })
            }
        }
    }
}

fn open_read_only(path: &Path) -> Result<Connection, String> {
    // NO_MUTEX: access is already serialized by FtsStore.
    // No SQLITE_OPEN_URI: a `file:` path is an ordinary file name.
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags).map_err(|e| e.to_string())?;

    let missing = schema::missing_tables(&conn).map_err(|e| e.to_string())?;
    if !missing.is_empty() {
        return Err(format!("missing tables: {}", missing.join(", ")));
    }
    Ok(conn)
}

impl IndexReader for FtsStore {
    fn title_rows(&self, phrase: &FtsPhrase) -> Result<Vec<TitleRow>, SearchError> {
        self.with_connection(|conn| {
            query_titles(conn, phrase).map_err(SearchError::query_failure(Stream::Title))
        })
    }

    fn term_rows(&self, phrase: &FtsPhrase) -> Result<Vec<TermRow>, SearchError> {
        self.with_connection(|conn| {
            query_terms(conn, phrase).map_err(SearchError::query_failure(Stream::Term))
        })
    }
}

fn query_titles(conn: &Connection, phrase: &FtsPhrase) -> rusqlite::Result<Vec<TitleRow>> {
    let mut stmt = conn.prepare_cached(TITLE_SQL)?;
    let rows = stmt.query_map(params![phrase.as_str(), STREAM_ROW_LIMIT as i64], |row| {
        Ok(TitleRow {
            title: row.get(0)?,
            anchor: row.get(1)?,
            path: row.get(2)?,
            site: row.get(3)?,
            rank: row.get(4)?,
        })
    })?;
    rows.collect()
}

fn query_terms(conn: &Connection, phrase: &FtsPhrase) -> rusqlite::Result<Vec<TermRow>> {
    let mut stmt = conn.prepare_cached(TERM_SQL)?;
    let rows = stmt.query_map(params![phrase.as_str(), STREAM_ROW_LIMIT as i64], |row| {
        Ok(TermRow {
            term: row.get(0)?,
            context: row.get(1)?,
            path: row.get(2)?,
            document_title: row.get(3)?,
            site: row.get(4)?,
            rank: row.get(5)?,
        })
    })?;
    rows.collect()
}
