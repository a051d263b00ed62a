//! Layout of the index store.
//!
//! The store is produced by an external ingestion job; this crate only
//! reads it. The DDL here documents what that job creates and is used by
//! tests to build fixture stores. It is never run against a serving store.

use rusqlite::Connection;

/// Tables every query depends on.
pub const REQUIRED_TABLES: &[&str] = &[
    "sites",
    "documents",
    "titles",
    "title_instances",
    "terms",
    "term_instances",
];

/// DDL written by the ingestion job.
pub const INDEX_SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS sites (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    site_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS documents (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    site_id INTEGER NOT NULL,
    path    TEXT NOT NULL,
    title   TEXT,
    FOREIGN KEY (site_id) REFERENCES sites(id)
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_documents_site_path ON documents(site_id, path);

CREATE VIRTUAL TABLE IF NOT EXISTS terms USING fts5(
    term,
    tokenize="trigram"
);

CREATE TABLE IF NOT EXISTS term_instances (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    term_id     INTEGER NOT NULL,   -- terms.rowid
    document_id INTEGER NOT NULL,
    context     TEXT NOT NULL,      -- snippet around the term
    FOREIGN KEY (document_id) REFERENCES documents(id)
);
CREATE INDEX IF NOT EXISTS idx_term_instances_term ON term_instances(term_id);

CREATE VIRTUAL TABLE IF NOT EXISTS titles USING fts5(
    title,
    tokenize="trigram"
);

CREATE TABLE IF NOT EXISTS title_instances (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title_id    INTEGER NOT NULL,   -- titles.rowid
    document_id INTEGER NOT NULL,
    anchor      TEXT,
    FOREIGN KEY (document_id) REFERENCES documents(id)
);
CREATE INDEX IF NOT EXISTS idx_title_instances_title ON title_instances(title_id);
"#;

/// Names from [`REQUIRED_TABLES`] that are absent from the store.
///
/// Also the first statement run on a fresh handle, so a file that is not a
/// SQLite database fails here rather than on the first search.
pub fn missing_tables(conn: &Connection) -> rusqlite::Result<Vec<&'static str>> {
    let mut stmt =
        conn.prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1")?;
    let mut missing = Vec::new();
    for table in REQUIRED_TABLES {
        if !stmt.exists([*table])? {
            missing.push(*table);
        }
    }
    Ok(missing)
}
