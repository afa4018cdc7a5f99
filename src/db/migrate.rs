use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table with the given name exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `sentiments` table.
///
/// Column layout matches databases written by earlier dashboard releases,
/// so an existing `sentiment.db` can be pointed at with `--db`.
fn create_sentiments_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sentiments (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            text      TEXT,
            sentiment TEXT,
            score     REAL,
            timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )?;
    Ok(())
}

fn ensure_indexes(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_sentiments_timestamp ON sentiments(timestamp);",
    )
}

/// Public entry point: bring the schema up to date.
///
/// Returns `true` when the `sentiments` table had to be created.
pub fn run_pending_migrations(conn: &Connection) -> Result<bool> {
    ensure_log_table(conn)?;

    let created = if table_exists(conn, "sentiments")? {
        false
    } else {
        create_sentiments_table(conn)?;
        true
    };

    ensure_indexes(conn)?;

    Ok(created)
}
