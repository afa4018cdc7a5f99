use crate::errors::{AppError, AppResult};
use crate::models::observation::{Observation, parse_timestamp};
use rusqlite::params;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Result, Row};

/// Newest first. Rows whose timestamp SQLite cannot read as a date go last.
const SELECT_ALL_DESC: &str = "SELECT id, text, sentiment, score, timestamp
     FROM sentiments
     ORDER BY datetime(timestamp) IS NULL, datetime(timestamp) DESC, id DESC";

pub fn map_row(row: &Row) -> Result<Observation> {
    // NULL, non-text or unparseable timestamps are kept as "unknown" rather
    // than failing the whole read.
    let timestamp = match row.get_ref("timestamp")? {
        ValueRef::Text(bytes) => std::str::from_utf8(bytes).ok().and_then(parse_timestamp),
        _ => None,
    };

    // Rows written by older releases may carry NULLs in these columns.
    let text: Option<String> = row.get("text")?;
    let sentiment: Option<String> = row.get("sentiment")?;
    let score: Option<f64> = row.get("score")?;

    Ok(Observation {
        id: row.get("id")?,
        text: text.unwrap_or_default(),
        sentiment: sentiment.unwrap_or_default(),
        score: score.unwrap_or(0.0),
        timestamp,
    })
}

/// Append one observation. `id` and `timestamp` are assigned by SQLite.
///
/// The statement runs in autocommit mode, so the row is on disk when this
/// returns.
pub fn insert_observation(
    conn: &Connection,
    text: &str,
    sentiment: &str,
    score: f64,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO sentiments (text, sentiment, score) VALUES (?1, ?2, ?3)",
        params![text, sentiment, score],
    )
    .map_err(AppError::StoreWrite)?;

    Ok(conn.last_insert_rowid())
}

/// All observations, newest first, keeping read failures visible.
pub fn try_load_all(conn: &Connection) -> AppResult<Vec<Observation>> {
    let mut stmt = conn.prepare(SELECT_ALL_DESC).map_err(AppError::StoreRead)?;

    let rows = stmt.query_map([], map_row).map_err(AppError::StoreRead)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(AppError::StoreRead)?);
    }
    Ok(out)
}

/// All observations, newest first.
///
/// An unreadable store yields an empty list: callers treat "no rows" and
/// "store unreadable" the same way. Use [`try_load_all`] to tell them apart.
pub fn load_all(conn: &Connection) -> Vec<Observation> {
    try_load_all(conn).unwrap_or_default()
}

/// The `limit` most recent observations, newest first.
pub fn load_recent(conn: &Connection, limit: usize) -> AppResult<Vec<Observation>> {
    let mut stmt = conn.prepare(
        "SELECT id, text, sentiment, score, timestamp
         FROM sentiments
         ORDER BY datetime(timestamp) IS NULL, datetime(timestamp) DESC, id DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map([limit as i64], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Whether at least one row exists, decodable or not.
pub fn has_observations(conn: &Connection) -> AppResult<bool> {
    conn.query_row("SELECT EXISTS(SELECT 1 FROM sentiments)", [], |row| row.get(0))
        .map_err(AppError::StoreRead)
}

pub fn count_observations(conn: &Connection) -> AppResult<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM sentiments", [], |row| row.get(0))?;
    Ok(count)
}
