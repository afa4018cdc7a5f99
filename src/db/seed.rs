//! Bootstrap rows for a fresh database.

use crate::db::log::audit;
use crate::db::queries::has_observations;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, params};

/// Fixed examples inserted into an empty store.
///
/// The neutral row carries a non-zero score. This is inherited data and is
/// intentionally not normalized.
pub const SEED_OBSERVATIONS: [(&str, &str, f64); 3] = [
    ("Market is booming!", "positive", 0.9),
    ("Crypto crash incoming", "negative", -0.8),
    ("I'm neutral about stocks today", "neutral", 0.1),
];

/// Insert the fixed examples when the store has no rows.
///
/// Returns the number of rows inserted (0 or 3). The three rows go in with a
/// single transaction. Emptiness is a row-existence check, so rows that
/// cannot be decoded still count.
pub fn seed_if_empty(conn: &mut Connection) -> AppResult<usize> {
    if has_observations(conn)? {
        return Ok(0);
    }

    let tx = conn.transaction().map_err(AppError::StoreWrite)?;
    {
        let mut stmt = tx
            .prepare("INSERT INTO sentiments (text, sentiment, score) VALUES (?1, ?2, ?3)")
            .map_err(AppError::StoreWrite)?;

        for (text, sentiment, score) in SEED_OBSERVATIONS {
            stmt.execute(params![text, sentiment, score])
                .map_err(AppError::StoreWrite)?;
        }
    }
    tx.commit().map_err(AppError::StoreWrite)?;

    audit(
        conn,
        "seed",
        "sentiments",
        &format!("Seeded {} example observations", SEED_OBSERVATIONS.len()),
    );

    Ok(SEED_OBSERVATIONS.len())
}
