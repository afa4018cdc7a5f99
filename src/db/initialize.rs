use crate::db::log::audit;
use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::Connection;

/// Idempotently create the schema.
///
/// Every failure is reported as `SchemaInit`: no command may run against a
/// database whose schema could not be guaranteed.
pub fn ensure_schema(conn: &Connection) -> AppResult<()> {
    let created = run_pending_migrations(conn).map_err(|e| AppError::SchemaInit(e.to_string()))?;

    if created {
        success("Created sentiments table.");
        audit(conn, "schema", "sentiments", "Created sentiments table");
    }

    Ok(())
}
