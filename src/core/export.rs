use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::try_load_all;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ObservationExport, ensure_writable, write_rows};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::fs;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every observation (oldest first) to `file`.
    ///
    /// Read failures are reported rather than producing an empty file.
    pub fn export(pool: &DbPool, format: ExportFormat, file: &str, force: bool) -> AppResult<usize> {
        let path = expand_tilde(file);

        ensure_writable(&path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut observations = try_load_all(&pool.conn)?;
        observations.reverse();

        if observations.is_empty() {
            warning("No observations found. Nothing to export.");
            return Ok(0);
        }

        let rows: Vec<ObservationExport> = observations.iter().map(ObservationExport::from).collect();

        write_rows(format, &rows, &path)?;

        audit(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} observations as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}
