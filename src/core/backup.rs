use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally as a `.zip`.
    ///
    /// Returns the path of the final artifact.
    pub fn backup(db_path: &str, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(db_path);
        let dest = expand_tilde(dest_file);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let zip_path = if dest.extension().is_some_and(|e| e == "zip") {
            dest.clone()
        } else {
            dest.with_extension("zip")
        };

        // 3️⃣ Ask before overwriting
        ensure_writable(if compress { &zip_path } else { &dest }, force)?;

        // 4️⃣ Consistent copy through SQLite (safe while the file is open elsewhere)
        let conn = Connection::open(src)?;
        let raw_copy = if compress {
            PathBuf::from(format!("{}.tmp", dest.to_string_lossy()))
        } else {
            dest.clone()
        };
        if raw_copy.exists() {
            fs::remove_file(&raw_copy)?;
        }
        conn.execute("VACUUM INTO ?1", [raw_copy.to_string_lossy().to_string()])?;

        // 5️⃣ Optional compression
        let final_path = if compress {
            let entry_name = src
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .ok_or_else(|| AppError::Other(format!("Invalid database path: {}", src.display())))?;

            compress_backup(&raw_copy, &zip_path, &entry_name)?;

            if let Err(e) = fs::remove_file(&raw_copy) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }

            zip_path
        } else {
            dest.clone()
        };
        success(format!("Backup created: {}", final_path.display()));

        // 6️⃣ Log in DB
        audit(
            &conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

/// Compress `path` into `zip_path` as a single `entry_name` entry.
fn compress_backup(path: &Path, zip_path: &Path, entry_name: &str) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}
