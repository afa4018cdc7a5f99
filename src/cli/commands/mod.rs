pub mod analyze;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod index;
pub mod init;
pub mod list;
pub mod log;

use crate::config::Config;
use crate::db::initialize::ensure_schema;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database with a guaranteed schema.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    ensure_schema(&pool.conn)?;
    Ok(pool)
}
