use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::{load_recent, try_load_all};
use crate::errors::AppResult;
use crate::ui::dashboard::render_table;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        limit,
        all,
        chronological,
    } = cmd
    {
        let pool = open_db(cfg)?;

        let mut rows = if *all {
            try_load_all(&pool.conn)?
        } else {
            load_recent(&pool.conn, limit.unwrap_or(cfg.recent_rows))?
        };

        if rows.is_empty() {
            info("No observations stored yet.");
            return Ok(());
        }

        if *chronological {
            rows.reverse();
        }

        header(format!("Observations ({}):", rows.len()));
        print!("{}", render_table(&rows));
    }

    Ok(())
}
