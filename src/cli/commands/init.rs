use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::ensure_schema;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::seed::seed_if_empty;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its schema
///  - the bootstrap example rows
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing greedfear…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let mut pool = DbPool::new(&db_path)?;
    ensure_schema(&pool.conn)?;

    let seeded = seed_if_empty(&mut pool.conn)?;
    if seeded > 0 {
        success(format!("Inserted {} example observations.", seeded));
    }

    log::audit(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 greedfear initialization completed!");
    Ok(())
}
