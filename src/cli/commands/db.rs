use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::ensure_schema;
use crate::db::migrate::table_exists;
use crate::db::pool::DbPool;
use crate::db::queries::try_load_all;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};

fn step(label: &str) {
    println!("{CYAN}▶ {label}…{RESET}");
}

fn done(label: &str) {
    println!("{GREEN}✔ {label}{RESET}\n");
}

/// `PRAGMA integrity_check` plus a scan for rows whose label and score sign
/// disagree.
fn check(pool: &DbPool) -> AppResult<()> {
    step("Running integrity check");

    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if integrity == "ok" {
        done("Integrity check passed.");
    } else {
        println!("{RED}✘ Integrity check failed:{RESET} {integrity}\n");
    }

    if !table_exists(&pool.conn, "sentiments")? {
        println!("{YELLOW}• No sentiments table yet (run `greedfear db --migrate`).{RESET}\n");
        return Ok(());
    }

    step("Checking label/score consistency");
    let mismatched: Vec<i64> = try_load_all(&pool.conn)?
        .iter()
        .filter(|o| !o.is_consistent())
        .map(|o| o.id)
        .collect();

    if mismatched.is_empty() {
        done("All scores agree with their labels.");
    } else {
        let ids: Vec<String> = mismatched.iter().map(i64::to_string).collect();
        println!(
            "{YELLOW}• {} row(s) with a score sign that does not match the label:{RESET} {}\n",
            mismatched.len(),
            ids.join(", ")
        );
    }

    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check: run_check,
        vacuum,
        info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            step("Checking schema");
            ensure_schema(&pool.conn)?;
            done("Schema is up to date.");
        }

        if *info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        if *run_check {
            check(&pool)?;
        }

        if *vacuum {
            step("Running VACUUM");
            pool.conn.execute_batch("VACUUM;")?;
            done("Vacuum completed.");
        }
    }

    Ok(())
}
