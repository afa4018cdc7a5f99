use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::classifier::build_model;
use crate::config::Config;
use crate::core::analyze::AnalyzeLogic;
use crate::core::dashboard::DashboardLogic;
use crate::db::seed::seed_if_empty;
use crate::errors::AppResult;

/// Classify one text, store it and show the updated dashboard.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze { text, no_dashboard } = cmd {
        let mut pool = open_db(cfg)?;

        // same first-run state as opening the dashboard
        seed_if_empty(&mut pool.conn)?;

        let text = text.clone().unwrap_or_else(|| cfg.default_text.clone());

        let model = build_model(cfg)?;
        AnalyzeLogic::submit_and_report(&pool.conn, model.as_ref(), &text)?;

        if !*no_dashboard {
            println!();
            println!("{}", DashboardLogic::render(&mut pool, cfg)?);
        }
    }

    Ok(())
}
