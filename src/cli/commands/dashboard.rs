use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::classifier::build_model;
use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::errors::AppResult;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { interactive, once } = cmd {
        let mut pool = open_db(cfg)?;

        let interactive = *interactive || (!cfg.headless && !*once);

        if interactive {
            // Model is built once and reused for every submission.
            let model = build_model(cfg)?;
            let stdin = io::stdin();
            DashboardLogic::interactive(&mut pool, cfg, model.as_ref(), stdin.lock())?;
        } else {
            println!("{}", DashboardLogic::render(&mut pool, cfg)?);
        }
    }

    Ok(())
}
