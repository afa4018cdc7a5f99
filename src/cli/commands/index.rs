use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::errors::{AppError, AppResult};
use crate::utils::formatting::{format_delta, format_percent};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Index { json } = cmd {
        let mut pool = open_db(cfg)?;
        let data = DashboardLogic::collect(&mut pool)?;
        let idx = data.index;

        if *json {
            let value = serde_json::json!({
                "greed_percent": idx.greed_percent,
                "fear_percent": idx.fear_percent,
                "greed": idx.greed,
                "fear": idx.fear,
                "observations": data.observations.len(),
            });
            let out = serde_json::to_string_pretty(&value)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
        } else {
            println!(
                "Greed {} ({}) | Fear {} | {} observations",
                format_percent(idx.greed_percent),
                format_delta(idx.delta()),
                format_percent(idx.fear_percent),
                data.observations.len()
            );
        }
    }

    Ok(())
}
