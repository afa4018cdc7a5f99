use crate::classifier::SentimentModel;
use crate::config::Config;
use crate::core::aggregator::compute_index;
use crate::core::analyze::AnalyzeLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_all;
use crate::db::seed::seed_if_empty;
use crate::errors::AppResult;
use crate::models::index::GreedFearIndex;
use crate::models::observation::Observation;
use crate::ui::dashboard::render_dashboard;
use crate::ui::messages::{error, info};
use std::io::{self, BufRead, Write};

const QUIT_WORDS: [&str; 3] = ["quit", "exit", ":q"];

/// Everything one render needs.
pub struct DashboardData {
    pub observations: Vec<Observation>,
    pub index: GreedFearIndex,
}

pub struct DashboardLogic;

impl DashboardLogic {
    /// Load all observations (newest first), seeding an empty store first.
    pub fn load_data(pool: &mut DbPool) -> AppResult<Vec<Observation>> {
        seed_if_empty(&mut pool.conn)?;
        Ok(load_all(&pool.conn))
    }

    pub fn collect(pool: &mut DbPool) -> AppResult<DashboardData> {
        let observations = Self::load_data(pool)?;
        let index = compute_index(&observations);
        Ok(DashboardData {
            observations,
            index,
        })
    }

    pub fn render(pool: &mut DbPool, cfg: &Config) -> AppResult<String> {
        let data = Self::collect(pool)?;
        Ok(render_dashboard(
            &data.observations,
            &data.index,
            cfg.recent_rows,
        ))
    }

    /// Prompt/submit/render loop.
    ///
    /// An empty line submits the default headline; `quit`, `exit` or EOF
    /// leave. Failed submissions are reported and the loop goes on.
    pub fn interactive<R: BufRead>(
        pool: &mut DbPool,
        cfg: &Config,
        model: &dyn SentimentModel,
        mut input: R,
    ) -> AppResult<()> {
        loop {
            println!("{}", Self::render(pool, cfg)?);

            print!(
                "Enter a financial headline or tweet [{}] (or 'quit'): ",
                cfg.default_text
            );
            io::stdout().flush().ok();

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                println!();
                break;
            }

            let line = line.trim_end_matches(['\r', '\n']);
            if QUIT_WORDS.contains(&line.trim().to_lowercase().as_str()) {
                break;
            }

            let text = if line.is_empty() {
                cfg.default_text.as_str()
            } else {
                line
            };

            if let Err(e) = AnalyzeLogic::submit_and_report(&pool.conn, model, text) {
                error(e);
            }
        }

        info("Bye.");
        Ok(())
    }
}
