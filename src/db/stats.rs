use crate::core::aggregator::compute_index;
use crate::db::pool::DbPool;
use crate::db::queries::try_load_all;
use crate::errors::AppResult;
use crate::models::observation::DB_TIMESTAMP_FORMAT;
use crate::models::sentiment::Sentiment;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use std::fs;

/// Read-only summary for `db --info`.
pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) OBSERVATIONS (read errors are reported here, not masked)
    //
    let observations = try_load_all(&pool.conn)?;

    let positive = observations
        .iter()
        .filter(|o| o.class() == Sentiment::Positive)
        .count();
    let negative = observations
        .iter()
        .filter(|o| o.class() == Sentiment::Negative)
        .count();
    let other = observations.len() - positive - negative;
    let inconsistent = observations.iter().filter(|o| !o.is_consistent()).count();

    println!(
        "{}• Total observations:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        observations.len(),
        RESET
    );
    println!(
        "    {GREEN}positive{RESET}: {positive}   {RED}negative{RESET}: {negative}   neutral/other: {other}"
    );
    if inconsistent > 0 {
        println!(
            "    {YELLOW}label/score mismatches{RESET}: {}",
            inconsistent
        );
    }

    //
    // 3) TIME RANGE
    //
    let dated = observations.iter().filter_map(|o| o.timestamp);
    let fmt = |ts: Option<chrono::NaiveDateTime>| {
        ts.map(|t| t.format(DB_TIMESTAMP_FORMAT).to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };
    let fmt_first = fmt(dated.clone().min());
    let fmt_last = fmt(dated.max());
    let undated = observations.iter().filter(|o| o.timestamp.is_none()).count();

    println!("{}• Time range (UTC):{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);
    if undated > 0 {
        println!("    {YELLOW}without a readable timestamp{RESET}: {}", undated);
    }

    //
    // 4) INDEX
    //
    let index = compute_index(&observations);
    println!(
        "{}• Greed / Fear:{} {:.1}% / {:.1}%",
        CYAN, RESET, index.greed_percent, index.fear_percent
    );

    println!();
    Ok(())
}
