use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

mod common;
use common::{count_rows, gf, init_db, setup_test_db};

/// Backend that never reaches a model: port 9 (discard) refuses connections.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9";

#[test]
fn test_init_seeds_example_rows() {
    let db_path = setup_test_db("init_seeds");

    gf().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Inserted 3 example observations."))
        .stdout(contains("initialization completed"));

    assert_eq!(count_rows(&db_path), 3);

    // second init leaves the rows alone
    gf().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Inserted").not());

    assert_eq!(count_rows(&db_path), 3);
}

#[test]
fn test_index_json_on_seeded_store() {
    let db_path = setup_test_db("index_json");
    init_db(&db_path);

    let output = gf()
        .args(["--db", &db_path, "index", "--json"])
        .output()
        .expect("run index");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("index output is JSON");
    assert_eq!(value["observations"], 3);

    let greed = value["greed_percent"].as_f64().unwrap();
    let fear = value["fear_percent"].as_f64().unwrap();
    assert!((greed - 55.555).abs() < 0.01);
    assert!((fear - 44.444).abs() < 0.01);
    assert!((greed + fear - 100.0).abs() < 1e-9);
}

#[test]
fn test_dashboard_once_renders_all_sections() {
    let db_path = setup_test_db("dashboard_once");
    init_db(&db_path);

    gf().args(["--db", &db_path, "dashboard", "--once"])
        .assert()
        .success()
        .stdout(contains("Greed & Fear Sentiment Dashboard"))
        .stdout(contains("Greed Index"))
        .stdout(contains("55.6%"))
        .stdout(contains("+5.6%"))
        .stdout(contains("Greed vs Fear"))
        .stdout(contains("Sentiment Scores Over Time"))
        .stdout(contains("Recent Sentiments"))
        .stdout(contains("Market is booming!"))
        .stdout(contains("Crypto crash incoming"));
}

#[test]
fn test_dashboard_seeds_a_fresh_database() {
    let db_path = setup_test_db("dashboard_fresh");

    gf().args(["--db", &db_path, "dashboard", "--once"])
        .assert()
        .success()
        .stdout(contains("55.6%"));

    assert_eq!(count_rows(&db_path), 3);
}

#[test]
fn test_analyze_stores_classified_text() {
    let db_path = setup_test_db("analyze_text");
    init_db(&db_path);

    gf().args([
        "--db",
        &db_path,
        "--classifier",
        "lexicon",
        "analyze",
        "Stocks plunge as recession fears grow",
    ])
    .assert()
    .success()
    .stdout(contains("Sentiment analyzed and added to database!"))
    .stdout(contains("classified as negative"))
    .stdout(contains("by lexicon (heuristic)"))
    .stdout(contains("Recent Sentiments"));

    assert_eq!(count_rows(&db_path), 4);

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let (sentiment, score): (String, f64) = conn
        .query_row(
            "SELECT sentiment, score FROM sentiments WHERE text = ?1",
            ["Stocks plunge as recession fears grow"],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert_eq!(sentiment, "negative");
    assert!(score < 0.0 && score >= -1.0);
}

#[test]
fn test_analyze_on_fresh_database_seeds_first() {
    let db_path = setup_test_db("analyze_fresh");

    gf().args([
        "--db",
        &db_path,
        "--classifier",
        "lexicon",
        "analyze",
        "Gold rallies to record high",
        "--no-dashboard",
    ])
    .assert()
    .success()
    .stdout(contains("Sentiment analyzed and added to database!"));

    // three examples + the submission
    assert_eq!(count_rows(&db_path), 4);

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let last: String = conn
        .query_row("SELECT text FROM sentiments ORDER BY id DESC LIMIT 1", [], |r| r.get(0))
        .unwrap();
    assert_eq!(last, "Gold rallies to record high");
}

#[test]
fn test_analyze_without_text_uses_default_headline() {
    let db_path = setup_test_db("analyze_default");
    init_db(&db_path);

    gf().args([
        "--db",
        &db_path,
        "--classifier",
        "lexicon",
        "analyze",
        "--no-dashboard",
    ])
    .assert()
    .success()
    .stdout(contains("classified as positive"))
    .stdout(contains("Recent Sentiments").not());

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let score: f64 = conn
        .query_row(
            "SELECT score FROM sentiments WHERE text = 'Bitcoin hits all-time high!'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert!(score > 0.0);
}

#[test]
fn test_analyze_blank_text_stores_nothing() {
    let db_path = setup_test_db("analyze_blank");
    init_db(&db_path);

    gf().args([
        "--db",
        &db_path,
        "--classifier",
        "lexicon",
        "analyze",
        "   ",
        "--no-dashboard",
    ])
    .assert()
    .success()
    .stdout(contains("Nothing to analyze"));

    assert_eq!(count_rows(&db_path), 3);
}

#[test]
fn test_unavailable_classifier_fails_without_insert() {
    let db_path = setup_test_db("analyze_unavailable");
    init_db(&db_path);

    gf().args([
        "--db",
        &db_path,
        "--classifier",
        "huggingface",
        "--model-endpoint",
        DEAD_ENDPOINT,
        "analyze",
        "Crypto crash incoming",
    ])
    .assert()
    .failure()
    .stderr(contains("Classifier unavailable"));

    assert_eq!(count_rows(&db_path), 3);
}

#[test]
fn test_interactive_dashboard_reads_stdin() {
    let db_path = setup_test_db("dashboard_interactive");
    init_db(&db_path);

    gf().args([
        "--db",
        &db_path,
        "--classifier",
        "lexicon",
        "dashboard",
        "--interactive",
    ])
    .write_stdin("Gold rallies to record high\n\nquit\n")
    .assert()
    .success()
    .stdout(contains("Enter a financial headline or tweet"))
    .stdout(contains("Sentiment analyzed and added to database!"))
    .stdout(contains("Gold rallies to record high"))
    .stdout(contains("Bye."));

    // typed headline + default headline
    assert_eq!(count_rows(&db_path), 5);
}

#[test]
fn test_interactive_dashboard_keeps_running_when_classifier_is_down() {
    let db_path = setup_test_db("dashboard_interactive_down");
    init_db(&db_path);

    gf().args([
        "--db",
        &db_path,
        "--classifier",
        "huggingface",
        "--model-endpoint",
        DEAD_ENDPOINT,
        "dashboard",
        "--interactive",
    ])
    .write_stdin("Markets are calm\n")
    .assert()
    .success()
    .stderr(contains("Classifier unavailable"))
    .stdout(contains("Bye."));

    assert_eq!(count_rows(&db_path), 3);
}

#[test]
fn test_list_limit_and_order() {
    let db_path = setup_test_db("list_limit");
    init_db(&db_path);

    gf().args(["--db", &db_path, "list", "--limit", "2"])
        .assert()
        .success()
        .stdout(contains("Observations (2):"));

    gf().args(["--db", &db_path, "list", "--all", "--chronological"])
        .assert()
        .success()
        .stdout(contains("Observations (3):"))
        .stdout(contains("I'm neutral about stocks today"));
}

#[test]
fn test_list_empty_database() {
    let db_path = setup_test_db("list_empty");

    gf().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No observations stored yet."));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db(&db_path);

    gf().args([
        "--db",
        &db_path,
        "--classifier",
        "lexicon",
        "analyze",
        "Banks report strong profit growth",
        "--no-dashboard",
    ])
    .assert()
    .success();

    gf().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log:"))
        .stdout(contains("seed"))
        .stdout(contains("init"))
        .stdout(contains("Banks report strong profit growth"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);

    gf().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."))
        .stdout(contains("1 row(s) with a score sign that does not match the label"))
        .stdout(contains("Total observations"));
}

#[test]
fn test_db_migrate_on_fresh_file() {
    let db_path = setup_test_db("db_migrate");

    gf().args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Schema is up to date."));

    assert!(fs::metadata(&db_path).is_ok());
    assert_eq!(count_rows(&db_path), 0);
}

#[test]
fn test_config_print_shows_overrides() {
    let db_path = setup_test_db("config_print");

    gf().args([
        "--db",
        &db_path,
        "--classifier",
        "lexicon",
        "config",
        "--print",
    ])
    .assert()
    .success()
    .stdout(contains("classifier: lexicon"))
    .stdout(contains("Bitcoin hits all-time high!"));
}

#[test]
fn test_unknown_classifier_is_rejected() {
    gf().args(["--classifier", "oracle", "index"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}
