//! Integration tests for the CSV data pipeline
//!
//! Covers the ticker list, the history writer, and the date recommender
//! reading the file the writer produced.

use std::io::Write;

use finbuddy::history;
use finbuddy::recommend::{self, DateRecommender, HistoryRecord};
use finbuddy::repl::DisplayManager;
use tempfile::{NamedTempFile, TempDir};

fn record(date: &str, ticker: &str, open: f64, close: f64) -> HistoryRecord {
    HistoryRecord {
        date: date.to_string(),
        open,
        high: close + 2.0,
        low: open - 2.0,
        close,
        adjclose: close,
        volume: 10_000,
        ticker: ticker.to_string(),
    }
}

#[test]
fn test_history_feeds_the_recommender() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("data").join("ticker_history.csv");

    let records = vec![
        record("2024-01-02", "AAPL", 100.0, 101.0),
        record("2024-01-03", "AAPL", 101.0, 102.0),
        // Same prices as the first row, different date
        record("2024-02-06", "AAPL", 100.0, 101.0),
        record("2024-01-02", "TSLA", 250.0, 248.0),
        record("2024-01-03", "TSLA", 248.0, 252.0),
    ];

    history::write_history(&records, &csv_path).unwrap();
    assert!(csv_path.exists());

    let recommender = DateRecommender::from_csv_path(&csv_path).unwrap();
    assert_eq!(recommender.len(), 5);

    let dates = recommender.recommend("2024-01-02", "AAPL").unwrap();
    assert!(!dates.contains(&"2024-01-02".to_string()));
    assert_eq!(dates[0], "2024-02-06", "identical bars should rank first");
}

#[test]
fn test_recommend_flow_over_written_csv() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("ticker_history.csv");

    let records = vec![
        record("2024-01-02", "AAPL", 100.0, 101.0),
        record("2024-01-03", "AAPL", 101.0, 102.0),
        record("2024-01-04", "AAPL", 102.0, 99.0),
        record("2024-01-05", "AAPL", 99.0, 100.0),
    ];
    history::write_history(&records, &csv_path).unwrap();

    let display = DisplayManager::new();
    recommend::run(&display, &csv_path, "2024-01-03", "aapl").unwrap();

    // Unknown pairs surface as errors, not panics
    assert!(recommend::run(&display, &csv_path, "2019-01-01", "AAPL").is_err());
}

#[test]
fn test_ticker_list_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "symbol").unwrap();
    writeln!(file, "aapl").unwrap();
    writeln!(file, "MSFT").unwrap();
    writeln!(file, "tsla").unwrap();
    file.flush().unwrap();

    let tickers = history::load_ticker_list(file.path()).unwrap();
    assert_eq!(tickers, vec!["AAPL".to_string(), "MSFT".to_string(), "TSLA".to_string()]);
}

#[test]
fn test_missing_history_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.csv");

    let display = DisplayManager::new();
    assert!(recommend::run(&display, &missing, "2024-01-02", "AAPL").is_err());
}
