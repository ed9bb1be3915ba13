//! Ticker history builder
//!
//! Reads a ticker symbol list, fetches daily history for each symbol
//! since a start date, and writes the combined `ticker_history.csv` the
//! recommender consumes. Per-ticker failures are warnings, not fatal.

use serde::Deserialize;
use std::path::Path;

use crate::errors::{AdvisorError, Result};
use crate::recommend::HistoryRecord;
use crate::repl::display::DisplayManager;
use crate::stocks::StockDataClient;

/// One row of the ticker list CSV
#[derive(Debug, Deserialize)]
struct TickerRow {
    #[serde(alias = "Symbol")]
    symbol: String,
}

/// Load ticker symbols from a CSV with a `symbol` column
pub fn load_ticker_list(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut tickers = Vec::new();
    for row in reader.deserialize() {
        let row: TickerRow = row?;
        let symbol = row.symbol.trim().to_uppercase();
        if !symbol.is_empty() {
            tickers.push(symbol);
        }
    }

    if tickers.is_empty() {
        return Err(AdvisorError::ConfigError(format!(
            "no ticker symbols in {}",
            path.display()
        )));
    }
    Ok(tickers)
}

/// Fetch history for every ticker and write the combined CSV
///
/// Returns the number of rows written.
pub async fn build_history(
    client: &StockDataClient,
    display: &DisplayManager,
    tickers: &[String],
    start_date: &str,
    out_path: &Path,
) -> Result<usize> {
    let mut records: Vec<HistoryRecord> = Vec::new();

    for ticker in tickers {
        let spinner = display.start_fetch(&format!("Fetching history for {}...", ticker));
        let result = client.fetch_history(ticker, start_date).await;
        display.finish_fetch(spinner);

        match result {
            Ok(bars) => {
                for bar in bars {
                    records.push(HistoryRecord {
                        date: bar.date,
                        open: bar.open,
                        high: bar.high,
                        low: bar.low,
                        close: bar.close,
                        adjclose: bar.close,
                        volume: bar.volume,
                        ticker: bar.ticker,
                    });
                }
            }
            Err(err) => {
                display.show_warning(&format!("Error retrieving data for {}: {}", ticker, err));
            }
        }
    }

    if records.is_empty() {
        return Err(AdvisorError::Generic(
            "no history rows fetched for any ticker".to_string(),
        ));
    }

    write_history(&records, out_path)?;
    Ok(records.len())
}

/// Write history records as CSV
pub fn write_history(records: &[HistoryRecord], out_path: &Path) -> Result<()> {
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(out_path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
