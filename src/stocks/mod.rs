//! Stock consulting: financial statements and quote lookup
//!
//! Fetches a ticker's annual statements and latest price, then renders
//! one indicator or the whole summary table. A fetch failure drops to a
//! bundled demo snapshot with a warning instead of aborting the flow.

pub mod client;
pub mod demo;
pub mod indicators;
pub mod types;

pub use client::StockDataClient;
pub use indicators::{summary_rows, Indicator};
pub use types::{FinancialSnapshot, Quote};

use crate::errors::Result;
use crate::repl::display::DisplayManager;

/// Run the consulting flow for one ticker
///
/// Shows the requested indicator, or the full summary table when no
/// indicator is given.
pub async fn consult(
    client: &StockDataClient,
    display: &DisplayManager,
    ticker: &str,
    indicator: Option<Indicator>,
    offline: bool,
) -> Result<()> {
    let snapshot = load_snapshot(client, display, ticker, offline).await;

    display.show_section(&format!("Stocks Consulting: {}", snapshot.ticker));

    match indicator {
        Some(indicator) => {
            display.show_info(&format!(
                "{}: {}",
                indicator.label(),
                indicator.display(&snapshot)
            ));
        }
        None => {
            for (label, value) in summary_rows(&snapshot) {
                display.show_row(label, &value);
            }
        }
    }

    Ok(())
}

/// Fetch a snapshot, falling back to demo data on failure
pub async fn load_snapshot(
    client: &StockDataClient,
    display: &DisplayManager,
    ticker: &str,
    offline: bool,
) -> FinancialSnapshot {
    if offline {
        display.show_warning("Offline mode: using bundled demo data");
        return demo::demo_snapshot(ticker);
    }

    let spinner = display.start_fetch(&format!("Fetching data for {}...", ticker));
    let result = client.fetch_snapshot(ticker).await;
    display.finish_fetch(spinner);

    match result {
        Ok(snapshot) => snapshot,
        Err(err) => {
            display.show_warning(&format!(
                "Couldn't retrieve data for '{}' ({}); using bundled demo data",
                ticker, err
            ));
            demo::demo_snapshot(ticker)
        }
    }
}
