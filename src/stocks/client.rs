//! Financial data API client
//!
//! Low-level HTTP client for the statement-summary and chart endpoints.
//! Responses are decoded leniently: each report field keeps its raw JSON
//! value, and missing fields surface later as "N/A" rather than errors.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::errors::{AdvisorError, Result};
use crate::stocks::types::{FinancialSnapshot, Quote, Report, StatementHistory};

const STATEMENT_MODULES: &str =
    "incomeStatementHistory,cashflowStatementHistory,balanceSheetHistory";

/// HTTP client for the financial data API
pub struct StockDataClient {
    client: Client,
    base_url: String,
}

impl StockDataClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API base URL (default: https://query1.finance.yahoo.com)
    pub fn new(base_url: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("finbuddy/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(StockDataClient {
            client,
            base_url: base_url
                .unwrap_or_else(|| "https://query1.finance.yahoo.com".to_string()),
        })
    }

    /// Fetch statements and the latest quote for a ticker
    ///
    /// Fails with `TickerNotFound` when any statement history comes back
    /// empty, matching the original all-or-nothing fetch.
    pub async fn fetch_snapshot(&self, ticker: &str) -> Result<FinancialSnapshot> {
        let ticker = ticker.trim().to_uppercase();
        let (income, cashflow, balance) = self.fetch_statements(&ticker).await?;
        let quote = self.fetch_quote(&ticker).await.ok();

        let snapshot = FinancialSnapshot {
            ticker: ticker.clone(),
            income,
            cashflow,
            balance,
            quote,
        };

        if !snapshot.is_complete() {
            return Err(AdvisorError::TickerNotFound(ticker));
        }
        Ok(snapshot)
    }

    /// Fetch annual income, cash-flow and balance-sheet histories
    pub async fn fetch_statements(
        &self,
        ticker: &str,
    ) -> Result<(StatementHistory, StatementHistory, StatementHistory)> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules={}",
            self.base_url, ticker, STATEMENT_MODULES
        );

        let response = self.client.get(&url).send().await?;
        if response.status().as_u16() == 404 {
            return Err(AdvisorError::TickerNotFound(ticker.to_string()));
        }
        if !response.status().is_success() {
            return Err(AdvisorError::ApiError(format!(
                "statement request failed with status {}",
                response.status()
            )));
        }

        let body: Value = response.json().await?;
        let result = body
            .pointer("/quoteSummary/result/0")
            .ok_or_else(|| AdvisorError::TickerNotFound(ticker.to_string()))?;

        let income = parse_statements(result, "incomeStatementHistory", "incomeStatementHistory");
        let cashflow =
            parse_statements(result, "cashflowStatementHistory", "cashflowStatements");
        let balance = parse_statements(result, "balanceSheetHistory", "balanceSheetStatements");

        Ok((income, cashflow, balance))
    }

    /// Fetch the latest daily price bar for a ticker
    pub async fn fetch_quote(&self, ticker: &str) -> Result<Quote> {
        let url = format!(
            "{}/v8/finance/chart/{}?range=5d&interval=1d",
            self.base_url, ticker
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AdvisorError::ApiError(format!(
                "chart request failed with status {}",
                response.status()
            )));
        }

        let body: Value = response.json().await?;
        let result = body
            .pointer("/chart/result/0")
            .ok_or_else(|| AdvisorError::TickerNotFound(ticker.to_string()))?;

        parse_latest_bar(result, ticker)
            .ok_or_else(|| AdvisorError::ApiError("no price bars in chart response".to_string()))
    }

    /// Fetch daily price bars for a ticker since a start date (YYYY-MM-DD)
    pub async fn fetch_history(&self, ticker: &str, start_date: &str) -> Result<Vec<Quote>> {
        let start = chrono::NaiveDate::parse_from_str(start_date, "%Y-%m-%d").map_err(|_| {
            AdvisorError::InvalidDate {
                input: start_date.to_string(),
                expected: "YYYY-MM-DD".to_string(),
            }
        })?;
        let period1 = start
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or(0);
        let period2 = chrono::Utc::now().timestamp();

        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d",
            self.base_url, ticker, period1, period2
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AdvisorError::ApiError(format!(
                "chart request failed with status {}",
                response.status()
            )));
        }

        let body: Value = response.json().await?;
        let result = body
            .pointer("/chart/result/0")
            .ok_or_else(|| AdvisorError::TickerNotFound(ticker.to_string()))?;

        Ok(parse_all_bars(result, ticker))
    }

    /// Check whether the API host answers at all
    pub async fn is_available(&self) -> bool {
        self.client
            .get(&self.base_url)
            .timeout(Duration::from_secs(2))
            .send()
            .await
            .is_ok()
    }

    /// API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Extract one statement history from a quoteSummary result
///
/// Field values arrive as `{"raw": n, "fmt": "..."}` objects; the raw
/// number is kept, everything else is stored as-is.
fn parse_statements(result: &Value, module: &str, list_key: &str) -> StatementHistory {
    let mut history = StatementHistory::default();

    let Some(entries) = result
        .pointer(&format!("/{}/{}", module, list_key))
        .and_then(Value::as_array)
    else {
        return history;
    };

    for entry in entries {
        let Some(fields) = entry.as_object() else {
            continue;
        };
        let Some(end_date) = fields
            .get("endDate")
            .and_then(|d| d.pointer("/fmt"))
            .and_then(Value::as_str)
        else {
            continue;
        };

        let mut report = Report::new();
        for (key, value) in fields {
            if key == "endDate" {
                continue;
            }
            let raw = value.pointer("/raw").cloned().unwrap_or_else(|| value.clone());
            report.insert(key.clone(), raw);
        }
        history.insert(end_date.to_string(), report);
    }

    history
}

/// Latest complete bar from a chart result
fn parse_latest_bar(result: &Value, ticker: &str) -> Option<Quote> {
    parse_all_bars(result, ticker).pop()
}

/// All complete bars from a chart result, oldest first
fn parse_all_bars(result: &Value, ticker: &str) -> Vec<Quote> {
    let Some(timestamps) = result.pointer("/timestamp").and_then(Value::as_array) else {
        return Vec::new();
    };
    let Some(quote) = result.pointer("/indicators/quote/0") else {
        return Vec::new();
    };

    let series = |name: &str| -> Vec<Option<f64>> {
        quote
            .pointer(&format!("/{}", name))
            .and_then(Value::as_array)
            .map(|values| values.iter().map(Value::as_f64).collect())
            .unwrap_or_default()
    };

    let opens = series("open");
    let highs = series("high");
    let lows = series("low");
    let closes = series("close");
    let volumes = series("volume");

    let mut bars = Vec::new();
    for (i, ts) in timestamps.iter().enumerate() {
        let Some(ts) = ts.as_i64() else { continue };
        let date = chrono::DateTime::from_timestamp(ts, 0)
            .map(|dt| dt.date_naive().to_string())
            .unwrap_or_default();

        let bar = (|| {
            Some(Quote {
                ticker: ticker.to_string(),
                date,
                open: *opens.get(i)?.as_ref()?,
                high: *highs.get(i)?.as_ref()?,
                low: *lows.get(i)?.as_ref()?,
                close: *closes.get(i)?.as_ref()?,
                volume: volumes.get(i).copied().flatten().unwrap_or(0.0) as u64,
            })
        })();

        if let Some(bar) = bar {
            bars.push(bar);
        }
    }
    bars
}
