//! Bundled demo snapshot used when the API is unreachable or offline

use serde_json::json;

use crate::stocks::types::{FinancialSnapshot, Quote, Report};

/// Hard-coded snapshot standing in for a live fetch
pub fn demo_snapshot(ticker: &str) -> FinancialSnapshot {
    let ticker = ticker.trim().to_uppercase();
    let mut snapshot = FinancialSnapshot {
        ticker: ticker.clone(),
        ..Default::default()
    };

    let mut income = Report::new();
    income.insert("totalRevenue".to_string(), json!(391_035_000_000i64));
    income.insert("netIncome".to_string(), json!(93_736_000_000i64));
    income.insert("grossProfit".to_string(), json!(180_683_000_000i64));
    income.insert("ebit".to_string(), json!(123_216_000_000i64));
    snapshot.income.insert("2024-09-30".to_string(), income);

    let mut cashflow = Report::new();
    cashflow.insert("freeCashFlow".to_string(), json!(108_807_000_000i64));
    cashflow.insert("cashDividendsPaid".to_string(), json!(-15_234_000_000i64));
    snapshot.cashflow.insert("2024-09-30".to_string(), cashflow);

    let mut balance = Report::new();
    balance.insert("totalAssets".to_string(), json!(364_980_000_000i64));
    balance.insert("stockholdersEquity".to_string(), json!(56_950_000_000i64));
    balance.insert("totalCapitalization".to_string(), json!(142_700_000_000i64));
    balance.insert("longTermDebt".to_string(), json!(85_750_000_000i64));
    snapshot.balance.insert("2024-09-30".to_string(), balance);

    snapshot.quote = Some(Quote {
        ticker,
        date: "2024-12-20".to_string(),
        open: 248.04,
        high: 255.0,
        low: 245.69,
        close: 254.49,
        volume: 147_495_300,
    });

    snapshot
}
