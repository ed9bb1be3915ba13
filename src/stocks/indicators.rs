//! Financial indicators over a fetched snapshot
//!
//! Every lookup is safe: a missing report or field renders "N/A"
//! instead of failing the whole page.

use clap::ValueEnum;
use serde_json::Value;

use crate::stocks::types::{FinancialSnapshot, StatementHistory};

/// Which statement an indicator reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    Income,
    Cashflow,
    Balance,
}

/// Indicators the consulting flow can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Indicator {
    /// Latest close price
    StockPrice,
    /// Total revenue
    Turnover,
    /// Net income
    NetTurnover,
    GrossMargin,
    NetMargin,
    OperatingMargin,
    ReturnOnEquity,
    ReturnOnAssets,
    PayoutRatio,
    PriceEarningsRatio,
    FreeCashFlow,
    EquityDebtRatio,
}

impl Indicator {
    /// All indicators, in display order
    pub const ALL: &'static [Indicator] = &[
        Indicator::StockPrice,
        Indicator::Turnover,
        Indicator::NetTurnover,
        Indicator::GrossMargin,
        Indicator::NetMargin,
        Indicator::OperatingMargin,
        Indicator::ReturnOnEquity,
        Indicator::ReturnOnAssets,
        Indicator::PayoutRatio,
        Indicator::PriceEarningsRatio,
        Indicator::FreeCashFlow,
        Indicator::EquityDebtRatio,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::StockPrice => "Stock price",
            Indicator::Turnover => "Turnover",
            Indicator::NetTurnover => "Net turnover",
            Indicator::GrossMargin => "Gross margin",
            Indicator::NetMargin => "Net margin",
            Indicator::OperatingMargin => "Operating margin",
            Indicator::ReturnOnEquity => "ROE (Return on Equity)",
            Indicator::ReturnOnAssets => "ROA (Return on Assets)",
            Indicator::PayoutRatio => "Payout ratio",
            Indicator::PriceEarningsRatio => "PER (Price Earnings Ratio)",
            Indicator::FreeCashFlow => "Free cash-flow",
            Indicator::EquityDebtRatio => "Ratio equity/debt",
        }
    }

    /// Unit suffix shown after the value
    pub fn unit(&self) -> &'static str {
        match self {
            Indicator::StockPrice
            | Indicator::Turnover
            | Indicator::NetTurnover
            | Indicator::FreeCashFlow => "$",
            _ => "%",
        }
    }

    /// Source statement and field key for statement-backed indicators
    fn source(&self) -> Option<(Statement, &'static str)> {
        match self {
            Indicator::StockPrice => None,
            Indicator::Turnover => Some((Statement::Income, "totalRevenue")),
            Indicator::NetTurnover => Some((Statement::Income, "netIncome")),
            Indicator::GrossMargin => Some((Statement::Income, "grossProfit")),
            Indicator::NetMargin => Some((Statement::Income, "netIncome")),
            Indicator::OperatingMargin => Some((Statement::Income, "ebit")),
            Indicator::ReturnOnEquity => Some((Statement::Balance, "stockholdersEquity")),
            Indicator::ReturnOnAssets => Some((Statement::Balance, "totalAssets")),
            Indicator::PayoutRatio => Some((Statement::Cashflow, "cashDividendsPaid")),
            Indicator::PriceEarningsRatio => Some((Statement::Balance, "totalCapitalization")),
            Indicator::FreeCashFlow => Some((Statement::Cashflow, "freeCashFlow")),
            Indicator::EquityDebtRatio => Some((Statement::Balance, "longTermDebt")),
        }
    }

    /// Render the indicator value from a snapshot, "N/A" when missing
    pub fn value(&self, snapshot: &FinancialSnapshot) -> String {
        match self.source() {
            None => snapshot
                .quote
                .as_ref()
                .map(|quote| format!("{:.2}", quote.close))
                .unwrap_or_else(|| "N/A".to_string()),
            Some((statement, key)) => {
                let history = match statement {
                    Statement::Income => &snapshot.income,
                    Statement::Cashflow => &snapshot.cashflow,
                    Statement::Balance => &snapshot.balance,
                };
                safe_value(history, key)
            }
        }
    }

    /// Rendered value with its unit appended
    pub fn display(&self, snapshot: &FinancialSnapshot) -> String {
        let value = self.value(snapshot);
        if value == "N/A" {
            value
        } else {
            format!("{} {}", value, self.unit())
        }
    }
}

/// Most-recent-report lookup that renders "N/A" on any gap
fn safe_value(history: &StatementHistory, key: &str) -> String {
    history
        .most_recent()
        .and_then(|report| report.get(key))
        .map(render_value)
        .unwrap_or_else(|| "N/A".to_string())
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Label/value rows for the full summary table
pub fn summary_rows(snapshot: &FinancialSnapshot) -> Vec<(&'static str, String)> {
    Indicator::ALL
        .iter()
        .map(|indicator| (indicator.label(), indicator.display(snapshot)))
        .collect()
}
