//! Data types for fetched financial statements and quotes

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One annual report: field name to raw value, keyed by report end date
pub type Report = BTreeMap<String, Value>;

/// History of annual reports for one statement, newest date wins lookups
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementHistory {
    /// Report end date (YYYY-MM-DD) to report fields
    pub reports: BTreeMap<String, Report>,
}

impl StatementHistory {
    /// The most recent report by end date, if any
    pub fn most_recent(&self) -> Option<&Report> {
        self.reports.iter().next_back().map(|(_, report)| report)
    }

    /// Insert a report for an end date
    pub fn insert(&mut self, end_date: String, report: Report) {
        self.reports.insert(end_date, report);
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Latest daily price bar for a ticker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub ticker: String,
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Everything the consulting flow needs for one ticker
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub ticker: String,
    pub income: StatementHistory,
    pub cashflow: StatementHistory,
    pub balance: StatementHistory,
    pub quote: Option<Quote>,
}

impl FinancialSnapshot {
    /// A snapshot is usable when every statement has at least one report
    pub fn is_complete(&self) -> bool {
        !self.income.is_empty() && !self.cashflow.is_empty() && !self.balance.is_empty()
    }
}
