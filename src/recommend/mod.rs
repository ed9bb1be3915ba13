//! Similar-date stock recommendation over CSV history
//!
//! Each history row becomes a feature string (open/high/low/close/ticker
//! joined), the whole file is TF-IDF vectorized, and the rows most
//! similar to the queried date/ticker row are recommended.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{AdvisorError, Result};
use crate::repl::display::DisplayManager;
use crate::text::tfidf::{cosine_similarity, TfIdfVectorizer};

/// Number of similar dates to recommend
const RECOMMENDATION_COUNT: usize = 3;

/// One row of the ticker history CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub adjclose: f64,
    #[serde(default)]
    pub volume: u64,
    pub ticker: String,
}

impl HistoryRecord {
    /// Feature string the row is vectorized from
    fn feature_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.open, self.high, self.low, self.close, self.ticker
        )
    }
}

/// Recommender over a loaded ticker history
pub struct DateRecommender {
    records: Vec<HistoryRecord>,
    rows: Vec<Vec<f64>>,
}

impl DateRecommender {
    /// Load the recommender from a ticker history CSV
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for record in reader.deserialize() {
            let record: HistoryRecord = record?;
            records.push(record);
        }
        Self::from_records(records)
    }

    /// Build the recommender over in-memory records
    pub fn from_records(records: Vec<HistoryRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(AdvisorError::EmptyCorpus);
        }

        let features: Vec<String> = records.iter().map(HistoryRecord::feature_text).collect();
        let (_, rows) = TfIdfVectorizer::fit_transform(&features);

        Ok(DateRecommender { records, rows })
    }

    /// The most similar other dates for a date/ticker row
    ///
    /// The queried row itself always scores 1.0 against itself and is
    /// excluded from the result.
    pub fn recommend(&self, date: &str, ticker: &str) -> Result<Vec<String>> {
        let ticker = ticker.trim().to_uppercase();
        let index = self
            .records
            .iter()
            .position(|r| r.date == date && r.ticker == ticker)
            .ok_or_else(|| AdvisorError::DataNotFound {
                date: date.to_string(),
                ticker: ticker.clone(),
            })?;

        let query_row = &self.rows[index];
        let mut scored: Vec<(usize, f64)> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(i, row)| (i, cosine_similarity(query_row, row)))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(RECOMMENDATION_COUNT)
            .map(|(i, _)| self.records[i].date.clone())
            .collect())
    }

    /// All rows matching a date/ticker pair
    pub fn rows_for(&self, date: &str, ticker: &str) -> Vec<&HistoryRecord> {
        self.records
            .iter()
            .filter(|r| r.date == date && r.ticker == ticker)
            .collect()
    }

    /// Number of loaded rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Run the recommendation flow and print the results
pub fn run(display: &DisplayManager, data_path: &Path, date: &str, ticker: &str) -> Result<()> {
    let recommender = DateRecommender::from_csv_path(data_path)?;
    let ticker = ticker.trim().to_uppercase();
    let recommendations = recommender.recommend(date, &ticker)?;

    display.show_section(&format!("Stock Recommendation: {} on {}", ticker, date));
    if recommendations.is_empty() {
        display.show_warning("No similar dates found.");
        return Ok(());
    }

    display.show_info(&format!("Found recommendations for {} on {}", ticker, date));
    for rec_date in &recommendations {
        display.show_bullet(&format!("Recommended date: {}", rec_date));
        for row in recommender.rows_for(rec_date, &ticker) {
            display.show_row(
                &row.date,
                &format!(
                    "open {:.2}  high {:.2}  low {:.2}  close {:.2}",
                    row.open, row.high, row.low, row.close
                ),
            );
        }
    }

    Ok(())
}
