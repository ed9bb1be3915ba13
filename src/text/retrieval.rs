//! Threshold-gated best-match retrieval
//!
//! Vectorizes the corpus together with the query and scores the query
//! against every document, the same shape the chatbot, the date
//! recommender and the article QA all use.

use serde::{Deserialize, Serialize};

use crate::text::tfidf::{cosine_similarity, TfIdfVectorizer};

/// Retrieval parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalParams {
    /// Minimum similarity for a match to count (0.0 to 1.0)
    pub threshold: f64,
    /// Maximum number of results for ranked retrieval
    pub top_k: usize,
}

impl Default for RetrievalParams {
    fn default() -> Self {
        RetrievalParams {
            threshold: 0.1,
            top_k: 3,
        }
    }
}

/// Best-scoring corpus document for a query
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    pub index: usize,
    pub score: f64,
}

/// TF-IDF retriever over an in-memory corpus
pub struct Retriever {
    params: RetrievalParams,
}

impl Retriever {
    /// Create retriever with default parameters
    pub fn new() -> Self {
        Self::with_params(RetrievalParams::default())
    }

    /// Create retriever with custom parameters
    pub fn with_params(params: RetrievalParams) -> Self {
        Retriever { params }
    }

    /// Best corpus match for the query, gated by the threshold
    ///
    /// Returns None when the corpus is empty, the query shares no terms
    /// with the corpus, or the best score does not clear the threshold.
    pub fn best_match(&self, corpus: &[String], query: &str) -> Option<BestMatch> {
        let scores = self.score_all(corpus, query);
        let best = scores
            .into_iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))?;

        if best.1 > self.params.threshold {
            Some(BestMatch {
                index: best.0,
                score: best.1,
            })
        } else {
            None
        }
    }

    /// Top-k corpus indices ranked by similarity to the query
    ///
    /// Not threshold-gated; callers that need the gate use `best_match`.
    pub fn top_k(&self, corpus: &[String], query: &str) -> Vec<BestMatch> {
        let mut ranked: Vec<BestMatch> = self
            .score_all(corpus, query)
            .into_iter()
            .enumerate()
            .map(|(index, score)| BestMatch { index, score })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(self.params.top_k);
        ranked
    }

    /// Similarity of the query against every corpus document
    pub fn score_all(&self, corpus: &[String], query: &str) -> Vec<f64> {
        if corpus.is_empty() {
            return Vec::new();
        }

        // Fit over corpus + query so query terms contribute to the vocabulary
        let mut documents = corpus.to_vec();
        documents.push(query.to_string());

        let (_, rows) = TfIdfVectorizer::fit_transform(&documents);
        let (query_row, corpus_rows) = rows.split_last().expect("corpus is non-empty");

        corpus_rows
            .iter()
            .map(|row| cosine_similarity(query_row, row))
            .collect()
    }

    /// Current parameters
    pub fn params(&self) -> &RetrievalParams {
        &self.params
    }
}

impl Default for Retriever {
    fn default() -> Self {
        Self::new()
    }
}
