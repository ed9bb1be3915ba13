//! TF-IDF vectorization and cosine similarity
//!
//! Dense vectors over a fitted vocabulary, smoothed idf, L2-normalized
//! rows. Corpora here are small (intent keys, article sentences, CSV
//! rows), so no sparse representation is needed.

use std::collections::HashMap;

/// TF-IDF vectorizer fitted over a corpus
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Fit the vectorizer and transform the corpus in one pass
    ///
    /// Documents are expected to be preprocessed already (lowercase,
    /// stopwords removed); terms are split on whitespace.
    ///
    /// idf(t) = ln((1 + n) / (1 + df(t))) + 1, rows L2-normalized.
    pub fn fit_transform(documents: &[String]) -> (Self, Vec<Vec<f64>>) {
        let tokenized: Vec<Vec<&str>> = documents
            .iter()
            .map(|doc| doc.split_whitespace().collect())
            .collect();

        // Build vocabulary in first-seen order
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        for tokens in &tokenized {
            for token in tokens {
                let next_id = vocabulary.len();
                vocabulary.entry((*token).to_string()).or_insert(next_id);
            }
        }

        // Document frequencies
        let mut df = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let mut seen = vec![false; vocabulary.len()];
            for token in tokens {
                let id = vocabulary[*token];
                if !seen[id] {
                    seen[id] = true;
                    df[id] += 1;
                }
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&freq| ((1.0 + n) / (1.0 + freq as f64)).ln() + 1.0)
            .collect();

        let vectorizer = TfIdfVectorizer { vocabulary, idf };
        let rows = tokenized
            .iter()
            .map(|tokens| vectorizer.weigh(tokens))
            .collect();

        (vectorizer, rows)
    }

    /// Transform a single document against the fitted vocabulary
    ///
    /// Out-of-vocabulary terms are ignored.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let tokens: Vec<&str> = document.split_whitespace().collect();
        self.weigh(&tokens)
    }

    /// Number of terms in the fitted vocabulary
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn weigh(&self, tokens: &[&str]) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for token in tokens {
            if let Some(&id) = self.vocabulary.get(*token) {
                vector[id] += 1.0;
            }
        }
        for (id, weight) in vector.iter_mut().enumerate() {
            *weight *= self.idf[id];
        }
        l2_normalize(&mut vector);
        vector
    }
}

/// Cosine similarity between two vectors
///
/// Vectors produced by the vectorizer are already L2-normalized, so this
/// reduces to a dot product for them; the norms are still applied to stay
/// correct for arbitrary input.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

fn l2_normalize(vector: &mut [f64]) {
    let norm: f64 = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in vector.iter_mut() {
            *weight /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn corpus(docs: &[&str]) -> Vec<String> {
        docs.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_fit_transform_shapes() {
        let docs = corpus(&["stock price today", "stock recommendation", "budget plan"]);
        let (vectorizer, rows) = TfIdfVectorizer::fit_transform(&docs);

        assert_eq!(rows.len(), 3);
        assert_eq!(vectorizer.vocabulary_size(), 6);
        for row in &rows {
            assert_eq!(row.len(), 6);
        }
    }

    #[test]
    fn test_rows_are_normalized() {
        let docs = corpus(&["alpha beta gamma", "alpha alpha beta"]);
        let (_, rows) = TfIdfVectorizer::fit_transform(&docs);
        for row in &rows {
            let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_identical_documents_have_unit_similarity() {
        let docs = corpus(&["stock price", "stock price"]);
        let (_, rows) = TfIdfVectorizer::fit_transform(&docs);
        let sim = cosine_similarity(&rows[0], &rows[1]);
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents_have_zero_similarity() {
        let docs = corpus(&["stock price", "budget plan"]);
        let (_, rows) = TfIdfVectorizer::fit_transform(&docs);
        assert_eq!(cosine_similarity(&rows[0], &rows[1]), 0.0);
    }

    #[test]
    fn test_transform_out_of_vocabulary() {
        let docs = corpus(&["stock price"]);
        let (vectorizer, _) = TfIdfVectorizer::fit_transform(&docs);
        let query = vectorizer.transform("unknown words only");
        assert!(query.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_transform_partial_overlap_ranks_correctly() {
        let docs = corpus(&["stock price today", "personal budget plan"]);
        let (vectorizer, rows) = TfIdfVectorizer::fit_transform(&docs);
        let query = vectorizer.transform("stock price");

        let sim_stock = cosine_similarity(&query, &rows[0]);
        let sim_budget = cosine_similarity(&query, &rows[1]);
        assert!(sim_stock > sim_budget);
    }

    #[test]
    fn test_empty_corpus() {
        let (vectorizer, rows) = TfIdfVectorizer::fit_transform(&[]);
        assert!(rows.is_empty());
        assert_eq!(vectorizer.vocabulary_size(), 0);
    }

    #[quickcheck]
    fn prop_cosine_similarity_bounded(a: Vec<f64>, b: Vec<f64>) -> bool {
        let a: Vec<f64> = a
            .into_iter()
            .map(|x| if x.is_finite() { x.clamp(-1e6, 1e6) } else { 0.0 })
            .collect();
        let b: Vec<f64> = b
            .into_iter()
            .map(|x| if x.is_finite() { x.clamp(-1e6, 1e6) } else { 0.0 })
            .collect();
        let len = a.len().min(b.len());
        let sim = cosine_similarity(&a[..len], &b[..len]);
        (-1.0 - 1e-9..=1.0 + 1e-9).contains(&sim) || sim == 0.0
    }
}
