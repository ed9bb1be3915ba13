//! Retrieval-backed question answering over fetched articles
//!
//! Two stages, both plain TF-IDF retrieval: pick the article closest to
//! the question, then pick the best-scoring sentence inside it as the
//! answer.

use regex::Regex;

use crate::articles::fetcher::Article;
use crate::text::{Preprocessor, RetrievalParams, Retriever};

/// Fallback when no article clears the relevance gate
pub const NO_ARTICLE_REPLY: &str = "I am sorry, I could not find a relevant article.";

/// Fallback when the best article has no scoring sentence
pub const NO_ANSWER_REPLY: &str =
    "I found a related article but could not extract an answer from it.";

/// Question answering over an article corpus
pub struct ArticleQa {
    articles: Vec<Article>,
    /// Preprocessed article bodies, aligned with `articles`
    corpus: Vec<String>,
    preprocessor: Preprocessor,
    retriever: Retriever,
    sentence_splitter: Regex,
}

impl ArticleQa {
    /// Build the QA index over fetched articles
    pub fn new(articles: Vec<Article>) -> Self {
        Self::with_threshold(articles, 0.1)
    }

    /// Build with a custom relevance gate
    pub fn with_threshold(articles: Vec<Article>, threshold: f64) -> Self {
        let preprocessor = Preprocessor::new();
        let corpus = articles
            .iter()
            .map(|article| preprocessor.preprocess(&article.text))
            .collect();

        ArticleQa {
            articles,
            corpus,
            preprocessor,
            retriever: Retriever::with_params(RetrievalParams {
                threshold,
                top_k: 1,
            }),
            sentence_splitter: Regex::new(r"[^.!?]+[.!?]?").expect("valid sentence pattern"),
        }
    }

    /// The article most relevant to the question, gated by similarity
    ///
    /// A best score of exactly 1.0 is rejected too: it means the
    /// "article" is just the question text again, not an answer source.
    pub fn best_article(&self, question: &str) -> Option<&Article> {
        let query = self.preprocessor.preprocess(question);
        let best = self.retriever.best_match(&self.corpus, &query)?;
        if best.score > 1.0 - 1e-9 {
            return None;
        }
        Some(&self.articles[best.index])
    }

    /// Answer a question with the best-scoring sentence of the best article
    pub fn answer(&self, question: &str) -> String {
        let Some(article) = self.best_article(question) else {
            return NO_ARTICLE_REPLY.to_string();
        };

        let sentences: Vec<String> = self
            .sentence_splitter
            .find_iter(&article.text)
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let corpus: Vec<String> = sentences
            .iter()
            .map(|s| self.preprocessor.preprocess(s))
            .collect();
        let query = self.preprocessor.preprocess(question);

        match self.retriever.best_match(&corpus, &query) {
            Some(best) => sentences[best.index].clone(),
            None => NO_ANSWER_REPLY.to_string(),
        }
    }

    /// Loaded articles
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Number of articles in the index
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, text: &str) -> Article {
        Article {
            title: title.to_string(),
            link: format!("https://news.example/{}", title.replace(' ', "-")),
            text: text.to_string(),
        }
    }

    fn qa() -> ArticleQa {
        ArticleQa::new(vec![
            article(
                "rates",
                "The central bank held interest rates steady this week. \
                 Officials signaled patience on future interest rate cuts.",
            ),
            article(
                "retirement",
                "Saving early for retirement compounds over decades. \
                 Experts recommend contributing to a retirement account every month.",
            ),
            article(
                "budgeting",
                "A monthly budget starts with tracking fixed costs. \
                 Food and transportation usually dominate household spending.",
            ),
        ])
    }

    #[test]
    fn test_best_article_matches_topic() {
        let qa = qa();
        let best = qa.best_article("what is happening with interest rates?").unwrap();
        assert_eq!(best.title, "rates");
    }

    #[test]
    fn test_best_article_unrelated_question() {
        let qa = qa();
        assert!(qa.best_article("zebra migration patterns").is_none());
    }

    #[test]
    fn test_answer_extracts_relevant_sentence() {
        let qa = qa();
        let answer = qa.answer("should I save for retirement every month?");
        assert!(answer.to_lowercase().contains("retirement"));
    }

    #[test]
    fn test_answer_fallback_on_unrelated_question() {
        let qa = qa();
        assert_eq!(qa.answer("zebra migration patterns"), NO_ARTICLE_REPLY);
    }

    #[test]
    fn test_empty_corpus() {
        let qa = ArticleQa::new(vec![]);
        assert!(qa.is_empty());
        assert!(qa.best_article("anything").is_none());
        assert_eq!(qa.answer("anything"), NO_ARTICLE_REPLY);
    }

    #[test]
    fn test_exact_duplicate_article_rejected() {
        let question = "interest rates held steady";
        let qa = ArticleQa::new(vec![article("dup", question)]);
        // The only article is the question itself; the 1.0 gate rejects it
        assert!(qa.best_article(question).is_none());
    }
}
