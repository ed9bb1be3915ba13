//! Text preprocessing and TF-IDF retrieval
//!
//! The one routine the whole advisor leans on: normalize text, vectorize
//! a corpus plus a query with TF-IDF, score by cosine similarity, and
//! keep the best match only when it clears a threshold.

pub mod preprocess;
pub mod retrieval;
pub mod tfidf;

pub use preprocess::Preprocessor;
pub use retrieval::{BestMatch, RetrievalParams, Retriever};
pub use tfidf::{cosine_similarity, TfIdfVectorizer};
