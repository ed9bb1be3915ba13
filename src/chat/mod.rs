//! Rule-based advisor chatbot
//!
//! Matches user input against an intent table with TF-IDF retrieval and
//! a similarity gate; small talk gets a canned reply, feature intents
//! route to the matching advisor flow, everything else falls back to the
//! default reply.

pub mod intents;

use rand::seq::SliceRandom;

use crate::text::{Preprocessor, RetrievalParams, Retriever};
pub use intents::{Feature, IntentAction, IntentTable};

/// Default reply when no intent clears the similarity gate
pub const DEFAULT_REPLY: &str = "I don't understand. Can you rephrase your question?";

/// Farewell reply for exit words
pub const FAREWELL: &str = "Goodbye! Until next time.";

/// Words that end the conversation
const EXIT_WORDS: &[&str] = &["exit", "bye", "quit"];

/// Chatbot reply kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ChatReply {
    /// Plain text answer
    Text(String),
    /// Hand off to a feature flow
    Route(Feature),
    /// Conversation is over
    Farewell(String),
}

/// Intent-matching chatbot
pub struct ChatBot {
    table: IntentTable,
    preprocessor: Preprocessor,
    retriever: Retriever,
    /// Preprocessed intent keys, aligned with the table
    corpus: Vec<String>,
}

impl ChatBot {
    /// Create chatbot with the built-in intent table and default gate
    pub fn new() -> Self {
        Self::with_threshold(0.1)
    }

    /// Create chatbot with a custom similarity gate
    pub fn with_threshold(threshold: f64) -> Self {
        let table = IntentTable::builtin();
        let preprocessor = Preprocessor::new();
        let corpus = table
            .keys()
            .map(|key| preprocessor.preprocess(key))
            .collect();

        ChatBot {
            table,
            preprocessor,
            retriever: Retriever::with_params(RetrievalParams {
                threshold,
                top_k: 1,
            }),
            corpus,
        }
    }

    /// Generate a reply for user input
    pub fn respond(&self, input: &str) -> ChatReply {
        let lowered = input.trim().to_lowercase();
        if EXIT_WORDS.contains(&lowered.as_str()) {
            return ChatReply::Farewell(FAREWELL.to_string());
        }

        let query = self.preprocessor.preprocess(input);
        let Some(best) = self.retriever.best_match(&self.corpus, &query) else {
            return ChatReply::Text(DEFAULT_REPLY.to_string());
        };

        match self.table.action(best.index) {
            IntentAction::Replies(replies) => {
                let reply = replies
                    .choose(&mut rand::thread_rng())
                    .copied()
                    .unwrap_or(DEFAULT_REPLY);
                ChatReply::Text(reply.to_string())
            }
            IntentAction::Page(feature) => ChatReply::Route(*feature),
        }
    }

    /// Greeting line shown when the conversation starts
    pub fn greeting(&self) -> &'static str {
        "Hello, I am your Financial Advisor Bot. \
         Feel free to ask me any questions related to personal finance."
    }
}

impl Default for ChatBot {
    fn default() -> Self {
        Self::new()
    }
}
