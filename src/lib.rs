//! FinBuddy - Personal Finance Advisor for the terminal
//!
//! A chat-driven advisor that looks up stock indicators, recommends
//! similar trading dates over CSV history, answers questions against
//! fetched financial news, and runs a personal budget calculator.
//!
//! # Architecture
//!
//! - `text`: preprocessing, TF-IDF vectorization, similarity retrieval
//! - `chat`: intent table and the rule-based chatbot
//! - `stocks`, `recommend`, `articles`, `budget`, `history`: advisor flows
//! - `repl`, `cli`: interactive loop and one-shot commands

pub mod articles;
pub mod budget;
pub mod chat;
pub mod cli;
pub mod config;
pub mod errors;
pub mod history;
pub mod recommend;
pub mod repl;
pub mod stocks;
pub mod text;

// Re-export commonly used types
pub use config::Config;
pub use errors::{AdvisorError, Result};
