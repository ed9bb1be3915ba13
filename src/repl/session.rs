//! Session manager for the advisor conversation
//!
//! Tracks the exchange transcript (bounded) together with session
//! identity and timing, for the /history and /status commands.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Maximum number of exchanges to keep in the transcript
const MAX_HISTORY_SIZE: usize = 1000;

/// One question/answer exchange with the advisor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRecord {
    pub question: String,
    pub reply: String,
    /// Feature the exchange routed to, when it did (stocks, budget, ...)
    pub feature: Option<String>,
    pub timestamp: u64,
}

/// Session manager maintaining the conversation state
pub struct SessionManager {
    session_id: String,
    /// Exchange transcript (FIFO queue, bounded)
    history: VecDeque<ExchangeRecord>,
    session_start: u64,
    exchange_count: usize,
}

impl SessionManager {
    /// Create new session manager
    pub fn new() -> Self {
        SessionManager {
            session_id: Uuid::new_v4().to_string(),
            history: VecDeque::with_capacity(MAX_HISTORY_SIZE),
            session_start: now_secs(),
            exchange_count: 0,
        }
    }

    /// Record a completed exchange
    pub fn record_exchange(&mut self, record: ExchangeRecord) {
        if self.history.len() >= MAX_HISTORY_SIZE {
            self.history.pop_front();
        }
        self.history.push_back(record);
        self.exchange_count += 1;
    }

    /// Get exchange transcript (newest first)
    ///
    /// Returns up to `limit` most recent exchanges
    pub fn get_history(&self, limit: usize) -> Vec<&ExchangeRecord> {
        self.history.iter().rev().take(limit).collect()
    }

    /// Clear session state (reset)
    pub fn reset(&mut self) {
        self.history.clear();
        self.exchange_count = 0;
        self.session_id = Uuid::new_v4().to_string();
        self.session_start = now_secs();
    }

    /// Get session identifier
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Get total exchange count
    pub fn exchange_count(&self) -> usize {
        self.exchange_count
    }

    /// Get session duration in seconds
    pub fn session_duration(&self) -> u64 {
        now_secs().saturating_sub(self.session_start)
    }

    /// Get transcript size
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Count of exchanges that routed to a feature page
    pub fn routed_count(&self) -> usize {
        self.history.iter().filter(|r| r.feature.is_some()).count()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
