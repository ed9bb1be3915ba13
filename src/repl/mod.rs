//! Interactive advisor REPL
//!
//! Wires input handling (rustyline), the slash-command system, session
//! tracking, and the display manager around the chatbot. Feature intents
//! recognized by the chatbot hand off to the matching advisor flow.

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

use anyhow::Result;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::articles::{self, ArticleFetcher};
use crate::budget;
use crate::chat::{ChatBot, ChatReply, Feature};
use crate::config::Config;
use crate::recommend;
use crate::stocks::{self, StockDataClient};

pub use crate::repl::commands::{is_command, Command, CommandHandler};
pub use crate::repl::display::DisplayManager;
pub use crate::repl::input::InputHandler;
pub use crate::repl::session::{ExchangeRecord, SessionManager};

/// REPL session coordinator
///
/// Manages the interactive loop with:
/// - Input handling (rustyline)
/// - Command processing
/// - Session state management
/// - Display coordination
/// - The intent chatbot
pub struct ReplSession {
    pub input_handler: InputHandler,
    pub command_handler: CommandHandler,
    pub session_manager: SessionManager,
    pub display_manager: DisplayManager,
    pub chatbot: ChatBot,
}

impl ReplSession {
    /// Create new REPL session
    pub fn new() -> Result<Self> {
        Ok(ReplSession {
            input_handler: InputHandler::new()?,
            command_handler: CommandHandler::new(),
            session_manager: SessionManager::new(),
            display_manager: DisplayManager::new(),
            chatbot: ChatBot::new(),
        })
    }

    /// Create REPL session with persistent history and a custom gate
    pub fn with_history(history_path: PathBuf, threshold: f64) -> Result<Self> {
        Ok(ReplSession {
            input_handler: InputHandler::with_history(history_path)?,
            command_handler: CommandHandler::new(),
            session_manager: SessionManager::new(),
            display_manager: DisplayManager::new(),
            chatbot: ChatBot::with_threshold(threshold),
        })
    }

    /// Show welcome banner and the chatbot greeting
    pub fn show_welcome(&self, version: &str) {
        self.display_manager.show_banner(version);
        self.display_manager.show_reply(self.chatbot.greeting());
        println!();
    }

    /// Read a line of input from user
    pub fn read_input(&mut self) -> Result<Option<String>> {
        self.input_handler.read_line()
    }

    /// Handle a slash command
    ///
    /// Returns true if session should continue, false to exit
    pub fn handle_command(&mut self, input: &str) -> Result<bool> {
        let command = self.command_handler.parse(input);
        self.command_handler
            .execute(command, &mut self.session_manager)
    }

    /// Record a completed exchange
    pub fn record_exchange(&mut self, question: &str, reply: &str, feature: Option<&Feature>) {
        self.session_manager.record_exchange(ExchangeRecord {
            question: question.to_string(),
            reply: reply.to_string(),
            feature: feature.map(|f| f.name().to_string()),
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        });
    }

    /// Get display manager
    pub fn display(&self) -> &DisplayManager {
        &self.display_manager
    }

    /// Get session manager
    pub fn session(&self) -> &SessionManager {
        &self.session_manager
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.command_handler.is_verbose()
    }

    /// Set verbose mode
    pub fn set_verbose(&mut self, enable: bool) {
        self.command_handler.set_verbose(enable);
    }

    /// Save input history, called on graceful shutdown
    pub fn save(&mut self) -> Result<()> {
        self.input_handler.save_history()
    }
}

/// Run the interactive advisor loop
pub async fn run_advisor(config: &Config, version: &str) -> Result<()> {
    let history_path = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".finbuddy_history");

    let mut repl = ReplSession::with_history(history_path, config.retrieval.threshold)?;
    let client = StockDataClient::new(Some(config.api.base_url.clone()))?;
    let fetcher = ArticleFetcher::new(ArticleFetcher::default_listing_urls())?;

    repl.show_welcome(version);

    loop {
        match repl.read_input() {
            Ok(Some(input)) => {
                if input.is_empty() {
                    continue;
                }

                if is_command(&input) {
                    match repl.handle_command(&input) {
                        Ok(true) => continue,
                        Ok(false) => break,
                        Err(err) => {
                            repl.display().show_error(&err.to_string());
                            continue;
                        }
                    }
                }

                match repl.chatbot.respond(&input) {
                    ChatReply::Farewell(reply) => {
                        repl.display_manager.show_reply(&reply);
                        repl.record_exchange(&input, &reply, None);
                        break;
                    }
                    ChatReply::Text(reply) => {
                        repl.display_manager.show_reply(&reply);
                        repl.record_exchange(&input, &reply, None);
                    }
                    ChatReply::Route(feature) => {
                        repl.record_exchange(&input, "", Some(&feature));
                        if let Err(err) =
                            run_feature(&mut repl, &client, &fetcher, config, feature).await
                        {
                            repl.display().show_error(&err.to_string());
                        }
                    }
                }
            }
            Ok(None) => {
                // EOF (Ctrl-D) - exit gracefully
                break;
            }
            Err(err) => {
                if err.to_string().contains("Interrupted") {
                    println!("\nUse /exit to quit gracefully");
                    continue;
                }
                return Err(err);
            }
        }
    }

    repl.save()?;
    Ok(())
}

/// Run one feature flow the chatbot routed to
async fn run_feature(
    repl: &mut ReplSession,
    client: &StockDataClient,
    fetcher: &ArticleFetcher,
    config: &Config,
    feature: Feature,
) -> Result<()> {
    match feature {
        Feature::Stocks => {
            let Some(ticker) = repl
                .input_handler
                .read_answer("Enter a ticker symbol (e.g. AAPL):")
            else {
                return Ok(());
            };
            if ticker.is_empty() {
                repl.display_manager.show_warning("No ticker entered.");
                return Ok(());
            }
            stocks::consult(
                client,
                &repl.display_manager,
                &ticker,
                None,
                config.api.offline,
            )
            .await?;
        }
        Feature::Budget => {
            let input = &mut repl.input_handler;
            let mut answers = |question: &str| input.read_answer(question);
            budget::run_interactive(&repl.display_manager, &mut answers)?;
        }
        Feature::Recommend => {
            let Some(date) = repl.input_handler.read_answer("Enter a date (YYYY-MM-DD):") else {
                return Ok(());
            };
            let Some(ticker) = repl.input_handler.read_answer("Enter a ticker symbol:") else {
                return Ok(());
            };
            if date.is_empty() || ticker.is_empty() {
                repl.display_manager
                    .show_warning("A date and a ticker are both required.");
                return Ok(());
            }
            recommend::run(&repl.display_manager, &config.history_file(), &date, &ticker)?;
        }
        Feature::Articles => {
            let qa =
                articles::run(fetcher, &repl.display_manager, None, config.api.offline).await?;

            loop {
                let Some(question) = repl
                    .input_handler
                    .read_answer("Ask about stock trends (or press Enter to go back):")
                else {
                    break;
                };
                if question.is_empty() {
                    break;
                }
                repl.display_manager.show_reply(&qa.answer(&question));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repl_session_creation() {
        let session = ReplSession::new();
        assert!(session.is_ok());
    }

    #[test]
    fn test_handle_help_command() {
        let mut repl = ReplSession::new().unwrap();
        let result = repl.handle_command("/help").unwrap();
        assert!(result);
    }

    #[test]
    fn test_handle_exit_command() {
        let mut repl = ReplSession::new().unwrap();
        let result = repl.handle_command("/exit").unwrap();
        assert!(!result);
    }

    #[test]
    fn test_record_exchange_tracks_feature() {
        let mut repl = ReplSession::new().unwrap();
        repl.record_exchange("stocks consulting", "", Some(&Feature::Stocks));
        repl.record_exchange("hello", "Hi there!", None);

        assert_eq!(repl.session().exchange_count(), 2);
        assert_eq!(repl.session().routed_count(), 1);
    }

    #[test]
    fn test_verbose_mode() {
        let mut repl = ReplSession::new().unwrap();
        assert!(!repl.is_verbose());
        repl.set_verbose(true);
        assert!(repl.is_verbose());
    }
}
