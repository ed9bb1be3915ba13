//! Command handler for REPL built-in commands
//!
//! Slash commands for session management alongside the natural-language
//! chat input.

use anyhow::Result;
use colored::*;

use crate::repl::session::SessionManager;

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    History { limit: Option<usize> },
    Status,
    Reset,
    Exit,
    Verbose { enable: bool },
    Clear,
    Unknown { input: String },
}

/// Command handler for parsing and executing REPL commands
pub struct CommandHandler {
    verbose: bool,
}

impl CommandHandler {
    /// Create new command handler
    pub fn new() -> Self {
        CommandHandler { verbose: false }
    }

    /// Parse input string into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        // Not a command if doesn't start with /
        if !trimmed.starts_with('/') {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "history" => {
                let limit = parts.get(1).and_then(|s| s.parse().ok());
                Command::History { limit }
            }
            "status" => Command::Status,
            "reset" => Command::Reset,
            "verbose" => {
                let enable = parts
                    .get(1)
                    .map(|s| s.to_lowercase() == "on" || s == &"1" || s == &"true")
                    .unwrap_or(true);
                Command::Verbose { enable }
            }
            "clear" | "cls" => Command::Clear,
            _ => Command::Unknown {
                input: input.to_string(),
            },
        }
    }

    /// Execute a command
    ///
    /// Returns true if REPL should continue, false if should exit
    pub fn execute(&mut self, command: Command, session: &mut SessionManager) -> Result<bool> {
        match command {
            Command::Help => {
                self.show_help();
                Ok(true)
            }
            Command::Exit => {
                println!("{}", "Goodbye! Until next time.".green());
                Ok(false)
            }
            Command::History { limit } => {
                self.show_history(session, limit.unwrap_or(10));
                Ok(true)
            }
            Command::Status => {
                self.show_status(session);
                Ok(true)
            }
            Command::Reset => {
                session.reset();
                println!("{}", "Session reset. Transcript cleared.".yellow());
                Ok(true)
            }
            Command::Verbose { enable } => {
                self.verbose = enable;
                let status = if enable { "enabled" } else { "disabled" };
                println!("{}", format!("Verbose mode {}", status).cyan());
                Ok(true)
            }
            Command::Clear => {
                print!("\x1B[2J\x1B[1;1H"); // ANSI escape codes to clear screen
                Ok(true)
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
                Ok(true)
            }
        }
    }

    /// Display help information
    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = vec![
            ("/help, /h", "Show this help message"),
            ("/history [n]", "Show last n exchanges (default: 10)"),
            ("/status", "Show session status and statistics"),
            ("/reset", "Clear the conversation transcript"),
            ("/verbose [on|off]", "Toggle verbose output"),
            ("/clear, /cls", "Clear screen"),
            ("/exit, /quit, /q", "Exit the advisor"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<20} {}", cmd.green(), desc);
        }

        println!("\n{}", "Topics:".bold());
        println!("  - Ask about {} to look up company indicators", "stocks".cyan());
        println!("  - Ask about {} to plan savings and investments", "personal finance".cyan());
        println!(
            "  - Ask for {} to compare trading dates",
            "stock recommendations".cyan()
        );
        println!("  - Ask for {} to search financial news", "advice articles".cyan());
        println!();
    }

    /// Display the exchange transcript
    fn show_history(&self, session: &SessionManager, limit: usize) {
        let history = session.get_history(limit);

        if history.is_empty() {
            println!("{}", "No exchanges in this session yet.".yellow());
            return;
        }

        println!(
            "\n{}",
            format!("Conversation History (last {}):", history.len())
                .bold()
                .cyan()
        );
        println!("{}", "=".repeat(60).cyan());

        for (i, record) in history.iter().enumerate() {
            let index = history.len() - i;
            println!("  {}. You: {}", index.to_string().cyan(), record.question);

            if let Some(ref feature) = record.feature {
                println!("     {} {}", "->".dimmed(), format!("opened {}", feature).dimmed());
            }
            if self.verbose && !record.reply.is_empty() {
                println!("     Chatbot: {}", record.reply.dimmed());
            }
        }
        println!();
    }

    /// Display session status
    fn show_status(&self, session: &SessionManager) {
        println!("\n{}", "Session Status:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let duration = session.session_duration();
        let hours = duration / 3600;
        let minutes = (duration % 3600) / 60;
        let seconds = duration % 60;

        let duration_str = if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        };

        println!("  Session ID:       {}", session.session_id().green());
        println!(
            "  Exchanges:        {}",
            session.exchange_count().to_string().green()
        );
        println!(
            "  Feature Visits:   {}",
            session.routed_count().to_string().green()
        );
        println!("  Session Duration: {}", duration_str.green());
        println!(
            "  Verbose Mode:     {}",
            if self.verbose {
                "On".green()
            } else {
                "Off".red()
            }
        );
        println!();
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Set verbose mode
    pub fn set_verbose(&mut self, enable: bool) {
        self.verbose = enable;
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if input is a command (starts with /)
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::session::ExchangeRecord;

    #[test]
    fn test_is_command() {
        assert!(is_command("/help"));
        assert!(is_command(" /help"));
        assert!(!is_command("help"));
        assert!(!is_command("tell me about stocks"));
    }

    #[test]
    fn test_parse_help() {
        let handler = CommandHandler::new();
        assert_eq!(handler.parse("/help"), Command::Help);
        assert_eq!(handler.parse("/h"), Command::Help);
    }

    #[test]
    fn test_parse_exit() {
        let handler = CommandHandler::new();
        assert_eq!(handler.parse("/exit"), Command::Exit);
        assert_eq!(handler.parse("/quit"), Command::Exit);
        assert_eq!(handler.parse("/q"), Command::Exit);
    }

    #[test]
    fn test_parse_history() {
        let handler = CommandHandler::new();
        assert_eq!(handler.parse("/history"), Command::History { limit: None });
        assert_eq!(
            handler.parse("/history 5"),
            Command::History { limit: Some(5) }
        );
    }

    #[test]
    fn test_parse_verbose() {
        let handler = CommandHandler::new();
        assert_eq!(handler.parse("/verbose"), Command::Verbose { enable: true });
        assert_eq!(
            handler.parse("/verbose on"),
            Command::Verbose { enable: true }
        );
        assert_eq!(
            handler.parse("/verbose off"),
            Command::Verbose { enable: false }
        );
    }

    #[test]
    fn test_parse_unknown() {
        let handler = CommandHandler::new();
        match handler.parse("/unknown") {
            Command::Unknown { input } => assert!(input.contains("unknown")),
            _ => panic!("Expected Unknown command"),
        }
    }

    #[test]
    fn test_parse_non_command() {
        let handler = CommandHandler::new();
        match handler.parse("what is the stock price") {
            Command::Unknown { .. } => {}
            _ => panic!("Expected Unknown command for non-command input"),
        }
    }

    #[test]
    fn test_execute_exit() {
        let mut handler = CommandHandler::new();
        let mut session = SessionManager::new();

        let result = handler.execute(Command::Exit, &mut session).unwrap();
        assert!(!result);
    }

    #[test]
    fn test_execute_reset() {
        let mut handler = CommandHandler::new();
        let mut session = SessionManager::new();

        session.record_exchange(ExchangeRecord {
            question: "hello".to_string(),
            reply: "Hi there!".to_string(),
            feature: None,
            timestamp: 1234567890,
        });
        assert_eq!(session.exchange_count(), 1);

        handler.execute(Command::Reset, &mut session).unwrap();
        assert_eq!(session.exchange_count(), 0);
    }

    #[test]
    fn test_execute_verbose() {
        let mut handler = CommandHandler::new();
        let mut session = SessionManager::new();

        assert!(!handler.is_verbose());
        handler
            .execute(Command::Verbose { enable: true }, &mut session)
            .unwrap();
        assert!(handler.is_verbose());
        handler
            .execute(Command::Verbose { enable: false }, &mut session)
            .unwrap();
        assert!(!handler.is_verbose());
    }
}
