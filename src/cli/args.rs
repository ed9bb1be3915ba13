//! Command-line argument parsing for FinBuddy
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::stocks::Indicator;

/// FinBuddy - Personal finance advisor for the terminal
#[derive(Parser, Debug)]
#[command(name = "finbuddy")]
#[command(version)]
#[command(about = "Chat-driven personal finance advisor", long_about = None)]
pub struct Args {
    /// Question for the advisor (starts the chat with this question)
    #[arg(value_name = "QUESTION")]
    pub question: Option<String>,

    /// Base URL of the financial data API
    #[arg(long)]
    pub api_url: Option<String>,

    /// Skip network calls and use bundled demo data
    #[arg(long)]
    pub offline: bool,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress informational output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive advisor chat
    Chat,

    /// Look up financial indicators for a ticker
    Stocks {
        /// Ticker symbol (e.g. AAPL)
        ticker: String,

        /// Single indicator to show (full summary when omitted)
        #[arg(short, long, value_enum)]
        indicator: Option<Indicator>,
    },

    /// Recommend similar trading dates for a date/ticker pair
    Recommend {
        /// Date to compare (YYYY-MM-DD)
        date: String,

        /// Ticker symbol
        ticker: String,

        /// Ticker history CSV (defaults to the configured data directory)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Fetch financial news and answer a question against it
    Articles {
        /// Question to answer (headlines only when omitted)
        question: Option<String>,
    },

    /// Run the budget calculator (interactive unless --income is given)
    Budget {
        /// Net fixed income per month
        #[arg(long)]
        income: Option<i64>,

        /// Transportation costs per month
        #[arg(long)]
        transport: Option<i64>,

        /// Food costs per month
        #[arg(long)]
        food: Option<i64>,

        /// Outing expenses per month
        #[arg(long)]
        outings: Option<i64>,

        /// Other fixed costs per month
        #[arg(long)]
        other: Option<i64>,

        /// Available savings on hand
        #[arg(long)]
        savings: Option<i64>,
    },

    /// Build the ticker history CSV the recommender reads
    History {
        /// Ticker list CSV with a `symbol` column
        #[arg(long)]
        tickers: Option<PathBuf>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Output CSV path
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Check that free question and subcommand are not mixed
    pub fn validate(&self) -> Result<(), String> {
        if self.command.is_some() && self.question.is_some() {
            return Err("Cannot specify a question with a subcommand.".to_string());
        }
        Ok(())
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Check if should show progress spinners
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if should show detailed scores and timings
    pub fn show_details(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["finbuddy"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["finbuddy", "-v"]).verbosity(), Verbosity::Verbose);
        assert_eq!(
            parse(&["finbuddy", "-vv"]).verbosity(),
            Verbosity::VeryVerbose
        );
        assert_eq!(parse(&["finbuddy", "-q"]).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_free_question() {
        let args = parse(&["finbuddy", "what is the stock price?"]);
        assert_eq!(args.question.as_deref(), Some("what is the stock price?"));
        assert!(args.command.is_none());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_stocks_subcommand() {
        let args = parse(&["finbuddy", "stocks", "AAPL", "--indicator", "turnover"]);
        match args.command {
            Some(Commands::Stocks { ticker, indicator }) => {
                assert_eq!(ticker, "AAPL");
                assert_eq!(indicator, Some(Indicator::Turnover));
            }
            other => panic!("Expected stocks subcommand, got {:?}", other),
        }
    }

    #[test]
    fn test_recommend_subcommand() {
        let args = parse(&["finbuddy", "recommend", "2024-01-02", "AAPL"]);
        match args.command {
            Some(Commands::Recommend { date, ticker, data }) => {
                assert_eq!(date, "2024-01-02");
                assert_eq!(ticker, "AAPL");
                assert!(data.is_none());
            }
            other => panic!("Expected recommend subcommand, got {:?}", other),
        }
    }

    #[test]
    fn test_history_subcommand_defaults() {
        let args = parse(&["finbuddy", "history"]);
        match args.command {
            Some(Commands::History { tickers, start, out }) => {
                assert!(tickers.is_none());
                assert!(start.is_none());
                assert!(out.is_none());
            }
            other => panic!("Expected history subcommand, got {:?}", other),
        }
    }

    #[test]
    fn test_offline_flag() {
        let args = parse(&["finbuddy", "--offline", "articles"]);
        assert!(args.offline);
        assert!(matches!(
            args.command,
            Some(Commands::Articles { question: None })
        ));
    }

    #[test]
    fn test_validate_rejects_question_with_subcommand() {
        let args = parse(&["finbuddy", "budget"]);
        let args = Args {
            question: Some("hello".to_string()),
            ..args
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_budget_flags() {
        let args = parse(&["finbuddy", "budget", "--income", "3000", "--savings", "10000"]);
        match args.command {
            Some(Commands::Budget { income, savings, transport, .. }) => {
                assert_eq!(income, Some(3000));
                assert_eq!(savings, Some(10_000));
                assert!(transport.is_none());
            }
            other => panic!("Expected budget subcommand, got {:?}", other),
        }
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());

        assert!(!Verbosity::Normal.show_details());
        assert!(Verbosity::Verbose.show_details());
    }
}
