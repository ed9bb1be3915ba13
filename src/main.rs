//! FinBuddy - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use finbuddy::articles::{self, ArticleFetcher};
use finbuddy::budget::{self, BudgetProfile, FixedCosts};
use finbuddy::chat::{ChatBot, ChatReply, Feature};
use finbuddy::cli::{Args, Commands};
use finbuddy::config::Config;
use finbuddy::history;
use finbuddy::recommend;
use finbuddy::repl::{self, DisplayManager, InputHandler};
use finbuddy::stocks::{self, StockDataClient};

const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(msg) = args.validate() {
        eprintln!("{} {}", "Error:".red().bold(), msg);
        std::process::exit(2);
    }

    let mut config = Config::load()?;
    if let Some(url) = &args.api_url {
        config.api.base_url = url.clone();
    }
    if args.offline {
        config.api.offline = true;
    }

    if args.verbosity().show_details() {
        eprintln!("API base URL: {}", config.api.base_url);
        eprintln!("Data directory: {}", config.data.dir.display());
    }

    match &args.command {
        Some(Commands::Chat) => {
            repl::run_advisor(&config, VERSION).await?;
        }
        Some(Commands::Stocks { ticker, indicator }) => {
            let display = DisplayManager::new();
            let client = StockDataClient::new(Some(config.api.base_url.clone()))?;
            stocks::consult(&client, &display, ticker, *indicator, config.api.offline).await?;
        }
        Some(Commands::Recommend { date, ticker, data }) => {
            let display = DisplayManager::new();
            let data_path = data.clone().unwrap_or_else(|| config.history_file());
            recommend::run(&display, &data_path, date, ticker)?;
        }
        Some(Commands::Articles { question }) => {
            let display = DisplayManager::new();
            let fetcher = ArticleFetcher::new(ArticleFetcher::default_listing_urls())?;
            articles::run(&fetcher, &display, question.as_deref(), config.api.offline).await?;
        }
        Some(Commands::Budget {
            income,
            transport,
            food,
            outings,
            other,
            savings,
        }) => {
            let display = DisplayManager::new();
            if let Some(income) = income {
                // Non-interactive: flags stand in for the question list
                let profile = BudgetProfile {
                    monthly_income: *income,
                    fixed: FixedCosts {
                        transport: transport.unwrap_or(0),
                        food: food.unwrap_or(0),
                        outings: outings.unwrap_or(0),
                        other: other.unwrap_or(0),
                    },
                    savings: savings.unwrap_or(0),
                    ..Default::default()
                };
                budget::report::show_report(&display, &profile);
            } else {
                let mut input = InputHandler::new()?;
                let mut answers = |question: &str| input.read_answer(question);
                budget::run_interactive(&display, &mut answers)?;
            }
        }
        Some(Commands::History { tickers, start, out }) => {
            let display = DisplayManager::new();
            let client = StockDataClient::new(Some(config.api.base_url.clone()))?;

            let ticker_path = tickers.clone().unwrap_or_else(|| config.ticker_list_file());
            let start_date = start.clone().unwrap_or_else(|| config.data.history_start.clone());
            let out_path = out.clone().unwrap_or_else(|| config.history_file());

            let symbols = history::load_ticker_list(&ticker_path)?;
            let rows = history::build_history(&client, &display, &symbols, &start_date, &out_path)
                .await?;
            display.show_info(&format!(
                "Wrote {} rows for {} tickers to {}",
                rows,
                symbols.len(),
                out_path.display()
            ));
        }
        Some(Commands::Config) => {
            show_config(&config)?;
        }
        None => match &args.question {
            Some(question) => answer_once(question),
            None => repl::run_advisor(&config, VERSION).await?,
        },
    }

    Ok(())
}

/// Answer a single question without entering the chat loop
fn answer_once(question: &str) {
    let display = DisplayManager::new();
    let bot = ChatBot::new();

    match bot.respond(question) {
        ChatReply::Text(reply) | ChatReply::Farewell(reply) => display.show_reply(&reply),
        ChatReply::Route(feature) => {
            let subcommand = match feature {
                Feature::Stocks => "stocks",
                Feature::Budget => "budget",
                Feature::Recommend => "recommend",
                Feature::Articles => "articles",
            };
            display.show_reply(&format!(
                "That sounds like a job for {}.",
                feature.name()
            ));
            display.show_info(&format!(
                "Run `finbuddy {}` or start the chat with `finbuddy chat`",
                subcommand
            ));
        }
    }
}

fn show_config(config: &Config) -> Result<()> {
    println!("\n{}", "FinBuddy Configuration".bold().cyan());
    println!("{}", "=".repeat(60).cyan());

    println!("API:");
    println!("  Base URL: {}", config.api.base_url);
    println!(
        "  Offline:  {}",
        if config.api.offline { "enabled" } else { "disabled" }
    );
    println!();

    println!("Data:");
    println!("  Directory:     {}", config.data.dir.display());
    println!("  History file:  {}", config.history_file().display());
    println!("  Ticker list:   {}", config.ticker_list_file().display());
    println!("  History start: {}", config.data.history_start);
    println!();

    println!("Retrieval:");
    println!("  Similarity threshold: {}", config.retrieval.threshold);
    println!();

    println!("Config file: {}", Config::config_path()?.display());
    println!();

    Ok(())
}
