//! Display manager for the advisor terminal UI
//!
//! Color-coded output lines, section headers, and a spinner for network
//! fetches.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Terminal output helper shared by the REPL and the one-shot commands
pub struct DisplayManager {
    spinner_interval: Duration,
}

impl DisplayManager {
    pub fn new() -> Self {
        DisplayManager {
            spinner_interval: Duration::from_millis(100),
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        let width = 64;
        let top = "=".repeat(width).cyan();
        let title = format!("  FinBuddy {} - Personal Finance Advisor", version);
        let info = "  Features: stocks | recommendations | articles | budget";

        println!("\n{}", top);
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", "=".repeat(width).cyan());
        println!(
            "Type your question (or {} for commands, {} to quit)\n",
            "/help".green(),
            "/exit".green()
        );
    }

    /// Start a fetch spinner with a message
    pub fn start_fetch(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("valid spinner template"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(self.spinner_interval);
        pb
    }

    /// Stop and clear a fetch spinner
    pub fn finish_fetch(&self, pb: ProgressBar) {
        pb.finish_and_clear();
    }

    /// Display a chatbot reply
    pub fn show_reply(&self, reply: &str) {
        println!("{} {}", "Chatbot:".cyan().bold(), reply);
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Display a label/value row
    pub fn show_row(&self, label: &str, value: &str) {
        println!("  {:<28} {}", format!("{}:", label).bold(), value);
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }

    /// Show bullet point
    pub fn show_bullet(&self, text: &str) {
        println!("  {} {}", "•".cyan(), text);
    }

    /// Show numbered item
    pub fn show_numbered(&self, index: usize, text: &str) {
        println!("  {}. {}", index.to_string().cyan(), text);
    }

    /// Display prompt for user input
    pub fn show_prompt(&self) -> io::Result<()> {
        print!("{}", ">finbuddy: ".green().bold());
        io::stdout().flush()
    }

    /// Clear screen
    pub fn clear_screen(&self) {
        print!("\x1B[2J\x1B[1;1H");
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let display = DisplayManager::new();
        let pb = display.start_fetch("fetching...");
        assert!(!pb.is_finished());
        display.finish_fetch(pb);
    }

    #[test]
    fn test_update_interval() {
        let display = DisplayManager::new();
        assert_eq!(display.spinner_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_message_display() {
        let display = DisplayManager::new();
        display.show_error("test error");
        display.show_warning("test warning");
        display.show_info("test info");
        display.show_row("Label", "value");
        display.show_bullet("bullet");
        display.show_numbered(1, "first");
    }
}
