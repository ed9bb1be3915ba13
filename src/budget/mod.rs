//! Personal budget calculator
//!
//! Collects a budget profile through the original question list and
//! renders a savings/investment summary with monthly breakdown and
//! yearly distribution.

pub mod planner;
pub mod report;
pub mod types;

pub use planner::{
    available_to_invest, distribution, monthly_series, parse_amount, savings_per_month,
    savings_per_year, Distribution, MonthlySeries,
};
pub use types::{BudgetProfile, FixedCosts, Month, VariableCosts};

use crate::errors::Result;
use crate::repl::display::DisplayManager;

/// Source of answers for the interactive flow
///
/// Returning None means the user aborted (EOF); the flow stops there.
pub trait AnswerSource {
    fn ask(&mut self, question: &str) -> Option<String>;
}

impl<F> AnswerSource for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn ask(&mut self, question: &str) -> Option<String> {
        self(question)
    }
}

/// Ask one amount question, warning and falling back to zero on bad input
fn ask_amount(
    display: &DisplayManager,
    answers: &mut dyn AnswerSource,
    question: &str,
) -> Option<i64> {
    let answer = answers.ask(question)?;
    match parse_amount(&answer) {
        Some(amount) => Some(amount),
        None => {
            display.show_warning("Please enter a valid integer.");
            Some(0)
        }
    }
}

/// Collect a budget profile through the question list
///
/// Returns None when the user aborts mid-way.
pub fn collect_profile(
    display: &DisplayManager,
    answers: &mut dyn AnswerSource,
) -> Option<BudgetProfile> {
    let mut profile = BudgetProfile::default();

    profile.monthly_income =
        ask_amount(display, answers, "How much is your net fixed income per month?")?;
    profile.fixed.transport = ask_amount(display, answers, "Transportation costs per month?")?;
    profile.fixed.food = ask_amount(display, answers, "Food costs per month?")?;
    profile.fixed.outings = ask_amount(display, answers, "Outing expenses per month?")?;
    profile.fixed.other = ask_amount(display, answers, "Other fixed costs per month?")?;

    let has_variable = answers.ask("Do you have any variable costs this year? (yes/no)")?;
    if has_variable.trim().to_lowercase().starts_with('y') {
        for month in Month::ALL {
            let amount = ask_amount(
                display,
                answers,
                &format!("{} variable costs:", month.name()),
            )?;
            profile.variable.set(month, amount);
        }
    }

    profile.savings = ask_amount(display, answers, "How much available savings do you have?")?;
    Some(profile)
}

/// Run the interactive budget flow end to end
pub fn run_interactive(display: &DisplayManager, answers: &mut dyn AnswerSource) -> Result<()> {
    display.show_section("Personal Finance Assistant");
    display.show_reply("Welcome to the personal finance module!");

    let Some(profile) = collect_profile(display, answers) else {
        display.show_warning("Budget entry aborted.");
        return Ok(());
    };

    report::show_report(display, &profile);
    Ok(())
}
