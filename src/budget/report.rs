//! Terminal rendering of the budget summary
//!
//! Horizontal bar rows per month for income vs costs, plus a percentage
//! breakdown of the yearly distribution.

use colored::*;

use crate::budget::planner::{self, Distribution, MonthlySeries};
use crate::budget::types::{BudgetProfile, Month};
use crate::repl::display::DisplayManager;

/// Widest bar drawn for the largest monthly value
const BAR_WIDTH: usize = 40;

/// Print the financial summary figures
pub fn show_summary(display: &DisplayManager, profile: &BudgetProfile) {
    display.show_section("Financial Summary");
    display.show_row(
        "Available amount to invest",
        &format!("{} EUR", planner::available_to_invest(profile)),
    );
    display.show_row(
        "Investment capacity / month",
        &format!("{} EUR", planner::savings_per_month(profile)),
    );
    display.show_row(
        "Investment capacity / year",
        &format!("{} EUR", planner::savings_per_year(profile)),
    );
}

/// Print income and cost bars for every month
pub fn show_monthly_breakdown(display: &DisplayManager, profile: &BudgetProfile) {
    let series = planner::monthly_series(profile);
    display.show_section("Income and Costs per Month (EUR)");

    let max = series
        .income
        .iter()
        .chain(series.costs.iter())
        .copied()
        .max()
        .unwrap_or(0);

    for month in Month::ALL {
        let income = series.income[month.index()];
        let costs = series.costs[month.index()];
        println!(
            "  {:<10} {} {}",
            month.name(),
            format!("{:>8}", income).green(),
            bar(income, max).green()
        );
        println!(
            "  {:<10} {} {}",
            "",
            format!("{:>8}", costs).red(),
            bar(costs, max).red()
        );
    }
}

/// Print the yearly distribution as percentages
pub fn show_distribution(display: &DisplayManager, profile: &BudgetProfile) {
    let dist = planner::distribution(profile);
    let (variable, fixed, capacity) = dist.shares();

    if variable == 0.0 && fixed == 0.0 && capacity == 0.0 {
        display.show_info("No financial data entered yet.");
        return;
    }

    display.show_section("Distribution of Costs and Investment Capacity");
    show_share(display, "Variable costs", dist.variable_costs, variable);
    show_share(display, "Fixed costs", dist.fixed_costs, fixed);
    show_share(
        display,
        "Investment capacity",
        dist.investment_capacity,
        capacity,
    );

    if dist.investment_capacity < 0 {
        display.show_warning("Costs exceed yearly income.");
    }
}

fn show_share(display: &DisplayManager, label: &str, amount: i64, percent: f64) {
    display.show_row(label, &format!("{:>10} EUR  ({:>5.1}%)", amount, percent));
}

/// Scale a value to a bar against the largest value in the chart
fn bar(value: i64, max: i64) -> String {
    if max <= 0 || value <= 0 {
        return String::new();
    }
    let width = ((value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(width.max(1))
}

/// Full report: summary, bars, distribution
pub fn show_report(display: &DisplayManager, profile: &BudgetProfile) {
    show_summary(display, profile);
    show_monthly_breakdown(display, profile);
    show_distribution(display, profile);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::types::FixedCosts;

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(100, 100).chars().count(), BAR_WIDTH);
        assert_eq!(bar(50, 100).chars().count(), BAR_WIDTH / 2);
        assert_eq!(bar(0, 100), "");
        assert_eq!(bar(100, 0), "");
        // Tiny but non-zero values still draw one block
        assert_eq!(bar(1, 10_000).chars().count(), 1);
    }

    #[test]
    fn test_report_renders_without_panicking() {
        let display = DisplayManager::new();
        let mut profile = BudgetProfile {
            monthly_income: 2500,
            fixed: FixedCosts {
                transport: 100,
                food: 400,
                outings: 100,
                other: 100,
            },
            savings: 8000,
            ..Default::default()
        };
        profile.variable.set(Month::March, 250);

        show_report(&display, &profile);
    }

    #[test]
    fn test_empty_profile_report() {
        let display = DisplayManager::new();
        show_distribution(&display, &BudgetProfile::default());
    }
}
