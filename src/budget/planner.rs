//! Budget calculations
//!
//! Savings capacity, amount available to invest, monthly income/cost
//! series, and the yearly cost distribution.

use serde::{Deserialize, Serialize};

use crate::budget::types::{BudgetProfile, Month};

/// Yearly totals split into the three reported shares
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Distribution {
    pub variable_costs: i64,
    pub fixed_costs: i64,
    pub investment_capacity: i64,
}

impl Distribution {
    /// Percentage shares of each component (0.0 when nothing is entered)
    ///
    /// Negative investment capacity is floored at zero for the share
    /// breakdown; the raw value stays available on the struct.
    pub fn shares(&self) -> (f64, f64, f64) {
        let capacity = self.investment_capacity.max(0);
        let total = self.variable_costs + self.fixed_costs + capacity;
        if total == 0 {
            return (0.0, 0.0, 0.0);
        }
        let total = total as f64;
        (
            self.variable_costs as f64 / total * 100.0,
            self.fixed_costs as f64 / total * 100.0,
            capacity as f64 / total * 100.0,
        )
    }
}

/// Income and total costs for every month of the year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySeries {
    pub income: [i64; 12],
    pub costs: [i64; 12],
}

/// Savings left after fixed costs, per month
pub fn savings_per_month(profile: &BudgetProfile) -> i64 {
    profile.monthly_income - profile.fixed.total()
}

/// Savings left after fixed costs, per year
pub fn savings_per_year(profile: &BudgetProfile) -> i64 {
    savings_per_month(profile) * 12
}

/// Savings on hand minus one month of income
pub fn available_to_invest(profile: &BudgetProfile) -> i64 {
    profile.savings - profile.monthly_income
}

/// Income and cost series across the year
///
/// Income is flat; costs are fixed costs plus that month's variable
/// costs.
pub fn monthly_series(profile: &BudgetProfile) -> MonthlySeries {
    let fixed = profile.fixed.total();
    let mut series = MonthlySeries {
        income: [profile.monthly_income; 12],
        costs: [fixed; 12],
    };
    for month in Month::ALL {
        series.costs[month.index()] += profile.variable.get(month);
    }
    series
}

/// Yearly distribution of costs and remaining investment capacity
///
/// All three components are on a yearly basis: fixed costs are
/// annualized, variable costs are summed, and capacity is what remains
/// of yearly income.
pub fn distribution(profile: &BudgetProfile) -> Distribution {
    let yearly_income = profile.monthly_income * 12;
    let fixed_costs = profile.fixed.total() * 12;
    let variable_costs = profile.variable.total();

    Distribution {
        variable_costs,
        fixed_costs,
        investment_capacity: yearly_income - fixed_costs - variable_costs,
    }
}

/// Parse a whole-currency answer
///
/// Empty input means zero (the user skipped the question); anything
/// else must parse as an integer.
pub fn parse_amount(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}
