//! Budget profile types

use serde::{Deserialize, Serialize};

/// Calendar months, in year order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months, January first
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Zero-based index into a year array
    pub fn index(&self) -> usize {
        Month::ALL.iter().position(|m| m == self).expect("month in ALL")
    }
}

/// Fixed monthly costs, in whole currency units
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FixedCosts {
    pub transport: i64,
    pub food: i64,
    pub outings: i64,
    pub other: i64,
}

impl FixedCosts {
    /// Sum of all fixed cost categories for one month
    pub fn total(&self) -> i64 {
        self.transport + self.food + self.outings + self.other
    }
}

/// Variable costs per calendar month
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariableCosts {
    amounts: [i64; 12],
}

impl VariableCosts {
    pub fn set(&mut self, month: Month, amount: i64) {
        self.amounts[month.index()] = amount;
    }

    pub fn get(&self, month: Month) -> i64 {
        self.amounts[month.index()]
    }

    /// Total over the whole year
    pub fn total(&self) -> i64 {
        self.amounts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.iter().all(|&a| a == 0)
    }
}

/// Everything the planner needs about a user's finances
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetProfile {
    /// Net fixed income per month
    pub monthly_income: i64,
    /// Fixed costs per month
    pub fixed: FixedCosts,
    /// Variable costs per calendar month
    pub variable: VariableCosts,
    /// Available savings on hand
    pub savings: i64,
}
