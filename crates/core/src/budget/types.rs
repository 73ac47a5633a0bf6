//! Budget data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// One named monthly expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseItem {
    /// Category name as the user wrote it.
    pub category: String,
    /// Monthly amount.
    pub amount: Decimal,
}

impl ExpenseItem {
    /// Creates an expense item.
    pub fn new(category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// A validated monthly budget: income plus categorized expenses.
///
/// Income and every amount are non-negative and category names are unique.
/// Expenses keep the order they were declared in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetDeclaration {
    income: Decimal,
    expenses: Vec<ExpenseItem>,
}

impl BudgetDeclaration {
    /// Creates a declaration, enforcing the non-negativity and uniqueness rules.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Negative` for a negative income or amount and
    /// `ValidationError::DuplicateCategory` when a category repeats.
    pub fn new(income: Decimal, expenses: Vec<ExpenseItem>) -> Result<Self, ValidationError> {
        if income < Decimal::ZERO {
            return Err(ValidationError::Negative {
                field: "income".to_string(),
            });
        }

        for (index, item) in expenses.iter().enumerate() {
            if item.amount < Decimal::ZERO {
                return Err(ValidationError::Negative {
                    field: format!("expenses.{}", item.category),
                });
            }
            if expenses[..index].iter().any(|prev| prev.category == item.category) {
                return Err(ValidationError::DuplicateCategory(item.category.clone()));
            }
        }

        Ok(Self { income, expenses })
    }

    /// Total monthly income.
    #[must_use]
    pub const fn income(&self) -> Decimal {
        self.income
    }

    /// Expenses in declaration order.
    #[must_use]
    pub fn expenses(&self) -> &[ExpenseItem] {
        &self.expenses
    }
}

/// Needs-vs-wants label for an expense category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseClass {
    /// Essential spending.
    Need,
    /// Discretionary spending.
    Want,
}

impl std::fmt::Display for ExpenseClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Need => write!(f, "Need"),
            Self::Want => write!(f, "Want"),
        }
    }
}

/// Informational note attached to a reachable goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalAdvisory {
    /// The goal takes more than a year at the current savings.
    ReduceDiscretionarySpending,
}

impl GoalAdvisory {
    /// Human-readable advisory text.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ReduceDiscretionarySpending => {
                "Consider reducing discretionary spending or increasing investments for faster results."
            }
        }
    }
}

/// Outcome of projecting a savings goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalProjection {
    /// No positive goal was supplied.
    NotRequested,
    /// Savings are zero or negative, so the goal is never reached.
    Unreachable {
        /// Requested goal amount.
        goal_amount: Decimal,
    },
    /// The goal is reached after `months_needed` months.
    Reachable {
        /// Requested goal amount.
        goal_amount: Decimal,
        /// Whole months of saving needed, rounded up.
        months_needed: u64,
        /// Present when the projection is slow.
        advisory: Option<GoalAdvisory>,
    },
}

impl GoalProjection {
    /// Months needed when the goal is reachable.
    #[must_use]
    pub const fn months_needed(&self) -> Option<u64> {
        match self {
            Self::Reachable { months_needed, .. } => Some(*months_needed),
            Self::NotRequested | Self::Unreachable { .. } => None,
        }
    }

    /// Advisory attached to a reachable goal, if any.
    #[must_use]
    pub const fn advisory(&self) -> Option<GoalAdvisory> {
        match self {
            Self::Reachable { advisory, .. } => *advisory,
            Self::NotRequested | Self::Unreachable { .. } => None,
        }
    }
}

/// Per-category line of the spending breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Category name.
    pub category: String,
    /// Monthly amount.
    pub amount: Decimal,
    /// Share of total expenses (amount / total * 100), zero when nothing is spent.
    pub share_percent: Decimal,
    /// Needs-vs-wants label.
    pub class: ExpenseClass,
}

/// Derived metrics for one budget declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Monthly income.
    pub income: Decimal,
    /// Sum of all expenses.
    pub total_expenses: Decimal,
    /// Income minus expenses. Negative means overspending.
    pub savings: Decimal,
    /// Savings / income * 100.
    pub savings_rate_percent: Decimal,
    /// Bounded health score in `[30, 100]`.
    pub health_score: u8,
    /// Category to needs-vs-wants label.
    pub classifications: BTreeMap<String, ExpenseClass>,
    /// Spending breakdown in declaration order.
    pub breakdown: Vec<CategoryBreakdown>,
    /// Total spent on needs.
    pub needs_total: Decimal,
    /// Total spent on wants.
    pub wants_total: Decimal,
    /// Savings goal outcome.
    pub goal: GoalProjection,
}
