//! Budget analyzer: derived metrics, classification and goal projection.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;

use super::classification::classify;
use super::error::{BudgetError, ComputationError, ValidationError};
use super::goal::project_goal;
use super::types::{AnalysisResult, BudgetDeclaration, CategoryBreakdown, ExpenseClass};
use super::validation::{parse_declaration, validate_declaration};

/// Lowest health score any declaration can get.
pub const HEALTH_SCORE_FLOOR: u8 = 30;

/// Highest health score any declaration can get.
pub const HEALTH_SCORE_CEILING: u8 = 100;

/// Points lost when expenses equal income.
const HEALTH_SCORE_SPENDING_WEIGHT: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Budget analyzer for business logic. Stateless and safe to share.
pub struct BudgetAnalyzer;

impl BudgetAnalyzer {
    /// Validate a raw budget structure.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` describing the first problem found.
    pub fn validate(raw: &Value) -> Result<BudgetDeclaration, ValidationError> {
        validate_declaration(raw)
    }

    /// Parse JSON text and validate it as a budget.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for unparseable or invalid input.
    pub fn parse(text: &str) -> Result<BudgetDeclaration, ValidationError> {
        parse_declaration(text)
    }

    /// Analyze a validated budget against an optional savings goal.
    ///
    /// - `total_expenses`: sum of every amount
    /// - `savings`: income - total, may be negative
    /// - `savings_rate_percent`: savings / income * 100, 2 decimal places
    /// - `health_score`: trunc(100 - total / income * 80) clamped to [30, 100]
    ///
    /// # Errors
    ///
    /// Returns `ComputationError::ZeroIncome` when income is zero, since both
    /// ratios divide by it, and `ComputationError::Overflow` when a value
    /// leaves the `Decimal` range.
    pub fn analyze(
        declaration: &BudgetDeclaration,
        goal_amount: Option<Decimal>,
    ) -> Result<AnalysisResult, ComputationError> {
        let income = declaration.income();
        if income.is_zero() {
            return Err(ComputationError::ZeroIncome);
        }

        let total_expenses = Self::total_expenses(declaration)?;
        let savings = income
            .checked_sub(total_expenses)
            .ok_or(ComputationError::Overflow("savings"))?;
        let savings_rate_percent = savings
            .checked_div(income)
            .and_then(|rate| rate.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or(ComputationError::Overflow("savings rate"))?
            .round_dp(2);
        let health_score = Self::health_score(total_expenses, income);

        let breakdown: Vec<CategoryBreakdown> = declaration
            .expenses()
            .iter()
            .map(|item| CategoryBreakdown {
                category: item.category.clone(),
                amount: item.amount,
                share_percent: Self::share_percent(item.amount, total_expenses),
                class: classify(&item.category),
            })
            .collect();

        let classifications = breakdown
            .iter()
            .map(|line| (line.category.clone(), line.class))
            .collect();
        let needs_total = Self::class_total(&breakdown, ExpenseClass::Need);
        let wants_total = Self::class_total(&breakdown, ExpenseClass::Want);

        let goal = project_goal(savings, goal_amount)?;

        Ok(AnalysisResult {
            income,
            total_expenses,
            savings,
            savings_rate_percent,
            health_score,
            classifications,
            breakdown,
            needs_total,
            wants_total,
            goal,
        })
    }

    /// Validate then analyze in one step.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::Validation` or `BudgetError::Computation`.
    pub fn validate_and_analyze(
        raw: &Value,
        goal_amount: Option<Decimal>,
    ) -> Result<AnalysisResult, BudgetError> {
        let declaration = Self::validate(raw)?;
        Ok(Self::analyze(&declaration, goal_amount)?)
    }

    /// Sum of all expense amounts.
    ///
    /// # Errors
    ///
    /// Returns `ComputationError::Overflow` if the sum leaves the `Decimal` range.
    pub fn total_expenses(declaration: &BudgetDeclaration) -> Result<Decimal, ComputationError> {
        declaration
            .expenses()
            .iter()
            .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.amount))
            .ok_or(ComputationError::Overflow("total expenses"))
    }

    /// Health score for a spending level. `income` must be positive.
    ///
    /// A ratio too large to represent is far past the point where the score
    /// bottoms out, so it maps to the floor.
    #[must_use]
    pub fn health_score(total_expenses: Decimal, income: Decimal) -> u8 {
        let floor = Decimal::from(HEALTH_SCORE_FLOOR);
        let ceiling = Decimal::from(HEALTH_SCORE_CEILING);

        total_expenses
            .checked_div(income)
            .and_then(|ratio| ratio.checked_mul(HEALTH_SCORE_SPENDING_WEIGHT))
            .and_then(|penalty| ceiling.checked_sub(penalty))
            .map_or(floor, |raw| raw.trunc().clamp(floor, ceiling))
            .to_u8()
            .unwrap_or(HEALTH_SCORE_FLOOR)
    }

    fn share_percent(amount: Decimal, total_expenses: Decimal) -> Decimal {
        if total_expenses.is_zero() {
            return Decimal::ZERO;
        }
        (amount / total_expenses * Decimal::ONE_HUNDRED).round_dp(2)
    }

    fn class_total(breakdown: &[CategoryBreakdown], class: ExpenseClass) -> Decimal {
        breakdown
            .iter()
            .filter(|line| line.class == class)
            .map(|line| line.amount)
            .sum()
    }
}
