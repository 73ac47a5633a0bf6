//! Validation of raw budget payloads.
//!
//! A payload is `{"income": <number>, "expenses": {<category>: <number>, ...}}`.
//! Numbers are read into `Decimal` from their JSON text (serde_json keeps it
//! with `arbitrary_precision`), so `0.1` stays exact. Strings, booleans and
//! nulls are rejected rather than coerced.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Number, Value};

use super::error::ValidationError;
use super::types::{BudgetDeclaration, ExpenseItem};

/// Parses JSON text and validates it as a budget.
///
/// # Errors
///
/// Returns `ValidationError::Malformed` for unparseable text and any error
/// [`validate_declaration`] reports.
pub fn parse_declaration(text: &str) -> Result<BudgetDeclaration, ValidationError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ValidationError::Malformed(e.to_string()))?;
    validate_declaration(&value)
}

/// Validates a raw budget structure.
///
/// # Errors
///
/// Returns an error if the structure is not an object, a field is missing,
/// or income or an expense amount is not a non-negative number.
pub fn validate_declaration(value: &Value) -> Result<BudgetDeclaration, ValidationError> {
    let object = value
        .as_object()
        .ok_or_else(|| ValidationError::Malformed("budget must be a JSON object".to_string()))?;

    let income = object
        .get("income")
        .ok_or(ValidationError::MissingField("income"))?;
    let income = non_negative_amount(income, "income")?;

    let expenses = object
        .get("expenses")
        .ok_or(ValidationError::MissingField("expenses"))?
        .as_object()
        .ok_or_else(|| {
            ValidationError::Malformed(
                "'expenses' must be an object mapping category to amount".to_string(),
            )
        })?;

    let expenses = expenses
        .iter()
        .map(|(category, amount)| {
            let amount = non_negative_amount(amount, &format!("expenses.{category}"))?;
            Ok(ExpenseItem::new(category.clone(), amount))
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    BudgetDeclaration::new(income, expenses)
}

/// Validates an optional savings goal. Absent and `null` mean no goal.
///
/// # Errors
///
/// Returns an error if the goal is not a number or is negative.
pub fn validate_goal(value: Option<&Value>) -> Result<Option<Decimal>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let goal = amount(value, "goal_amount")?;
            if goal < Decimal::ZERO {
                return Err(ValidationError::NegativeGoal);
            }
            Ok(Some(goal))
        }
    }
}

fn non_negative_amount(value: &Value, field: &str) -> Result<Decimal, ValidationError> {
    let amount = amount(value, field)?;
    if amount < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(amount)
}

fn amount(value: &Value, field: &str) -> Result<Decimal, ValidationError> {
    let Value::Number(number) = value else {
        return Err(ValidationError::NotNumeric {
            field: field.to_string(),
        });
    };
    decimal_from_number(number).ok_or_else(|| ValidationError::OutOfRange {
        field: field.to_string(),
    })
}

fn decimal_from_number(number: &Number) -> Option<Decimal> {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
