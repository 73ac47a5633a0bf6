//! Savings goal projection.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::error::ComputationError;
use super::types::{GoalAdvisory, GoalProjection};

/// Projections longer than this many months carry an advisory.
pub const ADVISORY_THRESHOLD_MONTHS: u64 = 12;

/// Projects how many months of current savings reach `goal_amount`.
///
/// - No goal, or a goal of zero: `NotRequested`.
/// - `savings <= 0`: `Unreachable`.
/// - Otherwise `ceil(goal / savings)` months, with
///   [`GoalAdvisory::ReduceDiscretionarySpending`] above
///   [`ADVISORY_THRESHOLD_MONTHS`].
///
/// # Errors
///
/// Returns `ComputationError::Overflow` if the month count does not fit.
pub fn project_goal(
    savings: Decimal,
    goal_amount: Option<Decimal>,
) -> Result<GoalProjection, ComputationError> {
    let Some(goal_amount) = goal_amount.filter(|goal| *goal > Decimal::ZERO) else {
        return Ok(GoalProjection::NotRequested);
    };

    if savings <= Decimal::ZERO {
        return Ok(GoalProjection::Unreachable { goal_amount });
    }

    let months_needed = goal_amount
        .checked_div(savings)
        .map(|months| months.ceil())
        .and_then(|months| months.to_u64())
        .ok_or(ComputationError::Overflow("months to goal"))?;

    let advisory = (months_needed > ADVISORY_THRESHOLD_MONTHS)
        .then_some(GoalAdvisory::ReduceDiscretionarySpending);

    Ok(GoalProjection::Reachable {
        goal_amount,
        months_needed,
        advisory,
    })
}
