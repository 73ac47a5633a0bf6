//! Budget analysis and savings goal projection.
//!
//! This module implements the analyzer behind the dashboard:
//! - Validation of raw budget payloads
//! - Derived metrics (savings, savings rate, health score)
//! - Needs-vs-wants classification
//! - Months-to-goal projection

pub mod classification;
pub mod error;
pub mod goal;
pub mod service;
pub mod types;
pub mod validation;


pub use classification::{NEED_CATEGORIES, classify};
pub use error::{BudgetError, ComputationError, ValidationError};
pub use goal::{ADVISORY_THRESHOLD_MONTHS, project_goal};
pub use service::{BudgetAnalyzer, HEALTH_SCORE_CEILING, HEALTH_SCORE_FLOOR};
pub use types::{
    AnalysisResult, BudgetDeclaration, CategoryBreakdown, ExpenseClass, ExpenseItem, GoalAdvisory,
    GoalProjection,
};
pub use validation::{parse_declaration, validate_declaration, validate_goal};
