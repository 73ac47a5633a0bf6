//! Core business logic for FinBot.
//!
//! This crate contains pure logic with ZERO web or network dependencies.
//!
//! # Modules
//!
//! - `budget` - Budget validation, metrics, needs-vs-wants and goal projection
//! - `insight` - Local keyword and sentiment analysis of questions

pub mod budget;
pub mod insight;
