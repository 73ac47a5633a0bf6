//! Local text analysis of user questions.
//!
//! Keyword extraction and lexicon-based sentiment, computed without any
//! network call. The result annotates a question; budget analysis never
//! consumes it.

pub mod analyzer;
pub mod lexicon;
pub mod types;

pub use analyzer::TextAnalyzer;
pub use types::{Sentiment, TextInsight};
