//! Text analysis data types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Overall polarity of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Net positive wording.
    Positive,
    /// Net negative wording.
    Negative,
    /// No polarity, or positives and negatives cancel out.
    Neutral,
}

impl Sentiment {
    /// Classifies a summed polarity score.
    #[must_use]
    pub const fn from_score(score: i32) -> Self {
        if score > 0 {
            Self::Positive
        } else if score < 0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Keywords and sentiment for one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInsight {
    /// Lowercased content words, deduplicated and sorted.
    pub keywords: BTreeSet<String>,
    /// Overall polarity.
    pub sentiment: Sentiment,
}
