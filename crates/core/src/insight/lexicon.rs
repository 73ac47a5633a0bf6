//! Word lists for keyword extraction and sentiment scoring.

/// English stop words, lowercase. Excluded from keywords.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "either",
    "else", "even", "ever", "every", "few", "for", "from", "further", "get", "had", "has", "have",
    "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "i", "if",
    "in", "into", "is", "it", "its", "itself", "just", "less", "make", "many", "may", "me",
    "might", "mine", "more", "most", "much", "must", "my", "myself", "never", "no", "nor", "not",
    "now", "of", "off", "often", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "per", "please", "quite", "rather", "really", "same", "should", "so",
    "some", "still", "such", "than", "that", "the", "their", "theirs", "them", "themselves",
    "then", "there", "these", "they", "this", "those", "though", "through", "to", "too", "under",
    "until", "up", "upon", "us", "very", "was", "we", "well", "were", "what", "whatever", "when",
    "where", "whether", "which", "while", "who", "whom", "whose", "why", "will", "with", "within",
    "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Words that flip the polarity of the next scored word.
pub const NEGATIONS: &[&str] = &["not", "no", "never", "none", "nothing", "neither", "nor"];

/// Scored words, lowercase, with polarity weights.
pub const POLARITY: &[(&str, i32)] = &[
    // positive
    ("good", 2),
    ("great", 3),
    ("excellent", 3),
    ("best", 3),
    ("better", 2),
    ("happy", 2),
    ("glad", 2),
    ("safe", 1),
    ("secure", 2),
    ("stable", 1),
    ("profit", 2),
    ("profitable", 2),
    ("grow", 1),
    ("growth", 1),
    ("gain", 2),
    ("gains", 2),
    ("save", 1),
    ("saving", 1),
    ("savings", 1),
    ("afford", 1),
    ("affordable", 1),
    ("wealthy", 2),
    ("rich", 2),
    ("confident", 2),
    ("comfortable", 2),
    ("smart", 2),
    ("wise", 2),
    ("success", 3),
    ("successful", 3),
    ("love", 3),
    ("nice", 2),
    ("easy", 1),
    ("improve", 1),
    ("bonus", 2),
    ("raise", 1),
    // negative
    ("bad", -2),
    ("terrible", -3),
    ("awful", -3),
    ("worst", -3),
    ("worse", -2),
    ("poor", -2),
    ("broke", -3),
    ("debt", -1),
    ("debts", -1),
    ("loan", -1),
    ("loans", -1),
    ("loss", -2),
    ("losses", -2),
    ("lose", -2),
    ("losing", -2),
    ("lost", -2),
    ("worried", -2),
    ("worry", -2),
    ("anxious", -2),
    ("stress", -2),
    ("stressed", -2),
    ("afraid", -2),
    ("scared", -2),
    ("risky", -1),
    ("risk", -1),
    ("expensive", -1),
    ("overspend", -2),
    ("overspending", -2),
    ("struggle", -2),
    ("struggling", -2),
    ("hard", -1),
    ("difficult", -1),
    ("fail", -2),
    ("failed", -2),
    ("unemployed", -2),
    ("hate", -3),
    ("crisis", -3),
];

/// Polarity weight of a lowercase word, if it is scored.
#[must_use]
pub fn polarity(word: &str) -> Option<i32> {
    POLARITY
        .iter()
        .find(|(scored, _)| *scored == word)
        .map(|(_, weight)| *weight)
}

/// Whether a lowercase word is a stop word.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Whether a lowercase word negates what follows.
#[must_use]
pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}
