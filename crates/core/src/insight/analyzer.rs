//! Keyword and sentiment extraction.

use std::collections::BTreeSet;

use super::lexicon::{is_negation, is_stop_word, polarity};
use super::types::{Sentiment, TextInsight};

/// A lowercased word, or a negating contraction such as "don't".
#[derive(Debug, PartialEq, Eq)]
enum Token {
    Word(String),
    Negation,
}

/// Local text analyzer. Stateless.
pub struct TextAnalyzer;

impl TextAnalyzer {
    /// Extracts keywords and overall sentiment from `text`.
    ///
    /// Keywords are alphabetic words outside the stop-word list. Sentiment
    /// sums lexicon weights; a negation flips the next scored word.
    #[must_use]
    pub fn analyze(text: &str) -> TextInsight {
        let tokens = tokenize(text);
        TextInsight {
            keywords: keywords(&tokens),
            sentiment: Sentiment::from_score(score(&tokens)),
        }
    }
}

fn tokenize(text: &str) -> Vec<Token> {
    text.split(|c: char| !(c.is_alphabetic() || c == '\'' || c == '\u{2019}'))
        .filter(|piece| !piece.is_empty())
        .filter_map(|piece| {
            let lower = piece.to_lowercase();
            match lower.split_once(['\'', '\u{2019}']) {
                Some((head, "t")) if head.ends_with('n') => Some(Token::Negation),
                Some((head, _)) if head.is_empty() => None,
                Some((head, _)) => Some(Token::Word(head.to_string())),
                None if is_negation(&lower) => Some(Token::Negation),
                None => Some(Token::Word(lower)),
            }
        })
        .collect()
}

fn keywords(tokens: &[Token]) -> BTreeSet<String> {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Word(word) if !is_stop_word(word) => Some(word.clone()),
            Token::Word(_) | Token::Negation => None,
        })
        .collect()
}

fn score(tokens: &[Token]) -> i32 {
    let mut total = 0;
    let mut negate = false;
    for token in tokens {
        match token {
            Token::Negation => negate = true,
            Token::Word(word) => {
                if let Some(weight) = polarity(word) {
                    total += if negate { -weight } else { weight };
                    negate = false;
                }
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn keyword_list(text: &str) -> Vec<String> {
        TextAnalyzer::analyze(text).keywords.into_iter().collect()
    }

    #[test]
    fn test_keywords_skip_stop_words_and_duplicates() {
        assert_eq!(
            keyword_list("How can I save more money each month? Money is tight."),
            ["money", "month", "save", "tight"]
        );
    }

    #[test]
    fn test_keywords_are_lowercased_and_alphabetic() {
        assert_eq!(
            keyword_list("Invest 5000 in SIP or FD?"),
            ["fd", "invest", "sip"]
        );
    }

    #[test]
    fn test_contractions() {
        assert_eq!(
            tokenize("don't I'm"),
            [Token::Negation, Token::Word("i".to_string())]
        );
        assert_eq!(keyword_list("my bank's fees"), ["bank", "fees"]);
    }

    #[rstest]
    #[case("I got a great bonus and I'm happy", Sentiment::Positive)]
    #[case("I am worried about my debt", Sentiment::Negative)]
    #[case("How should I split my salary?", Sentiment::Neutral)]
    #[case("", Sentiment::Neutral)]
    #[case("This plan is not good", Sentiment::Negative)]
    #[case("I don't want to lose money", Sentiment::Positive)]
    #[case("good but bad", Sentiment::Neutral)]
    fn test_sentiment(#[case] text: &str, #[case] expected: Sentiment) {
        assert_eq!(TextAnalyzer::analyze(text).sentiment, expected);
    }

    #[test]
    fn test_curly_apostrophe_negation() {
        assert_eq!(
            TextAnalyzer::analyze("that isn\u{2019}t smart").sentiment,
            Sentiment::Negative
        );
    }
}
