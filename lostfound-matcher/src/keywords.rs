//! Keyword overlap between the free-text parts of two reports.
#![forbid(unsafe_code)]

use lostfound_core::{FoundItem, LostItem};

use crate::MatchWeights;

/// Lower-cased whitespace tokens of `name + " " + description` that are at
/// least `min_chars` characters long.
pub(crate) fn keyword_tokens(name: &str, description: &str, min_chars: usize) -> Vec<String> {
    format!("{name} {description}")
        .to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() >= min_chars)
        .map(str::to_owned)
        .collect()
}

/// Number of lost-side tokens that overlap any found-side token.
///
/// Two tokens overlap when either contains the other. Repeated lost-side
/// tokens are counted each time they occur.
pub(crate) fn count_overlapping(lost_words: &[String], found_words: &[String]) -> usize {
    lost_words
        .iter()
        .filter(|lost_word| {
            found_words.iter().any(|found_word| {
                found_word.contains(lost_word.as_str()) || lost_word.contains(found_word.as_str())
            })
        })
        .count()
}

/// Points for shared keywords; uncapped.
pub(crate) fn keyword_signal(lost: &LostItem, found: &FoundItem, weights: &MatchWeights) -> u32 {
    let lost_words = keyword_tokens(&lost.item_name, &lost.description, weights.min_keyword_chars);
    let found_words = keyword_tokens(
        &found.item_name,
        &found.description,
        weights.min_keyword_chars,
    );
    let matches = u32::try_from(count_overlapping(&lost_words, &found_words)).unwrap_or(u32::MAX);
    matches.saturating_mul(weights.keyword)
}
