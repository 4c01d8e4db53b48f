//! Word normalization and classification for tag strings.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches any character outside `[A-Za-z0-9]`.
static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^A-Za-z0-9]").expect("valid pattern"));

/// Joins all tag strings with a single space and splits on single spaces,
/// producing one flat word sequence across the whole feed.
///
/// Words from a multi-word tag string stay contiguous, and empty tag
/// strings contribute empty tokens rather than disappearing. Joining zero
/// strings yields the empty string, so an empty input produces `[""]`.
pub fn combine_to_words(tag_strings: &[&str]) -> Vec<String> {
    tag_strings
        .join(" ")
        .split(' ')
        .map(str::to_owned)
        .collect()
}

/// Returns true iff the word contains zero characters outside `[A-Za-z0-9]`.
///
/// The empty string has no disqualifying characters, so it classifies as
/// alphanumeric.
pub fn is_alphanumeric(word: &str) -> bool {
    !NON_ALPHANUMERIC.is_match(word)
}

/// Lower-cases every word, removes duplicates (first occurrence wins), and
/// returns the set sorted ascending with plain `str` ordering.
pub fn lower_unique_sorted(words: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique: Vec<String> = words
        .iter()
        .map(|word| word.to_lowercase())
        .filter(|word| seen.insert(word.clone()))
        .collect();
    unique.sort();
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_keeps_multi_word_tags_contiguous() {
        let combined = combine_to_words(&["dog puppy", "park"]);
        assert_eq!(combined, vec!["dog", "puppy", "park"]);
    }

    #[test]
    fn test_combine_preserves_empty_tokens() {
        let combined = combine_to_words(&["dog", "", "park"]);
        assert_eq!(combined, vec!["dog", "", "park"]);
    }

    #[test]
    fn test_combine_of_nothing_is_one_empty_token() {
        assert_eq!(combine_to_words(&[]), vec![""]);
    }

    #[test]
    fn test_ascii_words_are_alphanumeric() {
        assert!(is_alphanumeric("puppy"));
        assert!(is_alphanumeric("P1060675"));
        assert!(is_alphanumeric("2016"));
    }

    #[test]
    fn test_empty_string_is_alphanumeric() {
        assert!(is_alphanumeric(""));
    }

    #[test]
    fn test_non_ascii_and_punctuation_are_not_alphanumeric() {
        assert!(!is_alphanumeric("świnoujście"));
        assert!(!is_alphanumeric("dog-park"));
        assert!(!is_alphanumeric("two words"));
    }

    #[test]
    fn test_lower_unique_sorted() {
        let words = vec![
            "Dog".to_owned(),
            "park".to_owned(),
            "dog".to_owned(),
            "Beach".to_owned(),
        ];
        assert_eq!(lower_unique_sorted(&words), vec!["beach", "dog", "park"]);
    }

    #[test]
    fn test_lower_unique_sorted_on_empty_input() {
        assert!(lower_unique_sorted(&[]).is_empty());
    }
}
