/// Tokenization rules for the text analyzer
///
/// A word is whatever remains after splitting a line on maximal runs of
/// non-word characters, where a word character is an ASCII letter, an ASCII
/// digit or an underscore. Every other character, including all non-ASCII
/// characters, is a delimiter.
///
/// Splitting keeps the empty tokens produced by a delimiter at the very start
/// or end of a line (`",hello,"` yields `["", "hello", ""]`). An empty line
/// yields no tokens at all.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Maximal run of characters that cannot be part of a word
    static ref WORD_DELIMITER: Regex = Regex::new(r"[^A-Za-z0-9_]+")
        .expect("word delimiter pattern is valid");
}

/// Split a single line into tokens
///
/// # Arguments
///
/// * `line` - The line to split
///
/// # Returns
///
/// An iterator over the tokens of the line, in order, borrowing from `line`
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    (!line.is_empty())
        .then(|| WORD_DELIMITER.split(line))
        .into_iter()
        .flatten()
}

/// Length of a token or line in characters
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Check whether a word reads the same forwards and backwards, ignoring case
///
/// # Arguments
///
/// * `word` - The word to check
///
/// # Returns
///
/// True for non-empty palindromes, false otherwise
pub fn is_palindrome(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }

    let folded: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    folded.iter().eq(folded.iter().rev())
}

/// Check whether a line contains an ASCII digit anywhere
pub fn contains_digit(line: &str) -> bool {
    line.bytes().any(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<&str> {
        tokenize(line).collect()
    }

    #[test]
    fn test_empty_line_has_no_tokens() {
        assert!(tokens("").is_empty());
    }

    #[test]
    fn test_delimiters_at_edges_produce_empty_tokens() {
        assert_eq!(tokens(",hello,"), vec!["", "hello", ""]);
        assert_eq!(tokens("   "), vec!["", ""]);
        assert_eq!(tokens("-x"), vec!["", "x"]);
    }

    #[test]
    fn test_runs_of_delimiters_collapse() {
        assert_eq!(tokens("one,  two;;three"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_word_characters() {
        assert_eq!(tokens("snake_case v2 don't"), vec!["snake_case", "v2", "don", "t"]);
    }

    #[test]
    fn test_non_ascii_is_a_delimiter() {
        assert_eq!(tokens("café au lait"), vec!["caf", "au", "lait"]);
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("level"));
        assert!(is_palindrome("Ana"));
        assert!(is_palindrome("Wow"));
        assert!(is_palindrome("x"));
        assert!(is_palindrome("1221"));
        assert!(!is_palindrome("went"));
        assert!(!is_palindrome(""));
    }

    #[test]
    fn test_contains_digit() {
        assert!(contains_digit("a1b"));
        assert!(contains_digit("  7"));
        assert!(!contains_digit("abc"));
        assert!(!contains_digit(""));
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len(""), 0);
    }
}
