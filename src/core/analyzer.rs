/// Core text analyzer implementation
///
/// This file contains the implementation of the TextAnalyzer, which holds the
/// lines of one text source and answers statistical and lexical queries over them.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use regex::Regex;

use crate::core::tokenizer::{self, char_len, tokenize};
use crate::utils::file_utils::{read_lines, split_lines};

/// Errors raised while loading a text source or running a query
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// The source could not be opened or read
    #[error("Failed to read file {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A search pattern is not a valid regular expression
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Read-only analyzer over the lines of a single text source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextAnalyzer {
    /// Lines of the source, terminators stripped, otherwise untouched
    lines: Vec<String>,
}

impl TextAnalyzer {
    /// Create a TextAnalyzer from a file on disk
    ///
    /// # Arguments
    ///
    /// * `file_path` - Path to the file to analyze
    ///
    /// # Returns
    ///
    /// A new TextAnalyzer, or `SourceUnreadable` if the file cannot be read
    pub fn from_path<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let file_path = file_path.as_ref();
        let lines = read_lines(file_path)?;
        info!("Loaded {} lines from {}", lines.len(), file_path.display());
        Ok(Self { lines })
    }

    /// Create a TextAnalyzer from in-memory text
    pub fn from_text(text: &str) -> Self {
        Self { lines: split_lines(text) }
    }

    /// Create a TextAnalyzer from lines that are already split
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// The lines backing this analyzer
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Every token of every line, in document order
    fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().flat_map(|line| tokenize(line))
    }

    /// Lowercased tokens of the whole document
    fn lowercase_words(&self) -> impl Iterator<Item = String> + '_ {
        self.words().map(str::to_lowercase)
    }

    /// Number of lines, including empty ones
    pub fn count_lines(&self) -> usize {
        self.lines.len()
    }

    /// Number of tokens across all lines, empty edge tokens included
    pub fn count_words(&self) -> usize {
        self.words().count()
    }

    /// Number of lines that contain something other than whitespace
    pub fn count_non_empty_lines(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .count()
    }

    /// Number of distinct tokens, compared case-insensitively
    pub fn count_unique_words(&self) -> usize {
        self.lowercase_words().collect::<HashSet<_>>().len()
    }

    /// Count the occurrences of a word, ignoring case
    ///
    /// # Arguments
    ///
    /// * `word` - The word to count
    ///
    /// # Returns
    ///
    /// Number of tokens equal to `word` after lowercasing both
    pub fn count_specific_word(&self, word: &str) -> usize {
        let target = word.to_lowercase();
        self.words()
            .filter(|w| w.to_lowercase() == target)
            .count()
    }

    /// Find the lines that contain a word, ignoring case
    ///
    /// Each matching line is listed once, in document order, no matter how
    /// often the word occurs within it.
    pub fn find_lines_with_specific_word(&self, word: &str) -> Vec<&str> {
        let target = word.to_lowercase();
        self.lines
            .iter()
            .filter(|line| tokenize(line).any(|w| w.to_lowercase() == target))
            .map(String::as_str)
            .collect()
    }

    /// Mean line length in characters over all lines, 0.0 for no lines
    pub fn calculate_average_line_length(&self) -> f64 {
        mean(self.lines.iter().map(|line| char_len(line)))
    }

    /// Mean token length in characters over all tokens, 0.0 for no tokens
    pub fn calculate_average_word_length(&self) -> f64 {
        mean(self.words().map(char_len))
    }

    /// Lines that contain something other than whitespace
    fn non_blank_lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|line| !line.trim().is_empty())
    }

    /// Shortest non-blank line, first one wins ties, "" if there is none
    pub fn find_shortest_line(&self) -> &str {
        // min_by_key keeps the first of several equal minima
        self.non_blank_lines().min_by_key(|line| char_len(line)).unwrap_or("")
    }

    /// Longest non-blank line, first one wins ties, "" if there is none
    pub fn find_longest_line(&self) -> &str {
        // max_by_key would keep the last of several equal maxima
        self.non_blank_lines()
            .reduce(|best, line| if char_len(line) > char_len(best) { line } else { best })
            .unwrap_or("")
    }

    /// Find the `n` longest distinct words
    ///
    /// Distinctness is case-sensitive and the original casing is kept. Words
    /// of equal length stay in the order they were first seen.
    ///
    /// # Arguments
    ///
    /// * `n` - Maximum number of words to return
    ///
    /// # Returns
    ///
    /// Up to `n` words sorted by descending length
    pub fn find_top_longest_words(&self, n: usize) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut distinct: Vec<&str> = self.words().filter(|w| seen.insert(*w)).collect();

        // sort_by_key is stable, so first-seen order survives within a length
        distinct.sort_by_key(|w| std::cmp::Reverse(char_len(w)));
        distinct.truncate(n);
        distinct
    }

    /// First token, in document order, with more than `n` characters
    pub fn get_first_word_with_n_chars(&self, n: usize) -> Option<&str> {
        self.words().find(|w| char_len(w) > n)
    }

    /// Find the words this document shares with another file
    ///
    /// # Arguments
    ///
    /// * `other_path` - Path to the second file, read fresh on every call
    ///
    /// # Returns
    ///
    /// Lowercased words present in both, or `SourceUnreadable` if the second
    /// file cannot be read
    pub fn find_common_words<P: AsRef<Path>>(&self, other_path: P) -> Result<BTreeSet<String>> {
        let other = TextAnalyzer::from_path(other_path)?;

        Ok(self.find_common_words_with(&other))
    }

    /// Lowercased words that appear in both this analyzer and `other`
    pub fn find_common_words_with(&self, other: &TextAnalyzer) -> BTreeSet<String> {
        let other_words: HashSet<String> = other.lowercase_words().collect();
        debug!("Second source has {} distinct words", other_words.len());

        self.lowercase_words()
            .filter(|w| other_words.contains(w))
            .collect()
    }

    /// Occurrence count of every lowercased token
    pub fn find_word_frequency(&self) -> BTreeMap<String, usize> {
        let mut frequency = BTreeMap::new();
        for word in self.lowercase_words() {
            *frequency.entry(word).or_insert(0) += 1;
        }
        frequency
    }

    /// Lines with at least one ASCII digit anywhere in the text
    pub fn find_lines_containing_numbers(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|line| tokenizer::contains_digit(line))
            .collect()
    }

    /// Find the lines in which a regular expression matches
    ///
    /// # Arguments
    ///
    /// * `pattern` - Regular expression; it may match anywhere in a line
    ///
    /// # Returns
    ///
    /// Matching lines in document order, or `InvalidPattern` if the pattern
    /// does not compile
    pub fn find_lines_matching_pattern(&self, pattern: &str) -> Result<Vec<&str>> {
        let regex = Regex::new(pattern).map_err(|source| {
            error!("Error compiling pattern {}: {}", pattern, source);
            AnalyzerError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        Ok(self
            .lines
            .iter()
            .map(String::as_str)
            .filter(|line| regex.is_match(line))
            .collect())
    }

    /// Distinct non-empty words that read the same backwards, ignoring case
    pub fn find_palindromic_words(&self) -> BTreeSet<&str> {
        self.words()
            .filter(|w| tokenizer::is_palindrome(w))
            .collect()
    }
}

/// Arithmetic mean of a sequence of lengths, 0.0 when it is empty
fn mean<I: Iterator<Item = usize>>(values: I) -> f64 {
    let (sum, count) = values.fold((0usize, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
