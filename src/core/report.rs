/// Query options and the full analysis report
///
/// The report collects the result of every analyzer query, computed in a fixed
/// order, so it can be printed or exported as a whole.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::analyzer::{Result, TextAnalyzer};

/// Arguments for the parameterised queries of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Word whose occurrences are counted
    pub specific_word: String,
    /// Word whose lines are listed
    pub line_word: String,
    /// How many of the longest words to list
    pub top_n: usize,
    /// Length a word must exceed to be reported as the first long word
    pub min_chars: usize,
    /// Regular expression lines are matched against
    pub pattern: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            specific_word: "computer".to_string(),
            line_word: "advancements".to_string(),
            top_n: 5,
            min_chars: 5,
            pattern: r"([A-Z])\w+".to_string(),
        }
    }
}

/// Results of every query, in the order they are run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub options: QueryOptions,
    pub total_lines: usize,
    pub total_words: usize,
    pub non_empty_lines: usize,
    pub unique_words: usize,
    pub specific_word_count: usize,
    pub lines_with_word: Vec<String>,
    pub average_line_length: f64,
    pub average_word_length: f64,
    pub shortest_line: String,
    pub longest_line: String,
    pub top_longest_words: Vec<String>,
    pub first_long_word: Option<String>,
    pub common_words: BTreeSet<String>,
    pub word_frequency: BTreeMap<String, usize>,
    pub lines_with_numbers: Vec<String>,
    pub lines_matching_pattern: Vec<String>,
    pub palindromic_words: BTreeSet<String>,
}

impl AnalysisReport {
    /// Run every query against an analyzer
    ///
    /// # Arguments
    ///
    /// * `analyzer` - Analyzer over the first source
    /// * `other_path` - Second source, used for the common words query
    /// * `options` - Arguments for the parameterised queries
    ///
    /// # Returns
    ///
    /// The complete report. The first failing query aborts the run and none
    /// of the remaining queries are evaluated.
    pub fn build(analyzer: &TextAnalyzer, other_path: &Path, options: &QueryOptions) -> Result<Self> {
        let total_lines = analyzer.count_lines();
        let total_words = analyzer.count_words();
        let non_empty_lines = analyzer.count_non_empty_lines();
        let unique_words = analyzer.count_unique_words();
        let specific_word_count = analyzer.count_specific_word(&options.specific_word);
        let lines_with_word = owned_lines(analyzer.find_lines_with_specific_word(&options.line_word));
        let average_line_length = analyzer.calculate_average_line_length();
        let average_word_length = analyzer.calculate_average_word_length();
        let shortest_line = analyzer.find_shortest_line().to_string();
        let longest_line = analyzer.find_longest_line().to_string();
        let top_longest_words = owned_lines(analyzer.find_top_longest_words(options.top_n));
        let first_long_word = analyzer
            .get_first_word_with_n_chars(options.min_chars)
            .map(str::to_string);
        let common_words = analyzer.find_common_words(other_path)?;
        let word_frequency = analyzer.find_word_frequency();
        let lines_with_numbers = owned_lines(analyzer.find_lines_containing_numbers());
        let lines_matching_pattern = owned_lines(analyzer.find_lines_matching_pattern(&options.pattern)?);
        let palindromic_words = analyzer
            .find_palindromic_words()
            .into_iter()
            .map(str::to_string)
            .collect();

        info!(
            "Report complete: {} lines, {} words, {} unique",
            total_lines, total_words, unique_words
        );

        Ok(Self {
            options: options.clone(),
            total_lines,
            total_words,
            non_empty_lines,
            unique_words,
            specific_word_count,
            lines_with_word,
            average_line_length,
            average_word_length,
            shortest_line,
            longest_line,
            top_longest_words,
            first_long_word,
            common_words,
            word_frequency,
            lines_with_numbers,
            lines_matching_pattern,
            palindromic_words,
        })
    }
}

fn owned_lines(lines: Vec<&str>) -> Vec<String> {
    lines.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::AnalyzerError;

    #[test]
    fn test_default_options() {
        let options = QueryOptions::default();
        assert_eq!(options.specific_word, "computer");
        assert_eq!(options.line_word, "advancements");
        assert_eq!(options.top_n, 5);
        assert_eq!(options.min_chars, 5);
        assert_eq!(options.pattern, r"([A-Z])\w+");
    }

    #[test]
    fn test_build_fails_on_missing_second_source() {
        let analyzer = TextAnalyzer::from_lines(["the cat sat"]);
        let result = AnalysisReport::build(
            &analyzer,
            Path::new("no/such/second.txt"),
            &QueryOptions::default(),
        );
        assert!(matches!(result, Err(AnalyzerError::SourceUnreadable { .. })));
    }

    #[test]
    fn test_build_fails_on_invalid_pattern() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let other = dir.path().join("other.txt");
        std::fs::write(&other, "the dog ran\n").expect("Failed to write file");

        let options = QueryOptions {
            pattern: "(unclosed".to_string(),
            ..QueryOptions::default()
        };
        let analyzer = TextAnalyzer::from_lines(["the cat sat"]);
        let result = AnalysisReport::build(&analyzer, &other, &options);
        assert!(matches!(result, Err(AnalyzerError::InvalidPattern { .. })));
    }

    #[test]
    fn test_build_collects_every_query() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let other = dir.path().join("other.txt");
        std::fs::write(&other, "the dog ran\n").expect("Failed to write file");

        let analyzer = TextAnalyzer::from_lines(["The cat sat", "", "Anna saw 3 computers"]);
        let report = AnalysisReport::build(&analyzer, &other, &QueryOptions::default())
            .expect("Failed to build report");

        assert_eq!(report.total_lines, 3);
        assert_eq!(report.total_words, 7);
        assert_eq!(report.non_empty_lines, 2);
        assert_eq!(report.unique_words, 7);
        assert_eq!(report.specific_word_count, 0);
        assert!(report.lines_with_word.is_empty());
        assert_eq!(report.shortest_line, "The cat sat");
        assert_eq!(report.longest_line, "Anna saw 3 computers");
        assert_eq!(report.top_longest_words[0], "computers");
        assert_eq!(report.first_long_word.as_deref(), Some("computers"));
        assert_eq!(report.common_words, BTreeSet::from(["the".to_string()]));
        assert_eq!(report.lines_with_numbers, vec!["Anna saw 3 computers"]);
        assert_eq!(report.lines_matching_pattern.len(), 2);
        assert!(report.palindromic_words.contains("Anna"));
        assert!(report.palindromic_words.contains("3"));
    }
}
