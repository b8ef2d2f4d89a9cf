/// Text Analyzer - descriptive statistics and lexical analysis of text files
///
/// This library loads the lines of a text file once and answers queries over them:
/// line and word counts, average lengths, extremal lines and words, word search,
/// regex and digit search, cross-file common words, word frequency, and palindromes.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export main analyzer types for convenience
pub use crate::core::analyzer::{AnalyzerError, TextAnalyzer};
pub use crate::core::report::{AnalysisReport, QueryOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze a file against a second file and return the full report
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `file_path` - Path to the file to analyze
/// * `other_path` - Path to the file used for the common words query
///
/// # Returns
///
/// Report of every query, run with the default query options
pub fn analyze_file<P, Q>(file_path: P, other_path: Q) -> anyhow::Result<AnalysisReport>
where
    P: AsRef<std::path::Path>,
    Q: AsRef<std::path::Path>,
{
    app::run_report(file_path.as_ref(), other_path.as_ref(), &config::default_options())
}

/// Library configuration and utilities
pub mod config {
    use std::path::Path;

    use crate::core::report::QueryOptions;
    use crate::utils::file_utils;

    /// Create default query options
    pub fn default_options() -> QueryOptions {
        QueryOptions::default()
    }

    /// Load query options from a JSON file, or use the defaults when no file is given
    pub fn load_options(config_path: Option<&Path>) -> anyhow::Result<QueryOptions> {
        match config_path {
            Some(path) => {
                let options = file_utils::load_query_options(path)?;
                log::info!("Loaded configuration from {}", path.display());
                Ok(options)
            }
            None => Ok(default_options()),
        }
    }
}

/// Command-line application functionality
pub mod app {
    use std::path::Path;

    use anyhow::Context;

    use crate::core::analyzer::TextAnalyzer;
    use crate::core::report::{AnalysisReport, QueryOptions};

    /// Load the first file and run every query against it
    ///
    /// # Arguments
    ///
    /// * `file_path` - Path to the file to analyze
    /// * `other_path` - Path to the file used for the common words query
    /// * `options` - Arguments for the parameterised queries
    ///
    /// # Returns
    ///
    /// The full report; any unreadable file or invalid pattern stops the run
    pub fn run_report(
        file_path: &Path,
        other_path: &Path,
        options: &QueryOptions,
    ) -> anyhow::Result<AnalysisReport> {
        let analyzer = TextAnalyzer::from_path(file_path)?;
        let report = AnalysisReport::build(&analyzer, other_path, options)
            .context(format!("Analysis of {} failed", file_path.display()))?;

        Ok(report)
    }
}
