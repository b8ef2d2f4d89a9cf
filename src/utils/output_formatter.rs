/// Output formatter for analysis reports
///
/// This module handles formatting and exporting analysis reports in various formats,
/// including console output, JSON, and CSV.

use std::fmt::Display;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::report::AnalysisReport;

/// Format an analysis report for console output
///
/// # Arguments
///
/// * `report` - The report to format
/// * `use_markdown` - Whether to wrap the output in markdown triple backticks
///
/// # Returns
///
/// Formatted string for console output, one labelled line per query
pub fn format_report(report: &AnalysisReport, use_markdown: bool) -> String {
    let options = &report.options;
    let mut output = String::new();

    // Start markdown code block if requested
    if use_markdown {
        output.push_str("```\n");
    }

    let entries = [
        ("Total lines".to_string(), report.total_lines.to_string()),
        ("Total words".to_string(), report.total_words.to_string()),
        ("Non-empty lines".to_string(), report.non_empty_lines.to_string()),
        ("Unique words".to_string(), report.unique_words.to_string()),
        (
            format!("Occurrences of {}", options.specific_word),
            report.specific_word_count.to_string(),
        ),
        (
            format!("Lines with {}", options.line_word),
            format_list(&report.lines_with_word),
        ),
        ("Average line length".to_string(), format!("{:.2}", report.average_line_length)),
        ("Average word length".to_string(), format!("{:.2}", report.average_word_length)),
        ("Shortest line".to_string(), report.shortest_line.clone()),
        ("Longest line".to_string(), report.longest_line.clone()),
        (
            format!("Top {} longest words", options.top_n),
            format_list(&report.top_longest_words),
        ),
        (
            format!("First word with more than {} characters", options.min_chars),
            report.first_long_word.clone().unwrap_or_else(|| "None".to_string()),
        ),
        ("Common words between files".to_string(), format_list(&report.common_words)),
        ("Word frequency".to_string(), format_frequency(report)),
        ("Lines containing numbers".to_string(), format_list(&report.lines_with_numbers)),
        (
            format!("Lines matching regex pattern '{}'", options.pattern),
            format_list(&report.lines_matching_pattern),
        ),
        ("Palindromic words".to_string(), format_list(&report.palindromic_words)),
    ];

    for (label, value) in &entries {
        output.push_str(&format!("{} {}\n", format!("{}:", label).cyan().bold(), value));
    }

    // End markdown code block if requested
    if use_markdown {
        output.push_str("```\n");
    }

    output
}

/// Render a sequence as `[a, b, c]`
fn format_list<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let items: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Render the frequency table as `{word=count, ...}` in word order
fn format_frequency(report: &AnalysisReport) -> String {
    let items: Vec<String> = report
        .word_frequency
        .iter()
        .map(|(word, count)| format!("{}={}", word, count))
        .collect();
    format!("{{{}}}", items.join(", "))
}

/// Export a report to a JSON file
///
/// # Arguments
///
/// * `report` - The report to export
/// * `output_path` - Path where the JSON file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn export_report_json(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create JSON output file: {}", output_path.display()))?;

    serde_json::to_writer_pretty(file, report)
        .context("Failed to write JSON data")?;

    Ok(())
}

/// Export the word frequency table of a report to a CSV file
///
/// Rows are sorted by descending count, then alphabetically.
///
/// # Arguments
///
/// * `report` - The report whose frequency table is written
/// * `output_path` - Path where the CSV file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn create_csv_report(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path)
        .context(format!("Failed to create CSV output file: {}", output_path.display()))?;

    writer.write_record(["word", "count"])
        .context("Failed to write CSV header")?;

    let mut rows: Vec<(&String, &usize)> = report.word_frequency.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    for (word, count) in rows {
        writer.write_record([word.as_str(), count.to_string().as_str()])
            .context("Failed to write CSV row")?;
    }

    writer.flush().context("Failed to flush CSV output")?;

    Ok(())
}
