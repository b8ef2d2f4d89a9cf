/// Utility modules for the text analyzer
///
/// This module contains utility functions for reading text sources, loading
/// options, and formatting or exporting reports.

pub mod file_utils;
pub mod output_formatter;
