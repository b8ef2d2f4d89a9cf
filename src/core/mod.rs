/// Core module for text analysis
///
/// This module contains the analyzer itself, the tokenization rules it relies on,
/// and the report that runs every query in a fixed order.

pub mod analyzer;
pub mod report;
pub mod tokenizer;
