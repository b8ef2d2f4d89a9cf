/// Simple program demonstrating how to use the Text Analyzer library

use anyhow::Result;
use text_analyzer::{analyze_file, TextAnalyzer};

fn main() -> Result<()> {
    let first_path = "demos/sample_first.txt";
    let second_path = "demos/sample_second.txt";

    // Create sample files
    std::fs::write(
        first_path,
        "Computer science has seen rapid advancements.\n\
         In 2024 the computer became smaller again.\n\
         \n\
         Anna saw a racecar at noon.\n",
    )?;
    std::fs::write(second_path, "The computer in the racecar was fast.\n")?;

    // Run every query at once with the default options
    let report = analyze_file(first_path, second_path)?;
    println!("Total words: {}", report.total_words);
    println!("Common words: {:?}", report.common_words);

    // Or ask individual questions
    let analyzer = TextAnalyzer::from_path(first_path)?;
    println!("Longest line: {}", analyzer.find_longest_line());
    println!("Palindromes: {:?}", analyzer.find_palindromic_words());
    println!(
        "Capitalised lines: {:?}",
        analyzer.find_lines_matching_pattern(r"([A-Z])\w+")?
    );

    Ok(())
}
