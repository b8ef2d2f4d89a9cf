/// Text Analyzer - descriptive statistics and lexical analysis of text files
///
/// The main entry point for the text analyzer application. It resolves the two
/// input files, runs every query against the first one, and prints or exports
/// the resulting report.

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use dialoguer::Input;
use log::{error, info, LevelFilter};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use text_analyzer::utils::{file_utils, output_formatter};
use text_analyzer::{app, config, QueryOptions};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "text_analyzer",
    version,
    about = "Descriptive statistics and lexical analysis of text files",
    long_about = "This tool reads a text file and reports:
- Line, word, unique word and specific word counts
- Average line and word lengths
- Shortest and longest lines, longest words
- Lines matching a word, a regex pattern, or containing numbers
- Words shared with a second file, word frequency and palindromes"
)]
struct Args {
    /// File to analyze, relative to --base-dir (prompted for when omitted)
    #[arg(name = "first_file")]
    first_file: Option<String>,

    /// File to compare against for common words (prompted for when omitted)
    #[arg(name = "second_file")]
    second_file: Option<String>,

    /// Directory the file names are resolved against
    #[arg(long = "base-dir", default_value = ".")]
    base_dir: String,

    /// Word whose occurrences are counted
    #[arg(long = "word")]
    word: Option<String>,

    /// Word whose lines are listed
    #[arg(long = "line-word")]
    line_word: Option<String>,

    /// Number of longest words to list
    #[arg(long = "top")]
    top: Option<usize>,

    /// Report the first word longer than this many characters
    #[arg(long = "min-chars")]
    min_chars: Option<usize>,

    /// Regular expression to match lines against
    #[arg(long = "pattern")]
    pattern: Option<String>,

    /// Path to a JSON file with query options
    #[arg(long = "config")]
    config: Option<String>,

    /// Output in markdown format (wrapped in triple backticks)
    #[arg(long = "md", action = ArgAction::SetTrue)]
    md: bool,

    /// Export the report to a JSON file
    #[arg(long = "json")]
    json: Option<String>,

    /// Export the word frequency table to a CSV file
    #[arg(long = "csv")]
    csv: Option<String>,

    /// Suppress terminal output
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Log file path (default: text_analyzer.log)
    #[arg(long = "log-file", default_value = "text_analyzer.log")]
    log_file: String,
}

/// Main entry point function
fn main() -> Result<()> {
    // Record the start time
    let start_time = Instant::now();

    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    setup_logging(&args);

    // Load configuration, then let explicit flags win
    let mut options = config::load_options(args.config.as_deref().map(Path::new))?;
    apply_overrides(&mut options, &args);

    // Resolve the two sources
    let base_dir = PathBuf::from(&args.base_dir);
    let first_name = source_name(&args.first_file, "Enter first file to analyze")?;
    let second_name = source_name(&args.second_file, "Enter second file to analyze")?;
    let first_path = file_utils::resolve_source(&base_dir, &first_name);
    let second_path = file_utils::resolve_source(&base_dir, &second_name);

    info!(
        "Analyzing {} against {}",
        first_path.display(),
        second_path.display()
    );

    let report = match app::run_report(&first_path, &second_path, &options) {
        Ok(report) => report,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("{} {:#}", "Error:".red(), e);
            process::exit(1);
        }
    };

    // Export results if requested
    if let Some(json_path) = &args.json {
        output_formatter::export_report_json(&report, Path::new(json_path))?;
        info!("Report written to {}", json_path);
    }

    if let Some(csv_path) = &args.csv {
        output_formatter::create_csv_report(&report, Path::new(csv_path))?;
        info!("Word frequency written to {}", csv_path);
    }

    // Print results to console if not in quiet mode
    if !args.quiet {
        println!("\n{} {}", "Results for:".cyan(), first_path.display());
        println!("{}", "=".repeat(80).bold());
        println!("{}", output_formatter::format_report(&report, args.md));
        println!(
            "{} {:.2} seconds",
            "Time elapsed:".green(),
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

/// Set up logging to the log file, or stderr if it cannot be created
fn setup_logging(args: &Args) {
    let mut builder = env_logger::Builder::new();

    // Set log level from arguments
    builder.filter_level(args.log_level);

    // Set format
    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    // Add file output
    if let Ok(file) = File::create(&args.log_file) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
}

/// Copy query flags given on the command line over the loaded options
fn apply_overrides(options: &mut QueryOptions, args: &Args) {
    if let Some(word) = &args.word {
        options.specific_word = word.clone();
    }
    if let Some(line_word) = &args.line_word {
        options.line_word = line_word.clone();
    }
    if let Some(top) = args.top {
        options.top_n = top;
    }
    if let Some(min_chars) = args.min_chars {
        options.min_chars = min_chars;
    }
    if let Some(pattern) = &args.pattern {
        options.pattern = pattern.clone();
    }
}

/// Use the file name from the command line, or ask for one
fn source_name(given: &Option<String>, prompt: &str) -> Result<String> {
    match given {
        Some(name) => Ok(name.clone()),
        None => {
            let name: String = Input::new().with_prompt(prompt).interact_text()?;
            Ok(name)
        }
    }
}
