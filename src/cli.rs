//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the argument structure of the `chatlens`
//! binary. File loading and printing live in the binary itself; this type
//! only describes what the user asked for, so it can be tested without
//! touching the filesystem.

use clap::Parser;

use crate::core::filter::UserSelection;
use crate::error::ChatlensError;
use crate::format::OutputFormat;

/// Parse an exported chat transcript and summarize who said what, and when.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice --stop-words stop_hinglish.txt
    chatlens chat.txt -o records.csv
    chatlens chat.txt -o records.json --after 2024-01-01 --before 2024-06-30")]
pub struct Args {
    /// Path to the exported transcript
    pub input: String,

    /// Restrict the summary and output to one user ("Overall" for everyone)
    #[arg(short, long, value_name = "NAME", default_value = "Overall")]
    pub user: UserSelection,

    /// Stop-word file, whitespace separated, excluded from top words
    #[arg(long, value_name = "PATH")]
    pub stop_words: Option<String>,

    /// Write the record table to this file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Table format (default: from the output extension, else csv)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Keep records on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep records on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Number of entries in each ranking
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top: usize,

    /// Log diagnostics to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Resolves the table format: explicit `--format` wins, then the output
    /// file extension, then CSV.
    pub fn output_format(&self) -> Result<OutputFormat, ChatlensError> {
        match (self.format, &self.output) {
            (Some(format), _) => Ok(format),
            (None, Some(path)) => OutputFormat::from_path(path),
            (None, None) => Ok(OutputFormat::default()),
        }
    }

    /// Default log filter for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
