//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chatlens::ChatlensError;
use chatlens::analysis::{
    RegexLinkExtractor, StopWords, UnicodeEmojiClassifier, emoji_counts, fetch_stats,
    most_busy_users, most_common_words,
};
use chatlens::cli::Args;
use chatlens::config::{AnalysisConfig, ParserConfig};
use chatlens::core::filter::{FilterConfig, UserSelection, apply_filters};
use chatlens::format::write_to_format;
use chatlens::parser::TranscriptParser;

fn main() {
    let args = <Args as ClapParser>::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| EnvFilter::new(args.log_level())),
        )
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let start = Instant::now();

    // Validate the cheap arguments before reading anything.
    let format = args.output_format()?;
    let mut filter_config = FilterConfig::new();
    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
    }
    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
    }

    let stop_words = match args.stop_words {
        Some(ref path) => StopWords::load(path)?,
        None => StopWords::new(),
    };

    let bytes = fs::read(&args.input)?;
    let content = String::from_utf8_lossy(&bytes);
    debug!(path = %args.input, bytes = bytes.len(), "read transcript");

    let parser_config = ParserConfig::default();
    let parser = TranscriptParser::with_config(parser_config.clone());
    let records = parser.parse_str(&content);
    let parsed = records.len();

    let records = apply_filters(records, &filter_config);

    let analysis_config = AnalysisConfig::default()
        .with_top_users(args.top)
        .with_top_words(args.top)
        .with_system_author(parser_config.system_author.clone());
    let selection = &args.user;

    println!("chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("Input:     {}", args.input);
    println!("Selection: {}", selection);
    println!();

    let stats = fetch_stats(&records, selection, &RegexLinkExtractor::new(), &analysis_config);
    println!("Records:   {} parsed, {} after date filters", parsed, records.len());
    println!("Messages:  {}", stats.messages);
    println!("Words:     {}", stats.words);
    println!("Media:     {}", stats.media);
    println!("Links:     {}", stats.links);

    if *selection == UserSelection::Overall {
        let busy = most_busy_users(&records, &analysis_config);
        println!();
        println!("Most busy users:");
        for share in busy.shares.iter().take(analysis_config.top_users) {
            println!("  {:<24} {:>6.2}%", share.name, share.percent);
        }
    }

    let words = most_common_words(&records, selection, &stop_words, &analysis_config);
    if !words.is_empty() {
        println!();
        println!("Most common words:");
        for (word, count) in &words {
            println!("  {:<24} {:>6}", word, count);
        }
    }

    let emoji = emoji_counts(&records, selection, &UnicodeEmojiClassifier::new(), &analysis_config);
    if !emoji.is_empty() {
        println!();
        println!("Top emoji:");
        for (emoji, count) in emoji.iter().take(args.top) {
            println!("  {}  {}", emoji, count);
        }
    }

    if let Some(ref output) = args.output {
        let table_filter = FilterConfig::new()
            .with_system_author(parser_config.system_author.clone())
            .with_selection(selection.clone());
        let table = apply_filters(records, &table_filter);
        write_to_format(&table, output, format, &parser_config)?;
        println!();
        println!("Wrote {} rows to {} ({})", table.len(), output, format);
    }

    debug!(elapsed_ms = start.elapsed().as_millis(), "done");
    Ok(())
}
