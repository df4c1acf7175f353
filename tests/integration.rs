//! Integration tests: full transcripts through the parser, filters,
//! statistics and writers.

use chatlens::analysis::{
    RegexLinkExtractor, StopWords, UnicodeEmojiClassifier, activity_heatmap, daily_timeline,
    emoji_counts, fetch_stats, monthly_timeline, most_busy_users, most_common_words,
    week_activity_map, word_cloud_text,
};
use chatlens::core::table::{COLUMNS, to_rows};
use chatlens::prelude::*;
use chrono::NaiveDate;

const GROUP_CHAT: &str = "\
12/03/2024, 9:15 pm - Messages and calls are end-to-end encrypted. No one outside of this chat can read them.
12/03/2024, 9:15 pm - Alice created group \"Weekend Trip\"
12/03/2024, 9:16 pm - Alice added Bob
12/03/2024, 9:17 pm - Alice: Hey! Plans for Saturday? 🎉
12/03/2024, 9:18 pm - Bob: Beach, obviously. https://maps.example.com/beach
12/03/2024, 9:18 pm - Bob: <Media omitted>
13/03/2024, 12:05 am - Carol: late reply: count me in 😂😂
13/03/2024, 7:45 am - Alice: Great, the beach it is
13/03/2024, 7:46 am - Alice: Bring snacks
and sunscreen
14/03/24, 11:59 pm - Bob: deal 👍";

fn parse() -> Vec<MessageRecord> {
    TranscriptParser::new().parse_str(GROUP_CHAT)
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_spec_examples() {
    let parser = TranscriptParser::new();

    let records = parser.parse_str("1/1/24, 10:00 am - Alice: Hello");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].author(), &Author::user("Alice"));
    assert_eq!(records[0].text(), "Hello");
    let ts = records[0].timestamp().unwrap();
    assert_eq!(ts.hour(), 10);
    assert_eq!(ts.period().to_string(), "10-11");

    let records = parser.parse_str("1/1/24, 11:00 pm - Messages to this group are now secured");
    assert_eq!(records[0].author(), &Author::SystemNotice);
    assert_eq!(records[0].text(), "Messages to this group are now secured");
    assert_eq!(records[0].timestamp().unwrap().period().to_string(), "23-00");

    assert!(parser.parse_str("no timestamps anywhere").is_empty());

    let records = parser.parse_str("1/1/24, 9:05 am - Alice: short year");
    assert_eq!(records[0].timestamp().unwrap().year(), 2024);
}

#[test]
fn test_group_chat_shape() {
    let records = parse();
    assert_eq!(records.len(), 10);

    let system: Vec<_> = records.iter().filter(|r| r.is_system()).collect();
    assert_eq!(system.len(), 3);
    assert_eq!(system[2].text(), "Alice added Bob");

    assert!(records.iter().all(MessageRecord::is_dated));
}

#[test]
fn test_colon_inside_text_is_kept() {
    let records = parse();
    assert_eq!(records[6].author(), &Author::user("Carol"));
    assert_eq!(records[6].text(), "late reply: count me in 😂😂");
}

#[test]
fn test_multiline_message_continues_until_next_timestamp() {
    let records = parse();
    assert_eq!(records[8].text(), "Bring snacks\nand sunscreen");
}

#[test]
fn test_mixed_year_widths() {
    let records = parse();
    let last = records.last().unwrap().timestamp().unwrap();
    assert_eq!(last.only_date(), NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
    assert_eq!(last.period().to_string(), "23-00");
}

#[test]
fn test_narrow_no_break_space_before_meridiem() {
    let records = TranscriptParser::new().parse_str("5/6/2023, 4:20\u{202f}pm - Dan: hi");
    let ts = records[0].timestamp().unwrap();
    assert_eq!(ts.hour(), 16);
    assert_eq!(ts.month_name(), "June");
}

// ============================================================================
// Filtering and statistics
// ============================================================================

#[test]
fn test_stats_overall_and_per_user() {
    let records = parse();
    let links = RegexLinkExtractor::new();
    let config = AnalysisConfig::default();

    let overall = fetch_stats(&records, &UserSelection::Overall, &links, &config);
    assert_eq!(overall.messages, 10);
    assert_eq!(overall.media, 1);
    assert_eq!(overall.links, 1);

    let bob = fetch_stats(&records, &UserSelection::user("Bob"), &links, &config);
    assert_eq!(bob.messages, 3);
    assert_eq!(bob.media, 1);
    assert_eq!(bob.links, 1);
}

#[test]
fn test_busy_users_include_system_label() {
    let busy = most_busy_users(&parse(), &AnalysisConfig::default());

    // three-way tie at 3, broken by first appearance
    assert_eq!(busy.top[0], ("group_notification".to_string(), 3));
    assert_eq!(busy.top[1], ("Alice".to_string(), 3));
    assert_eq!(busy.top[2], ("Bob".to_string(), 3));
    assert_eq!(busy.top[3], ("Carol".to_string(), 1));
    let total: f64 = busy.shares.iter().map(|s| s.percent).sum();
    assert!((total - 100.0).abs() < 0.05);
}

#[test]
fn test_words_and_cloud() {
    let records = parse();
    let stop_words = StopWords::from_text("the it is me in for");
    let config = AnalysisConfig::default();

    let words = most_common_words(&records, &UserSelection::Overall, &stop_words, &config);
    assert_eq!(words[0], ("beach".to_string(), 2));
    assert!(words.iter().all(|(w, _)| !stop_words.contains(w)));
    assert!(words.iter().all(|(w, _)| w != "omitted"));

    let cloud = word_cloud_text(&records, &UserSelection::user("Alice"), &stop_words, &config);
    assert!(cloud.starts_with("Hey! Plans"));
    assert!(!cloud.contains(" the "));
}

#[test]
fn test_emoji() {
    let emoji = emoji_counts(
        &parse(),
        &UserSelection::Overall,
        &UnicodeEmojiClassifier::new(),
        &AnalysisConfig::default(),
    );
    assert_eq!(emoji[0], ("😂".to_string(), 2));
    assert_eq!(emoji.len(), 3);
}

#[test]
fn test_timelines_and_heatmap() {
    let records = parse();
    let config = AnalysisConfig::default();

    let monthly = monthly_timeline(&records, &UserSelection::Overall, &config);
    assert_eq!(monthly.len(), 1);
    assert_eq!(monthly[0].label, "March-2024");
    assert_eq!(monthly[0].count, 10);

    let daily = daily_timeline(&records, &UserSelection::Overall, &config);
    assert_eq!(daily.len(), 3);
    assert_eq!(daily[0].1, 6);

    // 12 March 2024 is a Tuesday
    let week = week_activity_map(&records, &UserSelection::Overall, &config);
    assert_eq!(week[0], ("Tuesday".to_string(), 6));

    let heatmap = activity_heatmap(&records, &UserSelection::Overall, &config);
    assert_eq!(heatmap.get("Tuesday", "21-22"), Some(6));
    assert_eq!(heatmap.get("Wednesday", "00-1"), Some(1));
    assert_eq!(heatmap.get("Thursday", "23-00"), Some(1));
    assert_eq!(heatmap.counts.iter().flatten().sum::<usize>(), 10);
}

#[test]
fn test_date_filter_then_stats() {
    let filter = FilterConfig::new().with_date_from("2024-03-13").unwrap();
    let records = apply_filters(parse(), &filter);

    assert_eq!(records.len(), 4);
    let busy = most_busy_users(&records, &AnalysisConfig::default());
    assert_eq!(busy.top[0], ("Alice".to_string(), 2));
}

// ============================================================================
// Tabular output
// ============================================================================

#[test]
fn test_rows_follow_record_order() {
    let records = parse();
    let rows = to_rows(&records, &ParserConfig::default());

    assert_eq!(rows.len(), records.len());
    assert_eq!(rows[0].user, "group_notification");
    assert_eq!(rows[3].user, "Alice");
    assert_eq!(rows[6].period.as_deref(), Some("00-1"));
    assert_eq!(rows[6].day_name.as_deref(), Some("Wednesday"));
    assert_eq!(COLUMNS.len(), rows[0].fields().len());
}

#[cfg(feature = "csv-output")]
#[test]
fn test_csv_roundtrip_through_csv_reader() {
    let records = parse();
    let csv = to_csv(&records, &ParserConfig::default()).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, COLUMNS);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(&rows[8][2], "Bring snacks\nand sunscreen");
}

#[cfg(feature = "json-output")]
#[test]
fn test_jsonl_lines_match_records() {
    let records = parse();
    let jsonl = to_jsonl(&records, &ParserConfig::default()).unwrap();

    let lines: Vec<serde_json::Value> = jsonl
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[4]["user"], "Bob");
    assert_eq!(lines[4]["year"], 2024);
}
