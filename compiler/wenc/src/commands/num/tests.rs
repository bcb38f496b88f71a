#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

// === Configuration layers ===

#[test]
fn default_format_is_text() {
    assert_eq!(NumConfig::default().format, OutputFormat::Text);
    assert_eq!(NumConfig::with_env_format(None).format, OutputFormat::Text);
}

#[test]
fn env_value_sets_format() {
    assert_eq!(NumConfig::with_env_format(Some("ir")).format, OutputFormat::Ir);
    assert_eq!(
        NumConfig::with_env_format(Some("double")).format,
        OutputFormat::Double
    );
}

#[test]
fn unknown_env_value_is_ignored() {
    assert_eq!(
        NumConfig::with_env_format(Some("hex")).format,
        OutputFormat::Text
    );
}

#[test]
fn flag_overrides_env() {
    let mut config = NumConfig::with_env_format(Some("double"));
    let numerals = parse_num_args(&args(&["十", "--format=ir", "百"]), &mut config);
    assert_eq!(numerals, Ok(args(&["十", "百"])));
    assert_eq!(config.format, OutputFormat::Ir);
}

#[test]
fn bad_flags_are_usage_errors() {
    let mut config = NumConfig::default();
    assert_eq!(
        parse_num_args(&args(&["--format=hex"]), &mut config),
        Err("unknown format 'hex', options: text, ir, double".to_string())
    );
    assert_eq!(
        parse_num_args(&args(&["--verbose"]), &mut config),
        Err("unknown option '--verbose'".to_string())
    );
}

// === Input ===

#[test]
fn stdin_lines_skip_blanks() {
    let input = "十\n\n  一·二  \n\t\n零\n";
    let numerals = read_numerals(std::io::Cursor::new(input)).unwrap();
    assert_eq!(numerals, args(&["十", "一·二", "零"]));
}

// === Rendering ===

#[test]
fn render_formats() {
    let ten = convert("十").unwrap();
    assert_eq!(render(&ten, OutputFormat::Text), "NUMBER 10 (i32)");
    assert_eq!(render(&ten, OutputFormat::Ir), "i32 10");
    assert_eq!(render(&ten, OutputFormat::Double), "10");

    let fraction = convert("負一·五").unwrap();
    assert_eq!(render(&fraction, OutputFormat::Text), "NUMBER -1.5 (f64)");
    assert_eq!(render(&fraction, OutputFormat::Ir), "double -1.5");
    assert_eq!(render(&fraction, OutputFormat::Double), "-1.5");
}

#[test]
fn run_reports_failure() {
    let config = NumConfig::default();
    assert!(run_num(&args(&["十", "零"]), &config));
    assert!(!run_num(&args(&["十", "一又又二"]), &config));
}
