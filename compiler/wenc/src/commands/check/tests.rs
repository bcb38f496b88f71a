use super::*;
use pretty_assertions::assert_eq;

#[test]
fn valid_numeral_has_no_diagnostic() {
    assert_eq!(check_numeral("一千零五"), None);
}

#[test]
fn invalid_numeral_names_the_cause() {
    assert_eq!(
        check_numeral("一又又二").as_deref(),
        Some("error: 一又又二: numeral not parseable: consecutive delimiters")
    );
    assert_eq!(
        check_numeral("一x").as_deref(),
        Some("error: 一x: numeral not parseable: unknown character 'x' at position 1")
    );
}

#[test]
fn failures_are_counted() {
    let numerals = vec!["十".to_string(), "分".to_string(), "負".to_string()];
    assert_eq!(check_numerals(&numerals), 2);
    assert_eq!(check_numerals(&numerals[..1]), 0);
}
