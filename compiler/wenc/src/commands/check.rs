//! The `check` command: verify numerals parse, without printing values.

use wen_numeral::convert;

/// Diagnostic line for a numeral that fails to convert, `None` if it parses.
pub fn check_numeral(numeral: &str) -> Option<String> {
    convert(numeral)
        .err()
        .map(|err| format!("error: {numeral}: {err}"))
}

/// Check every numeral, printing one line per failure.
///
/// Returns the number of failures.
pub fn check_numerals(numerals: &[String]) -> usize {
    let mut failures = 0;
    for numeral in numerals {
        if let Some(line) = check_numeral(numeral) {
            eprintln!("{line}");
            failures += 1;
        }
    }
    if failures == 0 {
        println!("ok: {} numeral(s)", numerals.len());
    }
    failures
}

#[cfg(test)]
mod tests;
