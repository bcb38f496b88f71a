//! Property-based tests for numeral conversion.
//!
//! Generates numerals from random values and checks that:
//! 1. Positional digit strings reproduce any `i64` exactly.
//! 2. Values past `i64` degrade to a double with bounded relative error.
//! 3. Scale-word renderings (`萬`, `億`, `兆` groups with `零` for gaps)
//!    reproduce the value.
//! 4. Arbitrary bytes and arbitrary numeral-alphabet strings never panic,
//!    and every accepted numeral renders text that reparses to `to_double`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::uninlined_format_args,
    clippy::cast_precision_loss,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use wen_numeral::{convert, NumberKind};

// -- Renderers --

const DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];
const UNITS: [&str; 4] = ["", "十", "百", "千"];
const GROUPS: [&str; 4] = ["", "萬", "億", "兆"];

/// One character per decimal digit: `2026` → `二〇二六`.
fn positional(value: i128) -> String {
    let mut out = String::new();
    if value < 0 {
        out.push('負');
    }
    for b in value.unsigned_abs().to_string().bytes() {
        out.push(DIGITS[usize::from(b - b'0')]);
    }
    out
}

/// Scale-word form for `value < 10^16`: every non-zero digit is written
/// with its unit, each group closes with its group word, and a single `零`
/// stands for each run of skipped places.
fn with_scale_words(value: u64) -> String {
    if value == 0 {
        return "零".to_owned();
    }
    let places: Vec<(usize, usize)> = value
        .to_string()
        .bytes()
        .rev()
        .enumerate()
        .filter(|&(_, b)| b != b'0')
        .map(|(place, b)| (place, usize::from(b - b'0')))
        .rev()
        .collect();

    let mut out = String::new();
    for (i, &(place, digit)) in places.iter().enumerate() {
        if i > 0 && places[i - 1].0 - place > 1 {
            out.push('零');
        }
        out.push(DIGITS[digit]);
        out.push_str(UNITS[place % 4]);
        let group_ends = places.get(i + 1).is_none_or(|&(next, _)| next / 4 != place / 4);
        if group_ends {
            out.push_str(GROUPS[place / 4]);
        }
    }
    out
}

// -- Strategies --

/// Strings drawn from the numeral alphabet, valid or not.
fn numeral_alphabet_strategy() -> impl Strategy<Value = String> {
    let alphabet = prop::sample::select(vec![
        '負', '·', '又', '有', '零', '〇', '一', '二', '五', '九', '兩', '十', '百', '千', '萬',
        '億', '極', '分', '釐', '微', '漠',
    ]);
    prop::collection::vec(alphabet, 0..16).prop_map(|chars| chars.into_iter().collect())
}

fn relative_error(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    /// Positional digits reproduce every `i64` exactly, in the narrowest kind.
    #[test]
    fn prop_positional_i64_is_exact(value in any::<i64>()) {
        let text = positional(i128::from(value));
        let result = convert(&text).unwrap();
        let expected_kind = if i32::try_from(value).is_ok() {
            NumberKind::Int32
        } else {
            NumberKind::Int64
        };
        prop_assert_eq!(result.kind, expected_kind, "{}", text);
        prop_assert_eq!(result.magnitude, value, "{}", text);
        prop_assert_eq!(result.to_string(), value.to_string());
    }

    /// Magnitudes past `i64` become doubles close to the exact value.
    #[test]
    fn prop_beyond_i64_is_bounded_double(value in 9_223_372_036_854_775_808u64..=u64::MAX) {
        let text = positional(i128::from(value));
        let result = convert(&text).unwrap();
        prop_assert_eq!(result.kind, NumberKind::Double, "{}", text);
        let error = relative_error(result.to_double(), value as f64);
        prop_assert!(error < 1e-14, "{}: relative error {}", text, error);
    }

    /// Scale-word renderings read back as the same integer.
    #[test]
    fn prop_scale_words_reproduce_value(value in 0u64..10_000_000_000_000_000) {
        let text = with_scale_words(value);
        let result = convert(&text).unwrap();
        prop_assert!(result.is_integer(), "{} → {}", text, result);
        prop_assert_eq!(result.to_string(), value.to_string(), "{}", text);
    }

    /// Arbitrary bytes are accepted or rejected, never a panic.
    #[test]
    fn prop_random_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = convert(&bytes);
    }

    /// Whatever the alphabet soup, an accepted numeral renders text whose
    /// standard float parse agrees with `to_double`.
    #[test]
    fn prop_rendered_text_reparses(text in numeral_alphabet_strategy()) {
        if let Ok(result) = convert(&text) {
            let rendered = result.to_string();
            let reparsed: f64 = rendered.parse().unwrap();
            prop_assert_eq!(reparsed, result.to_double(), "{} → {}", text, rendered);
            if result.is_integer() {
                prop_assert_eq!(result.exponent, 0);
            }
        }
    }
}

// -- Renderer sanity --

#[test]
fn renderer_examples() {
    assert_eq!(with_scale_words(10), "一十");
    assert_eq!(with_scale_words(1005), "一千零五");
    assert_eq!(with_scale_words(10_050), "一萬零五十");
    assert_eq!(with_scale_words(100_000_005), "一億零五");
    assert_eq!(with_scale_words(11_000_000), "一千一百萬");
    assert_eq!(with_scale_words(1_000_200_000_000), "一兆零二億");
    assert_eq!(positional(-2026), "負二〇二六");
}
