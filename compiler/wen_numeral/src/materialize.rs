//! Parsed digits to [`ScientificNotation`].
//!
//! Picks the narrowest faithful representation: `Int32`, then `Int64`, then
//! `Double`. Every multiply-by-ten is checked, so oversized numerals degrade
//! to an approximate double instead of wrapping.

use crate::notation::{NumberKind, ScientificNotation};
use crate::parser::ParsedNumeral;

/// Largest significand a double holds exactly with room to spare: `2^52 - 1`.
const MAX_EXACT_SIGNIFICAND: u64 = (1 << (f64::MANTISSA_DIGITS - 1)) - 1;

/// A value below `10^-324` rounds to zero: the smallest subnormal is
/// about `4.9e-324`.
const UNDERFLOW_10_EXP: i32 = -324;

/// Materialize a parse result.
pub(crate) fn materialize(parsed: &ParsedNumeral) -> ScientificNotation {
    let mut exponent = parsed.exponent;

    // Zeros at the low end only raise the exponent; zeros at the high end
    // carry nothing.
    let low_zeros = parsed.digits.iter().take_while(|&&d| d == 0).count();
    let significant = &parsed.digits[low_zeros..];
    let high_zeros = significant.iter().rev().take_while(|&&d| d == 0).count();
    let significant = &significant[..significant.len() - high_zeros];
    if significant.is_empty() {
        return ScientificNotation::ZERO;
    }
    exponent = exponent.saturating_add(to_exponent(low_zeros));

    let (magnitude, dropped) = accumulate(significant);
    exponent = exponent.saturating_add(to_exponent(dropped));

    if let Some(exact) = exact_integer(magnitude, exponent, parsed.negative) {
        return exact;
    }
    approximate_double(magnitude, exponent, parsed.negative)
}

/// Fold digits (lowest first) into a `u64`, most significant first.
///
/// Stops before the first step that would overflow; returns the value and
/// how many low-order digits were left out.
fn accumulate(digits: &[u8]) -> (u64, usize) {
    let mut magnitude: u64 = 0;
    for (taken, &digit) in digits.iter().rev().enumerate() {
        match magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(u64::from(digit)))
        {
            Some(next) => magnitude = next,
            None => return (magnitude, digits.len() - taken),
        }
    }
    (magnitude, 0)
}

/// `magnitude × 10^exponent` as an exact `Int32`/`Int64`, if it fits.
///
/// A negative value gets one extra unit of headroom (`-2^31`, `-2^63`).
fn exact_integer(magnitude: u64, exponent: i32, negative: bool) -> Option<ScientificNotation> {
    let scale = u32::try_from(exponent).ok()?;
    let scaled = 10u64
        .checked_pow(scale)
        .and_then(|p| magnitude.checked_mul(p))?;

    let (limit32, limit64) = if negative {
        (u64::from(i32::MIN.unsigned_abs()), i64::MIN.unsigned_abs())
    } else {
        (u64::from(i32::MAX.unsigned_abs()), i64::MAX.unsigned_abs())
    };
    let kind = if scaled <= limit32 {
        NumberKind::Int32
    } else if scaled <= limit64 {
        NumberKind::Int64
    } else {
        return None;
    };

    let signed = if negative {
        0i64.checked_sub_unsigned(scaled)?
    } else {
        i64::try_from(scaled).ok()?
    };
    Some(ScientificNotation {
        kind,
        magnitude: signed,
        digit_count: decimal_len(scaled),
        exponent: 0,
    })
}

/// Best-effort double: shrink the significand into 52 bits.
///
/// Small exponents are left alone: `to_double` reaches subnormals exactly.
/// Only a value wholly below [`UNDERFLOW_10_EXP`] collapses to zero.
fn approximate_double(mut magnitude: u64, mut exponent: i32, negative: bool) -> ScientificNotation {
    while magnitude > MAX_EXACT_SIGNIFICAND {
        magnitude /= 10;
        exponent = exponent.saturating_add(1);
    }
    let order = exponent.saturating_add_unsigned(decimal_len(magnitude));
    if magnitude == 0 || order <= UNDERFLOW_10_EXP {
        return ScientificNotation {
            kind: NumberKind::Double,
            magnitude: 0,
            digit_count: 1,
            exponent: 0,
        };
    }

    // Below 2^52, so the conversion is lossless.
    let unsigned = i64::try_from(magnitude).unwrap_or(i64::MAX);
    ScientificNotation {
        kind: NumberKind::Double,
        magnitude: if negative { -unsigned } else { unsigned },
        digit_count: decimal_len(magnitude),
        exponent,
    }
}

fn decimal_len(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

fn to_exponent(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}
