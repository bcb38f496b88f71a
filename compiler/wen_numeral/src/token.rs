//! Numeral tokens and the codepoint table.
//!
//! Every character of a numeral maps to exactly one token. Financial digits
//! (`壹貳參…`) and financial units (`拾佰仟`) alias the ordinary ones, and
//! `兩` is a second spelling of two. The table is closed: one character
//! outside it fails the whole numeral.
//!
//! # Sentinels
//!
//! [`tokenize`] wraps the stream as `Begin … End` so the parser can look at
//! the token before the current one without bounds checks.

use crate::error::NumeralErrorKind;

/// A single numeral token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumeralToken {
    /// Synthetic start-of-numeral marker.
    Begin,
    /// Synthetic end-of-numeral marker.
    End,
    /// `負`.
    Sign { negative: bool },
    /// `〇一二…九`, `兩`, and the financial digits. Value 0-9.
    Digit(u8),
    /// `零`: a zero that may stand for a whole run of empty places.
    Zero,
    /// `·`: the decimal point, exponent 0.
    Decimal,
    /// `十百千萬億…極`: multiplies what precedes it by `10^exp`, `exp >= 1`.
    IntegerScale(i32),
    /// `分釐毫…漠`: fractional place `10^exp`, `exp <= -1`.
    FractionalScale(i32),
    /// `又` / `有`: separates the parts of a mixed number.
    Delimiter,
}

/// Look up the token for one character.
///
/// Returns `None` for characters outside the numeral table.
#[inline]
pub(crate) fn lookup(ch: char) -> Option<NumeralToken> {
    use NumeralToken::{Decimal, Delimiter, Digit, FractionalScale, IntegerScale, Sign, Zero};

    let token = match ch {
        '負' => Sign { negative: true },
        '·' => Decimal,
        '又' | '有' => Delimiter,
        '零' => Zero,

        '〇' => Digit(0),
        '一' | '壹' => Digit(1),
        '二' | '兩' | '貳' => Digit(2),
        '三' | '參' => Digit(3),
        '四' | '肆' => Digit(4),
        '五' | '伍' => Digit(5),
        '六' | '陸' => Digit(6),
        '七' | '柒' => Digit(7),
        '八' | '捌' => Digit(8),
        '九' | '玖' => Digit(9),

        '十' | '拾' => IntegerScale(1),
        '百' | '佰' => IntegerScale(2),
        '千' | '仟' => IntegerScale(3),
        '萬' => IntegerScale(4),
        '億' => IntegerScale(8),
        '兆' => IntegerScale(12),
        '京' => IntegerScale(16),
        '垓' => IntegerScale(20),
        '秭' => IntegerScale(24),
        '穰' => IntegerScale(28),
        '溝' => IntegerScale(32),
        '澗' => IntegerScale(36),
        '正' => IntegerScale(40),
        '載' => IntegerScale(44),
        '極' => IntegerScale(48),

        '分' => FractionalScale(-1),
        '釐' => FractionalScale(-2),
        '毫' => FractionalScale(-3),
        '絲' => FractionalScale(-4),
        '忽' => FractionalScale(-5),
        '微' => FractionalScale(-6),
        '纖' => FractionalScale(-7),
        '沙' => FractionalScale(-8),
        '塵' => FractionalScale(-9),
        '埃' => FractionalScale(-10),
        '渺' => FractionalScale(-11),
        '漠' => FractionalScale(-12),

        _ => return None,
    };
    Some(token)
}

/// Tokenize decoded codepoints into `Begin, tokens…, End`.
///
/// Fails on the first character outside the table; no partial stream is
/// returned.
pub(crate) fn tokenize(code: &[char]) -> Result<Vec<NumeralToken>, NumeralErrorKind> {
    let mut tokens = Vec::with_capacity(code.len() + 2);
    tokens.push(NumeralToken::Begin);
    for (index, &ch) in code.iter().enumerate() {
        let token = lookup(ch).ok_or(NumeralErrorKind::UnknownCharacter { found: ch, index })?;
        tokens.push(token);
    }
    tokens.push(NumeralToken::End);
    Ok(tokens)
}
