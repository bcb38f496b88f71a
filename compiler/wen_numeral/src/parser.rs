//! Backward-scanning numeral parser.
//!
//! A scale word multiplies the digits written *before* it, so a digit's place
//! value is only known once the scale words to its right are. The parser
//! therefore walks the token stream from `End` back to `Begin`, placing digits
//! from the lowest place value upward.
//!
//! # Per-token phases
//!
//! ```text
//! token → disambiguate → seed cursor → update scales → fill gap → place
//! ```
//!
//! - **disambiguate**: settle a pending bare scale word (`十` alone means
//!   `一十`) or a pending zero before one, now that the token left of it is
//!   known.
//! - **update scales**: push, absorb or reset the [`ScaleStack`]; yields the
//!   place value the token wants the next digit at.
//! - **fill gap**: insert zeros up to that place value where a structural
//!   token allows it; reject any other skip.
//! - **place**: append the digit (if any) and pick the next [`DigitState`].

use tracing::trace;

use crate::error::NumeralErrorKind;
use crate::scale_stack::{ScaleStack, ScaleState};
use crate::token::NumeralToken;

/// What kind of token was handled last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DigitState {
    /// `<End>`, `·`.
    Start,
    /// A fractional scale (`微`), or an integer scale confirmed by its digit.
    Scale,
    /// A bare integer scale: `…十` may still turn out to be `一十`.
    AmbiguousScale,
    /// A digit.
    Digit,
    /// A digit with a zero somewhere to its right: `一…零`, `零一…零`.
    DigitAfterZero,
    /// `又` / `有`.
    AfterDelimiter,
    /// A zero: `零<End>`, `零·`, `零又`, `零微`, `零一`.
    AfterZero,
    /// `負`.
    AfterSign,
    /// A zero before a bare scale: `零十` may be `零一十`, `零十` or `〇十`.
    AmbiguousZeroScale,
}

/// Digits placed so far, lowest place value first.
///
/// Invariant: `next_exponent` is the place value of the next digit pushed.
#[derive(Clone, Debug, Default)]
struct PlacedDigits {
    negative: bool,
    next_exponent: i32,
    digits: Vec<u8>,
}

impl PlacedDigits {
    fn push(&mut self, digit: u8) {
        self.digits.push(digit);
        self.next_exponent = self.next_exponent.saturating_add(1);
    }

    fn fill_zeros_to(&mut self, exponent: i32) {
        while self.next_exponent < exponent {
            self.push(0);
        }
    }
}

/// Output of a successful parse: `digits × 10^exponent`, digits lowest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ParsedNumeral {
    pub negative: bool,
    /// Place value of `digits[0]`.
    pub exponent: i32,
    pub digits: Vec<u8>,
}

/// Parse a `Begin … End` token stream.
pub(crate) fn parse(tokens: &[NumeralToken]) -> Result<ParsedNumeral, NumeralErrorKind> {
    let mut parser = NumeralParser::new();
    // `End` is last; everything before it, `Begin` included, is scanned.
    for (index, &token) in tokens.iter().enumerate().rev().skip(1) {
        parser.step(index, token)?;
    }
    parser.finish()
}

struct NumeralParser {
    state: DigitState,
    scales: ScaleStack,
    result: PlacedDigits,
}

impl NumeralParser {
    fn new() -> Self {
        Self {
            state: DigitState::Start,
            scales: ScaleStack::new(),
            result: PlacedDigits {
                digits: Vec::with_capacity(32),
                ..PlacedDigits::default()
            },
        }
    }

    fn step(&mut self, index: usize, token: NumeralToken) -> Result<(), NumeralErrorKind> {
        // Index 0 is `Begin`, so a sign may only sit at index 1.
        if matches!(token, NumeralToken::Sign { .. }) && index != 1 {
            return Err(NumeralErrorKind::MisplacedSign);
        }

        match self.state {
            DigitState::AmbiguousScale => self.resolve_bare_scale(token),
            DigitState::AmbiguousZeroScale => self.resolve_zero_scale(token)?,
            _ => {}
        }

        // The first `·` or fractional scale seen fixes the baseline exponent.
        if self.scales.state() == ScaleState::Empty {
            match token {
                NumeralToken::Decimal => self.result.next_exponent = 0,
                NumeralToken::FractionalScale(exp) => self.result.next_exponent = exp,
                _ => {}
            }
        }

        let current = self.update_scales(token)?;
        self.fill_gap(token, current)?;
        self.place(token)?;

        trace!(
            ?token,
            state = ?self.state,
            next_exponent = self.result.next_exponent,
            scale_total = self.scales.total(),
            "numeral step"
        );
        Ok(())
    }

    /// Settle `AmbiguousScale` given the token to its left.
    fn resolve_bare_scale(&mut self, token: NumeralToken) {
        self.state = match token {
            // <Begin>十, 負十, 又十, ·十, 分十絲, 零十: implicit 一.
            NumeralToken::Begin
            | NumeralToken::End
            | NumeralToken::Sign { .. }
            | NumeralToken::Delimiter
            | NumeralToken::Decimal
            | NumeralToken::FractionalScale(_)
            | NumeralToken::Zero => {
                self.result.push(1);
                DigitState::Digit
            }
            // 一十: the digit scales the word itself.
            NumeralToken::Digit(_) => DigitState::Scale,
            // 百十 → 百一十; 十萬 keeps 十 folded under 萬.
            NumeralToken::IntegerScale(exp) => {
                if self.scales.top().is_none_or(|top| top < exp) {
                    self.result.push(1);
                    DigitState::Digit
                } else {
                    DigitState::Scale
                }
            }
        };
    }

    /// Settle `AmbiguousZeroScale` given the token to its left.
    fn resolve_zero_scale(&mut self, token: NumeralToken) -> Result<(), NumeralErrorKind> {
        let exp = match token {
            // <Begin>零十, 負零十, 一零十, 又零十, 零零十: the zero is 〇.
            NumeralToken::Begin
            | NumeralToken::End
            | NumeralToken::Sign { .. }
            | NumeralToken::Digit(_)
            | NumeralToken::Delimiter
            | NumeralToken::Zero => {
                self.result.push(0);
                self.state = DigitState::DigitAfterZero;
                return Ok(());
            }
            NumeralToken::Decimal => 0,
            NumeralToken::FractionalScale(exp) | NumeralToken::IntegerScale(exp) => exp,
        };

        let reach = self.scales.total().saturating_add(1);
        self.state = if reach < exp {
            // 千零十: the zero stands for 一〇.
            self.result.push(1);
            self.result.push(0);
            DigitState::AfterZero
        } else if reach == exp {
            self.result.push(0);
            DigitState::DigitAfterZero
        } else if matches!(token, NumeralToken::IntegerScale(_)) {
            self.result.push(0);
            DigitState::AfterZero
        } else {
            return Err(NumeralErrorKind::MisplacedZero);
        };
        Ok(())
    }

    /// Update the scale stack; returns the place value `token` asks for.
    fn update_scales(&mut self, token: NumeralToken) -> Result<i32, NumeralErrorKind> {
        match token {
            NumeralToken::Begin | NumeralToken::End | NumeralToken::Sign { .. } => {
                // <Begin>微: nothing left to scale.
                if self.state == DigitState::Scale {
                    return Err(NumeralErrorKind::DanglingMultiplier);
                }
                self.scales.mark_done();
                Ok(self.scales.total())
            }
            NumeralToken::Digit(_) | NumeralToken::Zero => {
                if self.state == DigitState::AfterDelimiter {
                    // 一又…: the delimiter acts as a decimal point.
                    self.scales.clear();
                    self.scales.push(0);
                    Ok(self.scales.total())
                } else {
                    Ok(self.result.next_exponent)
                }
            }
            NumeralToken::Delimiter => {
                if self.state == DigitState::AfterDelimiter {
                    return Err(NumeralErrorKind::ConsecutiveDelimiters);
                }
                Ok(self.result.next_exponent)
            }
            NumeralToken::Decimal | NumeralToken::FractionalScale(_) => {
                // 微分, ·分: a fractional place with nothing in it.
                if self.state == DigitState::Scale {
                    return Err(NumeralErrorKind::DanglingMultiplier);
                }
                let exp = match token {
                    NumeralToken::FractionalScale(exp) => exp,
                    _ => 0,
                };
                self.scales.clear();
                self.scales.push(exp);
                Ok(self.scales.total())
            }
            NumeralToken::IntegerScale(exp) => {
                if self.state == DigitState::AfterDelimiter {
                    if self.scales.state() == ScaleState::Fractional {
                        self.scales.clear();
                    } else {
                        self.scales.pop_below(exp);
                    }
                } else {
                    self.scales.pop_integers_below(exp);
                }
                self.scales.push(exp);
                Ok(self.scales.total())
            }
        }
    }

    /// Close the gap between the digit cursor and `current` with zeros.
    fn fill_gap(&mut self, token: NumeralToken, current: i32) -> Result<(), NumeralErrorKind> {
        let expected = self.result.next_exponent;
        if current <= expected {
            return Ok(());
        }

        let structural = matches!(
            token,
            NumeralToken::Begin
                | NumeralToken::End
                | NumeralToken::Sign { .. }
                | NumeralToken::IntegerScale(_)
                | NumeralToken::FractionalScale(_)
                | NumeralToken::Decimal
        );
        let after_break = matches!(
            self.state,
            DigitState::AfterDelimiter | DigitState::AfterZero
        );
        if !structural && !after_break {
            return Err(NumeralErrorKind::PlaceValueGap {
                expected,
                found: current,
            });
        }

        if self.scales.state() != ScaleState::Done {
            self.result.fill_zeros_to(current);
        }
        Ok(())
    }

    /// Append the token's digit, if any, and move to the next state.
    fn place(&mut self, token: NumeralToken) -> Result<(), NumeralErrorKind> {
        self.state = match token {
            NumeralToken::Begin | NumeralToken::End => self.state,
            NumeralToken::Sign { negative } => {
                self.result.negative = negative;
                DigitState::AfterSign
            }
            NumeralToken::Digit(digit) => {
                self.result.push(digit);
                match self.state {
                    DigitState::AfterZero | DigitState::DigitAfterZero => {
                        DigitState::DigitAfterZero
                    }
                    _ => DigitState::Digit,
                }
            }
            NumeralToken::Decimal => DigitState::Start,
            NumeralToken::IntegerScale(_) => DigitState::AmbiguousScale,
            NumeralToken::FractionalScale(_) => DigitState::Scale,
            NumeralToken::Delimiter => DigitState::AfterDelimiter,
            NumeralToken::Zero => match self.state {
                DigitState::Start
                | DigitState::Scale
                | DigitState::Digit
                | DigitState::DigitAfterZero
                | DigitState::AfterDelimiter
                | DigitState::AfterZero => {
                    self.result.push(0);
                    DigitState::AfterZero
                }
                DigitState::AmbiguousScale => DigitState::AmbiguousZeroScale,
                DigitState::AfterSign | DigitState::AmbiguousZeroScale => {
                    return Err(NumeralErrorKind::MisplacedZero);
                }
            },
        };
        Ok(())
    }

    fn finish(self) -> Result<ParsedNumeral, NumeralErrorKind> {
        let PlacedDigits {
            negative,
            next_exponent,
            digits,
        } = self.result;
        if digits.is_empty() {
            return Err(NumeralErrorKind::NoDigits);
        }
        let count = i32::try_from(digits.len()).unwrap_or(i32::MAX);
        Ok(ParsedNumeral {
            negative,
            exponent: next_exponent.saturating_sub(count),
            digits,
        })
    }
}
