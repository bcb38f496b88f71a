//! Error types for numeral conversion.
//!
//! Callers see a single failure class, "numeral not parseable". The
//! [`NumeralErrorKind`] inside it records which stage rejected the input so
//! the lexer can phrase a better diagnostic at its own source position.
//!
//! All types derive `Clone, Eq, PartialEq, Hash, Debug` so they can live
//! inside token and query results.

/// A rejected numeral.
///
/// Carries no partial value: conversion either produces a complete
/// [`ScientificNotation`](crate::ScientificNotation) or this error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("numeral not parseable: {kind}")]
pub struct NumeralError {
    /// WHAT went wrong.
    pub kind: NumeralErrorKind,
}

/// Why a numeral was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum NumeralErrorKind {
    // === Decoding ===
    /// The input bytes are not well-formed UTF-8 (overlong, truncated,
    /// surrogate, or out-of-range sequences).
    #[error("invalid UTF-8 after byte {valid_up_to}")]
    InvalidEncoding { valid_up_to: usize },

    // === Tokenizing ===
    /// A character outside the numeral table.
    #[error("unknown character {found:?} at position {index}")]
    UnknownCharacter { found: char, index: usize },

    // === Parsing ===
    /// `負` anywhere but first.
    #[error("sign must be the first character")]
    MisplacedSign,
    /// `又又`, `有有`, `又有`.
    #[error("consecutive delimiters")]
    ConsecutiveDelimiters,
    /// A multiplier with nothing left of it to scale (`分`, `微分`, `·分`).
    #[error("multiplier has nothing to scale")]
    DanglingMultiplier,
    /// A zero next to a scale word that cannot be given a place value.
    #[error("zero cannot be placed before this scale word")]
    MisplacedZero,
    /// Place value jumps without a scale word to explain the jump.
    #[error("missing place value between 10^{expected} and 10^{found}")]
    PlaceValueGap { expected: i32, found: i32 },
    /// Nothing in the input produced a digit (empty input, a bare `負`).
    #[error("no digits")]
    NoDigits,
}

impl From<NumeralErrorKind> for NumeralError {
    fn from(kind: NumeralErrorKind) -> Self {
        Self { kind }
    }
}
