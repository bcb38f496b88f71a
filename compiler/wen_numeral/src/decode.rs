//! Byte string to codepoint decoding.
//!
//! Numerals reach the engine as raw bytes cut out of the source by the
//! lexer. Anything that is not well-formed UTF-8 is rejected before
//! tokenizing: overlong forms, truncated sequences, stray continuation
//! bytes, surrogates (U+D800..=U+DFFF), and values above U+10FFFF.

use crate::error::NumeralErrorKind;

/// Decode `bytes` into Unicode scalar values.
///
/// The returned buffer is owned by the caller for the duration of one
/// conversion and dropped once tokenized.
pub(crate) fn decode(bytes: &[u8]) -> Result<Vec<char>, NumeralErrorKind> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.chars().collect()),
        Err(err) => Err(NumeralErrorKind::InvalidEncoding {
            valid_up_to: err.valid_up_to(),
        }),
    }
}
