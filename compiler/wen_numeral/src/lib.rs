//! Classical-Chinese numeral literals for the wen compiler.
//!
//! Turns numeral text such as `負三萬五千`, `一·二` or `三分五釐` into an exact
//! integer or a best-effort double, and renders the result back as canonical
//! decimal text for the code generator.
//!
//! # Architecture
//!
//! ```text
//! bytes → decode → tokenize → parse (backward) → materialize → ScientificNotation
//!                                                                 ├─ Display  (literal text)
//!                                                                 └─ to_double
//! ```
//!
//! Every stage owns its scratch buffers; an error at any stage drops them and
//! returns [`NumeralError`]. Calls share no state, so conversion is reentrant
//! and safe to run from many threads at once.
//!
//! # Usage
//!
//! ```
//! use wen_numeral::{convert, NumberKind};
//!
//! let ten = convert("十").unwrap();
//! assert_eq!(ten.kind, NumberKind::Int32);
//! assert_eq!(ten.to_string(), "10");
//!
//! let fraction = convert("一·二").unwrap();
//! assert_eq!(fraction.kind, NumberKind::Double);
//! assert_eq!(fraction.to_double(), 1.2);
//!
//! assert!(convert("一又又二").is_err());
//! ```

mod decode;
mod error;
mod materialize;
mod notation;
mod parser;
mod scale_stack;
mod token;

pub use error::{NumeralError, NumeralErrorKind};
pub use notation::{NumberKind, NumberValue, ScientificNotation};

use tracing::debug;

/// Convert numeral text (UTF-8 bytes) into its numeric value.
///
/// Fails with a single error class, "numeral not parseable", whose kind
/// names the cause: bad encoding, an unknown character, or a grammar
/// violation. No partial value is ever returned.
#[tracing::instrument(level = "trace", skip_all)]
pub fn convert(text: impl AsRef<[u8]>) -> Result<ScientificNotation, NumeralError> {
    let bytes = text.as_ref();
    let result = convert_bytes(bytes);
    match &result {
        Ok(value) => debug!(kind = %value.kind, value = %value, "numeral accepted"),
        Err(err) => debug!(
            input = %String::from_utf8_lossy(bytes),
            cause = %err.kind,
            "numeral rejected"
        ),
    }
    result
}

fn convert_bytes(bytes: &[u8]) -> Result<ScientificNotation, NumeralError> {
    let code = decode::decode(bytes)?;
    let tokens = token::tokenize(&code)?;
    drop(code);
    let parsed = parser::parse(&tokens)?;
    Ok(materialize::materialize(&parsed))
}
