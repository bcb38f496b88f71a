//! The engine's numeric result and its renderings.
//!
//! A [`ScientificNotation`] means `magnitude × 10^exponent`. Integer kinds are
//! exact and always carry `exponent == 0`; the double kind is the nearest
//! approximation the materializer could build within 52 mantissa bits.
//!
//! # Canonical text
//!
//! `Display` is the form the code generator embeds as a literal:
//!
//! | Kind | Shape | Example |
//! |------|-------|---------|
//! | `Int32`, `Int64` | signed decimal | `-10` |
//! | `Double`, proper fraction | `0.` + digits | `0.35` |
//! | `Double`, point inside digits | digits with `.` spliced in | `1.2` |
//! | `Double`, otherwise | normalized scientific | `1.5e+48`, `5e-03` |

use std::fmt;

/// Powers of ten a double holds exactly.
const EXACT_POWERS_OF_TEN: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// Narrowest faithful representation of a numeral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Int32,
    Int64,
    Double,
}

impl NumberKind {
    /// Target IR type for a literal of this kind.
    pub fn ir_type(self) -> &'static str {
        match self {
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Double => "double",
        }
    }

    /// `printf` conversion used when printing a value of this kind.
    pub fn printf_format(self) -> &'static str {
        match self {
            Self::Int32 => "%d",
            Self::Int64 => "%lld",
            Self::Double => "%.16g",
        }
    }

    /// Human-readable name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Double => "f64",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed view of a converted numeral, for constant folding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberValue {
    I32(i32),
    I64(i64),
    F64(f64),
}

/// `magnitude × 10^exponent`, tagged with the representation chosen for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScientificNotation {
    pub kind: NumberKind,
    /// Signed significand; carries the numeral's sign.
    pub magnitude: i64,
    /// Decimal digits in `magnitude` (ignoring sign).
    pub digit_count: u32,
    pub exponent: i32,
}

impl ScientificNotation {
    /// Exact zero.
    pub const ZERO: Self = Self {
        kind: NumberKind::Int32,
        magnitude: 0,
        digit_count: 1,
        exponent: 0,
    };

    pub fn is_integer(&self) -> bool {
        matches!(self.kind, NumberKind::Int32 | NumberKind::Int64)
    }

    /// Native floating-point value, clamped to signed infinity on overflow.
    ///
    /// Correctly rounded. A significand below 2^53 scaled by at most 10^22
    /// is one exact multiply or divide; anything else goes through the
    /// standard decimal-to-binary parser, which costs a string.
    pub fn to_double(&self) -> f64 {
        if let Some(value) = self.exact_double() {
            return value;
        }
        let negative = self.magnitude < 0;
        let value = format!("{}e{}", self.magnitude, self.exponent)
            .parse::<f64>()
            .unwrap_or(f64::NAN);
        if value.is_finite() {
            value
        } else if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "magnitude is checked to fit in 53 bits"
    )]
    fn exact_double(&self) -> Option<f64> {
        if self.magnitude.unsigned_abs() >= 1 << f64::MANTISSA_DIGITS {
            return None;
        }
        let index = usize::try_from(self.exponent.unsigned_abs()).ok()?;
        let power = *EXACT_POWERS_OF_TEN.get(index)?;
        let significand = self.magnitude as f64;
        Some(if self.exponent < 0 {
            significand / power
        } else {
            significand * power
        })
    }

    /// Typed value for the chosen kind.
    pub fn value(&self) -> NumberValue {
        match self.kind {
            NumberKind::Int32 => match i32::try_from(self.magnitude) {
                Ok(v) => NumberValue::I32(v),
                Err(_) => NumberValue::I64(self.magnitude),
            },
            NumberKind::Int64 => NumberValue::I64(self.magnitude),
            NumberKind::Double => NumberValue::F64(self.to_double()),
        }
    }

    /// IR operand form: `<type> <literal>`.
    pub fn to_ir_literal(&self) -> String {
        format!("{} {self}", self.kind.ir_type())
    }

    fn fmt_double(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.magnitude < 0 {
            f.write_str("-")?;
        }
        let digits = self.magnitude.unsigned_abs().to_string();
        let len = i32::try_from(digits.len()).unwrap_or(i32::MAX);
        let exponent = self.exponent;

        if exponent < 0 && exponent.saturating_neg() == len {
            return write!(f, "0.{digits}");
        }
        if exponent < 0 && exponent.saturating_neg() < len {
            let frac_len = usize::try_from(exponent.unsigned_abs()).unwrap_or(digits.len());
            let (whole, frac) = digits.split_at(digits.len() - frac_len);
            return write!(f, "{whole}.{frac}");
        }

        let (lead, rest) = digits.split_at(1);
        let shown = exponent.saturating_add(len - 1);
        f.write_str(lead)?;
        if !rest.is_empty() {
            write!(f, ".{rest}")?;
        }
        let sign = if shown < 0 { '-' } else { '+' };
        write!(f, "e{sign}{:02}", shown.unsigned_abs())
    }
}

impl fmt::Display for ScientificNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NumberKind::Int32 | NumberKind::Int64 => write!(f, "{}", self.magnitude),
            NumberKind::Double => self.fmt_double(f),
        }
    }
}
