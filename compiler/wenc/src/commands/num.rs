//! The `num` command: convert numerals and print how they were read.

use std::io::BufRead;

use tracing::debug;
use wen_numeral::{convert, ScientificNotation};

/// Environment variable holding the default output format.
pub const FORMAT_ENV: &str = "WENC_NUM_FORMAT";

/// How `wenc num` prints each converted numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `NUMBER <text> (<kind>)`
    #[default]
    Text,
    /// IR operand: `i32 10`, `double 1.2`
    Ir,
    /// Native double value.
    Double,
}

impl OutputFormat {
    /// Parse from a flag or environment value.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "ir" => Some(Self::Ir),
            "double" => Some(Self::Double),
            _ => None,
        }
    }
}

/// Resolved configuration for `wenc num`.
///
/// Layers, lowest priority first: defaults, `WENC_NUM_FORMAT`, `--format=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumConfig {
    pub format: OutputFormat,
}

impl NumConfig {
    /// Defaults overridden by the environment.
    pub fn from_env() -> Self {
        Self::with_env_format(std::env::var(FORMAT_ENV).ok().as_deref())
    }

    /// Defaults overridden by an explicit environment value.
    ///
    /// An unknown value is reported and ignored.
    pub fn with_env_format(value: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(name) = value {
            match OutputFormat::from_name(name) {
                Some(format) => config.format = format,
                None => eprintln!(
                    "warning: unknown {FORMAT_ENV} value '{name}', options: text, ir, double"
                ),
            }
        }
        config
    }
}

/// Apply `num` flags to `config`; returns the numerals left over.
///
/// Flags may appear anywhere. An unknown flag or format is a usage error.
pub fn parse_num_args(args: &[String], config: &mut NumConfig) -> Result<Vec<String>, String> {
    let mut numerals = Vec::new();
    for arg in args {
        if let Some(name) = arg.strip_prefix("--format=") {
            config.format = OutputFormat::from_name(name)
                .ok_or_else(|| format!("unknown format '{name}', options: text, ir, double"))?;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            numerals.push(arg.clone());
        }
    }
    debug!(format = ?config.format, count = numerals.len(), "num arguments");
    Ok(numerals)
}

/// Read one numeral per line, skipping blank lines.
pub fn read_numerals(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut numerals = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            numerals.push(trimmed.to_string());
        }
    }
    Ok(numerals)
}

/// Format one converted value.
pub fn render(value: &ScientificNotation, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("NUMBER {value} ({})", value.kind),
        OutputFormat::Ir => value.to_ir_literal(),
        OutputFormat::Double => value.to_double().to_string(),
    }
}

/// Convert and print every numeral.
///
/// Keeps going past failures so every bad numeral is reported; returns
/// `false` if any failed.
pub fn run_num(numerals: &[String], config: &NumConfig) -> bool {
    let mut all_ok = true;
    for numeral in numerals {
        match convert(numeral) {
            Ok(value) => println!("{}", render(&value, config.format)),
            Err(err) => {
                eprintln!("error: {numeral}: {err}");
                all_ok = false;
            }
        }
    }
    all_ok
}

#[cfg(test)]
mod tests;
