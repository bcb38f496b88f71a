//! Command handlers for the `wenc` CLI.
//!
//! Each submodule implements one command. Handlers print their own output
//! and report success to the caller, which owns the exit code.

mod check;
mod num;

pub use check::{check_numeral, check_numerals};
pub use num::{
    parse_num_args, read_numerals, render, run_num, NumConfig, OutputFormat, FORMAT_ENV,
};
