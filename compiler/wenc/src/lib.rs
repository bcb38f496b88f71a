//! Numeral literal driver for the wen compiler.
//!
//! Library half of the `wenc` binary: the command handlers live in
//! [`commands`] so they can be tested without spawning a process.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, so the binary stays silent by
/// default. Safe to call more than once.
///
/// ```text
/// RUST_LOG=wen_numeral=trace wenc num 十
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }
        // stdout carries converted numerals; events go to stderr.
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .init();
    });
}
