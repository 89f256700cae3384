//! regm driver library.
//!
//! Backs the `regm` binary. Commands return their output as strings so the
//! binary only prints; everything here is testable without a process.
//!
//! - `regm run <program> <n> [--strategy=<s>]`: evaluate one reference program
//! - `regm bench [<program>] [--n=<n>] [--iters=<k>]`: time every strategy
//! - `regm show <program>`: print the instruction tree

pub mod commands;
mod errors;
mod strategy;

pub use errors::CliError;
pub use strategy::Strategy;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=regm_eval=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
