//! Command handlers for the `regm` driver.
//!
//! Each submodule implements one command. Argument helpers shared between
//! commands (program lookup, count parsing) live here in the module root.

mod bench;
mod run;
mod show;

pub use bench::{bench, fastest, parse_bench_args, time_strategies, BenchOptions, Timing};
pub use run::{parse_run_args, run, RunOptions};
pub use show::show;

use regm_eval::programs::{self, Reference, REFERENCES};

use crate::CliError;

/// Look up a reference program, listing the known names on failure.
pub(crate) fn find_program(name: &str) -> Result<Reference, CliError> {
    programs::by_name(name).ok_or_else(|| CliError::UnknownProgram {
        name: name.to_string(),
        available: REFERENCES
            .iter()
            .map(|r| r.name)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Parse a loop count.
///
/// Only non-negative integers are accepted: the reference programs count
/// their input down to zero one step at a time, so anything else would
/// never halt.
pub(crate) fn parse_count(value: &str) -> Result<f64, CliError> {
    let invalid = || CliError::InvalidCount {
        value: value.to_string(),
    };
    let n: u32 = value.parse().map_err(|_| invalid())?;
    Ok(f64::from(n))
}
