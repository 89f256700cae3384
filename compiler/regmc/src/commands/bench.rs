//! `regm bench [<program>] [--n=<n>] [--iters=<k>]`
//!
//! A quick wall-clock comparison of the three strategies, printed the way
//! the criterion bench groups them. Use `cargo bench -p regm_eval` for
//! statistically sound numbers.

use std::fmt::Write as _;
use std::hint::black_box;
use std::time::{Duration, Instant};

use regm_eval::programs::{Reference, REFERENCES};

use super::{find_program, parse_count};
use crate::{CliError, Strategy};

/// Options for a timing run.
#[derive(Clone, Debug)]
pub struct BenchOptions {
    pub programs: Vec<Reference>,
    pub n: f64,
    pub iters: u32,
}

impl Default for BenchOptions {
    fn default() -> Self {
        BenchOptions {
            programs: REFERENCES.to_vec(),
            n: 10_000.0,
            iters: 100,
        }
    }
}

/// Mean wall-clock time of one strategy.
#[derive(Copy, Clone, Debug)]
pub struct Timing {
    pub strategy: Strategy,
    pub mean: Duration,
    /// Result of the last call, so strategies can be cross-checked.
    pub result: f64,
}

/// Parse the arguments following `bench`.
pub fn parse_bench_args(args: &[String]) -> Result<BenchOptions, CliError> {
    let mut options = BenchOptions::default();
    let mut selected = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--n=") {
            options.n = parse_count(value)?;
        } else if let Some(value) = arg.strip_prefix("--iters=") {
            options.iters = value
                .parse()
                .ok()
                .filter(|&k: &u32| k > 0)
                .ok_or_else(|| CliError::InvalidIterations {
                    value: value.to_string(),
                })?;
        } else if arg.starts_with('-') || selected.is_some() {
            return Err(CliError::UnexpectedArgument { arg: arg.clone() });
        } else {
            selected = Some(find_program(arg)?);
        }
    }

    if let Some(reference) = selected {
        options.programs = vec![reference];
    }
    Ok(options)
}

/// Time every strategy on `reference` with input `n`.
///
/// Building a strategy's function (including specialization) is excluded
/// from the measurement.
pub fn time_strategies(reference: &Reference, n: f64, iters: u32) -> Vec<Timing> {
    Strategy::ALL
        .iter()
        .map(|&strategy| {
            let f = strategy.build(reference);
            let mut result = f(n);
            let start = Instant::now();
            for _ in 0..iters {
                result = black_box(f(black_box(n)));
            }
            let mean = start.elapsed() / iters.max(1);
            tracing::debug!(
                program = reference.name,
                %strategy,
                ?mean,
                "timed strategy"
            );
            Timing {
                strategy,
                mean,
                result,
            }
        })
        .collect()
}

/// The strategy with the lowest mean time.
pub fn fastest(timings: &[Timing]) -> Option<&Timing> {
    timings.iter().min_by_key(|t| t.mean)
}

/// Time every selected program and render a report.
pub fn bench(options: &BenchOptions) -> String {
    let mut out = String::new();
    for reference in &options.programs {
        let timings = time_strategies(reference, options.n, options.iters);
        let _ = writeln!(out, "{}{}", reference.name, options.n);
        for timing in &timings {
            let _ = writeln!(
                out,
                "  {:<12} {:>12?}/iter  (result {})",
                timing.strategy.name(),
                timing.mean,
                timing.result
            );
        }
        if let Some(best) = fastest(&timings) {
            let _ = writeln!(out, "Fastest is {}", best.strategy);
        }
    }
    out
}
