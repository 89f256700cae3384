//! `regm run <program> <n> [--strategy=<s>]`

use regm_eval::programs::Reference;

use super::{find_program, parse_count};
use crate::{CliError, Strategy};

/// Options for a single evaluation.
#[derive(Copy, Clone, Debug)]
pub struct RunOptions {
    pub program: Reference,
    pub n: f64,
    pub strategy: Strategy,
}

/// Parse the arguments following `run`.
///
/// The strategy defaults to `compiled`.
pub fn parse_run_args(args: &[String]) -> Result<RunOptions, CliError> {
    let mut program = None;
    let mut n = None;
    let mut strategy = Strategy::Compiled;

    for arg in args {
        if let Some(name) = arg.strip_prefix("--strategy=") {
            strategy = name.parse()?;
        } else if arg.starts_with('-') {
            return Err(CliError::UnexpectedArgument { arg: arg.clone() });
        } else if program.is_none() {
            program = Some(find_program(arg)?);
        } else if n.is_none() {
            n = Some(parse_count(arg)?);
        } else {
            return Err(CliError::UnexpectedArgument { arg: arg.clone() });
        }
    }

    Ok(RunOptions {
        program: program.ok_or(CliError::Missing {
            what: "program name",
        })?,
        n: n.ok_or(CliError::Missing { what: "input count" })?,
        strategy,
    })
}

/// Evaluate the program once and describe the result.
pub fn run(options: &RunOptions) -> String {
    let f = options.strategy.build(&options.program);
    let result = f(options.n);
    tracing::debug!(
        program = options.program.name,
        strategy = %options.strategy,
        n = options.n,
        result,
        "evaluated"
    );
    format!(
        "{}({}) = {result} [{}]",
        options.program.name, options.n, options.strategy
    )
}
