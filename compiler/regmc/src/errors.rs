//! Driver errors.

use thiserror::Error;

/// Everything that can go wrong between the command line and a result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("unknown command `{name}`")]
    UnknownCommand { name: String },
    #[error("unknown program `{name}` (available: {available})")]
    UnknownProgram { name: String, available: String },
    #[error("unknown strategy `{name}` (expected native, interpreted or compiled)")]
    UnknownStrategy { name: String },
    /// Loop counts must be non-negative integers, or the program never halts.
    #[error("invalid count `{value}`: expected a non-negative integer")]
    InvalidCount { value: String },
    #[error("invalid iteration count `{value}`: expected a positive integer")]
    InvalidIterations { value: String },
    #[error("unexpected argument `{arg}`")]
    UnexpectedArgument { arg: String },
    #[error("missing {what}")]
    Missing { what: &'static str },
}
