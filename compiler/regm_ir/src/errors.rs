//! Construction errors for instruction trees.

use thiserror::Error;

/// Error produced while building IR from unchecked input.
///
/// Evaluation never fails: every condition that could go wrong at run time
/// is ruled out when the IR is built.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IrError {
    /// A register index outside `0..=3`.
    #[error("invalid register r{index}: expected an index in 0..=3")]
    InvalidRegister { index: usize },
}
