//! Programs: an instruction tree with designated input and output registers.

use std::fmt;

use crate::{Expr, Register};

/// A complete program.
///
/// The caller's argument is written into `input` before the tree runs and
/// the result is read from `output` afterwards. A `Program` is immutable
/// once built and may back any number of evaluators at once.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub expr: Expr,
    pub input: Register,
    pub output: Register,
}

impl Program {
    /// Create a new program.
    pub fn new(expr: Expr, input: Register, output: Register) -> Self {
        Program {
            expr,
            input,
            output,
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "in: {}, out: {}", self.input, self.output)?;
        if f.alternate() {
            write!(f, "{:#}", self.expr)
        } else {
            write!(f, "{}", self.expr)
        }
    }
}
