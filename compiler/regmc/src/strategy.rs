//! Execution strategies for a reference program.

use std::fmt;
use std::str::FromStr;

use regm_eval::programs::Reference;
use regm_eval::{compiler, interpreter};

use crate::CliError;

/// How to evaluate a reference program.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// The hand-written Rust function.
    Native,
    /// Tree-walking interpreter.
    Interpreted,
    /// Pre-built closure chain.
    Compiled,
}

impl Strategy {
    /// All strategies, in report order.
    pub const ALL: [Strategy; 3] = [Strategy::Native, Strategy::Interpreted, Strategy::Compiled];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Native => "native",
            Strategy::Interpreted => "interpreted",
            Strategy::Compiled => "compiled",
        }
    }

    /// Build the function this strategy runs for `reference`.
    ///
    /// For `Compiled` this is where specialization happens, so callers
    /// timing calls should build once outside the timed region.
    pub fn build(self, reference: &Reference) -> Box<dyn Fn(f64) -> f64 + Send + Sync> {
        match self {
            Strategy::Native => Box::new(reference.native),
            Strategy::Interpreted => Box::new(interpreter((reference.program)())),
            Strategy::Compiled => Box::new(compiler((reference.program)())),
        }
    }
}

impl FromStr for Strategy {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(Strategy::Native),
            "interpreted" | "interpreter" => Ok(Strategy::Interpreted),
            "compiled" | "compiler" => Ok(Strategy::Compiled),
            _ => Err(CliError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
