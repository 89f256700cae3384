//! regm Eval - two ways to run a register-machine program.
//!
//! # Architecture
//!
//! Both strategies share the same entry shape: hand over a [`Program`] and
//! get back a function from the input value to the output value.
//!
//! - [`interpreter`]: walks the instruction tree on every call, matching on
//!   each node as it is visited.
//! - [`compiler`]: walks the tree once up front ([`partial_eval`]), turning
//!   every node into a boxed closure. Calls only run the closure chain; no
//!   node is inspected after construction.
//!
//! ```text
//! Program ──► interpreter ──► |x| { zero regs; regs[in] = x; interpret(tree); regs[out] }
//!         └─► compiler ─► partial_eval(tree) = op
//!                           └──► |x| { zero regs; regs[in] = x; op(regs); regs[out] }
//! ```
//!
//! Every call allocates its own [`Registers`], so produced functions carry
//! no state between calls and may be shared across threads.
//!
//! # Reference programs
//!
//! [`programs`] holds the `fib` and `sum-n` programs together with native
//! Rust versions of the same computations, for tests and benchmarks.

mod interpret;
pub mod programs;
mod specialize;

pub use interpret::{interpret, interpreter};
pub use specialize::{compiler, partial_eval, Op};

// Re-export IR types so callers only need this crate
pub use regm_ir::{
    block, copy, decr, loop_, num, plus, Expr, IrError, Program, Register, Registers,
};
