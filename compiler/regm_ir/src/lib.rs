//! regm IR - instruction trees for a four-register machine.
//!
//! This crate contains the data model shared by both evaluators:
//! - [`Register`]: one of the four register identifiers
//! - [`Registers`]: the zero-initialised register file a single run owns
//! - [`Expr`]: the closed set of instructions, built with the smart
//!   constructors [`num`], [`plus`], [`decr`], [`copy`], [`block`], [`loop_`]
//! - [`Program`]: an instruction tree plus its input and output registers
//!
//! # Design Philosophy
//!
//! - **Validate at the edge**: a `Register` can only hold 0..=3, so the
//!   evaluators index the register file without bounds checks. Raw indices
//!   go through [`Register::new`], which fails with
//!   [`IrError::InvalidRegister`].
//! - **Closed variant set**: `Expr` is an enum and every evaluator matches
//!   it exhaustively, so there is no unknown-tag case at run time.
//! - **Immutable trees**: nothing in this crate mutates an `Expr` or a
//!   `Program` after construction; both are `Send + Sync` and can be
//!   shared across any number of evaluators.

mod errors;
mod expr;
mod program;
mod register;

pub use errors::IrError;
pub use expr::{block, copy, decr, loop_, num, plus, Expr};
pub use program::Program;
pub use register::{Register, Registers};
