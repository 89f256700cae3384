//! Instruction trees.
//!
//! An [`Expr`] is one of six instructions. Leaves move numbers between
//! registers; `Block` sequences instructions and `Loop` repeats one while a
//! register is non-zero. Trees are built with the smart constructors below
//! and never mutated afterwards.

use std::fmt;
use std::mem;

use regm_stack::ensure_sufficient_stack;

use crate::Register;

/// A register-machine instruction.
///
/// The variant set is closed: evaluators match on it exhaustively.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// Set register `d` (for "destination") to the constant `n`.
    Num { d: Register, n: f64 },
    /// Set register `d` to register `i` + register `j`.
    Plus {
        d: Register,
        i: Register,
        j: Register,
    },
    /// Decrement register `d` by one.
    Decr { d: Register },
    /// Set register `d` to register `i`.
    Copy { d: Register, i: Register },
    /// Run each instruction in order.
    Block(Vec<Expr>),
    /// Run `body` repeatedly while register `halt_if_0` is non-zero.
    ///
    /// The test runs before every iteration, including the first.
    Loop {
        halt_if_0: Register,
        body: Box<Expr>,
    },
}

/// Set register `d` to `n`.
pub fn num(d: Register, n: f64) -> Expr {
    Expr::Num { d, n }
}

/// Set register `d` to `i + j`.
pub fn plus(d: Register, i: Register, j: Register) -> Expr {
    Expr::Plus { d, i, j }
}

/// Decrement register `d`.
pub fn decr(d: Register) -> Expr {
    Expr::Decr { d }
}

/// Set register `d` to register `i`.
pub fn copy(d: Register, i: Register) -> Expr {
    Expr::Copy { d, i }
}

/// Run `es` in sequence.
pub fn block(es: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::Block(es.into_iter().collect())
}

/// Run `body` while `halt_if_0` is non-zero.
pub fn loop_(halt_if_0: Register, body: Expr) -> Expr {
    Expr::Loop {
        halt_if_0,
        body: Box::new(body),
    }
}

impl Expr {
    /// Number of nodes in the tree, counting `self`.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Num { .. } | Expr::Plus { .. } | Expr::Decr { .. } | Expr::Copy { .. } => 1,
            Expr::Block(es) => {
                1 + ensure_sufficient_stack(|| es.iter().map(Expr::node_count).sum::<usize>())
            }
            Expr::Loop { body, .. } => 1 + ensure_sufficient_stack(|| body.node_count()),
        }
    }

    /// Nesting depth of the tree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Num { .. } | Expr::Plus { .. } | Expr::Decr { .. } | Expr::Copy { .. } => 1,
            Expr::Block(es) => {
                1 + ensure_sufficient_stack(|| es.iter().map(Expr::depth).max().unwrap_or(0))
            }
            Expr::Loop { body, .. } => 1 + ensure_sufficient_stack(|| body.depth()),
        }
    }

    /// Move this node's children onto `out`, leaving it childless.
    fn take_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            Expr::Block(es) => out.append(es),
            Expr::Loop { body, .. } => {
                out.push(mem::replace(&mut **body, Expr::Block(Vec::new())));
            }
            Expr::Num { .. } | Expr::Plus { .. } | Expr::Decr { .. } | Expr::Copy { .. } => {}
        }
    }
}

/// Drops the tree iteratively, one node at a time, whatever its depth.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut e) = pending.pop() {
            e.take_children(&mut pending);
        }
    }
}

/// Renders the tree in constructor syntax, e.g. `loop(r0, block(decr(r0)))`.
///
/// The alternate form (`{:#}`) puts each block child on its own line.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = if f.alternate() { Some(0) } else { None };
        write_expr(f, self, indent)
    }
}

fn write_expr(f: &mut fmt::Formatter<'_>, expr: &Expr, indent: Option<usize>) -> fmt::Result {
    match expr {
        Expr::Num { d, n } => write!(f, "num({d}, {n})"),
        Expr::Plus { d, i, j } => write!(f, "plus({d}, {i}, {j})"),
        Expr::Decr { d } => write!(f, "decr({d})"),
        Expr::Copy { d, i } => write!(f, "copy({d}, {i})"),
        Expr::Loop { halt_if_0, body } => {
            write!(f, "loop({halt_if_0}, ")?;
            ensure_sufficient_stack(|| write_expr(f, body, indent))?;
            write!(f, ")")
        }
        Expr::Block(es) => {
            write!(f, "block(")?;
            match indent {
                None => {
                    for (idx, e) in es.iter().enumerate() {
                        if idx > 0 {
                            write!(f, ", ")?;
                        }
                        ensure_sufficient_stack(|| write_expr(f, e, None))?;
                    }
                }
                Some(level) => {
                    if !es.is_empty() {
                        for e in es {
                            writeln!(f)?;
                            write!(f, "{:width$}", "", width = (level + 1) * 2)?;
                            ensure_sufficient_stack(|| write_expr(f, e, Some(level + 1)))?;
                            write!(f, ",")?;
                        }
                        writeln!(f)?;
                        write!(f, "{:width$}", "", width = level * 2)?;
                    }
                }
            }
            write!(f, ")")
        }
    }
}
