//! Closure specializer.
//!
//! [`partial_eval`] walks an instruction tree once and returns one boxed
//! closure per node. Leaves capture their register operands; `Block`
//! captures its children's closures in a boxed slice; `Loop` captures its
//! body's closure. Running the result never looks at an `Expr` again: the
//! match happens here, at build time, and the call path is a fixed chain of
//! indirect calls.
//!
//! # Stack use
//!
//! The build walk recurses once per nesting level and is guarded with
//! `ensure_sufficient_stack`. The built chain recurses the same way when it
//! runs and again when it is dropped, so every `STACK_CHECK_INTERVAL`-th
//! nesting level gets a guard for both. Programs nested less deeply than that
//! run with no guard at all.

use regm_ir::{Expr, Program, Registers};
use regm_stack::ensure_sufficient_stack;

/// A specialized instruction: mutates a register file, inspects no tags.
///
/// Holds no register state of its own, so one `Op` can run on many
/// register files from many threads at once.
pub type Op = Box<dyn Fn(&mut Registers) + Send + Sync>;

/// Nesting levels between runtime stack checks in a built closure chain.
const STACK_CHECK_INTERVAL: usize = 64;

/// Specialize `e` into a closure.
pub fn partial_eval(e: &Expr) -> Op {
    specialize(e, 0)
}

fn specialize(e: &Expr, depth: usize) -> Op {
    match *e {
        Expr::Num { d, n } => Box::new(move |m: &mut Registers| m[d] = n),
        Expr::Decr { d } => Box::new(move |m: &mut Registers| m[d] -= 1.0),
        Expr::Plus { d, i, j } => Box::new(move |m: &mut Registers| m[d] = m[i] + m[j]),
        Expr::Copy { d, i } => Box::new(move |m: &mut Registers| m[d] = m[i]),
        Expr::Block(ref es) => {
            let ops = ensure_sufficient_stack(|| specialize_block(es, depth));
            guard_nesting(
                Box::new(move |m: &mut Registers| {
                    for op in &*ops {
                        op(m);
                    }
                }),
                depth,
            )
        }
        Expr::Loop { halt_if_0, ref body } => {
            let body = ensure_sufficient_stack(|| specialize(body, depth + 1));
            guard_nesting(
                Box::new(move |m: &mut Registers| {
                    while !m.is_zero(halt_if_0) {
                        body(m);
                    }
                }),
                depth,
            )
        }
    }
}

fn specialize_block(es: &[Expr], depth: usize) -> Box<[Op]> {
    es.iter().map(|e| specialize(e, depth + 1)).collect()
}

/// Wrap `op` in a runtime stack check at every `STACK_CHECK_INTERVAL`-th level.
fn guard_nesting(op: Op, depth: usize) -> Op {
    if depth == 0 || depth % STACK_CHECK_INTERVAL != 0 {
        return op;
    }
    let guarded = Guarded(Some(op));
    Box::new(move |m: &mut Registers| guarded.run(m))
}

/// An op that checks the stack both when it runs and when it is dropped.
///
/// Dropping a closure chain recurses once per nesting level, just like
/// running it.
struct Guarded(Option<Op>);

impl Guarded {
    fn run(&self, m: &mut Registers) {
        if let Some(op) = &self.0 {
            ensure_sufficient_stack(|| op(m));
        }
    }
}

impl Drop for Guarded {
    fn drop(&mut self) {
        if let Some(op) = self.0.take() {
            ensure_sufficient_stack(move || drop(op));
        }
    }
}

/// Specialize `program` once and return a function that runs the result.
///
/// The tree is dropped after specialization; the returned function only
/// keeps the closure chain and the two register identifiers.
pub fn compiler(program: Program) -> impl Fn(f64) -> f64 + Send + Sync {
    let Program {
        expr,
        input,
        output,
    } = program;
    let op = partial_eval(&expr);

    tracing::debug!(
        nodes = expr.node_count(),
        depth = expr.depth(),
        %input,
        %output,
        "specialized program"
    );

    move |x| {
        let mut registers = Registers::with_input(input, x);
        op(&mut registers);
        registers[output]
    }
}

#[cfg(test)]
mod tests;
