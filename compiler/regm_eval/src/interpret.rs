//! Tree-walking interpreter.
//!
//! Every call re-dispatches on each node it visits. This is the baseline the
//! specializer is measured against, so it deliberately does no caching.

use regm_ir::{Expr, Program, Register, Registers};
use regm_stack::ensure_sufficient_stack;

/// Run `e` against `m`, mutating the registers in place.
///
/// Loops re-test their halting register before every iteration and have no
/// iteration bound; a body that never drives it to zero never returns.
pub fn interpret(e: &Expr, m: &mut Registers) {
    match e {
        Expr::Num { d, n } => m[*d] = *n,
        Expr::Plus { d, i, j } => m[*d] = m[*i] + m[*j],
        Expr::Decr { d } => m[*d] -= 1.0,
        Expr::Copy { d, i } => m[*d] = m[*i],
        Expr::Block(es) => ensure_sufficient_stack(|| interpret_block(es, m)),
        Expr::Loop { halt_if_0, body } => {
            ensure_sufficient_stack(|| interpret_loop(*halt_if_0, body, m));
        }
    }
}

fn interpret_block(es: &[Expr], m: &mut Registers) {
    for e in es {
        interpret(e, m);
    }
}

fn interpret_loop(halt_if_0: Register, body: &Expr, m: &mut Registers) {
    while !m.is_zero(halt_if_0) {
        interpret(body, m);
    }
}

/// Build a function that interprets `program` on every call.
///
/// Each call zeroes a fresh register file, writes the argument into the
/// input register, walks the whole tree and reads the output register.
pub fn interpreter(program: Program) -> impl Fn(f64) -> f64 + Send + Sync {
    tracing::debug!(
        nodes = program.expr.node_count(),
        input = %program.input,
        output = %program.output,
        "built interpreter"
    );

    move |x| {
        let mut registers = Registers::with_input(program.input, x);
        interpret(&program.expr, &mut registers);
        registers[program.output]
    }
}
