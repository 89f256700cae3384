//! Reference programs with native Rust counterparts.
//!
//! Each [`Reference`] pairs a register-machine program with a plain Rust
//! function computing the same thing, so the two evaluators can be checked
//! against (and timed against) native code.

use regm_ir::Register::{R0, R1, R2, R3};
use regm_ir::{block, copy, decr, loop_, num, plus, Program};

/// A named program and its native equivalent.
#[derive(Copy, Clone, Debug)]
pub struct Reference {
    pub name: &'static str,
    pub program: fn() -> Program,
    pub native: fn(f64) -> f64,
}

/// All reference programs, in display order.
pub const REFERENCES: [Reference; 2] = [
    Reference {
        name: "fib",
        program: fib,
        native: fib_native,
    },
    Reference {
        name: "sum-n",
        program: sum_n,
        native: sum_n_native,
    },
];

/// Look up a reference program by name.
pub fn by_name(name: &str) -> Option<Reference> {
    REFERENCES.iter().copied().find(|r| r.name == name)
}

/// Fibonacci: `n` in r0, result in r1.
///
/// ```text
/// r1 = 0; r2 = 1
/// while r0 != 0 { r3 = r1 + r2; r1 = r2; r2 = r3; r0 -= 1 }
/// ```
pub fn fib() -> Program {
    Program::new(
        block([
            num(R1, 0.0),
            num(R2, 1.0),
            loop_(
                R0,
                block([plus(R3, R1, R2), copy(R1, R2), copy(R2, R3), decr(R0)]),
            ),
        ]),
        R0,
        R1,
    )
}

/// Sum of `1..=n`: `n` in r0, result in r1.
///
/// ```text
/// r1 = 0
/// while r0 != 0 { r1 = r0 + r1; r0 -= 1 }
/// ```
pub fn sum_n() -> Program {
    Program::new(
        block([num(R1, 0.0), loop_(R0, block([plus(R1, R0, R1), decr(R0)]))]),
        R0,
        R1,
    )
}

/// Native `fib`: `f(0, a, b) = a`, `f(n, a, b) = f(n - 1, b, a + b)` from `(0, 1)`.
///
/// Like the program, this only halts for non-negative integer `n`.
pub fn fib_native(n: f64) -> f64 {
    let (mut n, mut f0, mut f1) = (n, 0.0, 1.0);
    while n != 0.0 {
        (f0, f1) = (f1, f0 + f1);
        n -= 1.0;
    }
    f0
}

/// Native `sum-n`: adds `1, 2, ...` up to and including `n`.
pub fn sum_n_native(n: f64) -> f64 {
    let mut res = 0.0;
    let mut i = 1.0;
    while i <= n {
        res += i;
        i += 1.0;
    }
    res
}
