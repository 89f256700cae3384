#![allow(
    clippy::float_cmp,
    reason = "register values are exact in these programs"
)]

use super::*;
use crate::interpret::{interpret, interpreter};
use crate::programs::{fib, fib_native, sum_n, sum_n_native};
use pretty_assertions::assert_eq;
use regm_ir::Register::{R0, R1, R2, R3};
use regm_ir::{block, copy, decr, loop_, num, plus};

fn run_compiled(e: &Expr) -> [f64; 4] {
    let op = partial_eval(e);
    let mut registers = Registers::new();
    op(&mut registers);
    *registers.as_array()
}

fn run_interpreted(e: &Expr) -> [f64; 4] {
    let mut registers = Registers::new();
    interpret(e, &mut registers);
    *registers.as_array()
}

#[test]
fn partial_eval_leaves() {
    assert_eq!(run_compiled(&num(R2, 3.5)), [0.0, 0.0, 3.5, 0.0]);
    assert_eq!(
        run_compiled(&block([num(R1, 2.0), num(R2, 5.0), plus(R3, R1, R2)])),
        [0.0, 2.0, 5.0, 7.0]
    );
    assert_eq!(run_compiled(&decr(R0)), [-1.0, 0.0, 0.0, 0.0]);
    assert_eq!(
        run_compiled(&block([num(R1, 9.0), copy(R2, R1)])),
        [0.0, 9.0, 9.0, 0.0]
    );
}

#[test]
fn partial_eval_block_runs_in_order() {
    let e = block([num(R0, 1.0), num(R0, 2.0), copy(R1, R0), num(R0, 3.0)]);
    assert_eq!(run_compiled(&e), [3.0, 2.0, 0.0, 0.0]);
}

#[test]
fn partial_eval_loop_zero_iterations() {
    let e = block([num(R1, 7.0), loop_(R0, num(R1, 100.0))]);
    assert_eq!(run_compiled(&e), [0.0, 7.0, 0.0, 0.0]);
}

#[test]
fn partial_eval_matches_interpret_on_nested_loops() {
    let e = block([
        num(R0, 3.0),
        num(R3, 1.0),
        loop_(
            R0,
            block([
                num(R1, 4.0),
                loop_(R1, block([plus(R2, R2, R3), decr(R1)])),
                decr(R0),
            ]),
        ),
    ]);
    assert_eq!(run_compiled(&e), run_interpreted(&e));
    assert_eq!(run_compiled(&e), [0.0, 0.0, 12.0, 1.0]);
}

#[test]
fn op_reused_across_register_files() {
    let op = partial_eval(&loop_(R0, block([plus(R1, R1, R0), decr(R0)])));

    let mut a = Registers::with_input(R0, 3.0);
    let mut b = Registers::with_input(R0, 4.0);
    op(&mut a);
    op(&mut b);
    op(&mut a);

    // `a` was already halted, so the second run changes nothing.
    assert_eq!(a.as_array(), &[0.0, 6.0, 0.0, 0.0]);
    assert_eq!(b.as_array(), &[0.0, 10.0, 0.0, 0.0]);
}

#[test]
fn compiler_fib() {
    let fib_exe = compiler(fib());
    for n in 1..10u32 {
        let n = f64::from(n);
        assert_eq!(fib_exe(n), fib_native(n), "fib({n})");
    }
    assert_eq!(fib_exe(9.0), 34.0);
}

#[test]
fn compiler_sum_n() {
    let sum_exe = compiler(sum_n());
    for n in 1..10u32 {
        let n = f64::from(n);
        assert_eq!(sum_exe(n), sum_n_native(n), "sum_n({n})");
    }
    assert_eq!(sum_exe(9.0), 45.0);
}

#[test]
fn compiler_repeated_calls_do_not_leak_state() {
    let fib_exe = compiler(fib());
    let first = fib_exe(8.0);
    let second = fib_exe(8.0);
    assert_eq!(first, 21.0);
    assert_eq!(first, second);
}

#[test]
fn compiler_shared_across_threads() {
    let fib_exe = compiler(fib());
    let results: Vec<f64> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let fib_exe = &fib_exe;
                s.spawn(move || fib_exe(f64::from(t + 6)))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or(f64::NAN))
            .collect()
    });
    assert_eq!(results, vec![8.0, 13.0, 21.0, 34.0]);
}

/// `depth` loops nested inside each other. Every level shares r2 as its
/// counter and clears it before descending, so each body runs exactly once.
fn nested(depth: usize) -> Expr {
    let mut e = block([plus(R1, R1, R3), decr(R0)]);
    for _ in 0..depth {
        e = block([num(R2, 1.0), loop_(R2, block([decr(R2), e]))]);
    }
    block([num(R3, 1.0), e])
}

#[test]
fn deep_nesting_crosses_stack_checks() {
    // Deeper than several STACK_CHECK_INTERVAL levels.
    let e = nested(300);
    assert!(e.depth() > 4 * STACK_CHECK_INTERVAL);

    let program = Program::new(e, R0, R1);
    let interpreted = interpreter(program.clone());
    let compiled = compiler(program);
    assert_eq!(compiled(5.0), 1.0);
    assert_eq!(interpreted(5.0), compiled(5.0));
}

/// `depth` loops on r1 nested directly inside each other.
fn nested_loops(depth: usize) -> Expr {
    let mut e = decr(R1);
    for _ in 0..depth {
        e = loop_(R1, e);
    }
    e
}

#[test]
fn deep_programs_build_run_and_drop() {
    let compiled = compiler(Program::new(nested_loops(200_000), R0, R0));
    assert_eq!(compiled(3.0), 3.0);
    drop(compiled);

    let interpreted = interpreter(Program::new(nested_loops(200_000), R0, R0));
    assert_eq!(interpreted(3.0), 3.0);
    drop(interpreted);

    // Every level of this one actually runs.
    let compiled = compiler(Program::new(nested(70_000), R0, R1));
    let interpreted = interpreter(Program::new(nested(70_000), R0, R1));
    assert_eq!(compiled(5.0), 1.0);
    assert_eq!(interpreted(5.0), 1.0);
}

#[test]
fn guard_nesting_only_wraps_interval_levels() {
    // A wrapped op still behaves the same.
    let op = guard_nesting(partial_eval(&num(R0, 2.0)), STACK_CHECK_INTERVAL);
    let mut registers = Registers::new();
    op(&mut registers);
    assert_eq!(registers[R0], 2.0);

    let op = guard_nesting(partial_eval(&decr(R0)), 1);
    op(&mut registers);
    assert_eq!(registers[R0], 1.0);
}
