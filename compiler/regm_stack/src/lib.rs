//! Stack growth for recursive tree walks.
//!
//! Instruction trees nest through `Block` and `Loop`, and both the
//! interpreter and the specializer recurse once per nesting level. Any walk
//! that descends into children goes through [`ensure_sufficient_stack`],
//! which grows the stack before it runs out.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.
//!
//! The guard belongs at the descent points only (entering a child), never
//! around leaf instructions, so a flat block costs one check per child.

/// Remaining stack below which a new segment is allocated (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
