//! Stack growth for deep recursion.
//!
//! The parser recurses once per nesting level of an expression and the
//! evaluator once per AST node and per call, so deeply nested source or
//! deep (but finite) recursion in a Monkey program can exceed the default
//! host stack. Wrapping the recursive entry points in
//! [`ensure_sufficient_stack`] grows the stack on demand instead.
//!
//! Native targets use `stacker`; WASM calls the closure directly.

/// Grow the stack when less than this much remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the
/// red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// No `stacker` on wasm: run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
