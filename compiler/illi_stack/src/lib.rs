//! Stack growth for the recursive phases of the interpreter.
//!
//! Both the expression parser and the evaluator recurse once per nesting
//! level, so input such as `((((...))))` or `- - - - 1` can exhaust the
//! native stack long before it exhausts memory. Wrapping the recursive entry
//! points in [`ensure_sufficient_stack`] keeps them safe.
//!
//! On native targets the stack is grown on demand with `stacker`; on WASM the
//! closure is called directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn parse_unary(&mut self) -> ParseResult<Expr> {
///     ensure_sufficient_stack(|| self.parse_unary_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
