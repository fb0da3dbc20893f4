use super::*;

/// Mirrors the shape of a nested-grouping parse: one frame per `(`.
fn nesting_depth(depth: u32) -> u32 {
    ensure_sufficient_stack(|| if depth == 0 { 0 } else { nesting_depth(depth - 1) + 1 })
}

#[test]
fn shallow_nesting_returns_depth() {
    assert_eq!(nesting_depth(16), 16);
}

#[test]
fn deep_nesting_does_not_overflow() {
    assert_eq!(nesting_depth(200_000), 200_000);
}

#[test]
fn passes_result_through() {
    let result: Result<f64, String> = ensure_sufficient_stack(|| Ok(0.5));
    assert_eq!(result, Ok(0.5));
}
