//! Shared helpers for unit tests

/// Assert two floats agree to within 1e-9 relative (absolute near zero)
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} but got {} (diff {})",
        expected,
        actual,
        (actual - expected).abs()
    );
}
