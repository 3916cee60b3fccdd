//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}

/// Assert two float sequences are element-wise approximately equal
pub fn assert_float_slice_eq(a: &[f64], b: &[f64], epsilon: f64) {
    assert_eq!(a.len(), b.len(), "sequence lengths differ");
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!(
            (x - y).abs() < epsilon,
            "mismatch at index {}: {} vs {} (epsilon: {})",
            i,
            x,
            y,
            epsilon
        );
    }
}
