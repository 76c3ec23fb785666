use crate::scalar::Scalar;

/// Checks that a node's value and accumulated gradient are within `tolerance` of the
/// expected ones. Panics with the offending field otherwise.
pub fn check_scalar_near(actual: &Scalar, expected_value: f64, expected_grad: f64, tolerance: f64) {
    let value = actual.value();
    let grad = actual.grad();
    if (value - expected_value).abs() > tolerance {
        panic!(
            "Value mismatch for {}: actual={:?}, expected={:?}, tolerance={:?}",
            actual, value, expected_value, tolerance
        );
    }
    if (grad - expected_grad).abs() > tolerance {
        panic!(
            "Grad mismatch for {}: actual={:?}, expected={:?}, tolerance={:?}",
            actual, grad, expected_grad, tolerance
        );
    }
}

/// Builds gradient-enabled leaves labelled `x0`, `x1`, ...
pub fn create_test_leaves(values: &[f64]) -> Vec<Scalar> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Scalar::leaf(v, Some(format!("x{}", i).as_str()), true))
        .collect()
}
