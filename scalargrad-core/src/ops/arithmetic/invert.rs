use crate::autograd::{accumulate_gradient, BackwardOp};
use crate::scalar::Scalar;

// --- Forward Operation ---

/// Multiplicative inverse `a⁻¹`.
pub fn invert_op(a: &Scalar) -> Scalar {
    Scalar::from_op(a.value().recip(), BackwardOp::Invert { input: a.clone() })
}

// --- Backward Operation ---

/// d(1/a)/da = -1/a².
pub(crate) fn invert_backward(input: &Scalar, grad_output: f64) {
    let a = input.value();
    accumulate_gradient(input, -grad_output / (a * a));
}

#[cfg(test)]
#[path = "invert_test.rs"]
mod tests;
