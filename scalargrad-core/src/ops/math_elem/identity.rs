use crate::autograd::{accumulate_gradient, BackwardOp};
use crate::scalar::Scalar;

// --- Forward Operation ---

/// A new node carrying the same value as `a`.
pub fn identity_op(a: &Scalar) -> Scalar {
    Scalar::from_op(a.value(), BackwardOp::Identity { input: a.clone() })
}

// --- Backward Operation ---

pub(crate) fn identity_backward(input: &Scalar, grad_output: f64) {
    accumulate_gradient(input, grad_output);
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
