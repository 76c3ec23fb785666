use crate::autograd::{accumulate_gradient, BackwardOp};
use crate::scalar::Scalar;

// --- Forward Operation ---

/// `-a`.
pub fn neg_op(a: &Scalar) -> Scalar {
    Scalar::from_op(-a.value(), BackwardOp::Neg { input: a.clone() })
}

// --- Backward Operation ---

pub(crate) fn neg_backward(input: &Scalar, grad_output: f64) {
    accumulate_gradient(input, -grad_output);
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
