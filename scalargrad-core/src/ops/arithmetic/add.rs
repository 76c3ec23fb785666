// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::{accumulate_gradient, BackwardOp};
use crate::scalar::Scalar;

// --- Forward Operation ---

/// `a + b`.
pub fn add_op(a: &Scalar, b: &Scalar) -> Scalar {
    let value = a.value() + b.value();
    Scalar::from_op(
        value,
        BackwardOp::Add {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

// --- Backward Operation ---

/// Both partials are 1: the upstream gradient passes through unchanged.
pub(crate) fn add_backward(lhs: &Scalar, rhs: &Scalar, grad_output: f64) {
    accumulate_gradient(lhs, grad_output);
    accumulate_gradient(rhs, grad_output);
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
