use crate::autograd::{accumulate_gradient, BackwardOp};
use crate::scalar::Scalar;

// --- Forward Operation ---

/// `a - b`. Not commutative: the reflected form `k - x` is built as
/// `sub_op(k, x)`, never as a negated `x - k`.
pub fn sub_op(a: &Scalar, b: &Scalar) -> Scalar {
    let value = a.value() - b.value();
    Scalar::from_op(
        value,
        BackwardOp::Sub {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

// --- Backward Operation ---

/// d(a-b)/da = 1, d(a-b)/db = -1.
pub(crate) fn sub_backward(lhs: &Scalar, rhs: &Scalar, grad_output: f64) {
    accumulate_gradient(lhs, grad_output);
    accumulate_gradient(rhs, -grad_output);
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
