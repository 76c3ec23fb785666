use crate::autograd::{accumulate_gradient, BackwardOp};
use crate::scalar::Scalar;

// --- Forward Operation ---

/// `a * b`.
pub fn mul_op(a: &Scalar, b: &Scalar) -> Scalar {
    let value = a.value() * b.value();
    Scalar::from_op(
        value,
        BackwardOp::Mul {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

// --- Backward Operation ---

/// d(ab)/da = b, d(ab)/db = a.
pub(crate) fn mul_backward(lhs: &Scalar, rhs: &Scalar, grad_output: f64) {
    let (a, b) = (lhs.value(), rhs.value());
    accumulate_gradient(lhs, b * grad_output);
    accumulate_gradient(rhs, a * grad_output);
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
