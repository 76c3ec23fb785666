use crate::autograd::{accumulate_gradient, BackwardOp};
use crate::scalar::Scalar;

// --- Forward Operation ---

/// Floor division `floor(a / b)`.
pub fn floordiv_op(a: &Scalar, b: &Scalar) -> Scalar {
    let value = (a.value() / b.value()).floor();
    Scalar::from_op(
        value,
        BackwardOp::FloorDiv {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

// --- Backward Operation ---

/// The derivative is zero almost everywhere and undefined where `a / b` crosses an
/// integer. It is defined here as exactly zero for both operands, with no attempt at
/// a subgradient.
pub(crate) fn floordiv_backward(lhs: &Scalar, rhs: &Scalar, _grad_output: f64) {
    accumulate_gradient(lhs, 0.0);
    accumulate_gradient(rhs, 0.0);
}

#[cfg(test)]
#[path = "floordiv_test.rs"]
mod tests;
