use crate::autograd::{accumulate_gradient, BackwardOp};
use crate::scalar::Scalar;

// --- Forward Operation ---

/// Rectified Linear Unit, `max(0, a)`.
pub fn relu_op(a: &Scalar) -> Scalar {
    let value = a.value().max(0.0);
    Scalar::from_op(value, BackwardOp::Relu { input: a.clone() })
}

// --- Backward Operation ---

/// Passes the gradient through where the input is strictly positive. The derivative
/// at zero is taken as 0.
pub(crate) fn relu_backward(input: &Scalar, grad_output: f64) {
    let mask = if input.value() > 0.0 { 1.0 } else { 0.0 };
    accumulate_gradient(input, mask * grad_output);
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
