use crate::autograd::{accumulate_gradient, BackwardOp};
use crate::scalar::Scalar;

// --- Forward Operation ---

/// Hyperbolic tangent.
pub fn tanh_op(a: &Scalar) -> Scalar {
    let output = a.value().tanh();
    Scalar::from_op(
        output,
        BackwardOp::Tanh {
            input: a.clone(),
            output,
        },
    )
}

// --- Backward Operation ---

/// d tanh(a)/da = 1 - tanh(a)², computed from the stored forward result.
pub(crate) fn tanh_backward(input: &Scalar, output: f64, grad_output: f64) {
    accumulate_gradient(input, (1.0 - output * output) * grad_output);
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
