use crate::autograd::{accumulate_gradient, BackwardOp};
use crate::scalar::Scalar;

// --- Forward Operation ---

/// Natural exponential `e^a`.
///
/// Overflows to `+inf` for large inputs; the result is not clamped.
pub fn exp_op(a: &Scalar) -> Scalar {
    let output = a.value().exp();
    Scalar::from_op(
        output,
        BackwardOp::Exp {
            input: a.clone(),
            output,
        },
    )
}

// --- Backward Operation ---

/// d e^a/da = e^a, reusing the stored forward result.
pub(crate) fn exp_backward(input: &Scalar, output: f64, grad_output: f64) {
    accumulate_gradient(input, output * grad_output);
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
