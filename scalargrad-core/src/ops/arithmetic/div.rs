use crate::autograd::{accumulate_gradient, BackwardOp};
use crate::scalar::Scalar;

// --- Forward Operation ---

/// True division `a / b`.
///
/// Division by zero is not intercepted: it yields `±inf` or `NaN`, and so does the
/// gradient.
pub fn div_op(a: &Scalar, b: &Scalar) -> Scalar {
    let value = a.value() / b.value();
    Scalar::from_op(
        value,
        BackwardOp::Div {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

// --- Backward Operation ---

/// d(a/b)/da = 1/b, d(a/b)/db = -a/b².
pub(crate) fn div_backward(lhs: &Scalar, rhs: &Scalar, grad_output: f64) {
    let (a, b) = (lhs.value(), rhs.value());
    accumulate_gradient(lhs, grad_output / b);
    accumulate_gradient(rhs, -a * grad_output / (b * b));
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
