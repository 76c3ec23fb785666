use crate::autograd::{accumulate_gradient, BackwardOp};
use crate::scalar::Scalar;

// --- Forward Operation ---

/// `base ^ exponent`.
///
/// A negative base with a fractional exponent yields `NaN`, as does the exponent's
/// gradient for a non-positive base (it involves `ln(base)`). Neither is intercepted.
pub fn pow_op(base: &Scalar, exponent: &Scalar) -> Scalar {
    let value = base.value().powf(exponent.value());
    Scalar::from_op(
        value,
        BackwardOp::Pow {
            base: base.clone(),
            exponent: exponent.clone(),
        },
    )
}

// --- Backward Operation ---

/// d(a^b)/da = b·a^(b-1), d(a^b)/db = ln(a)·a^b.
pub(crate) fn pow_backward(base: &Scalar, exponent: &Scalar, grad_output: f64) {
    let (a, b) = (base.value(), exponent.value());
    accumulate_gradient(base, b * a.powf(b - 1.0) * grad_output);
    accumulate_gradient(exponent, a.ln() * a.powf(b) * grad_output);
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
