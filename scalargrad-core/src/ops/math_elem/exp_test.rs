use super::exp_op;
use crate::types::Operation;
use crate::Scalar;
use approx::assert_relative_eq;

#[test]
fn test_exp() {
    let x = Scalar::with_requires_grad(2.0, true);
    let z = exp_op(&x);
    z.set_grad(1.0);
    z.backward_step();

    assert_relative_eq!(z.value(), 2.0_f64.exp());
    assert_eq!(z.operation(), Operation::Exponential);
    assert_eq!(z.operands(), vec![x.clone()]);
    assert_relative_eq!(x.grad(), 2.0_f64.exp());
}

#[test]
fn test_exp_chain() {
    // d/dx e^(2x) = 2 e^(2x)
    let x = Scalar::with_requires_grad(0.3, true);
    let z = (&x * 2.0).exp(Some("z"));
    z.backward();

    assert_eq!(z.label().as_deref(), Some("z"));
    assert_relative_eq!(x.grad(), 2.0 * 0.6_f64.exp(), epsilon = 1e-12);
}

#[test]
fn test_exp_overflow() {
    let x = Scalar::with_requires_grad(1000.0, true);
    let z = exp_op(&x);
    assert!(z.value().is_infinite());
}
