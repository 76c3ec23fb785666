use super::div_op;
use crate::types::Operation;
use crate::Scalar;
use approx::assert_relative_eq;

#[test]
fn test_div_float() {
    let x = Scalar::with_requires_grad(3.0, true);
    let z = &x / 2.0;
    let y = z.operands()[1].clone();
    y.set_requires_grad(true);
    z.set_grad(1.0);
    z.backward_step();

    assert_eq!(z.value(), 1.5);
    assert_eq!(z.operation(), Operation::Division);
    assert_eq!(z.operands(), vec![x.clone(), y.clone()]);
    assert_relative_eq!(x.grad(), 0.5);
    assert_relative_eq!(y.grad(), -3.0 / 4.0);
}

#[test]
fn test_div_scalar() {
    let a = 7.0;
    let b = -2.5;
    let x = Scalar::with_requires_grad(a, true);
    let y = Scalar::with_requires_grad(b, true);
    let z = div_op(&x, &y);
    z.backward();

    assert_relative_eq!(z.value(), a / b);
    assert_relative_eq!(x.grad(), 1.0 / b);
    assert_relative_eq!(y.grad(), -a / (b * b));
}

#[test]
fn test_rdiv() {
    let x = Scalar::with_requires_grad(4.0, true);
    let z = x.rdiv(&2).unwrap();
    let y = z.operands()[0].clone();
    y.set_requires_grad(true);
    z.set_grad(1.0);
    z.backward_step();

    assert_eq!(z.value(), 0.5);
    assert_eq!(z.operands(), vec![y.clone(), x.clone()]);
    assert_relative_eq!(y.grad(), 1.0 / 4.0);
    assert_relative_eq!(x.grad(), -2.0 / 16.0);
}

#[test]
fn test_div_by_zero_is_not_an_error() {
    let x = Scalar::with_requires_grad(1.0, true);
    let y = Scalar::with_requires_grad(0.0, true);
    let z = div_op(&x, &y);
    assert!(z.value().is_infinite());
    z.backward();
    assert!(x.grad().is_infinite());
    assert!(!y.grad().is_finite());
}

#[test]
fn test_div_with_label() {
    let x = Scalar::with_requires_grad(1.0, true);
    let z = x.div(&4, Some("z")).unwrap();
    assert_eq!(z.label().as_deref(), Some("z"));
    assert_eq!(z.value(), 0.25);
}
