use super::add_op;
use crate::types::Operation;
use crate::Scalar;

#[test]
fn test_add_int() {
    let x = Scalar::with_requires_grad(1.0, true);
    let z = &x + 1;
    let operands = z.operands();
    let y = &operands[1];

    assert_eq!(z.value(), 2.0);
    assert!(z.requires_grad());
    assert_eq!(z.operation(), Operation::Addition);
    assert_eq!(operands.len(), 2);
    assert!(operands[0].ptr_eq(&x));
    assert_eq!(y.value(), 1.0);
    assert!(!y.requires_grad());
    assert_eq!(y.operation(), Operation::None);
    assert!(y.operands().is_empty());
    assert_eq!(y.label(), None);
}

#[test]
fn test_add_scalar() {
    let x = Scalar::with_requires_grad(1.0, true);
    let y = Scalar::with_requires_grad(1.0, true);
    let z = add_op(&x, &y);

    assert_eq!(z.value(), 2.0);
    assert_eq!(z.operation(), Operation::Addition);
    assert_eq!(z.operands(), vec![x.clone(), y.clone()]);
}

#[test]
fn test_add_backward() {
    let x = Scalar::with_requires_grad(1.0, true);
    let y = Scalar::with_requires_grad(1.0, true);
    let z = &x + &y;
    z.set_grad(1.0);
    z.backward_step();
    assert_eq!(x.grad(), 1.0);
    assert_eq!(y.grad(), 1.0);
}

#[test]
fn test_add_backward_promoted_operand_gated() {
    let x = Scalar::with_requires_grad(1.0, true);
    let z = &x + 5.0;
    z.backward();
    assert_eq!(x.grad(), 1.0);
    assert_eq!(z.operands()[1].grad(), 0.0);
}

#[test]
fn test_add_same_node_twice() {
    let x = Scalar::with_requires_grad(3.0, true);
    let z = &x + &x;
    assert_eq!(z.value(), 6.0);
    assert_eq!(z.operands(), vec![x.clone()]);
    z.backward();
    assert_eq!(x.grad(), 2.0);
}

#[test]
fn test_add_output_requires_grad_regardless_of_inputs() {
    let x = Scalar::new(1.0);
    let y = Scalar::new(2.0);
    let z = &x + &y;
    assert!(z.requires_grad());
    z.backward();
    assert_eq!(x.grad(), 0.0);
    assert_eq!(y.grad(), 0.0);
    assert_eq!(z.grad(), 1.0);
}
