// src/scalar/traits.rs

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::scalar::{Operand, Scalar};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

impl Clone for Scalar {
    /// Clones the handle. This is a shallow clone that increases the reference count
    /// of the underlying node; gradient updates through one clone are visible through
    /// the others.
    fn clone(&self) -> Self {
        Scalar {
            data: Arc::clone(&self.data),
        }
    }
}

impl PartialEq for Scalar {
    /// Two handles are equal when they refer to the same node. Nodes with equal
    /// values are still distinct graph vertices.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    /// Hashes the pointer address of the node, consistent with `PartialEq`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

// --- Binary operators: `&node op rhs` ---
//
// The right-hand side is anything convertible into an `Operand`, so the set of
// accepted types is checked at compile time and these impls cannot fail.

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a, O: Into<Operand>> $trait<O> for &'a Scalar {
            type Output = Scalar;

            fn $method(self, rhs: O) -> Scalar {
                $op_fn(self, &rhs.into().into_scalar())
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        neg_op(self)
    }
}

// --- Reflected operators: `number op &node` ---
//
// Addition and multiplication swap the arguments. Subtraction and division build
// `number op node` so that each side keeps its own derivative formula.

macro_rules! impl_reflected_ops {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'a> Add<&'a Scalar> for $ty {
                type Output = Scalar;

                fn add(self, rhs: &'a Scalar) -> Scalar {
                    add_op(rhs, &Operand::from(self).into_scalar())
                }
            }

            impl<'a> Mul<&'a Scalar> for $ty {
                type Output = Scalar;

                fn mul(self, rhs: &'a Scalar) -> Scalar {
                    mul_op(rhs, &Operand::from(self).into_scalar())
                }
            }

            impl<'a> Sub<&'a Scalar> for $ty {
                type Output = Scalar;

                fn sub(self, rhs: &'a Scalar) -> Scalar {
                    sub_op(&Operand::from(self).into_scalar(), rhs)
                }
            }

            impl<'a> Div<&'a Scalar> for $ty {
                type Output = Scalar;

                fn div(self, rhs: &'a Scalar) -> Scalar {
                    div_op(&Operand::from(self).into_scalar(), rhs)
                }
            }
        )+
    };
}

impl_reflected_ops!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use crate::types::Operation;
    use crate::Scalar;
    use std::collections::HashSet;

    #[test]
    fn test_identity_equality() {
        let a = Scalar::new(2.0);
        let b = Scalar::new(2.0);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);

        let set: HashSet<Scalar> = [a.clone(), a.clone(), b.clone()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_binary_operators_accept_nodes_and_numbers() {
        let x = Scalar::with_requires_grad(6.0, true);
        let y = Scalar::with_requires_grad(3.0, true);
        assert_eq!((&x + &y).value(), 9.0);
        assert_eq!((&x - 1).value(), 5.0);
        assert_eq!((&x * 0.5_f32).value(), 3.0);
        assert_eq!((&x / y.clone()).value(), 2.0);
        assert_eq!((-&x).value(), -6.0);
    }

    #[test]
    fn test_reflected_add_swaps_order() {
        let x = Scalar::with_requires_grad(1.0, true);
        let z = 2.0_f64 + &x;
        assert_eq!(z.value(), 3.0);
        let operands = z.operands();
        assert!(operands[0].ptr_eq(&x));
        assert_eq!(operands[1].value(), 2.0);
    }

    #[test]
    fn test_reflected_sub_keeps_order() {
        let x = Scalar::with_requires_grad(2.0, true);
        let z = 1_i32 - &x;
        assert_eq!(z.value(), -1.0);
        assert_eq!(z.operation(), Operation::Subtraction);
        let operands = z.operands();
        assert_eq!(operands[0].value(), 1.0);
        assert!(operands[1].ptr_eq(&x));
    }

    #[test]
    fn test_reflected_div() {
        let x = Scalar::with_requires_grad(4.0, true);
        let z = 2.0_f64 / &x;
        assert_eq!(z.value(), 0.5);
        z.backward();
        // d(2/x)/dx = -2/x^2
        assert_eq!(x.grad(), -2.0 / 16.0);
    }
}
