// src/scalar/op_methods.rs

use crate::error::ScalarGradError;
use crate::ops::activation::{relu_op, tanh_op};
use crate::ops::arithmetic::{
    add_op, div_op, floordiv_op, invert_op, mul_op, neg_op, pow_op, sub_op,
};
use crate::ops::math_elem::{exp_op, identity_op};
use crate::scalar::{Operand, Scalar};
use std::any::Any;

/// Applies an optional label to a freshly built node.
fn labeled(node: Scalar, label: Option<&str>) -> Scalar {
    if label.is_some() {
        node.set_label(label);
    }
    node
}

/// Resolves a dynamically typed right-hand operand into a node.
fn promote<T: Any>(other: &T) -> Result<Scalar, ScalarGradError> {
    Operand::try_from_any(other).map(Operand::into_scalar)
}

/// Named operator methods.
///
/// Binary methods accept any value: real numbers and `Scalar`s are promoted, every
/// other type fails with `UnsupportedOperandType`. The optional label is applied to
/// the result and never changes its value or gradients.
impl Scalar {
    pub fn add<T: Any>(&self, other: &T, label: Option<&str>) -> Result<Scalar, ScalarGradError> {
        Ok(labeled(add_op(self, &promote(other)?), label))
    }

    pub fn sub<T: Any>(&self, other: &T, label: Option<&str>) -> Result<Scalar, ScalarGradError> {
        Ok(labeled(sub_op(self, &promote(other)?), label))
    }

    pub fn mul<T: Any>(&self, other: &T, label: Option<&str>) -> Result<Scalar, ScalarGradError> {
        Ok(labeled(mul_op(self, &promote(other)?), label))
    }

    /// True division.
    pub fn div<T: Any>(&self, other: &T, label: Option<&str>) -> Result<Scalar, ScalarGradError> {
        Ok(labeled(div_op(self, &promote(other)?), label))
    }

    /// `floor(self / other)`. Its gradient is defined as zero for both operands.
    pub fn floordiv<T: Any>(
        &self,
        other: &T,
        label: Option<&str>,
    ) -> Result<Scalar, ScalarGradError> {
        Ok(labeled(floordiv_op(self, &promote(other)?), label))
    }

    /// `self ^ other`.
    pub fn pow<T: Any>(&self, other: &T, label: Option<&str>) -> Result<Scalar, ScalarGradError> {
        Ok(labeled(pow_op(self, &promote(other)?), label))
    }

    // --- Reflected forms: `other op self` ---

    /// `other + self`, built as `self + other`.
    pub fn radd<T: Any>(&self, other: &T) -> Result<Scalar, ScalarGradError> {
        Ok(add_op(self, &promote(other)?))
    }

    /// `other - self`.
    pub fn rsub<T: Any>(&self, other: &T) -> Result<Scalar, ScalarGradError> {
        Ok(sub_op(&promote(other)?, self))
    }

    /// `other * self`, built as `self * other`.
    pub fn rmul<T: Any>(&self, other: &T) -> Result<Scalar, ScalarGradError> {
        Ok(mul_op(self, &promote(other)?))
    }

    /// `other / self`.
    pub fn rdiv<T: Any>(&self, other: &T) -> Result<Scalar, ScalarGradError> {
        Ok(div_op(&promote(other)?, self))
    }

    /// `floor(other / self)`.
    pub fn rfloordiv<T: Any>(&self, other: &T) -> Result<Scalar, ScalarGradError> {
        Ok(floordiv_op(&promote(other)?, self))
    }

    /// `other ^ self`.
    pub fn rpow<T: Any>(&self, other: &T) -> Result<Scalar, ScalarGradError> {
        Ok(pow_op(&promote(other)?, self))
    }

    // --- Unary ---

    pub fn neg(&self, label: Option<&str>) -> Scalar {
        labeled(neg_op(self), label)
    }

    /// `self⁻¹`.
    pub fn invert(&self, label: Option<&str>) -> Scalar {
        labeled(invert_op(self), label)
    }

    pub fn exp(&self, label: Option<&str>) -> Scalar {
        labeled(exp_op(self), label)
    }

    pub fn tanh(&self, label: Option<&str>) -> Scalar {
        labeled(tanh_op(self), label)
    }

    pub fn relu(&self, label: Option<&str>) -> Scalar {
        labeled(relu_op(self), label)
    }

    /// A new node with the same value whose gradient flows straight through.
    pub fn identity(&self, label: Option<&str>) -> Scalar {
        labeled(identity_op(self), label)
    }
}
