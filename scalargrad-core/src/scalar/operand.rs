// src/scalar/operand.rs

use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use num_traits::AsPrimitive;
use std::any::Any;

/// A right-hand operand: either a raw real number or an existing node.
///
/// Raw numbers are promoted to fresh unlabeled leaves with gradient tracking
/// disabled when an operator consumes them.
#[derive(Debug, Clone)]
pub enum Operand {
    Number(f64),
    Node(Scalar),
}

impl Operand {
    /// Resolves an arbitrary value into an operand.
    ///
    /// Accepts the primitive integer and float types, [`Scalar`] and `Operand`.
    ///
    /// # Errors
    /// `ScalarGradError::UnsupportedOperandType` for any other type.
    pub fn try_from_any<T: Any>(value: &T) -> Result<Operand, ScalarGradError> {
        let any = value as &dyn Any;
        if let Some(node) = any.downcast_ref::<Scalar>() {
            return Ok(Operand::Node(node.clone()));
        }
        if let Some(operand) = any.downcast_ref::<Operand>() {
            return Ok(operand.clone());
        }
        downcast_number(any)
            .map(Operand::Number)
            .ok_or_else(ScalarGradError::unsupported::<T>)
    }

    /// Promotes the operand to a node.
    ///
    /// A `Node` is returned as-is (same identity); a `Number` becomes a new leaf with
    /// `requires_grad = false` and no label.
    pub fn into_scalar(self) -> Scalar {
        match self {
            Operand::Number(value) => Scalar::new(value),
            Operand::Node(node) => node,
        }
    }
}

/// Tries every supported primitive number type in turn.
fn downcast_number(any: &dyn Any) -> Option<f64> {
    macro_rules! try_numbers {
        ($($ty:ty),+ $(,)?) => {
            $(
                if let Some(n) = any.downcast_ref::<$ty>() {
                    return Some(AsPrimitive::<f64>::as_(*n));
                }
            )+
        };
    }
    try_numbers!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
    None
}

impl From<Scalar> for Operand {
    fn from(node: Scalar) -> Self {
        Operand::Node(node)
    }
}

impl From<&Scalar> for Operand {
    fn from(node: &Scalar) -> Self {
        Operand::Node(node.clone())
    }
}

macro_rules! impl_operand_from_number {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Number(value.as_())
                }
            }
        )+
    };
}

impl_operand_from_number!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Scalar {
    /// Validates that `value` is a real number or a `Scalar`.
    ///
    /// # Errors
    /// `ScalarGradError::UnsupportedOperandType` for any other type.
    pub fn supported_type<T: Any>(value: &T) -> Result<(), ScalarGradError> {
        Operand::try_from_any(value).map(|_| ())
    }

    /// Validates `value` and promotes it to a node.
    ///
    /// A `Scalar` argument is returned as a handle to the same node.
    pub fn as_scalar<T: Any>(value: &T) -> Result<Scalar, ScalarGradError> {
        Operand::try_from_any(value).map(Operand::into_scalar)
    }
}
