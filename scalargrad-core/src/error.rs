use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
///
/// Graph construction has exactly one failure mode: an operand that is neither a
/// real number nor a [`Scalar`](crate::Scalar). Numeric faults (division by zero,
/// `ln` of a non-positive base in the power derivative, fractional powers of a
/// negative base) are not errors; they surface as IEEE-754 `inf`/`NaN` values.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Unsupported operand type: {type_name} (expected a real number or a Scalar)")]
    UnsupportedOperandType { type_name: String },
}

impl ScalarGradError {
    /// Builds an `UnsupportedOperandType` error naming the rejected type `T`.
    pub(crate) fn unsupported<T: ?Sized>() -> Self {
        ScalarGradError::UnsupportedOperandType {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }
}
