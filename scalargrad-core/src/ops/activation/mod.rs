//! # Activation Functions
//!
//! Non-linear functions commonly used in neural networks.
//!
//! ## Currently Implemented:
//! - [`relu`]: Rectified Linear Unit, `max(0, x)`.
//! - [`tanh`]: Hyperbolic tangent.

pub mod relu;
pub mod tanh;

pub use relu::relu_op;
pub use tanh::tanh_op;
