//! # Scalar Operations Module (`ops`)
//!
//! Every operator that builds a derived node lives here, one file per operator.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operator has a core function (`add_op`, `tanh_op`, ...)
//!   that computes the forward value and attaches the matching
//!   [`BackwardOp`](crate::autograd::BackwardOp) variant to the result. These take
//!   already-promoted nodes; number promotion happens at the `Scalar` method /
//!   `std::ops` boundary.
//! - **`_backward` Functions:** the local-derivative formula of the operator, called by
//!   `BackwardOp::backward` during the backward pass. Each one only reads operand
//!   values and only writes operand gradients.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, floordiv, neg, invert, pow.
//! - [`activation`]: relu, tanh.
//! - [`math_elem`]: exp, identity.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
