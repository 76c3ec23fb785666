//! # Elementary Math Functions
//!
//! - [`exp`]: natural exponential.
//! - [`identity`]: value pass-through that still records a graph node.

pub mod exp;
pub mod identity;

pub use exp::exp_op;
pub use identity::identity_op;
