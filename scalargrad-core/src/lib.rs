//! # scalargrad-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Every arithmetic operation on [`Scalar`] records a node in a computation graph.
//! Calling [`Scalar::backward`] on a result walks that graph in reverse topological
//! order and accumulates into each node the derivative of the result with respect
//! to it.
//!
//! ```
//! use scalargrad_core::Scalar;
//!
//! let x = Scalar::with_requires_grad(2.0, true);
//! let y = Scalar::with_requires_grad(-3.0, true);
//! let z = &(&x * &y) + 1.0;
//! z.backward();
//! assert_eq!(z.value(), -5.0);
//! assert_eq!(x.grad(), -3.0);
//! assert_eq!(y.grad(), 2.0);
//! ```

pub mod autograd;
pub mod error;
pub mod ops;
pub mod scalar;
pub mod scalar_data;
pub mod types;
pub mod utils;

pub use error::ScalarGradError;
pub use scalar::{Operand, Scalar};
pub use types::Operation;
