//! # Autograd
//!
//! Reverse-mode differentiation over the scalar graph.
//!
//! - [`BackwardOp`]: the local-derivative rule stored on every derived node, a tagged
//!   variant over the operator kind holding handles to the operands.
//! - [`graph`]: topological ordering of a node's ancestors and the backward driver.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
pub use graph::{backward, topological_sort};

use crate::scalar::Scalar;

/// Adds `contribution` into the gradient of `node`, gated by the node's own
/// `requires_grad` flag.
///
/// The flag is read under the same write lock as the update, so the flag seen is the
/// one in effect when the contribution fires. A disabled node is left untouched
/// (equivalent to scaling the contribution by zero, without letting a `NaN`
/// contribution leak into it).
pub(crate) fn accumulate_gradient(node: &Scalar, contribution: f64) {
    let mut guard = node.write_data();
    if guard.requires_grad {
        guard.grad += contribution;
    }
}
