// src/scalar_data.rs

use crate::autograd::BackwardOp;
use crate::scalar::Scalar;
use crate::types::Operation;
use std::sync::{Arc, PoisonError};

/// Internal storage and metadata for a [`Scalar`] node.
///
/// This struct holds the forward value together with the autograd bookkeeping.
/// It is wrapped in `Arc<RwLock<ScalarData>>` by the `Scalar` handle so that a node
/// used by several downstream operations has a single canonical storage location.
#[derive(Debug)]
pub struct ScalarData {
    /// The forward-computed value.
    pub(crate) value: f64,
    /// Accumulated gradient of the last backward root with respect to this node.
    /// Zero until a backward pass reaches the node.
    pub(crate) grad: f64,
    /// Gates whether contributions flowing into this node are accumulated.
    pub(crate) requires_grad: bool,
    /// Optional human-readable name. Never affects computation.
    pub(crate) label: Option<String>,
    /// Nodes this one was derived from, deduplicated by identity, in first-seen order.
    pub(crate) operands: Vec<Scalar>,
    /// Operator that produced this node.
    pub(crate) operation: Operation,
    /// Local-derivative rule fired during backward. `None` for leaves.
    pub(crate) grad_fn: Option<BackwardOp>,
}

impl ScalarData {
    /// Creates the payload of a leaf node: no operands, no backward rule, zero gradient.
    pub fn new(value: f64, label: Option<String>, requires_grad: bool) -> Self {
        ScalarData {
            value,
            grad: 0.0,
            requires_grad,
            label,
            operands: Vec::new(),
            operation: Operation::None,
            grad_fn: None,
        }
    }

    /// Returns `true` when no operator produced this node.
    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty() && self.grad_fn.is_none()
    }
}

impl Drop for ScalarData {
    /// Releases the upstream graph iteratively.
    ///
    /// Operands uniquely owned by this node are unlinked one by one from an explicit
    /// stack instead of through nested destructor calls, so dropping a very deep chain
    /// cannot overflow the call stack.
    fn drop(&mut self) {
        let mut pending: Vec<Scalar> = std::mem::take(&mut self.operands);
        if let Some(grad_fn) = self.grad_fn.take() {
            pending.extend(grad_fn.inputs());
        }
        while let Some(Scalar { data }) = pending.pop() {
            if let Ok(lock) = Arc::try_unwrap(data) {
                let mut inner = lock.into_inner().unwrap_or_else(PoisonError::into_inner);
                pending.append(&mut inner.operands);
                if let Some(grad_fn) = inner.grad_fn.take() {
                    pending.extend(grad_fn.inputs());
                }
            }
        }
    }
}
