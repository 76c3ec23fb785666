// src/scalar/mod.rs

use crate::autograd::BackwardOp;
use crate::scalar_data::ScalarData;
use crate::types::Operation;
use num_traits::AsPrimitive;
use std::sync::{Arc, RwLock};

mod autograd_methods;
mod debug;
mod op_methods;
mod traits;

pub mod create;
pub mod operand;

pub use operand::Operand;

/// Identity of a node: the address of its shared `RwLock<ScalarData>`.
///
/// Stable across handle clones, so it is used as the key of the visited-set during
/// graph traversal.
pub type NodeId = *const RwLock<ScalarData>;

/// A scalar vertex of the computation graph.
///
/// `Scalar` uses `Arc<RwLock<ScalarData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node used by several derived nodes is stored once;
///     cloning a `Scalar` clones the handle, not the node.
/// 2.  **Interior Mutability:** the gradient accumulator (and the `requires_grad`
///     flag) can be updated through shared handles. The per-node lock serialises the
///     read-modify-write of gradient accumulation if handles cross threads.
///
/// Operands are held by strong handles pointing strictly towards older nodes, so
/// the graph is acyclic by construction and nodes live as long as their longest holder.
pub struct Scalar {
    pub(crate) data: Arc<RwLock<ScalarData>>,
}

impl Scalar {
    /// Creates an unlabeled leaf with gradient tracking disabled.
    pub fn new<N: AsPrimitive<f64>>(value: N) -> Self {
        Self::leaf(value, None, false)
    }

    /// Creates a labeled leaf with gradient tracking disabled.
    pub fn with_label<N: AsPrimitive<f64>>(value: N, label: &str) -> Self {
        Self::leaf(value, Some(label), false)
    }

    /// Creates an unlabeled leaf with the given `requires_grad` flag.
    pub fn with_requires_grad<N: AsPrimitive<f64>>(value: N, requires_grad: bool) -> Self {
        Self::leaf(value, None, requires_grad)
    }

    /// Creates a leaf node (`Operation::None`, no operands).
    pub fn leaf<N: AsPrimitive<f64>>(value: N, label: Option<&str>, requires_grad: bool) -> Self {
        Self::from_data(ScalarData::new(
            value.as_(),
            label.map(str::to_string),
            requires_grad,
        ))
    }

    /// Creates a node with explicit provenance and no backward rule.
    ///
    /// The operands are deduplicated by identity. Since no local-derivative rule is
    /// attached, a backward pass walks through this node without propagating anything
    /// into `operands`.
    pub fn from_parts<N: AsPrimitive<f64>>(
        value: N,
        label: Option<&str>,
        requires_grad: bool,
        operation: Operation,
        operands: &[Scalar],
    ) -> Self {
        let mut data = ScalarData::new(value.as_(), label.map(str::to_string), requires_grad);
        data.operation = operation;
        data.operands = dedup_by_identity(operands.iter().cloned());
        Self::from_data(data)
    }

    /// Creates the output node of an operator.
    ///
    /// The result always has `requires_grad = true`; the operation tag and the operand
    /// list are derived from `grad_fn`, operands deduplicated by identity.
    pub(crate) fn from_op(value: f64, grad_fn: BackwardOp) -> Self {
        let mut data = ScalarData::new(value, None, true);
        data.operation = grad_fn.operation();
        data.operands = dedup_by_identity(grad_fn.inputs());
        data.grad_fn = Some(grad_fn);
        Self::from_data(data)
    }

    fn from_data(data: ScalarData) -> Self {
        Scalar {
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Acquires a read lock on the node's data.
    ///
    /// Panics if the RwLock is poisoned.
    pub fn read_data(&self) -> std::sync::RwLockReadGuard<'_, ScalarData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the node's data.
    ///
    /// Panics if the RwLock is poisoned.
    pub fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, ScalarData> {
        self.data.write().expect("RwLock poisoned")
    }

    /// Returns the forward value.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Returns a clone of the label, if any.
    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    /// Sets (or clears) the label. Labels never affect computation.
    pub fn set_label(&self, label: Option<&str>) {
        self.write_data().label = label.map(str::to_string);
    }

    /// Returns the operator that produced this node.
    pub fn operation(&self) -> Operation {
        self.read_data().operation
    }

    /// Returns handles to the nodes this one was derived from.
    pub fn operands(&self) -> Vec<Scalar> {
        self.read_data().operands.clone()
    }

    /// Returns `true` for nodes created directly from a number.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Returns the identity of this node.
    pub fn node_id(&self) -> NodeId {
        Arc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Scalar) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Creates a new leaf holding the same value and label, cut off from the graph.
    pub fn detach(&self) -> Scalar {
        let guard = self.read_data();
        Self::from_data(ScalarData::new(guard.value, guard.label.clone(), false))
    }
}

/// Keeps the first occurrence of every node identity.
pub(crate) fn dedup_by_identity<I>(nodes: I) -> Vec<Scalar>
where
    I: IntoIterator<Item = Scalar>,
{
    let mut unique: Vec<Scalar> = Vec::new();
    for node in nodes {
        if !unique.iter().any(|seen| seen.ptr_eq(&node)) {
            unique.push(node);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_defaults() {
        let a = Scalar::new(21);
        assert_eq!(a.value(), 21.0);
        assert_eq!(a.grad(), 0.0);
        assert!(!a.requires_grad());
        assert_eq!(a.label(), None);
        assert_eq!(a.operation(), Operation::None);
        assert!(a.operands().is_empty());
        assert!(a.is_leaf());
    }

    #[test]
    fn test_leaf_with_label_and_grad() {
        let a = Scalar::leaf(1.5_f32, Some("a"), true);
        assert_eq!(a.value(), 1.5);
        assert_eq!(a.label().as_deref(), Some("a"));
        assert!(a.requires_grad());
    }

    #[test]
    fn test_clone_shares_node() {
        let a = Scalar::new(1.0);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(a.node_id(), b.node_id());
        b.set_grad(3.0);
        assert_eq!(a.grad(), 3.0);

        let c = Scalar::new(1.0);
        assert!(!a.ptr_eq(&c));
    }

    #[test]
    fn test_from_parts_dedups_operands() {
        let x = Scalar::new(21);
        let a = Scalar::from_parts(21, Some("a"), false, Operation::Identity, &[x.clone(), x.clone()]);
        assert_eq!(a.operands().len(), 1);
        assert!(a.operands()[0].ptr_eq(&x));
        assert_eq!(a.operation(), Operation::Identity);
        assert!(!a.is_leaf());
    }

    #[test]
    fn test_dedup_keeps_equal_valued_distinct_nodes() {
        let x = Scalar::new(2.0);
        let y = Scalar::new(2.0);
        let unique = dedup_by_identity(vec![x.clone(), y.clone(), x.clone()]);
        assert_eq!(unique.len(), 2);
        assert!(unique[0].ptr_eq(&x));
        assert!(unique[1].ptr_eq(&y));
    }

    #[test]
    fn test_detach() {
        let x = Scalar::leaf(2.0, Some("x"), true);
        let y = &x * 3.0;
        let d = y.detach();
        assert_eq!(d.value(), 6.0);
        assert!(d.is_leaf());
        assert!(!d.requires_grad());
        assert!(!d.ptr_eq(&y));
    }
}
