// src/scalar/autograd_methods.rs

use crate::autograd::{graph, BackwardOp};
use crate::scalar::Scalar;

impl Scalar {
    /// Checks if contributions flowing into this node are accumulated.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// Sets the `requires_grad` flag of this node **in-place**.
    ///
    /// The flag is read when a contribution into this node fires, so changing it
    /// between graph construction and `backward` takes effect.
    pub fn set_requires_grad(&self, requires_grad: bool) {
        self.write_data().requires_grad = requires_grad;
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the accumulated gradient.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Resets the gradient of this node to zero.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Resets the gradient of this node and of all of its ancestors to zero.
    pub fn zero_grad_graph(&self) {
        for node in graph::topological_sort(self) {
            node.zero_grad();
        }
    }

    /// Returns a clone of the local-derivative rule, `None` for leaves.
    pub fn grad_fn(&self) -> Option<BackwardOp> {
        self.read_data().grad_fn.clone()
    }

    /// Computes the gradients of this node with respect to all of its ancestors.
    ///
    /// See [`graph::backward`]: the seed overwrites this node's gradient with `1.0`,
    /// every other gradient is accumulated on top of its current value.
    pub fn backward(&self) {
        graph::backward(self);
    }

    /// Fires this node's own local-derivative rule once, using its current gradient.
    ///
    /// No-op for leaves. `backward` calls this for every node in reverse topological
    /// order; calling it directly is useful to inspect a single operator.
    pub fn backward_step(&self) {
        let (grad_output, grad_fn) = {
            let guard = self.read_data();
            (guard.grad, guard.grad_fn.clone())
        };
        if let Some(op) = grad_fn {
            log::trace!(
                "[backward_step] node {:?} ({}) grad={}",
                self.node_id(),
                op.operation(),
                grad_output
            );
            op.backward(grad_output);
        }
    }
}
