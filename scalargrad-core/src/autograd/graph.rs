use crate::scalar::{NodeId, Scalar};
use std::collections::HashSet;

/// A node on the explicit DFS stack, with the index of the next operand to visit.
struct Frame {
    node: Scalar,
    operands: Vec<Scalar>,
    next: usize,
}

impl Frame {
    fn new(node: Scalar) -> Self {
        let operands = node.operands();
        Frame {
            node,
            operands,
            next: 0,
        }
    }
}

/// Orders `root` and all of its ancestors so that every node comes after all of its
/// operands (leaves first, `root` last).
///
/// Depth-first post-order traversal, operands visited in their stored order. A
/// visited-set keyed by node identity emits a shared node once, on the first path
/// that reaches it, which keeps the walk O(V+E) on graphs with heavy reuse and makes
/// the order deterministic for a given construction order. The traversal uses an
/// explicit stack, so long chains do not exhaust the call stack.
pub fn topological_sort(root: &Scalar) -> Vec<Scalar> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted: Vec<Scalar> = Vec::new();

    visited.insert(root.node_id());
    let mut stack = vec![Frame::new(root.clone())];

    while let Some(frame) = stack.last_mut() {
        if frame.next < frame.operands.len() {
            let operand = frame.operands[frame.next].clone();
            frame.next += 1;
            if visited.insert(operand.node_id()) {
                log::trace!("[topological_sort] visiting node {:?}", operand.node_id());
                stack.push(Frame::new(operand));
            }
        } else if let Some(done) = stack.pop() {
            sorted.push(done.node);
        }
    }

    sorted
}

/// Runs a backward pass from `root`.
///
/// Seeds `root`'s gradient with `1.0`, then fires the local-derivative rule of every
/// node in reverse topological order (consumers before their operands), each exactly
/// once. Gradients are accumulated, never reset: running this twice over overlapping
/// graphs adds the second pass on top of the first.
pub fn backward(root: &Scalar) {
    root.set_grad(1.0);
    if root.is_leaf() {
        log::debug!("backward() called on a leaf node. No operation to perform.");
        return;
    }

    let sorted = topological_sort(root);
    log::debug!("backward() over {} nodes", sorted.len());

    for node in sorted.iter().rev() {
        node.backward_step();
    }
    log::debug!("backward() done");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[Scalar], node: &Scalar) -> usize {
        order
            .iter()
            .position(|n| n.ptr_eq(node))
            .expect("node missing from topological order")
    }

    #[test]
    fn test_topological_sort_contains_each_node_once() {
        let x1 = Scalar::new(1.0);
        let w1 = Scalar::new(-0.5);
        let x1w1 = &x1 * &w1;
        let x2 = Scalar::new(-3.0);
        let w2 = Scalar::new(0.1);
        let x2w2 = &x2 * &w2;
        let x1w1x2w2 = &x1w1 + &x2w2;
        let b = Scalar::new(2.5);
        let x1w1x2w2b = &x1w1x2w2 + &b;
        let out = x1w1x2w2b.tanh(None);

        let order = topological_sort(&out);
        let expected = [&x1, &w1, &x1w1, &x2, &w2, &x2w2, &x1w1x2w2, &b, &x1w1x2w2b, &out];
        assert_eq!(order.len(), expected.len());
        for (got, want) in order.iter().zip(expected.iter()) {
            assert!(got.ptr_eq(want));
        }
    }

    #[test]
    fn test_operands_precede_consumers() {
        let x = Scalar::with_requires_grad(2.0, true);
        let y = &x * &x;
        let z = &(&y + &x) * &y;
        let order = topological_sort(&z);
        for node in &order {
            for operand in node.operands() {
                assert!(position(&order, &operand) < position(&order, node));
            }
        }
        assert!(order.last().unwrap().ptr_eq(&z));
    }

    #[test]
    fn test_diamond_visits_shared_node_once() {
        let a = Scalar::new(1.0);
        let ab = &a + 3.0;
        let ac = &a + 5.0;
        let abac = &ab + &ac;
        let order = topological_sort(&abac);
        let count = order.iter().filter(|n| n.ptr_eq(&a)).count();
        assert_eq!(count, 1);
        // a, 3.0, ab, 5.0, ac, abac
        assert_eq!(order.len(), 6);
        assert_eq!(position(&order, &a), 0);
    }

    #[test]
    fn test_leaf_sorts_to_itself() {
        let a = Scalar::new(1.0);
        let order = topological_sort(&a);
        assert_eq!(order.len(), 1);
        assert!(order[0].ptr_eq(&a));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let x = Scalar::with_requires_grad(0.0, true);
        let mut acc = x.clone();
        for _ in 0..50_000 {
            acc = &acc + 1.0;
        }
        let order = topological_sort(&acc);
        // x, then one constant and one sum per step
        assert_eq!(order.len(), 1 + 2 * 50_000);
        backward(&acc);
        assert_eq!(x.grad(), 1.0);
    }

    #[test]
    fn test_shared_reuse_is_linear() {
        // Each level reuses the previous node twice; a naive path walk would be 2^40.
        let x = Scalar::with_requires_grad(1.0, true);
        let mut acc = x.clone();
        for _ in 0..40 {
            acc = &acc + &acc;
        }
        let order = topological_sort(&acc);
        assert_eq!(order.len(), 41);
        backward(&acc);
        assert_eq!(x.grad(), 2f64.powi(40));
    }

    #[test]
    fn test_backward_on_leaf_seeds_only() {
        let a = Scalar::with_requires_grad(4.0, true);
        backward(&a);
        assert_eq!(a.grad(), 1.0);
    }
}
