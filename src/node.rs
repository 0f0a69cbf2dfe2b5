//! [`Node`]: a state placed inside the search tree, with its parent link,
//! incoming operation, and cumulative cost.

use std::sync::Arc;

use crate::operator::Operation;

/// A vertex of the search tree.
///
/// The root node (the problem's initial state) has no parent and no
/// incoming operation, and a cumulative cost of `0.0`. Every other node is
/// produced by [`apply`](Operation::apply)-ing its incoming operation to its
/// parent's state.
///
/// Parent links are reference-counted (`Arc`) rather than indices into an
/// ever-growing arena: once no live node or frontier entry references a
/// branch of the tree, it is reclaimed by ordinary `Drop` semantics.
pub struct Node<S> {
    state: Arc<S>,
    parent: Option<Arc<Node<S>>>,
    incoming_operation: Option<Operation<S>>,
    cumulative_cost: f64,
}

// Every field is cheaply `Clone` regardless of whether `S` itself is: `Arc<T>`
// is `Clone` unconditionally, and so is `Operation<S>`. Derived manually
// (rather than with `#[derive(Clone)]`) because the derive macro would
// otherwise add a spurious `S: Clone` bound to the generated impl.
impl<S> Clone for Node<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            parent: self.parent.clone(),
            incoming_operation: self.incoming_operation.clone(),
            cumulative_cost: self.cumulative_cost,
        }
    }
}

impl<S> Node<S> {
    /// Creates the root node for `initial_state`.
    pub fn root(initial_state: S) -> Self {
        Self {
            state: Arc::new(initial_state),
            parent: None,
            incoming_operation: None,
            cumulative_cost: 0.0,
        }
    }

    /// Creates a child of `parent` reached by `operation`, whose cumulative
    /// cost is `parent.cumulative_cost() + operation.cost()`.
    pub fn child(parent: &Arc<Node<S>>, operation: Operation<S>) -> Self
    where
        S: Clone,
    {
        let state = operation.apply(&parent.state);
        Self::child_with_state(parent, operation, state)
    }

    /// Like [`Node::child`], but takes an already-computed successor state
    /// rather than applying `operation` again. Used by the engine, which
    /// needs the materialized state to run `is_valid`/graph-dedup checks
    /// before deciding whether to keep the node at all.
    pub(crate) fn child_with_state(
        parent: &Arc<Node<S>>,
        operation: Operation<S>,
        state: S,
    ) -> Self {
        let cumulative_cost = parent.cumulative_cost + operation.cost();
        Self {
            state: Arc::new(state),
            parent: Some(Arc::clone(parent)),
            incoming_operation: Some(operation),
            cumulative_cost,
        }
    }

    /// The state held by this node.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// A shared handle to the state held by this node, useful for callers
    /// who want to avoid a clone of `S` itself.
    pub fn state_arc(&self) -> &Arc<S> {
        &self.state
    }

    /// This node's parent, or `None` for the root.
    pub fn parent(&self) -> Option<&Arc<Node<S>>> {
        self.parent.as_ref()
    }

    /// The operation that produced this node from its parent, or `None` for
    /// the root.
    pub fn incoming_operation(&self) -> Option<&Operation<S>> {
        self.incoming_operation.as_ref()
    }

    /// The total cost accumulated from the root to this node.
    pub fn cumulative_cost(&self) -> f64 {
        self.cumulative_cost
    }

    /// `true` for the initial state of the search.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::Operator;

    #[derive(Clone, Debug, PartialEq)]
    struct Pos(i32, i32);

    #[test]
    fn child_cost_is_additive() {
        let step: Operator<Pos, i32> = Operator::with_default_cost("right", |s, n| s.0 += n);
        let root = Arc::new(Node::root(Pos(0, 0)));
        let op = step.invoke(3, Some(2.0)).unwrap();
        let child = Node::child(&root, op);
        assert_eq!(child.cumulative_cost(), 2.0);
        assert_eq!(child.state(), &Pos(3, 0));
        assert!(root.is_root());
        assert!(!child.is_root());
        assert!(Arc::ptr_eq(child.parent().unwrap(), &root));
    }
}
