//! [`Path`]: the lazily-reconstructable sequence of `(state, operation)`
//! pairs from the root of a search to a chosen node.

use std::sync::Arc;

use crate::node::Node;
use crate::operator::Operation;

/// The chain of states and the operations connecting them, from the root of
/// a search to some node, in forward order.
///
/// The terminal state is accessible separately via [`Path::terminal`] and is
/// not paired with an operation, matching the spec's convention that the
/// final state has no "outgoing" step.
pub struct Path<S> {
    steps: Vec<(Arc<S>, Operation<S>)>,
    terminal: Arc<S>,
}

impl<S> Path<S> {
    /// Reconstructs the path from the root to `node` by walking parent
    /// links backward, then reversing.
    pub fn from_node(node: &Node<S>) -> Self {
        // Walk from `node` up to the root, recording each non-root node's
        // state and the operation that produced it from its own parent.
        // This yields steps in reverse (terminal-first) order; reversing
        // gives the root-first `(state, operation)` pairs the caller wants,
        // where `operation` is the step taken *out of* `state`.
        let mut reversed_steps = Vec::new();
        let mut current = node;
        while let Some(parent) = current.parent() {
            let op = current
                .incoming_operation()
                .expect("non-root node always has an incoming operation")
                .clone();
            reversed_steps.push((Arc::clone(parent.state_arc()), op));
            current = parent;
        }
        reversed_steps.reverse();

        Path {
            steps: reversed_steps,
            terminal: Arc::clone(node.state_arc()),
        }
    }

    /// The `(state, operation)` pairs leading to the terminal state, root
    /// first.
    pub fn steps(&self) -> &[(Arc<S>, Operation<S>)] {
        &self.steps
    }

    /// The final state reached by this path (not paired with an operation).
    pub fn terminal(&self) -> &S {
        &self.terminal
    }

    /// Iterates over the states visited by this path, root through
    /// terminal, inclusive on both ends. `len() == steps().len() + 1`.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.steps
            .iter()
            .map(|(s, _)| s.as_ref())
            .chain(std::iter::once(self.terminal.as_ref()))
    }

    /// The number of operations in this path (one less than the number of
    /// states).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` if this path is just the root (no operations taken).
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::Action;

    #[derive(Clone, Debug, PartialEq)]
    struct Pos(i32, i32);

    #[test]
    fn reconstructs_root_to_leaf() {
        let right = Action::with_default_cost("right", |s: &mut Pos| s.0 += 1);
        let up = Action::with_default_cost("up", |s: &mut Pos| s.1 += 1);

        let root = Arc::new(Node::root(Pos(0, 0)));
        let n1 = Arc::new(Node::child(&root, right.invoke()));
        let n2 = Node::child(&n1, up.invoke());

        let path = Path::from_node(&n2);
        assert_eq!(path.len(), 2);
        assert_eq!(path.states().collect::<Vec<_>>(), vec![&Pos(0, 0), &Pos(1, 0), &Pos(1, 1)]);
        assert_eq!(path.terminal(), &Pos(1, 1));
        assert_eq!(path.steps()[0].1.name(), "right");
        assert_eq!(path.steps()[1].1.name(), "up");
    }

    #[test]
    fn root_only_path_is_empty() {
        let root = Node::root(Pos(0, 0));
        let path = Path::from_node(&root);
        assert!(path.is_empty());
        assert_eq!(path.terminal(), &Pos(0, 0));
        assert_eq!(path.states().count(), 1);
    }
}
