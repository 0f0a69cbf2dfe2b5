//! [`Evaluator`]: an optional heuristic mapping a node to a comparable
//! value, used by ordered frontiers and best-first search.

use std::marker::PhantomData;

use rand::Rng;

use crate::node::Node;

/// Maps a search node to a comparable value; lower is more promising.
///
/// Implementations may inspect [`Node::parent`] to account for the
/// transition just taken (useful for heuristics like Warnsdorf's rule, which
/// depend on how many further moves a candidate opens up). Non-random
/// evaluators must be pure functions of the node: they may be called
/// multiple times on the same node (e.g. while sorting a batch) and must
/// return identical values each time.
pub trait Evaluator<S> {
    /// Computes the evaluation of `node`. Smaller values sort earlier.
    fn evaluate(&self, node: &Node<S>) -> f64;
}

impl<S> Evaluator<S> for Box<dyn Evaluator<S>> {
    fn evaluate(&self, node: &Node<S>) -> f64 {
        (**self).evaluate(node)
    }
}

/// Wraps a plain closure as an [`Evaluator`], for heuristics simple enough
/// not to need their own named type.
pub struct FnEvaluator<S, F> {
    f: F,
    _marker: PhantomData<fn(&S)>,
}

impl<S, F> FnEvaluator<S, F>
where
    F: Fn(&Node<S>) -> f64,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<S, F> Evaluator<S> for FnEvaluator<S, F>
where
    F: Fn(&Node<S>) -> f64,
{
    fn evaluate(&self, node: &Node<S>) -> f64 {
        (self.f)(node)
    }
}

/// A built-in evaluator that orders nodes randomly, by assigning each one a
/// uniformly random positive integer (1 through 1000) every time it is
/// evaluated. Equivalent to randomized ordering rather than a deterministic
/// heuristic; do not rely on it for reproducible results.
#[derive(Default)]
pub struct RandomEvaluator<S> {
    _marker: PhantomData<fn(&S)>,
}

impl<S> RandomEvaluator<S> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S> Evaluator<S> for RandomEvaluator<S> {
    fn evaluate(&self, _node: &Node<S>) -> f64 {
        rand::thread_rng().gen_range(1..=1000) as f64
    }
}
