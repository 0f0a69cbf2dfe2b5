//! [`SearchStrategy`]: picks a [`Frontier`] discipline, and therefore a
//! search method, for a [`Problem`](crate::Problem) query.

use crate::evaluator::Evaluator;
use crate::frontier::{Frontier, OrderedQueue, OrderedStack, PriorityQueue, Queue, Stack};

/// The names of every search method this crate offers, in the order the
/// spec lists them.
pub const METHODS: &[&str] = &["DepthFirst", "BreadthFirst", "BestFirst"];

/// The names of the search methods usable without an evaluator.
pub const BLIND_METHODS: &[&str] = &["DepthFirst", "BreadthFirst"];

/// Returns the names of every search method this crate offers.
pub fn methods() -> &'static [&'static str] {
    METHODS
}

/// Returns the names of the search methods that require no evaluator.
pub fn blind_methods() -> &'static [&'static str] {
    BLIND_METHODS
}

/// Chooses which [`Frontier`] discipline a search runs with.
///
/// * `DepthFirst` uses a [`Stack`], or an [`OrderedStack`] if given an
///   evaluator (batch-local ordering only).
/// * `BreadthFirst` uses a [`Queue`], or an [`OrderedQueue`] if given an
///   evaluator (batch-local ordering only).
/// * `BestFirst` uses a [`PriorityQueue`], globally ordered by the required
///   evaluator.
pub enum SearchStrategy<S> {
    DepthFirst(Option<Box<dyn Evaluator<S>>>),
    BreadthFirst(Option<Box<dyn Evaluator<S>>>),
    BestFirst(Box<dyn Evaluator<S>>),
}

impl<S> SearchStrategy<S> {
    /// Plain depth-first search: a LIFO frontier, no evaluator.
    pub fn depth_first() -> Self {
        SearchStrategy::DepthFirst(None)
    }

    /// Evaluated depth-first search: a LIFO frontier whose successor
    /// batches are sorted ascending by `evaluator` before being pushed.
    pub fn depth_first_with(evaluator: impl Evaluator<S> + 'static) -> Self {
        SearchStrategy::DepthFirst(Some(Box::new(evaluator)))
    }

    /// Plain breadth-first search: a FIFO frontier, no evaluator.
    pub fn breadth_first() -> Self {
        SearchStrategy::BreadthFirst(None)
    }

    /// Evaluated breadth-first search: a FIFO frontier whose successor
    /// batches are sorted ascending by `evaluator` before being appended.
    pub fn breadth_first_with(evaluator: impl Evaluator<S> + 'static) -> Self {
        SearchStrategy::BreadthFirst(Some(Box::new(evaluator)))
    }

    /// Best-first search: a globally-ordered priority queue. An evaluator
    /// is mandatory, enforced here at the type level.
    pub fn best_first(evaluator: impl Evaluator<S> + 'static) -> Self {
        SearchStrategy::BestFirst(Box::new(evaluator))
    }

    /// The name of this strategy's search method, as listed in
    /// [`methods`].
    pub fn name(&self) -> &'static str {
        match self {
            SearchStrategy::DepthFirst(_) => "DepthFirst",
            SearchStrategy::BreadthFirst(_) => "BreadthFirst",
            SearchStrategy::BestFirst(_) => "BestFirst",
        }
    }

    pub(crate) fn into_frontier(self) -> Box<dyn Frontier<S>>
    where
        S: 'static,
    {
        match self {
            SearchStrategy::DepthFirst(None) => Box::new(Stack::new()),
            SearchStrategy::DepthFirst(Some(evaluator)) => Box::new(OrderedStack::new(evaluator)),
            SearchStrategy::BreadthFirst(None) => Box::new(Queue::new()),
            SearchStrategy::BreadthFirst(Some(evaluator)) => {
                Box::new(OrderedQueue::new(evaluator))
            }
            SearchStrategy::BestFirst(evaluator) => Box::new(PriorityQueue::new(evaluator)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names() {
        assert_eq!(methods(), &["DepthFirst", "BreadthFirst", "BestFirst"]);
        assert_eq!(blind_methods(), &["DepthFirst", "BreadthFirst"]);
    }

    #[test]
    fn strategy_name_matches_constructor() {
        let s: SearchStrategy<i32> = SearchStrategy::depth_first();
        assert_eq!(s.name(), "DepthFirst");
        let s: SearchStrategy<i32> = SearchStrategy::breadth_first();
        assert_eq!(s.name(), "BreadthFirst");
    }
}
