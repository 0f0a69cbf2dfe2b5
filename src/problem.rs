//! [`Problem`]: a starting state, a generator, and a goal predicate, offering
//! the three query surfaces a client actually wants — first solution, all
//! solutions, optimal solution.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::engine::SearchIter;
use crate::error::SearchError;
use crate::generator::Generator;
use crate::node::Node;
use crate::path::Path;
use crate::strategy::SearchStrategy;

/// A node recognized as a goal, with convenience accessors.
///
/// Carries a snapshot of the driving search's `nb_explored`/`nb_solutions`
/// counters as of the moment this solution was yielded, so that `solve` and
/// `optimize` (which hand back a single `Solution` rather than the iterator
/// that produced it) still leave the statistics inspectable.
pub struct Solution<S> {
    node: Node<S>,
    nb_explored: u64,
    nb_solutions: u64,
}

impl<S> Solution<S> {
    fn new(node: Node<S>, nb_explored: u64, nb_solutions: u64) -> Self {
        Self {
            node,
            nb_explored,
            nb_solutions,
        }
    }

    /// The goal state this solution reached.
    pub fn state(&self) -> &S {
        self.node.state()
    }

    /// The total cost paid along this solution's path.
    pub fn cost(&self) -> f64 {
        self.node.cumulative_cost()
    }

    /// The sequence of `(state, operation)` pairs from the problem's start
    /// state to this solution, in forward order.
    pub fn path(&self) -> Path<S> {
        Path::from_node(&self.node)
    }

    /// The number of nodes the driving search had popped by the time this
    /// solution was found.
    pub fn nb_explored(&self) -> u64 {
        self.nb_explored
    }

    /// This solution's ordinal among the solutions the driving search had
    /// yielded by the time it was found (1 for the first one).
    pub fn nb_solutions(&self) -> u64 {
        self.nb_solutions
    }
}

/// The lazy stream of solutions produced by [`Problem::solutions`].
///
/// Unlike a boxed `impl Iterator`, this named type keeps the driving
/// [`SearchIter`]'s `nb_explored`/`nb_solutions` counters inspectable
/// throughout the search, matching the statistics query surface the core
/// promises alongside every other search-driving iterator.
pub struct Solutions<S, G>
where
    G: Generator<S>,
{
    inner: SearchIter<S, G, Box<dyn Fn(&S) -> bool>>,
    remaining: Option<usize>,
}

impl<S, G> Solutions<S, G>
where
    G: Generator<S>,
{
    /// The number of nodes popped from the frontier so far.
    pub fn nb_explored(&self) -> u64 {
        self.inner.nb_explored()
    }

    /// The number of solutions yielded so far.
    pub fn nb_solutions(&self) -> u64 {
        self.inner.nb_solutions()
    }
}

impl<S, G> Iterator for Solutions<S, G>
where
    S: Clone + Eq + Hash,
    G: Generator<S>,
{
    type Item = Solution<S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }
        let node = self.inner.next()?;
        if let Some(remaining) = &mut self.remaining {
            *remaining -= 1;
        }
        Some(Solution::new(
            node,
            self.inner.nb_explored(),
            self.inner.nb_solutions(),
        ))
    }
}

/// An instance of a search problem: an initial state, the generator that
/// expands states of that type, and a predicate recognizing goal states.
pub struct Problem<S, G> {
    start: S,
    generator: Arc<G>,
    is_solution: Arc<dyn Fn(&S) -> bool>,
}

impl<S, G> Problem<S, G>
where
    S: Clone + Eq + Hash + fmt::Display + 'static,
    G: Generator<S> + 'static,
{
    /// Creates a new problem from a starting state, the generator that
    /// expands states of this type, and a closure recognizing goal states.
    pub fn new(
        start: S,
        generator: G,
        is_solution: impl Fn(&S) -> bool + 'static,
    ) -> Self {
        Self {
            start,
            generator: Arc::new(generator),
            is_solution: Arc::new(is_solution),
        }
    }

    /// Returns a lazy iterator over every solution this problem has, found
    /// in the order `strategy` visits them, optionally bounded and/or
    /// truncated to `max_solutions`.
    pub fn solutions(
        &self,
        strategy: SearchStrategy<S>,
        lower_bound: Option<f64>,
        upper_bound: Option<f64>,
        max_solutions: Option<usize>,
    ) -> Result<Solutions<S, G>, SearchError> {
        let is_solution = Arc::clone(&self.is_solution);
        let inner = SearchIter::new(
            self.start.clone(),
            Arc::clone(&self.generator),
            Box::new(move |s: &S| is_solution(s)) as Box<dyn Fn(&S) -> bool>,
            strategy,
            lower_bound,
            upper_bound,
        )?;
        Ok(Solutions {
            inner,
            remaining: max_solutions,
        })
    }

    /// Returns the first solution found by `strategy`, or
    /// [`SearchError::NoSolution`] if the frontier is exhausted first.
    pub fn solve(
        &self,
        strategy: SearchStrategy<S>,
        upper_bound: Option<f64>,
    ) -> Result<Solution<S>, SearchError> {
        self.solutions(strategy, None, upper_bound, Some(1))?
            .next()
            .ok_or(SearchError::NoSolution)
    }

    /// Drains every solution `strategy` finds (bound-tightening semantics
    /// apply throughout, per the engine's branch-and-bound behavior) and
    /// returns the last — the best one seen. Returns
    /// [`SearchError::NoSolution`] if none were found.
    pub fn optimize(
        &self,
        strategy: SearchStrategy<S>,
        lower_bound: Option<f64>,
        upper_bound: Option<f64>,
    ) -> Result<Solution<S>, SearchError> {
        let mut best = None;
        for solution in self.solutions(strategy, lower_bound, upper_bound, None)? {
            best = Some(solution);
        }
        best.ok_or(SearchError::NoSolution)
    }

    /// The problem's starting state.
    pub fn start(&self) -> &S {
        &self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::Action;

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Pos(i32, i32);

    impl fmt::Display for Pos {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({}, {})", self.0, self.1)
        }
    }

    struct GridGenerator {
        moves: [Action<Pos>; 4],
    }

    impl GridGenerator {
        fn new() -> Self {
            Self {
                moves: [
                    Action::with_default_cost("left", |s| s.0 -= 1),
                    Action::with_default_cost("right", |s| s.0 += 1),
                    Action::with_default_cost("down", |s| s.1 -= 1),
                    Action::with_default_cost("up", |s| s.1 += 1),
                ],
            }
        }
    }

    impl Generator<Pos> for GridGenerator {
        type Operations = std::vec::IntoIter<crate::operator::Operation<Pos>>;

        fn graph(&self) -> bool {
            true
        }

        fn operations(&self, _state: &Pos) -> Self::Operations {
            self.moves
                .iter()
                .map(|op| op.invoke())
                .collect::<Vec<_>>()
                .into_iter()
        }
    }

    #[test]
    fn solve_returns_first_solution() {
        let problem = Problem::new(Pos(0, 0), GridGenerator::new(), |s: &Pos| s == &Pos(1, 1));
        let solution = problem.solve(SearchStrategy::breadth_first(), None).unwrap();
        assert_eq!(solution.state(), &Pos(1, 1));
        assert_eq!(solution.cost(), 2.0);
        assert_eq!(solution.path().len(), 2);
        assert!(solution.nb_explored() > 0);
        assert_eq!(solution.nb_solutions(), 1);
    }

    #[test]
    fn solve_raises_no_solution_when_exhausted() {
        let problem = Problem::new(Pos(0, 0), GridGenerator::new(), |_: &Pos| false);
        let err = problem
            .solve(SearchStrategy::breadth_first(), Some(2.0))
            .unwrap_err();
        assert!(matches!(err, SearchError::NoSolution));
    }

    #[test]
    fn optimize_returns_cheapest_solution() {
        // Any state with x + y >= 2 is a solution; optimize should keep
        // tightening until the cheapest one (cost 2, e.g. Pos(2, 0)) wins.
        let problem = Problem::new(Pos(0, 0), GridGenerator::new(), |s: &Pos| s.0 + s.1 >= 2);
        let best = problem
            .optimize(SearchStrategy::breadth_first(), None, None)
            .unwrap();
        assert_eq!(best.cost(), 2.0);
    }

    #[test]
    fn solutions_truncates_to_max_solutions() {
        let problem = Problem::new(Pos(0, 0), GridGenerator::new(), |s: &Pos| s.0 + s.1 == 2);
        let mut solutions = problem
            .solutions(SearchStrategy::breadth_first(), None, None, Some(2))
            .unwrap();
        let found: Vec<_> = solutions.by_ref().collect();
        assert_eq!(found.len(), 2);
        assert!(solutions.nb_explored() > 0);
    }
}
