//! # space-search
//!
//! A library providing a generic, cost-aware combinatorial search engine
//! supporting depth-first, breadth-first, and best-first exploration of
//! tree and graph search spaces.
//!
//! Model your domain as a state type and a [`Generator`] that enumerates the
//! [`Operator`] (or [`Action`]) invocations legal from a given state, wrap
//! them in a [`Problem`] together with a goal predicate, then drive it with
//! one of the three [`SearchStrategy`] constructors:
//!
//! * `SearchStrategy::depth_first()` / `depth_first_with(evaluator)` — a LIFO
//!   frontier, batch-locally ordered if given an evaluator.
//! * `SearchStrategy::breadth_first()` / `breadth_first_with(evaluator)` — a
//!   FIFO frontier, likewise.
//! * `SearchStrategy::best_first(evaluator)` — a globally-ordered priority
//!   queue; the evaluator is mandatory here, enforced by the type signature.
//!
//! [`Problem`] exposes three queries: [`solve`](Problem::solve) for the first
//! solution found, [`solutions`](Problem::solutions) for a lazy stream of
//! every solution in visitation order, and [`optimize`](Problem::optimize)
//! for the cheapest solution under branch-and-bound tightening. States that
//! are `Eq + Hash` let a [`Generator`] opt into graph deduplication via
//! [`Generator::graph`]; states that are not can still be searched as a tree.
//!
//! ```
//! use space_search::{Action, Generator, Operation, Problem, SearchStrategy};
//! use std::fmt;
//! use std::vec;
//!
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! struct Pos(i32, i32);
//!
//! impl fmt::Display for Pos {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "({}, {})", self.0, self.1)
//!     }
//! }
//!
//! struct GridMoves {
//!     moves: [Action<Pos>; 4],
//! }
//!
//! impl GridMoves {
//!     fn new() -> Self {
//!         Self {
//!             moves: [
//!                 Action::with_default_cost("left", |s| s.0 -= 1),
//!                 Action::with_default_cost("right", |s| s.0 += 1),
//!                 Action::with_default_cost("down", |s| s.1 -= 1),
//!                 Action::with_default_cost("up", |s| s.1 += 1),
//!             ],
//!         }
//!     }
//! }
//!
//! impl Generator<Pos> for GridMoves {
//!     type Operations = vec::IntoIter<Operation<Pos>>;
//!
//!     fn graph(&self) -> bool {
//!         true
//!     }
//!
//!     fn operations(&self, _state: &Pos) -> Self::Operations {
//!         self.moves.iter().map(|m| m.invoke()).collect::<Vec<_>>().into_iter()
//!     }
//! }
//!
//! let problem = Problem::new(Pos(0, 0), GridMoves::new(), |s: &Pos| s == &Pos(5, 5));
//! let solution = problem.solve(SearchStrategy::breadth_first(), None).unwrap();
//! assert_eq!(solution.state(), &Pos(5, 5));
//! assert_eq!(solution.cost(), 10.0);
//! ```

pub mod engine;
pub mod error;
pub mod evaluator;
pub mod frontier;
pub mod generator;
pub mod node;
pub mod ord;
pub mod operator;
pub mod path;
pub mod problem;
pub mod strategy;

pub use engine::SearchIter;
pub use error::SearchError;
pub use evaluator::{Evaluator, FnEvaluator, RandomEvaluator};
pub use frontier::{Frontier, OrderedQueue, OrderedStack, PriorityQueue, Queue, Stack};
pub use generator::Generator;
pub use node::Node;
pub use operator::{Action, Operation, Operator};
pub use ord::OrdF64;
pub use path::Path;
pub use problem::{Problem, Solution, Solutions};
pub use strategy::{blind_methods, methods, SearchStrategy};
