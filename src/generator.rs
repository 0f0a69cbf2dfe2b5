//! [`Generator`]: the capability enumerating legal transitions out of a
//! state.

use crate::operator::Operation;

/// Enumerates the operations applicable to a state, and declares whether the
/// resulting search space should be explored as a tree or a graph.
///
/// The spec distinguishes *consistent* generators (every yielded operation
/// always produces a valid successor) from *inconsistent* ones (the engine
/// must post-filter with `is_valid`). This trait unifies both behind a
/// single method with a default implementation: a generator that never
/// overrides [`is_valid`](Generator::is_valid) is consistent for free.
pub trait Generator<S> {
    /// The iterator type returned by [`operations`](Generator::operations).
    type Operations: Iterator<Item = Operation<S>>;

    /// Whether the search space reachable through this generator should be
    /// treated as a graph (duplicate states detected and deduplicated) or a
    /// tree (no deduplication).
    fn graph(&self) -> bool;

    /// Enumerates the operations legally applicable to `state`, in whatever
    /// order this generator deems useful. Ordering is preserved into the
    /// frontier by the engine (subject to the frontier's own extend policy).
    fn operations(&self, state: &S) -> Self::Operations;

    /// Filters a materialized successor state. Defaults to "always valid",
    /// making every generator usable as the spec's *consistent* kind unless
    /// this is overridden, in which case it behaves as *inconsistent*.
    fn is_valid(&self, _state: &S) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::Operator;

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Pos(i32, i32);

    struct GridGenerator {
        step: Operator<Pos, (i32, i32)>,
    }

    impl Generator<Pos> for GridGenerator {
        type Operations = std::vec::IntoIter<Operation<Pos>>;

        fn graph(&self) -> bool {
            true
        }

        fn operations(&self, _state: &Pos) -> Self::Operations {
            vec![
                self.step.invoke((-1, 0), None).unwrap(),
                self.step.invoke((1, 0), None).unwrap(),
                self.step.invoke((0, -1), None).unwrap(),
                self.step.invoke((0, 1), None).unwrap(),
            ]
            .into_iter()
        }

        fn is_valid(&self, state: &Pos) -> bool {
            state.0 >= 0 && state.1 >= 0
        }
    }

    #[test]
    fn inconsistent_generator_filters_negative_coordinates() {
        let gen = GridGenerator {
            step: Operator::with_default_cost("step", |s, (dx, dy)| {
                s.0 += dx;
                s.1 += dy;
            }),
        };
        let start = Pos(0, 0);
        let valid: Vec<_> = gen
            .operations(&start)
            .map(|op| op.apply(&start))
            .filter(|s| gen.is_valid(s))
            .collect();
        assert_eq!(valid, vec![Pos(1, 0), Pos(0, 1)]);
        assert!(gen.graph());
    }
}
