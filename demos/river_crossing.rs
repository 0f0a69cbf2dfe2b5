//! The wolf, goat, and cabbage puzzle: an inconsistent generator, since not
//! every generated crossing is safe, so validity is enforced by
//! `Generator::is_valid` rather than by the operations emitted.

use std::fmt;

use space_search::{Action, Generator, Operation, Problem, SearchStrategy};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct RiverState {
    /// `true` once the actor at this position has reached the right bank.
    farmer: bool,
    wolf: bool,
    goat: bool,
    cabbage: bool,
}

impl fmt::Display for RiverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |b: bool| if b { "right" } else { "left" };
        write!(
            f,
            "farmer: {}, wolf: {}, goat: {}, cabbage: {}",
            side(self.farmer),
            side(self.wolf),
            side(self.goat),
            side(self.cabbage)
        )
    }
}

struct RiverGenerator;

impl Generator<RiverState> for RiverGenerator {
    type Operations = std::vec::IntoIter<Operation<RiverState>>;

    fn graph(&self) -> bool {
        true
    }

    fn operations(&self, state: &RiverState) -> Self::Operations {
        let mut ops = vec![
            Action::with_default_cost("cross", |s: &mut RiverState| s.farmer = !s.farmer).invoke(),
        ];
        if state.wolf == state.farmer {
            ops.push(
                Action::with_default_cost("carry-wolf", |s: &mut RiverState| {
                    s.farmer = !s.farmer;
                    s.wolf = !s.wolf;
                })
                .invoke(),
            );
        }
        if state.goat == state.farmer {
            ops.push(
                Action::with_default_cost("carry-goat", |s: &mut RiverState| {
                    s.farmer = !s.farmer;
                    s.goat = !s.goat;
                })
                .invoke(),
            );
        }
        if state.cabbage == state.farmer {
            ops.push(
                Action::with_default_cost("carry-cabbage", |s: &mut RiverState| {
                    s.farmer = !s.farmer;
                    s.cabbage = !s.cabbage;
                })
                .invoke(),
            );
        }
        ops.into_iter()
    }

    fn is_valid(&self, state: &RiverState) -> bool {
        let wolf_eats_goat = state.wolf == state.goat && state.farmer != state.wolf;
        let goat_eats_cabbage = state.goat == state.cabbage && state.farmer != state.goat;
        !(wolf_eats_goat || goat_eats_cabbage)
    }
}

#[test]
fn optimal_crossing_takes_seven_trips() {
    let start = RiverState {
        farmer: false,
        wolf: false,
        goat: false,
        cabbage: false,
    };
    let problem = Problem::new(start, RiverGenerator, |s: &RiverState| {
        s.farmer && s.wolf && s.goat && s.cabbage
    });

    let solution = problem
        .optimize(SearchStrategy::depth_first(), None, None)
        .unwrap();

    assert_eq!(solution.cost(), 7.0);
}
