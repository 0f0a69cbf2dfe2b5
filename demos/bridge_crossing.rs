//! The four-person bridge-crossing-at-night puzzle: with crossing times of
//! 1, 2, 5, and 10 minutes and a single shared flashlight, the optimal total
//! crossing time is 17 minutes.

use std::fmt;

use space_search::{Action, Generator, Operation, Problem, SearchStrategy};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Crossing {
    /// `true` once the person at this index has reached the far side.
    sides: Vec<bool>,
    flashlight: bool,
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<&str> = self
            .sides
            .iter()
            .map(|&across| if across { "across" } else { "back" })
            .collect();
        write!(f, "[{}] flashlight {}", rendered.join(", "), if self.flashlight { "across" } else { "back" })
    }
}

struct BridgeGenerator {
    costs: [f64; 4],
}

impl Generator<Crossing> for BridgeGenerator {
    type Operations = std::vec::IntoIter<Operation<Crossing>>;

    fn graph(&self) -> bool {
        true
    }

    fn operations(&self, state: &Crossing) -> Self::Operations {
        let side = state.flashlight;
        let on_side: Vec<usize> = (0..self.costs.len())
            .filter(|&i| state.sides[i] == side)
            .collect();

        let mut ops = Vec::new();
        for &i in &on_side {
            let cost = self.costs[i];
            let action = Action::new("cross", cost, move |s: &mut Crossing| {
                s.sides[i] = !s.sides[i];
                s.flashlight = !s.flashlight;
            })
            .unwrap();
            ops.push(action.invoke());
        }
        for a in 0..on_side.len() {
            for b in (a + 1)..on_side.len() {
                let i = on_side[a];
                let j = on_side[b];
                let cost = self.costs[i].max(self.costs[j]);
                let action = Action::new("escort", cost, move |s: &mut Crossing| {
                    s.sides[i] = !s.sides[i];
                    s.sides[j] = !s.sides[j];
                    s.flashlight = !s.flashlight;
                })
                .unwrap();
                ops.push(action.invoke());
            }
        }
        ops.into_iter()
    }
}

#[test]
fn optimal_crossing_takes_seventeen_minutes() {
    let start = Crossing {
        sides: vec![false; 4],
        flashlight: false,
    };
    let generator = BridgeGenerator {
        costs: [1.0, 2.0, 5.0, 10.0],
    };
    let problem = Problem::new(start, generator, |s: &Crossing| s.sides.iter().all(|&x| x));

    let solution = problem
        .optimize(SearchStrategy::breadth_first(), None, None)
        .unwrap();

    assert_eq!(solution.cost(), 17.0);
    assert!(!solution.path().is_empty());
}
