//! The n-queens problem: every legal, non-attacking full placement of n
//! queens on an n-by-n board. Since every placement sequence yields a
//! distinct board, this is searched as a tree (no graph dedup needed), and
//! the generator only ever emits safe placements, so it is consistent: no
//! `is_valid` override is needed.

use std::fmt;

use space_search::{Generator, Operation, Operator, Problem, SearchStrategy};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Board {
    size: usize,
    /// `rows[r]` is the column occupied in row `r`, or `None` if unplaced.
    rows: Vec<Option<usize>>,
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for col in 0..self.size {
                let occupied = *row == Some(col);
                write!(f, "{}", if occupied { "Q " } else { ". " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Board {
    fn empty(size: usize) -> Self {
        Self {
            size,
            rows: vec![None; size],
        }
    }

    fn is_complete(&self) -> bool {
        self.rows.iter().all(Option::is_some)
    }
}

fn is_safe(board: &Board, row: usize, col: usize) -> bool {
    for r in 0..row {
        if let Some(c) = board.rows[r] {
            if c == col {
                return false;
            }
            let row_distance = (row - r) as isize;
            let col_distance = (col as isize - c as isize).abs();
            if row_distance == col_distance {
                return false;
            }
        }
    }
    true
}

struct QueensGenerator;

impl Generator<Board> for QueensGenerator {
    type Operations = std::vec::IntoIter<Operation<Board>>;

    fn graph(&self) -> bool {
        false
    }

    fn operations(&self, state: &Board) -> Self::Operations {
        let the_row = state
            .rows
            .iter()
            .position(Option::is_none)
            .expect("operations is never called on a complete board");
        let place: Operator<Board, usize> =
            Operator::with_default_cost("place", move |b, &col| b.rows[the_row] = Some(col));

        (0..state.size)
            .filter(|&col| is_safe(state, the_row, col))
            .map(|col| place.invoke(col, None).unwrap())
            .collect::<Vec<_>>()
            .into_iter()
    }
}

#[test]
fn eight_queens_has_ninety_two_solutions() {
    let problem = Problem::new(Board::empty(8), QueensGenerator, Board::is_complete);

    let solutions: Vec<_> = problem
        .solutions(SearchStrategy::depth_first(), None, None, None)
        .unwrap()
        .collect();

    assert_eq!(solutions.len(), 92);

    let distinct: std::collections::HashSet<_> =
        solutions.iter().map(|s| s.state().clone()).collect();
    assert_eq!(distinct.len(), 92);
}
