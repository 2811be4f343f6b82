use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::board_formatter::BoardFormatter;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::state::State;

/// A puzzle as loaded: the vehicles and where they start.
#[derive(Clone, PartialEq, Eq)]
pub struct Level {
    pub board: Board,
    pub state: State,
}

impl Level {
    pub fn new(board: Board, state: State) -> Self {
        Level { board, state }
    }

    pub fn format(&self) -> BoardFormatter<'_> {
        BoardFormatter::new(&self.board, &self.state)
    }

    pub fn format_state<'a>(&'a self, state: &'a State) -> BoardFormatter<'a> {
        BoardFormatter::new(&self.board, state)
    }

    pub fn format_solution<'a>(&'a self, moves: &'a Moves) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.board, &self.state, moves)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::moves::Move;

    #[test]
    fn formatting_level() {
        let level: Level = "2 0 2 H\n1 3 3 V".parse().unwrap();
        let expected = r"
. . . . . .
. . . 1 . .
R R . 1 . .
. . . 1 . .
. . . . . .
. . . . . .
"
        .trim_start_matches('\n');

        assert_eq!(level.to_string(), expected);
        assert_eq!(format!("{:?}", level), expected);
        assert_eq!(level.format_state(&level.state).to_string(), expected);

        let moved = level.board.apply(&level.state, Move::new(1, 1));
        let expected_moved = r"
. . . . . .
. . . . . .
R R . 1 . .
. . . 1 . .
. . . 1 . .
. . . . . .
"
        .trim_start_matches('\n');
        assert_eq!(level.format_state(&moved).to_string(), expected_moved);
    }
}
