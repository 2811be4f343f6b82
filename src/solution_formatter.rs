use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::board_formatter::BoardFormatter;
use crate::moves::Moves;
use crate::state::State;

/// Replays a solution, printing each step and the board after it.
#[derive(Clone, Copy)]
pub struct SolutionFormatter<'a> {
    board: &'a Board,
    initial_state: &'a State,
    moves: &'a Moves,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(board: &'a Board, initial_state: &'a State, moves: &'a Moves) -> Self {
        Self {
            board,
            initial_state,
            moves,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", BoardFormatter::new(self.board, self.initial_state))?;

        let mut state = *self.initial_state;
        for (i, &mov) in self.moves.iter().enumerate() {
            let vehicle = self.board.vehicle(mov.vehicle);
            writeln!(
                f,
                "Step {}: vehicle {} moves {} (cost: {})",
                i + 1,
                vehicle.symbol(),
                vehicle.orientation.arrow(mov.delta),
                self.board.move_cost(mov)
            )?;
            state = self.board.apply(&state, mov);
            writeln!(f, "{}", BoardFormatter::new(self.board, &state))?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;
    use crate::moves::{Move, Moves};

    #[test]
    fn formatting_solution() {
        let level: Level = "2 3 2 H\n1 5 2 V".parse().unwrap();
        let moves = Moves::new(vec![Move::new(1, -1), Move::new(0, 1)]);

        let expected = r"
. . . . . .
. . . . . 1
. . . R R 1
. . . . . .
. . . . . .
. . . . . .

Step 1: vehicle 1 moves ^ (cost: 2)
. . . . . 1
. . . . . 1
. . . R R .
. . . . . .
. . . . . .
. . . . . .

Step 2: vehicle R moves > (cost: 2)
. . . . . 1
. . . . . 1
. . . . R R
. . . . . .
. . . . . .
. . . . . .

"
        .trim_start_matches('\n');
        assert_eq!(level.format_solution(&moves).to_string(), expected);
    }
}
