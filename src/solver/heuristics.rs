use crate::board::Board;
use crate::config::Heuristic;
use crate::data::{Orientation, BOARD_SIZE, TARGET};
use crate::state::State;

// Both estimates are admissible with moves costing the vehicle's length:
// every move costs at least 2 and changes either estimate by at most 1.

impl Heuristic {
    pub fn estimate(self, board: &Board, state: &State) -> u32 {
        match self {
            Heuristic::Gap => gap(board, state),
            Heuristic::Blocking => blocking(board, state),
        }
    }
}

/// Columns the target still has to cover.
pub(crate) fn gap(board: &Board, state: &State) -> u32 {
    u32::from((BOARD_SIZE - 1).saturating_sub(board.target_tail_col(state)))
}

/// The gap plus vertical vehicles right of the target crossing its row.
pub(crate) fn blocking(board: &Board, state: &State) -> u32 {
    let gap = gap(board, state);
    if gap == 0 {
        return 0;
    }

    let row = state.anchor(TARGET).r;
    let tail = board.target_tail_col(state);
    let blockers = board
        .vehicles()
        .iter()
        .filter(|v| v.orientation == Orientation::Vertical)
        .filter(|v| {
            let anchor = state.anchor(v.id);
            anchor.c > tail && anchor.c < BOARD_SIZE && anchor.r <= row && row < anchor.r + v.length
        }).count();

    gap + blockers as u32
}

/// Turns A* into uniform-cost search.
pub(crate) fn zero(_board: &Board, _state: &State) -> u32 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::{Pos, Vehicle};

    #[test]
    fn estimates() {
        let board = Board::new(vec![
            Vehicle::new(0, 2, Orientation::Horizontal),
            Vehicle::new(1, 3, Orientation::Vertical),
            Vehicle::new(2, 2, Orientation::Vertical),
            Vehicle::new(3, 2, Orientation::Horizontal),
            Vehicle::new(4, 3, Orientation::Vertical),
        ]);
        let state = State::new(&[
            Pos::new(2, 1),
            Pos::new(0, 3), // crosses row 2
            Pos::new(3, 5), // below the target's row
            Pos::new(0, 4), // horizontal, ignored
            Pos::new(1, 0), // left of the target
        ]);
        assert!(board.is_valid(&state));

        assert_eq!(gap(&board, &state), 3);
        assert_eq!(blocking(&board, &state), 4);
        assert_eq!(Heuristic::Gap.estimate(&board, &state), 3);
        assert_eq!(Heuristic::Blocking.estimate(&board, &state), 4);
        assert_eq!(zero(&board, &state), 0);
    }

    #[test]
    fn solved_is_zero() {
        let board = Board::new(vec![
            Vehicle::new(0, 2, Orientation::Horizontal),
            Vehicle::new(1, 3, Orientation::Vertical),
        ]);
        let state = State::new(&[Pos::new(2, 4), Pos::new(3, 0)]);
        assert!(board.is_goal(&state));
        assert_eq!(Heuristic::Gap.estimate(&board, &state), 0);
        assert_eq!(Heuristic::Blocking.estimate(&board, &state), 0);
    }
}
