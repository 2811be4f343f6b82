use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::grid::Grid;
use crate::state::State;

/// Prints the board one row per line, `R` is the target, other vehicles use their id
/// in base 36 and `.` is an empty cell.
#[derive(Clone, Copy)]
pub struct BoardFormatter<'a> {
    board: &'a Board,
    state: &'a State,
}

impl<'a> BoardFormatter<'a> {
    pub(crate) fn new(board: &'a Board, state: &'a State) -> Self {
        Self { board, state }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut symbols = Grid::new('.');
        for vehicle in self.board.vehicles() {
            for pos in vehicle.cells(self.state.anchor(vehicle.id)) {
                // can be called on levels which haven't been checked yet
                if pos.in_bounds() {
                    symbols[pos] = vehicle.symbol();
                }
            }
        }

        for row in symbols.rows() {
            for (c, symbol) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for BoardFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl Debug for BoardFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
