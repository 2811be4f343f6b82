use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::{Pos, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

/// A value for every cell of the board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Grid<T> {
    data: [[T; SIZE]; SIZE],
}

impl<T: Copy> Grid<T> {
    pub(crate) fn new(default: T) -> Self {
        Grid {
            data: [[default; SIZE]; SIZE],
        }
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &[T; SIZE]> {
        self.data.iter()
    }
}

impl Display for Grid<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", if cell { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Grid<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        debug_assert!(index.in_bounds(), "{} is outside the board", index);
        &self.data[usize::from(index.r)][usize::from(index.c)]
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        debug_assert!(index.in_bounds(), "{} is outside the board", index);
        &mut self.data[usize::from(index.r)][usize::from(index.c)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_and_display() {
        let mut grid = Grid::new(false);
        grid[Pos::new(0, 0)] = true;
        grid[Pos::new(2, 5)] = true;
        grid[Pos::new(5, 3)] = true;
        assert!(grid[Pos::new(2, 5)]);
        assert!(!grid[Pos::new(5, 2)]);

        let expected = r"
100000
000000
000001
000000
000000
000100
"
        .trim_start_matches('\n');
        assert_eq!(grid.to_string(), expected);
    }
}
