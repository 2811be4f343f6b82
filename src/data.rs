use std::fmt::{self, Display, Formatter};

/// Rows and columns of every board.
pub const BOARD_SIZE: u8 = 6;

/// 36 cells can hold at most 18 vehicles of length 2.
pub const MAX_VEHICLES: usize = 18;

/// The vehicle that has to reach the exit is always the first one.
pub const TARGET: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    pub fn in_bounds(self) -> bool {
        self.r < BOARD_SIZE && self.c < BOARD_SIZE
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Arrow for a one cell slide in the direction of `delta`.
    pub fn arrow(self, delta: i8) -> char {
        match (self, delta > 0) {
            (Orientation::Horizontal, true) => '>',
            (Orientation::Horizontal, false) => '<',
            (Orientation::Vertical, true) => 'v',
            (Orientation::Vertical, false) => '^',
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Orientation::Horizontal => write!(f, "H"),
            Orientation::Vertical => write!(f, "V"),
        }
    }
}

/// A vehicle independent of where it currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vehicle {
    pub id: u8,
    pub length: u8,
    pub orientation: Orientation,
}

impl Vehicle {
    pub fn new(id: u8, length: u8, orientation: Orientation) -> Self {
        Vehicle {
            id,
            length,
            orientation,
        }
    }

    pub fn is_target(&self) -> bool {
        self.id == TARGET
    }

    /// All cells covered when anchored at `anchor`, including those outside the board.
    pub fn cells(&self, anchor: Pos) -> impl Iterator<Item = Pos> {
        let orientation = self.orientation;
        (0..self.length).map(move |k| match orientation {
            Orientation::Horizontal => Pos::new(anchor.r, anchor.c.saturating_add(k)),
            Orientation::Vertical => Pos::new(anchor.r.saturating_add(k), anchor.c),
        })
    }

    /// `R` for the target, base 36 digits for the rest.
    pub fn symbol(&self) -> char {
        if self.is_target() {
            'R'
        } else {
            std::char::from_digit(u32::from(self.id), 36).unwrap_or('?')
        }
    }
}
