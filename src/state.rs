use std::fmt::{self, Debug, Formatter};

use crate::data::{Orientation, Pos, MAX_VEHICLES};

/// Anchors of all vehicles, `coords[2k]` and `coords[2k + 1]` are row and column of vehicle `k`.
///
/// Fixed size so it can be copied around and used as a map key directly.
/// Unused slots are always zero so derived equality and hashing only see real vehicles.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    coords: [u8; 2 * MAX_VEHICLES],
    len: u8,
}

impl State {
    pub fn new(anchors: &[Pos]) -> State {
        assert!(
            anchors.len() <= MAX_VEHICLES,
            "At most {} vehicles fit on a board",
            MAX_VEHICLES
        );

        let mut coords = [0; 2 * MAX_VEHICLES];
        for (i, anchor) in anchors.iter().enumerate() {
            coords[2 * i] = anchor.r;
            coords[2 * i + 1] = anchor.c;
        }
        State {
            coords,
            len: anchors.len() as u8,
        }
    }

    pub fn vehicle_cnt(&self) -> usize {
        usize::from(self.len)
    }

    pub fn anchor(&self, vehicle: u8) -> Pos {
        let i = 2 * usize::from(vehicle);
        debug_assert!(vehicle < self.len);
        Pos::new(self.coords[i], self.coords[i + 1])
    }

    pub fn anchors(&self) -> impl Iterator<Item = Pos> + '_ {
        self.coords().chunks(2).map(|pair| Pos::new(pair[0], pair[1]))
    }

    /// The `row, col, row, col, ...` sequence.
    pub fn coords(&self) -> &[u8] {
        &self.coords[..2 * self.vehicle_cnt()]
    }

    /// Moves one vehicle along its axis, doesn't check the result is valid.
    ///
    /// Wrapping arithmetic keeps `shifted(+1)` and `shifted(-1)` exact inverses
    /// even at the edges of the board.
    pub(crate) fn shifted(&self, vehicle: u8, orientation: Orientation, delta: i8) -> State {
        let mut new_state = *self;
        let i = 2 * usize::from(vehicle)
            + match orientation {
                Orientation::Horizontal => 1,
                Orientation::Vertical => 0,
            };
        new_state.coords[i] = new_state.coords[i].wrapping_add(delta as u8);
        new_state
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.anchors().map(|pos| (pos.r, pos.c)))
            .finish()
    }
}
