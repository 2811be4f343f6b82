use crate::data::{Orientation, Pos, Vehicle, BOARD_SIZE, MAX_VEHICLES, TARGET};
use crate::grid::Grid;
use crate::moves::{Move, Moves};
use crate::solver::SolverErr;
use crate::state::State;

/// The vehicles of one puzzle, everything that doesn't change while searching.
///
/// Vehicle `k` is stored at index `k` so ids double as indices into `State`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    vehicles: Vec<Vehicle>,
}

impl Board {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        debug_assert!(vehicles
            .iter()
            .enumerate()
            .all(|(i, v)| usize::from(v.id) == i));
        Board { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: u8) -> &Vehicle {
        &self.vehicles[usize::from(id)]
    }

    pub fn target(&self) -> &Vehicle {
        self.vehicle(TARGET)
    }

    pub(crate) fn occupancy(&self, state: &State) -> Grid<bool> {
        let mut occupied = Grid::new(false);
        for vehicle in &self.vehicles {
            for pos in vehicle.cells(state.anchor(vehicle.id)) {
                occupied[pos] = true;
            }
        }
        occupied
    }

    pub fn apply(&self, state: &State, mov: Move) -> State {
        state.shifted(mov.vehicle, self.vehicle(mov.vehicle).orientation, mov.delta)
    }

    /// All states one slide away, by vehicle id and then backwards before forwards.
    pub fn successors(&self, state: &State) -> Vec<(State, Move)> {
        let occupied = self.occupancy(state);
        let mut ret = Vec::new();

        for vehicle in &self.vehicles {
            let anchor = state.anchor(vehicle.id);
            let (before, after) = match vehicle.orientation {
                Orientation::Horizontal => (
                    anchor.c.checked_sub(1).map(|c| Pos::new(anchor.r, c)),
                    Pos::new(anchor.r, anchor.c + vehicle.length),
                ),
                Orientation::Vertical => (
                    anchor.r.checked_sub(1).map(|r| Pos::new(r, anchor.c)),
                    Pos::new(anchor.r + vehicle.length, anchor.c),
                ),
            };

            if let Some(pos) = before {
                if !occupied[pos] {
                    let mov = Move::new(vehicle.id, -1);
                    ret.push((self.apply(state, mov), mov));
                }
            }
            if after.in_bounds() && !occupied[after] {
                let mov = Move::new(vehicle.id, 1);
                ret.push((self.apply(state, mov), mov));
            }
        }

        ret
    }

    pub fn is_legal(&self, state: &State, mov: Move) -> bool {
        self.successors(state).iter().any(|&(_, m)| m == mov)
    }

    /// Column of the target's right-most cell.
    pub fn target_tail_col(&self, state: &State) -> u8 {
        state.anchor(TARGET).c + self.target().length - 1
    }

    pub fn is_goal(&self, state: &State) -> bool {
        self.target_tail_col(state) == BOARD_SIZE - 1
    }

    pub fn move_cost(&self, mov: Move) -> u32 {
        u32::from(self.vehicle(mov.vehicle).length)
    }

    pub fn path_cost(&self, moves: &Moves) -> u32 {
        moves.iter().map(|&mov| self.move_cost(mov)).sum()
    }

    /// Every state reached by playing `moves`, including `state` itself,
    /// or `None` if one of them isn't legal where it's played.
    pub fn replay(&self, state: &State, moves: &Moves) -> Option<Vec<State>> {
        let mut states = vec![*state];
        let mut cur = *state;
        for &mov in moves {
            if usize::from(mov.vehicle) >= self.vehicles.len() || !self.is_legal(&cur, mov) {
                return None;
            }
            cur = self.apply(&cur, mov);
            states.push(cur);
        }
        Some(states)
    }

    pub fn is_valid(&self, state: &State) -> bool {
        self.check(state).is_ok()
    }

    /// Makes sure the state fits the roster, every vehicle is fully on the board
    /// and no two vehicles share a cell.
    pub(crate) fn check(&self, state: &State) -> Result<(), SolverErr> {
        if self.vehicles.is_empty() {
            return Err(SolverErr::NoVehicles);
        }
        if self.vehicles.len() > MAX_VEHICLES || self.vehicles.len() != state.vehicle_cnt() {
            return Err(SolverErr::VehicleCount);
        }
        if self.target().orientation != Orientation::Horizontal {
            return Err(SolverErr::TargetNotHorizontal);
        }

        let mut owners: Grid<Option<u8>> = Grid::new(None);
        for vehicle in &self.vehicles {
            if vehicle.length < 2 || vehicle.length > 3 {
                return Err(SolverErr::Length(vehicle.id));
            }
            for pos in vehicle.cells(state.anchor(vehicle.id)) {
                if !pos.in_bounds() {
                    return Err(SolverErr::OutOfBounds(vehicle.id));
                }
                if let Some(other) = owners[pos] {
                    return Err(SolverErr::Overlap(other, vehicle.id));
                }
                owners[pos] = Some(vehicle.id);
            }
        }
        Ok(())
    }
}
