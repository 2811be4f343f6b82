mod a_star;
mod backtracking;
mod bfs;
mod dfs;
mod heuristics;
mod stats;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::time::Instant;

use log::{debug, info};

use crate::board::Board;
use crate::config::Method;
use crate::level::Level;
use crate::moves::Moves;
use crate::state::State;
use crate::Solve;

pub use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    NoVehicles,
    VehicleCount,
    TargetNotHorizontal,
    Length(u8),
    OutOfBounds(u8),
    Overlap(u8, u8),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::NoVehicles => write!(f, "No vehicles"),
            SolverErr::VehicleCount => {
                write!(f, "Number of vehicles doesn't match the number of positions")
            }
            SolverErr::TargetNotHorizontal => write!(f, "Target vehicle must be horizontal"),
            SolverErr::Length(id) => write!(f, "Vehicle {} must have length 2 or 3", id),
            SolverErr::OutOfBounds(id) => write!(f, "Vehicle {} is outside the board", id),
            SolverErr::Overlap(a, b) => write!(f, "Vehicles {} and {} overlap", a, b),
        }
    }
}

impl Error for SolverErr {}

/// How a search ended. Not finding a path is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `cost` is only known by methods which minimize it.
    Solved { moves: Moves, cost: Option<u32> },
    /// The whole reachable state space was searched.
    NoSolution,
    /// No path within `max_depth` moves but there are states deeper than that.
    DepthLimitReached { max_depth: u32 },
}

pub struct SolverOk {
    pub outcome: Outcome,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    fn new(outcome: Outcome, stats: Stats, method: Method) -> Self {
        Self {
            outcome,
            stats,
            method,
        }
    }

    pub fn moves(&self) -> Option<&Moves> {
        match self.outcome {
            Outcome::Solved { ref moves, .. } => Some(moves),
            _ => None,
        }
    }

    pub fn cost(&self) -> Option<u32> {
        match self.outcome {
            Outcome::Solved { cost, .. } => cost,
            _ => None,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Solved { ref moves, cost } => {
                write!(f, "{}: {} moves", self.method, moves.move_cnt())?;
                if let Some(cost) = cost {
                    write!(f, ", cost {}", cost)?;
                }
                writeln!(f)?;
            }
            Outcome::NoSolution => writeln!(f, "{}: No solution", self.method)?,
            Outcome::DepthLimitReached { max_depth } => writeln!(
                f,
                "{}: No solution within depth limit of {} moves",
                self.method, max_depth
            )?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, method: Method) -> Result<SolverOk, SolverErr> {
        solve(&self.board, &self.state, method)
    }
}

fn solve(board: &Board, start: &State, method: Method) -> Result<SolverOk, SolverErr> {
    board.check(start)?;
    debug!(
        "Searching {} vehicles using {} ({})",
        board.vehicles().len(),
        method,
        method.description()
    );

    let started = Instant::now();
    let (outcome, mut stats) = match method {
        Method::Bfs => bfs::search(board, start),
        Method::Dfs { max_depth } => dfs::depth_limited(board, start, max_depth),
        Method::Ids { max_depth } => dfs::iterative_deepening(board, start, max_depth),
        Method::Ucs => a_star::search(board, start, heuristics::zero),
        Method::AStar(heuristic) => {
            a_star::search(board, start, |board, state| heuristic.estimate(board, state))
        }
    };
    stats.set_duration(started.elapsed());

    match outcome {
        Outcome::Solved { ref moves, .. } => info!(
            "{}: solved in {} moves, expanded {}",
            method,
            moves.move_cnt(),
            stats.total_expanded()
        ),
        _ => info!(
            "{}: {:?} after expanding {}",
            method,
            outcome,
            stats.total_expanded()
        ),
    }

    Ok(SolverOk::new(outcome, stats, method))
}
