use std::collections::hash_map::Entry;
use std::collections::VecDeque;
use std::mem;

use log::debug;

use crate::board::Board;
use crate::moves::Move;
use crate::state::State;

use super::backtracking::{reconstruct_moves, Parents};
use super::stats::Stats;
use super::Outcome;

/// Fewest moves. `parents` doubles as the visited set so every state is enqueued at most once.
pub(crate) fn search(board: &Board, start: &State) -> (Outcome, Stats) {
    let mut stats = Stats::new();
    let mut parents = Parents::default();
    let mut to_visit = VecDeque::new();

    parents.insert(*start, None);
    stats.add_created(0);
    to_visit.push_back((*start, 0));

    while let Some((cur, depth)) = to_visit.pop_front() {
        if stats.add_expanded(depth) {
            debug!("Expanding depth {}, {} states known", depth, parents.len());
        }

        if board.is_goal(&cur) {
            debug!("Solved at depth {}, backtracking path", depth);
            let moves = reconstruct_moves(&parents, &cur);
            return (Outcome::Solved { moves, cost: None }, stats);
        }

        for (next, mov) in board.successors(&cur) {
            match parents.entry(next) {
                Entry::Occupied(_) => {
                    stats.add_duplicate(depth + 1);
                }
                Entry::Vacant(entry) => {
                    entry.insert(Some((cur, mov)));
                    stats.add_created(depth + 1);
                    to_visit.push_back((next, depth + 1));
                }
            }
        }

        stats.observe(to_visit.len(), memory(to_visit.len(), parents.len()));
    }

    (Outcome::NoSolution, stats)
}

fn memory(frontier_len: usize, parents_len: usize) -> usize {
    frontier_len * mem::size_of::<(State, usize)>()
        + parents_len * mem::size_of::<(State, Option<(State, Move)>)>()
}
