use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::mem;

use fnv::FnvHashMap;
use log::debug;

use crate::board::Board;
use crate::moves::Move;
use crate::state::State;

use super::backtracking::{reconstruct_moves, Parents};
use super::stats::Stats;
use super::Outcome;

#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) state: State,
    /// Number of moves, only used for stats.
    pub(crate) dist: usize,
    pub(crate) g: u32,
    pub(crate) f: u32,
}

impl SearchNode {
    pub(crate) fn new(state: State, dist: usize, g: u32, h: u32) -> Self {
        SearchNode {
            state,
            dist,
            g,
            f: g + h,
        }
    }

    fn key(&self) -> (u32, u32, &State) {
        (self.f, self.g, &self.state)
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for SearchNode {}

/// Lowest total cost, a move costs the length of the moved vehicle.
///
/// With `heuristics::zero` this is uniform-cost search.
pub(crate) fn search<H>(board: &Board, start: &State, heuristic: H) -> (Outcome, Stats)
where
    H: Fn(&Board, &State) -> u32,
{
    let mut stats = Stats::new();
    let mut to_visit = BinaryHeap::new();
    let mut best_costs: FnvHashMap<State, u32> = FnvHashMap::default();
    let mut parents = Parents::default();

    best_costs.insert(*start, 0);
    parents.insert(*start, None);
    stats.add_created(0);
    to_visit.push(SearchNode::new(*start, 0, 0, heuristic(board, start)));

    while let Some(cur) = to_visit.pop() {
        // a cheaper path to this state was found after this node was pushed
        if best_costs
            .get(&cur.state)
            .map_or(false, |&best| cur.g > best)
        {
            stats.add_duplicate(cur.dist);
            continue;
        }

        if stats.add_expanded(cur.dist) {
            debug!(
                "Expanding depth {}, f = {}, {} states known",
                cur.dist,
                cur.f,
                best_costs.len()
            );
        }

        if board.is_goal(&cur.state) {
            debug!("Solved with cost {}, backtracking path", cur.g);
            let moves = reconstruct_moves(&parents, &cur.state);
            return (
                Outcome::Solved {
                    moves,
                    cost: Some(cur.g),
                },
                stats,
            );
        }

        for (next, mov) in board.successors(&cur.state) {
            let g = cur.g + board.move_cost(mov);
            let improved = best_costs.get(&next).map_or(true, |&known| g < known);
            if !improved {
                stats.add_duplicate(cur.dist + 1);
                continue;
            }

            best_costs.insert(next, g);
            parents.insert(next, Some((cur.state, mov)));
            stats.add_created(cur.dist + 1);
            to_visit.push(SearchNode::new(
                next,
                cur.dist + 1,
                g,
                heuristic(board, &next),
            ));
        }

        stats.observe(
            to_visit.len(),
            memory(to_visit.len(), best_costs.len(), parents.len()),
        );
    }

    (Outcome::NoSolution, stats)
}

fn memory(frontier_len: usize, costs_len: usize, parents_len: usize) -> usize {
    frontier_len * mem::size_of::<SearchNode>()
        + costs_len * mem::size_of::<(State, u32)>()
        + parents_len * mem::size_of::<(State, Option<(State, Move)>)>()
}
