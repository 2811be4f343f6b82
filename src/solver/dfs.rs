use std::mem;

use fnv::FnvHashMap;
use log::debug;

use crate::board::Board;
use crate::moves::{Move, Moves};
use crate::state::State;

use super::backtracking::{reconstruct_moves, Parents};
use super::stats::Stats;
use super::Outcome;

#[derive(Debug, PartialEq, Eq)]
enum Pass {
    Found(Moves),
    /// Every reachable state was seen.
    Exhausted,
    /// Some states were only reachable deeper than the limit.
    CutOff,
}

type Entry = (State, u32, Option<(State, Move)>);

/// One depth-first pass that never goes deeper than `limit` moves.
///
/// A state is expanded again when it's reached by a shorter path than before,
/// otherwise a long first path to it would hide everything behind it.
fn limited_pass(board: &Board, start: &State, limit: u32) -> (Pass, Stats) {
    let mut stats = Stats::new();
    let mut depths: FnvHashMap<State, u32> = FnvHashMap::default();
    let mut parents = Parents::default();
    let mut to_visit: Vec<Entry> = vec![(*start, 0, None)];
    // successors of states at the limit, they're only cut off if nothing else reaches them
    let mut beyond_limit = Vec::new();

    stats.add_created(0);

    while let Some((cur, depth, link)) = to_visit.pop() {
        if depths.get(&cur).map_or(false, |&recorded| recorded <= depth) {
            stats.add_duplicate(depth as usize);
            continue;
        }
        depths.insert(cur, depth);
        // the link always comes from a state recorded shallower so links can't form a cycle
        parents.insert(cur, link);
        stats.add_expanded(depth as usize);

        if board.is_goal(&cur) {
            return (Pass::Found(reconstruct_moves(&parents, &cur)), stats);
        }

        let successors = board.successors(&cur);
        if depth == limit {
            beyond_limit.extend(
                successors
                    .into_iter()
                    .map(|(next, _)| next)
                    .filter(|next| !depths.contains_key(next)),
            );
        } else {
            for (next, mov) in successors.into_iter().rev() {
                if depths.get(&next).map_or(false, |&recorded| recorded <= depth + 1) {
                    stats.add_duplicate(depth as usize + 1);
                    continue;
                }
                stats.add_created(depth as usize + 1);
                to_visit.push((next, depth + 1, Some((cur, mov))));
            }
        }

        stats.observe(
            to_visit.len(),
            memory(to_visit.len(), depths.len(), parents.len()),
        );
    }

    if beyond_limit.iter().any(|state| !depths.contains_key(state)) {
        (Pass::CutOff, stats)
    } else {
        (Pass::Exhausted, stats)
    }
}

fn memory(frontier_len: usize, depths_len: usize, parents_len: usize) -> usize {
    frontier_len * mem::size_of::<Entry>()
        + depths_len * mem::size_of::<(State, u32)>()
        + parents_len * mem::size_of::<(State, Option<(State, Move)>)>()
}

/// Any path no longer than `max_depth` moves.
pub(crate) fn depth_limited(board: &Board, start: &State, max_depth: u32) -> (Outcome, Stats) {
    let (pass, stats) = limited_pass(board, start, max_depth);
    let outcome = match pass {
        Pass::Found(moves) => Outcome::Solved { moves, cost: None },
        Pass::Exhausted => Outcome::NoSolution,
        Pass::CutOff => Outcome::DepthLimitReached { max_depth },
    };
    (outcome, stats)
}

/// Fewest moves, by depth-limited passes with limits `0..=max_depth`.
///
/// Only the last pass's counters are returned.
pub(crate) fn iterative_deepening(
    board: &Board,
    start: &State,
    max_depth: u32,
) -> (Outcome, Stats) {
    let mut previous: Option<Stats> = None;

    for limit in 0..=max_depth {
        let (pass, mut stats) = limited_pass(board, start, limit);
        if let Some(ref prev) = previous {
            stats.follow(prev);
        }
        debug!(
            "Depth limit {}: expanded {}",
            limit,
            stats.total_expanded()
        );

        match pass {
            Pass::Found(moves) => return (Outcome::Solved { moves, cost: None }, stats),
            Pass::Exhausted => return (Outcome::NoSolution, stats),
            Pass::CutOff => previous = Some(stats),
        }
    }

    debug!("No solution within {} moves", max_depth);
    (
        Outcome::DepthLimitReached { max_depth },
        previous.unwrap_or_else(Stats::new),
    )
}
