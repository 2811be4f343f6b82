use fnv::FnvHashMap;

use crate::moves::{Move, Moves};
use crate::state::State;

/// Where each known state was reached from, `None` for the initial state.
pub(crate) type Parents = FnvHashMap<State, Option<(State, Move)>>;

/// Walks `parents` from `final_state` back to the initial state.
///
/// Panics if the chain is broken or cyclic, that would be a bug in the search.
pub(crate) fn reconstruct_moves(parents: &Parents, final_state: &State) -> Moves {
    let mut moves = Vec::new();
    let mut state = final_state;
    loop {
        let parent = parents
            .get(state)
            .expect("Every reached state must have a parent link");
        match parent {
            None => break,
            Some((prev, mov)) => {
                moves.push(*mov);
                assert!(
                    moves.len() <= parents.len(),
                    "Parent links must not form a cycle"
                );
                state = prev;
            }
        }
    }
    moves.reverse();
    Moves::new(moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::Pos;

    fn state(c: u8) -> State {
        State::new(&[Pos::new(2, c)])
    }

    #[test]
    fn chain() {
        let mut parents = Parents::default();
        parents.insert(state(0), None);
        parents.insert(state(1), Some((state(0), Move::new(0, 1))));
        parents.insert(state(2), Some((state(1), Move::new(0, 1))));
        parents.insert(state(3), Some((state(2), Move::new(0, 1))));

        let moves = reconstruct_moves(&parents, &state(3));
        assert_eq!(moves.to_string(), "0+ 0+ 0+");
        assert!(reconstruct_moves(&parents, &state(0)).is_empty());
    }

    #[test]
    #[should_panic(expected = "parent link")]
    fn broken_chain() {
        let mut parents = Parents::default();
        parents.insert(state(2), Some((state(1), Move::new(0, 1))));
        reconstruct_moves(&parents, &state(2));
    }

    #[test]
    #[should_panic(expected = "cycle")]
    fn cycle() {
        let mut parents = Parents::default();
        parents.insert(state(1), Some((state(2), Move::new(0, -1))));
        parents.insert(state(2), Some((state(1), Move::new(0, 1))));
        reconstruct_moves(&parents, &state(2));
    }
}
