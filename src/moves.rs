use std::fmt::{self, Debug, Display, Formatter};

/// A one cell slide of one vehicle along its own axis.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub vehicle: u8,
    pub delta: i8,
}

impl Move {
    pub fn new(vehicle: u8, delta: i8) -> Self {
        debug_assert!(delta == 1 || delta == -1, "Moves are exactly one cell");
        Move { vehicle, delta }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.vehicle, if self.delta > 0 { '+' } else { '-' })
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:+})", self.vehicle, self.delta)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.0
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, mov) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_moves() {
        let moves = Moves::new(vec![
            Move::new(0, 1),
            Move::new(3, -1),
            Move::new(12, 1),
            Move::new(0, -1),
        ]);
        assert_eq!(moves.to_string(), "0+ 3- 12+ 0-");
        assert_eq!(format!("{:?}", moves), "[(0, +1), (3, -1), (12, +1), (0, -1)]");
        assert_eq!(Moves::default().to_string(), "");
    }

    #[test]
    fn iterating() {
        let v = vec![Move::new(1, -1), Move::new(0, 1), Move::new(2, 1)];
        let moves = Moves::new(v.clone());
        assert_eq!(moves.move_cnt(), 3);
        assert!(!moves.is_empty());

        let mut v2 = Vec::new();
        for &m in &moves {
            v2.push(m);
        }
        for &m in moves.iter() {
            v2.push(m);
        }
        for m in moves.clone() {
            v2.push(m);
        }
        v2.extend_from_slice(moves.as_slice());

        assert_eq!(v2.len(), 12);
        for chunk in v2.chunks(3) {
            assert_eq!(chunk, &v[..]);
        }
    }
}
