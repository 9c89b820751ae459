//! Move representation.

use crate::Square;
use std::fmt;

/// A move: an ordered pair of distinct squares.
///
/// A move carries no piece, capture or promotion information; those are
/// read off the board when the move is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a move between two squares, or `None` if they coincide.
    #[inline]
    pub fn new(from: Square, to: Square) -> Option<Self> {
        if from == to {
            None
        } else {
            Some(Move { from, to })
        }
    }

    /// Creates a move from raw `(row, col)` coordinates.
    ///
    /// Returns `None` for off-board coordinates or a null move.
    pub fn from_coords(r1: u8, c1: u8, r2: u8, c2: u8) -> Option<Self> {
        Self::new(Square::new(r1, c1)?, Square::new(r2, c2)?)
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the move as `(r1, c1, r2, c2)`.
    pub const fn coords(self) -> (u8, u8, u8, u8) {
        (self.from.row(), self.from.col(), self.to.row(), self.to.col())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_squares() {
        let from = Square::new(6, 4).unwrap();
        let to = Square::new(4, 4).unwrap();
        let m = Move::new(from, to).unwrap();

        assert_eq!(m.from(), from);
        assert_eq!(m.to(), to);
        assert_eq!(m.coords(), (6, 4, 4, 4));
    }

    #[test]
    fn null_move_rejected() {
        let sq = Square::new(3, 3).unwrap();
        assert!(Move::new(sq, sq).is_none());
        assert!(Move::from_coords(3, 3, 3, 3).is_none());
    }

    #[test]
    fn from_coords_bounds() {
        assert!(Move::from_coords(6, 4, 4, 4).is_some());
        assert!(Move::from_coords(8, 0, 0, 0).is_none());
        assert!(Move::from_coords(0, 0, 0, 8).is_none());
    }

    #[test]
    fn move_debug_display() {
        let m = Move::from_coords(6, 4, 4, 4).unwrap();
        assert_eq!(format!("{:?}", m), "Move((6,4)-(4,4))");
        assert_eq!(format!("{}", m), "(6,4)-(4,4)");
    }
}
