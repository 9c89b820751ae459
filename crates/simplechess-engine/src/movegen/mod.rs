//! Move generation and application.
//!
//! Pseudo-legal moves follow the piece-movement rules only; legal moves are
//! the pseudo-legal ones that do not leave the mover's king attacked. There
//! is no castling, no en passant, and pawns always promote to a queen.

mod attacks;
pub mod perft;

use simplechess_core::{Board, Color, Move, Piece, PieceKind, Square};
use thiserror::Error;

pub use attacks::{attacked_squares, is_in_check, is_square_attacked};
use attacks::{DIAGONAL_RAYS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_RAYS, QUEEN_RAYS};

/// Errors returned when a move cannot be applied.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveError {
    /// The origin square is empty.
    #[error("no piece on origin square {0}")]
    EmptyOrigin(Square),
    /// The origin square holds a piece of the side not to move.
    #[error("piece on {square} belongs to {owner}, who is not to move")]
    WrongSide { square: Square, owner: Color },
    /// The move is not among the legal moves of the position.
    #[error("illegal move: {0}")]
    NotLegal(Move),
    /// The game has already ended.
    #[error("game has already ended")]
    GameOver,
}

/// An ordered list of moves.
///
/// Generation order is stable: origins in row-major order, and for each
/// origin the candidates in the order the piece's rules list them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns true if the list holds the given move.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Retains only moves for which the predicate returns true, keeping order.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(f);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl Extend<Move> for MoveList {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates all pseudo-legal moves for `side`, ignoring self-check.
pub fn generate_pseudo_legal_moves(board: &Board, side: Color) -> MoveList {
    let mut moves = MoveList::new();

    for (from, piece) in board.pieces() {
        if piece.color != side {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(board, from, side, &mut moves),
            PieceKind::Knight => generate_step_moves(board, from, side, &KNIGHT_OFFSETS, &mut moves),
            PieceKind::Bishop => generate_slider_moves(board, from, side, &DIAGONAL_RAYS, &mut moves),
            PieceKind::Rook => generate_slider_moves(board, from, side, &ORTHOGONAL_RAYS, &mut moves),
            PieceKind::Queen => generate_slider_moves(board, from, side, &QUEEN_RAYS, &mut moves),
            PieceKind::King => generate_step_moves(board, from, side, &KING_OFFSETS, &mut moves),
        }
    }

    moves
}

/// Generates all legal moves for `side`.
pub fn generate_legal_moves(board: &Board, side: Color) -> MoveList {
    let mut moves = generate_pseudo_legal_moves(board, side);

    // Filter out moves that leave own king in check
    moves.retain(|&m| match make_move(board, m) {
        Ok(next) => {
            let safe = !is_in_check(&next, side);
            if !safe {
                tracing::trace!(mv = %m, %side, "discarding move that leaves king attacked");
            }
            safe
        }
        Err(_) => false,
    });

    moves
}

/// Generates the legal moves for `side` that start on `from`.
pub fn legal_moves_from(board: &Board, side: Color, from: Square) -> MoveList {
    let mut moves = generate_legal_moves(board, side);
    moves.retain(|m| m.from() == from);
    moves
}

/// Pawn pushes (single, then double from the start row) and diagonal captures.
fn generate_pawn_moves(board: &Board, from: Square, side: Color, moves: &mut MoveList) {
    let dir = side.pawn_direction();

    if let Some(one) = from.offset(dir, 0).filter(|&sq| board.is_empty_at(sq)) {
        moves.extend(Move::new(from, one));

        if from.row() == side.pawn_start_row() {
            if let Some(two) = one.offset(dir, 0).filter(|&sq| board.is_empty_at(sq)) {
                moves.extend(Move::new(from, two));
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if board.color_at(to) == Some(side.opposite()) {
                moves.extend(Move::new(from, to));
            }
        }
    }
}

/// Knight and king moves: each offset square that is empty or holds an enemy.
fn generate_step_moves(
    board: &Board,
    from: Square,
    side: Color,
    offsets: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            if board.color_at(to) != Some(side) {
                moves.extend(Move::new(from, to));
            }
        }
    }
}

/// Bishop, rook and queen moves along rays, stopping at the first occupied square.
fn generate_slider_moves(
    board: &Board,
    from: Square,
    side: Color,
    rays: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in rays {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.color_at(to) {
                None => moves.extend(Move::new(from, to)),
                Some(color) => {
                    if color != side {
                        moves.extend(Move::new(from, to));
                    }
                    break;
                }
            }
            cur = to.offset(dr, dc);
        }
    }
}

/// Applies a move and returns the new board.
///
/// The piece on the origin moves to the destination, replacing whatever
/// stood there. A pawn arriving on its promotion row becomes a queen. The
/// move's legality is not checked, only that the origin is occupied.
pub fn make_move(board: &Board, m: Move) -> Result<Board, IllegalMoveError> {
    let piece = board
        .piece_at(m.from())
        .ok_or(IllegalMoveError::EmptyOrigin(m.from()))?;

    let placed = if piece.kind == PieceKind::Pawn && m.to().row() == piece.color.promotion_row() {
        Piece::new(PieceKind::Queen, piece.color)
    } else {
        piece
    };

    let mut next = *board;
    next.set(m.from(), None);
    next.set(m.to(), Some(placed));
    Ok(next)
}

/// Applies a move after checking that it is legal for `side`.
pub fn make_legal_move(board: &Board, side: Color, m: Move) -> Result<Board, IllegalMoveError> {
    let piece = board
        .piece_at(m.from())
        .ok_or(IllegalMoveError::EmptyOrigin(m.from()))?;
    if piece.color != side {
        return Err(IllegalMoveError::WrongSide {
            square: m.from(),
            owner: piece.color,
        });
    }
    if !legal_moves_from(board, side, m.from()).contains(&m) {
        return Err(IllegalMoveError::NotLegal(m));
    }
    make_move(board, m)
}
