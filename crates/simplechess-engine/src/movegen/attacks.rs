//! Attack detection for all piece kinds.
//!
//! Attacks are a raw movement query: they ignore whose turn it is and
//! whether the attacking piece is pinned.

use simplechess_core::{Board, Color, Piece, PieceKind, Square};

/// Knight jumps as `(row, col)` deltas.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King steps, row delta outer, column delta inner.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const DIAGONAL_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(crate) const ORTHOGONAL_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Queen rays: the diagonals first, then the orthogonals.
pub(crate) const QUEEN_RAYS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Returns the first piece met walking from `from` (exclusive) along `(dr, dc)`.
fn first_piece_along(board: &Board, from: Square, (dr, dc): (i8, i8)) -> Option<Piece> {
    let mut cur = from.offset(dr, dc);
    while let Some(sq) = cur {
        if let Some(piece) = board.piece_at(sq) {
            return Some(piece);
        }
        cur = sq.offset(dr, dc);
    }
    None
}

/// Returns true if any of the offset squares holds `piece`.
fn any_at_offsets(board: &Board, sq: Square, offsets: &[(i8, i8)], piece: Piece) -> bool {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| sq.offset(dr, dc))
        .any(|from| board.piece_at(from) == Some(piece))
}

/// Returns true if the given square is attacked by the given color.
pub fn is_square_attacked(board: &Board, sq: Square, by_color: Color) -> bool {
    // A pawn attacks diagonally forward, so an attacking pawn stands one row
    // behind the target relative to its own direction.
    let pawn = Piece::new(PieceKind::Pawn, by_color);
    let behind = -by_color.pawn_direction();
    if any_at_offsets(board, sq, &[(behind, -1), (behind, 1)], pawn) {
        return true;
    }

    let knight = Piece::new(PieceKind::Knight, by_color);
    if any_at_offsets(board, sq, &KNIGHT_OFFSETS, knight) {
        return true;
    }

    // Bishop/Queen attacks (diagonal)
    for ray in DIAGONAL_RAYS {
        if let Some(piece) = first_piece_along(board, sq, ray) {
            if piece.color == by_color
                && matches!(piece.kind, PieceKind::Bishop | PieceKind::Queen)
            {
                return true;
            }
        }
    }

    // Rook/Queen attacks (orthogonal)
    for ray in ORTHOGONAL_RAYS {
        if let Some(piece) = first_piece_along(board, sq, ray) {
            if piece.color == by_color && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen)
            {
                return true;
            }
        }
    }

    let king = Piece::new(PieceKind::King, by_color);
    any_at_offsets(board, sq, &KING_OFFSETS, king)
}

/// Returns true if the given side is in check.
///
/// A side without a king counts as in check.
pub fn is_in_check(board: &Board, side: Color) -> bool {
    match board.king_square(side) {
        Some(king_sq) => is_square_attacked(board, king_sq, side.opposite()),
        None => true,
    }
}

/// Returns every square attacked by the given color, in row-major order.
pub fn attacked_squares(board: &Board, by_color: Color) -> Vec<Square> {
    Square::all()
        .filter(|&sq| is_square_attacked(board, sq, by_color))
        .collect()
}
