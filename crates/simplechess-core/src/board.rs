//! The 8x8 board grid.

use crate::{Color, Piece, PieceKind, Square};
use std::fmt;

/// An 8x8 grid of squares, each empty or holding one piece.
///
/// `Board` is a small `Copy` value. Operations that change a position take a
/// board and return a new one, so no two positions ever share mutable state.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting arrangement (Black on rows 0-1, White on rows 6-7).
    pub fn startpos() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as u8;
            for (row, piece) in [
                (0, Piece::new(kind, Color::Black)),
                (1, Piece::new(PieceKind::Pawn, Color::Black)),
                (6, Piece::new(PieceKind::Pawn, Color::White)),
                (7, Piece::new(kind, Color::White)),
            ] {
                board.squares[(row * 8 + col) as usize] = Some(piece);
            }
        }
        board
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Returns true if the square holds no piece.
    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns the color of the piece on the square, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    /// Places a piece on (or clears) a square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index() as usize] = piece;
    }

    /// Returns a copy of this board with the square set.
    #[must_use]
    pub fn with(mut self, sq: Square, piece: Option<Piece>) -> Self {
        self.set(sq, piece);
        self
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Returns the square of the first king of the given color in row-major order.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }

    /// Returns the number of pieces of the given kind and color.
    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        let target = Piece::new(kind, color);
        self.pieces().filter(|&(_, p)| p == target).count()
    }

    /// Returns the number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_some()).count()
    }

    /// Returns the board reflected top-to-bottom with every piece's color swapped.
    ///
    /// A position and its mirror are the same position seen from the other side.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut out = Board::empty();
        for (sq, piece) in self.pieces() {
            out.set(sq.mirrored(), Some(piece.with_opposite_color()));
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// Eight lines of piece letters, `.` for an empty square, row 0 first.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            for col in 0..8u8 {
                if col > 0 {
                    write!(f, " ")?;
                }
                let c = Square::new(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::to_fen_char);
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        write!(f, "{}", self)?;
        write!(f, "}}")
    }
}
