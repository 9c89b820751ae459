//! Core types for simplified chess.
//!
//! This crate provides the fundamental types used by the rules engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for `(row, col)` board coordinates
//! - [`Move`] for move representation
//! - [`Board`], the 8x8 grid
//! - Position string parsing and serialization

mod board;
mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use board::Board;
pub use color::Color;
pub use fen::{
    format_placement, format_position, parse_placement, parse_position, FormatError, STARTPOS,
};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::{Square, BOARD_SIZE};
