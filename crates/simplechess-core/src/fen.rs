//! Position string parsing and serialization.
//!
//! A position string has the form `<rank>/<rank>/.../<rank> [w|b]`: eight
//! ranks of piece letters and empty-square digits, followed by an optional
//! side token that defaults to White.

use crate::{Board, Color, Piece, Square};
use thiserror::Error;

/// The standard starting position.
pub const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// Errors that can occur when parsing position strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid position: expected 1 or 2 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid piece placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidCharacter { ch: char, rank: usize },

    #[error("rank {rank} has {squares} squares, expected 8")]
    InvalidRankLength { rank: usize, squares: u32 },

    #[error("invalid side to move: expected 'w' or 'b', got '{0}'")]
    InvalidSide(String),
}

/// Parses a position string into a board and the side to move.
///
/// Ranks fill rows 0 through 7 in string order. Piece counts are not
/// checked, so positions with missing or extra kings are accepted.
pub fn parse_position(text: &str) -> Result<(Board, Color), FormatError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.is_empty() || fields.len() > 2 {
        return Err(FormatError::InvalidFieldCount(fields.len()));
    }

    let board = parse_placement(fields[0])?;
    let side = match fields.get(1) {
        Some(token) => {
            Color::from_token(token).ok_or_else(|| FormatError::InvalidSide(token.to_string()))?
        }
        None => Color::White,
    };

    Ok((board, side))
}

/// Parses the piece-placement field alone.
pub fn parse_placement(placement: &str) -> Result<Board, FormatError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FormatError::InvalidRankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (row, rank) in ranks.iter().enumerate() {
        // Ranks are numbered 8 down to 1 in error messages.
        let rank_number = 8 - row;
        let mut col = 0u32;
        for ch in rank.chars() {
            if let Some(run) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                col += run;
            } else if let Some(piece) = Piece::from_fen_char(ch) {
                let sq = Square::new(row as u8, col as u8).ok_or(FormatError::InvalidRankLength {
                    rank: rank_number,
                    squares: col + 1,
                })?;
                board.set(sq, Some(piece));
                col += 1;
            } else {
                return Err(FormatError::InvalidCharacter {
                    ch,
                    rank: rank_number,
                });
            }
            if col > 8 {
                return Err(FormatError::InvalidRankLength {
                    rank: rank_number,
                    squares: col,
                });
            }
        }
        if col != 8 {
            return Err(FormatError::InvalidRankLength {
                rank: rank_number,
                squares: col,
            });
        }
    }

    Ok(board)
}

/// Writes a board and side to move as a position string.
pub fn format_position(board: &Board, side: Color) -> String {
    let mut out = format_placement(board);
    out.push(' ');
    out.push(side.to_fen_char());
    out
}

/// Writes the piece-placement field alone.
pub fn format_placement(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0;
        for col in 0..8u8 {
            match Square::new(row, col).and_then(|sq| board.piece_at(sq)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            out.push_str(&empty_count.to_string());
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}
