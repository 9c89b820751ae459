//! Rule set abstraction and terminal-state classification.
//!
//! This module provides the [`RuleSet`] trait, the seam behind which a rules
//! variant lives, and [`game_status`], which classifies a position as normal,
//! check, checkmate or stalemate.

mod simplified;

pub use simplified::SimplifiedRules;

use crate::movegen::{generate_legal_moves, is_in_check, IllegalMoveError};
use crate::MoveList;
use simplechess_core::{Board, Color, Move};
use std::fmt;

/// Classification of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Legal moves exist and the king is safe.
    Normal,
    /// Legal moves exist and the king is attacked.
    Check,
    /// No legal moves and the king is attacked.
    Checkmate,
    /// No legal moves and the king is safe.
    Stalemate,
}

impl GameStatus {
    const fn classify(has_moves: bool, in_check: bool) -> Self {
        match (has_moves, in_check) {
            (true, false) => GameStatus::Normal,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// Returns true if the game cannot continue.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    /// Returns true if the side to move is in check (including checkmate).
    #[inline]
    pub const fn is_check(self) -> bool {
        matches!(self, GameStatus::Check | GameStatus::Checkmate)
    }

    /// Returns the result of a finished game, given the side to move.
    pub const fn result(self, side_to_move: Color) -> Option<GameResult> {
        match self {
            GameStatus::Checkmate => Some(match side_to_move {
                Color::White => GameResult::BlackWins,
                Color::Black => GameResult::WhiteWins,
            }),
            GameStatus::Stalemate => Some(GameResult::Draw),
            GameStatus::Normal | GameStatus::Check => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Normal => "Normal",
            GameStatus::Check => "Check",
            GameStatus::Checkmate => "Checkmate",
            GameStatus::Stalemate => "Stalemate",
        };
        write!(f, "{}", name)
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// White wins by checkmate.
    WhiteWins,
    /// Black wins by checkmate.
    BlackWins,
    /// Stalemate.
    Draw,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::WhiteWins => write!(f, "White wins"),
            GameResult::BlackWins => write!(f, "Black wins"),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies the position for `side`.
pub fn game_status(board: &Board, side: Color) -> GameStatus {
    let has_moves = !generate_legal_moves(board, side).is_empty();
    GameStatus::classify(has_moves, is_in_check(board, side))
}

/// Trait for implementing rule variants.
///
/// The engine ships one rule set, [`SimplifiedRules`]. A variant that adds
/// castling or under-promotion belongs in its own implementation rather than
/// in changes to the shared move generator.
///
/// # Example
///
/// ```
/// use simplechess_engine::{RuleSet, SimplifiedRules};
///
/// let (board, side) = SimplifiedRules.initial_position();
/// let moves = SimplifiedRules.legal_moves(&board, side);
/// assert_eq!(moves.len(), 20);
/// ```
pub trait RuleSet {
    /// Returns the initial board and side to move for this variant.
    fn initial_position(&self) -> (Board, Color);

    /// Generates moves that follow piece-movement rules, ignoring self-check.
    fn pseudo_legal_moves(&self, board: &Board, side: Color) -> MoveList;

    /// Generates all legal moves for `side`.
    fn legal_moves(&self, board: &Board, side: Color) -> MoveList;

    /// Applies a move without checking its legality.
    fn make_move(&self, board: &Board, m: Move) -> Result<Board, IllegalMoveError>;

    /// Returns true if `side` is in check.
    fn is_check(&self, board: &Board, side: Color) -> bool;

    /// Applies a move after checking that `side` may legally play it.
    fn try_make_move(
        &self,
        board: &Board,
        side: Color,
        m: Move,
    ) -> Result<Board, IllegalMoveError> {
        let piece = board
            .piece_at(m.from())
            .ok_or(IllegalMoveError::EmptyOrigin(m.from()))?;
        if piece.color != side {
            return Err(IllegalMoveError::WrongSide {
                square: m.from(),
                owner: piece.color,
            });
        }
        if !self.legal_moves(board, side).contains(&m) {
            return Err(IllegalMoveError::NotLegal(m));
        }
        self.make_move(board, m)
    }

    /// Classifies the position for `side`.
    fn status(&self, board: &Board, side: Color) -> GameStatus {
        let has_moves = !self.legal_moves(board, side).is_empty();
        GameStatus::classify(has_moves, self.is_check(board, side))
    }

    /// Returns true if `side` has no legal move.
    fn is_game_over(&self, board: &Board, side: Color) -> bool {
        self.status(board, side).is_terminal()
    }
}
