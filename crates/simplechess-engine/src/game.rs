//! Game session with move history.
//!
//! [`Game`] owns the current board and side to move, applies moves for the
//! side to move after checking them against the rules, and records what was
//! played so the session can be inspected or restarted.

use crate::movegen::IllegalMoveError;
use crate::rules::{GameResult, GameStatus, RuleSet, SimplifiedRules};
use crate::MoveList;
use simplechess_core::{
    format_position, parse_position, Board, Color, FormatError, Move, Piece, Square,
};
use tracing::debug;

/// A recorded move in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    /// The move as played.
    pub mov: Move,
    /// The piece that moved, before any promotion.
    pub piece: Piece,
    /// The piece that stood on the destination, if any.
    pub captured: Option<Piece>,
    /// Whether the move promoted a pawn.
    pub promoted: bool,
}

/// A game session under a rule set.
#[derive(Debug, Clone)]
pub struct Game<R: RuleSet = SimplifiedRules> {
    rules: R,
    board: Board,
    side_to_move: Color,
    start: (Board, Color),
    history: Vec<PlayedMove>,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::with_rules(SimplifiedRules)
    }

    /// Creates a game from a position string.
    pub fn from_position(text: &str) -> Result<Self, FormatError> {
        let (board, side) = parse_position(text)?;
        Ok(Self::from_board(SimplifiedRules, board, side))
    }
}

impl<R: RuleSet> Game<R> {
    /// Creates a game at the rule set's initial position.
    pub fn with_rules(rules: R) -> Self {
        let (board, side) = rules.initial_position();
        Self::from_board(rules, board, side)
    }

    /// Creates a game from an arbitrary board.
    ///
    /// The position may already be terminal, in which case no move is accepted.
    pub fn from_board(rules: R, board: Board, side_to_move: Color) -> Self {
        let status = rules.status(&board, side_to_move);
        Game {
            rules,
            board,
            side_to_move,
            start: (board, side_to_move),
            history: Vec::new(),
            status,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the status of the current position for the side to move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.status.is_check()
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.status.result(self.side_to_move)
    }

    /// Returns all legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        self.rules.legal_moves(&self.board, self.side_to_move)
    }

    /// Returns the legal moves of the piece on `from`.
    ///
    /// Empty if the square is empty or holds a piece of the side not to move.
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        let mut moves = self.legal_moves();
        moves.retain(|m| m.from() == from);
        moves
    }

    /// Plays a move for the side to move.
    ///
    /// On success the side to move flips and the new status is returned. On
    /// error the game is unchanged.
    pub fn play(&mut self, m: Move) -> Result<GameStatus, IllegalMoveError> {
        if self.is_over() {
            return Err(IllegalMoveError::GameOver);
        }

        let piece = self
            .board
            .piece_at(m.from())
            .ok_or(IllegalMoveError::EmptyOrigin(m.from()))?;
        let next = self.rules.try_make_move(&self.board, self.side_to_move, m)?;
        let played = PlayedMove {
            mov: m,
            piece,
            captured: self.board.piece_at(m.to()),
            promoted: next.piece_at(m.to()).map(|p| p.kind) != Some(piece.kind),
        };

        self.history.push(played);
        self.board = next;
        self.side_to_move = self.side_to_move.opposite();
        self.status = self.rules.status(&self.board, self.side_to_move);

        debug!(
            mv = %m,
            piece = %piece,
            status = %self.status,
            ply = self.history.len(),
            "move played"
        );
        Ok(self.status)
    }

    /// Returns to the position the game was created from.
    pub fn restart(&mut self) {
        let (board, side) = self.start;
        self.board = board;
        self.side_to_move = side;
        self.history.clear();
        self.status = self.rules.status(&board, side);
        debug!(side = %side, "game restarted");
    }

    /// Returns the moves played since creation or the last restart.
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the current position as a position string.
    pub fn to_position_string(&self) -> String {
        format_position(&self.board, self.side_to_move)
    }
}
