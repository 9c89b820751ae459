//! The simplified rule set.

use super::RuleSet;
use crate::movegen::{
    generate_legal_moves, generate_pseudo_legal_moves, is_in_check, make_legal_move, make_move,
    IllegalMoveError,
};
use crate::MoveList;
use simplechess_core::{Board, Color, Move};

/// Simplified chess rules.
///
/// Standard piece movement with these deliberate differences from FIDE rules:
/// - No castling
/// - No en passant
/// - Pawns always promote to a queen
/// - No fifty-move or repetition draws
/// - A side without a king is always in check
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedRules;

impl RuleSet for SimplifiedRules {
    fn initial_position(&self) -> (Board, Color) {
        (Board::startpos(), Color::White)
    }

    fn pseudo_legal_moves(&self, board: &Board, side: Color) -> MoveList {
        generate_pseudo_legal_moves(board, side)
    }

    fn legal_moves(&self, board: &Board, side: Color) -> MoveList {
        generate_legal_moves(board, side)
    }

    fn make_move(&self, board: &Board, m: Move) -> Result<Board, IllegalMoveError> {
        make_move(board, m)
    }

    fn is_check(&self, board: &Board, side: Color) -> bool {
        is_in_check(board, side)
    }

    fn try_make_move(
        &self,
        board: &Board,
        side: Color,
        m: Move,
    ) -> Result<Board, IllegalMoveError> {
        make_legal_move(board, side, m)
    }
}
