//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Castling, en passant and under-promotion are never generated here, so
//! the standard tables only apply while none of them could have occurred.

use super::{generate_legal_moves, make_move};
use simplechess_core::{Board, Color, Move};

/// Counts the number of leaf nodes at the given depth.
pub fn perft(board: &Board, side: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .filter_map(|&m| make_move(board, m).ok())
        .map(|next| perft(&next, side.opposite(), depth - 1))
        .sum()
}

/// Perft with divide - node count below each root move, in generation order.
/// Useful for debugging to identify which moves have incorrect counts.
///
/// Depth 0 has no root moves to divide by and returns an empty list.
pub fn perft_divide(board: &Board, side: Color, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let moves = generate_legal_moves(board, side);
    let mut results = Vec::with_capacity(moves.len());

    for &m in &moves {
        let Ok(next) = make_move(board, m) else {
            continue;
        };
        let nodes = if depth > 1 {
            perft(&next, side.opposite(), depth - 1)
        } else {
            1
        };
        results.push((m, nodes));
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use simplechess_core::{parse_position, STARTPOS};

    fn startpos() -> (Board, Color) {
        parse_position(STARTPOS).unwrap()
    }

    #[test]
    fn perft_depth_0() {
        let (board, side) = startpos();
        assert_eq!(perft(&board, side, 0), 1);
    }

    #[test]
    fn perft_startpos_depth_1() {
        let (board, side) = startpos();
        assert_eq!(perft(&board, side, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let (board, side) = startpos();
        assert_eq!(perft(&board, side, 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        let (board, side) = startpos();
        assert_eq!(perft(&board, side, 3), 8902);
    }

    #[test]
    fn perft_startpos_depth_4() {
        let (board, side) = startpos();
        assert_eq!(perft(&board, side, 4), 197_281);
    }

    #[test]
    fn perft_divide_sums_to_perft() {
        let (board, side) = startpos();
        let divide = perft_divide(&board, side, 3);
        assert_eq!(divide.len(), 20);
        let total: u64 = divide.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 8902);
    }

    #[test]
    fn perft_divide_depth_1_counts_each_move_once() {
        let (board, side) = startpos();
        let divide = perft_divide(&board, side, 1);
        assert!(divide.iter().all(|&(_, n)| n == 1));
    }

    #[test]
    fn perft_divide_depth_0_is_empty() {
        let (board, side) = startpos();
        assert!(perft_divide(&board, side, 0).is_empty());
    }

    #[test]
    fn perft_of_mated_side_is_zero() {
        let (board, side) = parse_position("6k1/5ppp/8/8/8/8/8/R5K1 w").unwrap();
        // One ply of Ra1-a8 leaves Black without moves.
        let after = make_move(&board, Move::from_coords(7, 0, 0, 0).unwrap()).unwrap();
        assert_eq!(perft(&after, side.opposite(), 1), 0);
    }
}
