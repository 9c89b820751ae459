//! Simplified chess rules engine.
//!
//! This crate provides:
//! - Attack detection and check testing ([`is_square_attacked`], [`is_in_check`])
//! - Pseudo-legal and legal move generation in a stable order
//! - Move application with automatic queen promotion ([`make_move`])
//! - Terminal-state classification ([`game_status`])
//! - [`RuleSet`] - Trait seam for rule variants, implemented by [`SimplifiedRules`]
//! - [`Game`] - A game session with move history
//! - [`perft`](movegen::perft::perft) counting for generator validation
//!
//! Boards are plain 8×8 grids from `simplechess-core`. Row 0 is the first
//! rank of a position string; White pawns move toward row 0. There is no
//! castling, no en passant and no draw rule other than stalemate.
//!
//! # Example
//!
//! ```
//! use simplechess_engine::{game_status, generate_legal_moves, Game, GameStatus};
//! use simplechess_core::{parse_position, Move, STARTPOS};
//!
//! // Stateless queries on a board
//! let (board, side) = parse_position(STARTPOS).unwrap();
//! assert_eq!(generate_legal_moves(&board, side).len(), 20);
//! assert_eq!(game_status(&board, side), GameStatus::Normal);
//!
//! // A game session
//! let mut game = Game::new();
//! let e4 = Move::from_coords(6, 4, 4, 4).unwrap();
//! assert_eq!(game.play(e4), Ok(GameStatus::Normal));
//! println!("{}", game.to_position_string());
//! ```

mod game;
pub mod movegen;
pub mod rules;

pub use game::{Game, PlayedMove};
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{
    attacked_squares, generate_legal_moves, generate_pseudo_legal_moves, is_in_check,
    is_square_attacked, legal_moves_from, make_legal_move, make_move, IllegalMoveError, MoveList,
};
pub use rules::{game_status, GameResult, GameStatus, RuleSet, SimplifiedRules};
