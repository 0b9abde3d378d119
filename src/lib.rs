//! An adversarial search agent for the board game 'Connect M'
//!
//! Connect M generalises Connect 4 to an N×N gravity-drop board where a player
//! wins by lining up M of their tokens in a row, column or diagonal. The agent
//! uses a depth-limited minimax search with alpha-beta pruning over a static
//! segment-counting heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect_m::{board::{Board, Token}, search::{Perspective, Searcher}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new(5, 4)?;
//! board.play(2, Token::X);
//!
//! let perspective = Perspective::new(Token::O);
//! let column = Searcher::new(&board, perspective).select_move(3);
//!
//! assert!(column.map_or(false, |c| board.is_valid_move(c)));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod evaluation;

pub mod search;

pub mod simulation;


/// The smallest supported board width and height
pub const MIN_SIZE: usize = 2;

/// The largest supported board width and height
pub const MAX_SIZE: usize = 10;

/// The shortest supported winning line
pub const MIN_CONNECT: usize = 2;

/// Search depth used by the drivers when none is given
pub const DEFAULT_DEPTH: usize = 4;

/// Static score type shared by the evaluator and the search
pub type Score = i64;

/// The score of a position where a qualifying line is on the board
pub const WIN_SCORE: Score = 1_000_000;

const_assert!(MIN_CONNECT <= MIN_SIZE);
// a single segment is worth at most 10^(MAX_SIZE - 1), and there are fewer
// than 4 * MAX_SIZE^2 segments, so the sum always fits in a Score
const_assert!(MAX_SIZE <= 15);
