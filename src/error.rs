//! Errors reported by board construction and move validation

use crate::{MAX_SIZE, MIN_CONNECT, MIN_SIZE};

/// Errors that can occur when building a board or committing a move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size {0} is out of range, must be between {} and {}", MIN_SIZE, MAX_SIZE)]
    InvalidSize(usize),

    #[error("connect length {connect} is out of range, must be between {} and {size}", MIN_CONNECT)]
    InvalidConnect { size: usize, connect: usize },

    #[error("column {column} out of range, columns must be between 0 and {}", .size - 1)]
    ColumnOutOfRange { column: usize, size: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("search depth must be at least 1")]
    InvalidDepth,

    #[error("the game is already over")]
    GameOver,

    #[error("token at row {row}, column {column} is not supported from below")]
    FloatingToken { row: usize, column: usize },

    #[error("could not parse board: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
