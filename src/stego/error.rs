use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::types::{COLS, MAX_MESSAGE_LEN, ROWS};

pub type Result<T> = std::result::Result<T, StegError>;

/// 격자 형태가 맞지 않는 이유
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeMismatch {
    #[error("expected {} rows, found {found}", ROWS)]
    RowCount { found: usize },
    #[error("row {row} has {found} characters, expected {}", COLS)]
    RowWidth { row: usize, found: usize },
    #[error("expected {} columns, found {found}", COLS)]
    ColumnCount { found: usize },
}

#[derive(Debug, Error)]
pub enum StegError {
    #[error("message has {len} characters, at most {} fit in the grid", MAX_MESSAGE_LEN)]
    MessageTooLong { len: usize },

    #[error("message character {index} ({ch:?}) is a line terminator and cannot be stored")]
    InvalidMessageCharacter { index: usize, ch: char },

    #[error("invalid grid shape: {0}")]
    InvalidGridShape(ShapeMismatch),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("failed to access grid file {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
