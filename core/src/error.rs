use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

/// Rejected game configuration or board; no game is built when one of these is returned.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Board must have at least one row and one column, got {height}x{width}")]
    EmptyBoard { height: Coord, width: Coord },
    #[error("Too many mines, requested {requested} but at most {max} fit")]
    TooManyMines { requested: CellCount, max: CellCount },
    #[error("Mine coordinates {0:?} are outside the board")]
    InvalidCoords(Coord2),
    #[error("Mine placed twice at {0:?}")]
    DuplicateMine(Coord2),
    #[error("Layout has {placed} mines but {requested} were requested")]
    MineCountMismatch { requested: CellCount, placed: CellCount },
    #[error("Board is inconsistent: {0}")]
    InvalidBoard(&'static str),
    #[error("Board is already finished and cannot be played")]
    BoardFinished,
}

pub type Result<T> = core::result::Result<T, ConfigurationError>;
