//! Rule engine for a grid-based mine-detection puzzle.
//!
//! A [`Game`] owns one [`Board`] and the interaction state around it. Player
//! actions are dispatched through [`Game::dispatch`] (or the individual
//! `dispatch_*` methods) and never fail: actions that make no sense for the
//! current state simply report a `NoChange` outcome. Only building a game can
//! fail, with a [`ConfigurationError`].

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use mode::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod mode;
mod reveal;
mod types;
mod view;

/// The three numbers a game is built from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub height: Coord,
    pub width: Coord,
    pub num_mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(height: Coord, width: Coord, num_mines: CellCount) -> Self {
        Self {
            height,
            width,
            num_mines,
        }
    }

    pub fn new(height: Coord, width: Coord, num_mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(height, width, num_mines);
        config.validate()?;
        Ok(config)
    }

    /// Checks the dimensions are non-empty and at most half of the cells are mines.
    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(ConfigurationError::EmptyBoard {
                height: self.height,
                width: self.width,
            });
        }

        let max = self.max_mines();
        if self.num_mines > max {
            return Err(ConfigurationError::TooManyMines {
                requested: self.num_mines,
                max,
            });
        }

        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.height, self.width)
    }

    pub const fn max_mines(&self) -> CellCount {
        self.total_cells() / 2
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.num_mines)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}

/// Result of [`Game::dispatch`], tagged by the kind of action that was handled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DispatchOutcome {
    Reveal(RevealOutcome),
    Mark(MarkOutcome),
}

impl DispatchOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Mark(outcome) => outcome.has_update(),
        }
    }
}
