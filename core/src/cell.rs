use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2};

/// Player-facing state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellMode {
    #[default]
    Hidden,
    Flagged,
    Visible,
}

impl CellMode {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Hidden and Flagged cells can still change, Visible ones never do.
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    is_mine: bool,
    neighboring_mines: u8,
    pub(crate) mode: CellMode,
}

impl Cell {
    pub(crate) const fn new(coords: Coord2) -> Self {
        Self {
            coords,
            is_mine: false,
            neighboring_mines: 0,
            mode: CellMode::Hidden,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn row(&self) -> Coord {
        self.coords.0
    }

    pub const fn col(&self) -> Coord {
        self.coords.1
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    /// Meaningless for mine cells, which are never counted.
    pub const fn neighboring_mines(&self) -> u8 {
        self.neighboring_mines
    }

    pub const fn mode(&self) -> CellMode {
        self.mode
    }

    pub(crate) fn place_mine(&mut self) {
        self.is_mine = true;
    }

    pub(crate) fn add_neighboring_mine(&mut self) {
        if !self.is_mine {
            self.neighboring_mines += 1;
        }
    }
}
