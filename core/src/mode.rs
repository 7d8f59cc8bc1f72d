use serde::{Deserialize, Serialize};

use crate::*;

/// What a click on a cell means while the game is in progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Sweep,
    Flag,
}

impl InteractionMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Sweep => Self::Flag,
            Self::Flag => Self::Sweep,
        }
    }

    /// Whether a cell in `cell_mode` accepts a click in this mode.
    pub const fn accepts(self, cell_mode: CellMode) -> bool {
        match (self, cell_mode) {
            (Self::Sweep, CellMode::Hidden) => true,
            (Self::Flag, CellMode::Hidden | CellMode::Flagged) => true,
            _ => false,
        }
    }
}

/// Valid transitions:
/// - Sweep <-> Flag
/// - Sweep -> Won
/// - Sweep -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Sweep,
    Flag,
    Won,
    Lost,
}

impl GameMode {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// The interaction mode, or `None` once the game has ended.
    pub const fn interaction(self) -> Option<InteractionMode> {
        match self {
            Self::Sweep => Some(InteractionMode::Sweep),
            Self::Flag => Some(InteractionMode::Flag),
            Self::Won | Self::Lost => None,
        }
    }

    /// Whether a cell in `cell_mode` is clickable; nothing is once the game ended.
    pub const fn is_clickable(self, cell_mode: CellMode) -> bool {
        match self.interaction() {
            Some(interaction) => interaction.accepts(cell_mode),
            None => false,
        }
    }
}

impl From<InteractionMode> for GameMode {
    fn from(mode: InteractionMode) -> Self {
        match mode {
            InteractionMode::Sweep => Self::Sweep,
            InteractionMode::Flag => Self::Flag,
        }
    }
}

/// A single player action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal(Coord2),
    Flag(Coord2),
    ToggleMode,
}
