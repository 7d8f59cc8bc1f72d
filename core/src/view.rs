use serde::{Deserialize, Serialize};

use crate::*;

/// Which mine marker a finished board shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MineMarker {
    Won,
    Lost,
}

/// What presentation should draw for a cell. Hidden cells never reveal whether
/// they hold a mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayCategory {
    Hidden,
    Flagged,
    Count(u8),
    Mine(MineMarker),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub category: DisplayCategory,
    pub clickable: bool,
}

impl Game {
    /// Read-only projection of one cell, `None` when off the board.
    ///
    /// # Panics
    ///
    /// When the board is inconsistent: a visible mine in a game still in
    /// progress, or a neighbor count above 8.
    pub fn cell_view(&self, coords: Coord2) -> Option<CellView> {
        let cell = self.board().cell(coords)?;
        let mode = self.mode();

        let category = match cell.mode() {
            CellMode::Hidden => DisplayCategory::Hidden,
            CellMode::Flagged => DisplayCategory::Flagged,
            CellMode::Visible if cell.is_mine() => match mode {
                GameMode::Won => DisplayCategory::Mine(MineMarker::Won),
                GameMode::Lost => DisplayCategory::Mine(MineMarker::Lost),
                GameMode::Sweep | GameMode::Flag => {
                    panic!("mine at {coords:?} is visible while the game is still {mode:?}")
                }
            },
            CellMode::Visible => {
                let count = cell.neighboring_mines();
                assert!(count <= 8, "cell at {coords:?} counts {count} neighboring mines");
                DisplayCategory::Count(count)
            }
        };

        Some(CellView {
            category,
            clickable: mode.is_clickable(cell.mode()),
        })
    }
}
