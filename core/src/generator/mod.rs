use crate::*;
pub use random::*;

mod random;

/// Strategy for laying out the mines of a new board.
pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}

/// Places mines at exactly the given coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBoardGenerator {
    mines: Vec<Coord2>,
}

impl FixedBoardGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl BoardGenerator for FixedBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        let board = Board::from_mine_coords(config.size(), &self.mines)?;
        if board.num_mines() != config.num_mines {
            return Err(ConfigurationError::MineCountMismatch {
                requested: config.num_mines,
                placed: board.num_mines(),
            });
        }
        Ok(board)
    }
}
