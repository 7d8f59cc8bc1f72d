use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The grid of cells for one game, together with its mine coordinates.
///
/// Dimensions and mine placement are fixed once built; only cell modes change.
/// Deserializing rebuilds the layout from `mines` and rejects any cell or
/// counter that does not match it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardState")]
pub struct Board {
    cells: Array2<Cell>,
    mines: Vec<Coord2>,
    num_visible: CellCount,
}

impl Board {
    /// Builds a board from a fixed mine layout.
    ///
    /// The layout is held to the same limits as a random one: a non-empty
    /// board, at most half of the cells mined, every mine on the board and no
    /// coordinate listed twice.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let requested = CellCount::try_from(mine_coords.len()).unwrap_or(CellCount::MAX);
        GameConfig::new(size.0, size.1, requested)?;

        let mut seen: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(ConfigurationError::InvalidCoords(coords));
            }
            if seen[coords.to_nd_index()] {
                return Err(ConfigurationError::DuplicateMine(coords));
            }
            seen[coords.to_nd_index()] = true;
        }

        Ok(Self::with_mines(size, mine_coords.to_vec()))
    }

    /// Lays out a board around mines that are already known to be distinct and in bounds.
    pub(crate) fn with_mines(size: Coord2, mines: Vec<Coord2>) -> Self {
        let mut cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            // dimensions come from `Coord`, so indices always fit back
            Cell::new((row as Coord, col as Coord))
        });

        for &coords in &mines {
            cells[coords.to_nd_index()].place_mine();
        }

        // every mine must be placed before counting, or a later mine keeps a stale count
        for &coords in &mines {
            for pos in neighbors(coords, size) {
                cells[pos.to_nd_index()].add_neighboring_mine();
            }
        }

        Self {
            cells,
            mines,
            num_visible: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn height(&self) -> Coord {
        self.size().0
    }

    pub fn width(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn num_mines(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    pub fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.num_mines()
    }

    /// Number of cells currently in [`CellMode::Visible`].
    pub fn num_visible(&self) -> CellCount {
        self.num_visible
    }

    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size())
    }

    pub fn cell(&self, coords: Coord2) -> Option<&Cell> {
        self.contains(coords)
            .then(|| &self.cells[coords.to_nd_index()])
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn has_visible_mine(&self) -> bool {
        self.mines
            .iter()
            .any(|&coords| self[coords].mode.is_visible())
    }

    pub fn count_mode(&self, mode: CellMode) -> CellCount {
        self.cells.iter().filter(|cell| cell.mode == mode).count() as CellCount
    }

    /// Marks a single Hidden cell Visible, keeping the visible count in step.
    pub(crate) fn make_visible(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if !cell.mode.is_hidden() {
            return false;
        }
        cell.mode = CellMode::Visible;
        self.num_visible += 1;
        true
    }

    /// Switches a cell between Hidden and Flagged, leaving Visible cells alone.
    pub(crate) fn toggle_flag(&mut self, coords: Coord2) -> Option<CellMode> {
        let cell = self.cells.get_mut(coords.to_nd_index())?;
        let next = match cell.mode {
            CellMode::Hidden => CellMode::Flagged,
            CellMode::Flagged => CellMode::Hidden,
            CellMode::Visible => return None,
        };
        cell.mode = next;
        Some(next)
    }

    /// Forces every cell Visible, used when the game ends.
    pub(crate) fn reveal_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.mode = CellMode::Visible;
        }
        self.num_visible = self.total_cells();
    }
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardState {
    cells: Array2<Cell>,
    mines: Vec<Coord2>,
    num_visible: CellCount,
}

impl TryFrom<BoardState> for Board {
    type Error = ConfigurationError;

    fn try_from(state: BoardState) -> Result<Self> {
        let (height, width) = state.cells.dim();
        let too_large = |_| ConfigurationError::InvalidBoard("too many rows or columns");
        let size = (
            Coord::try_from(height).map_err(too_large)?,
            Coord::try_from(width).map_err(too_large)?,
        );
        let mut board = Self::from_mine_coords(size, &state.mines)?;

        for (cell, stored) in board.cells.iter_mut().zip(state.cells.iter()) {
            cell.mode = stored.mode;
            if *cell != *stored {
                return Err(ConfigurationError::InvalidBoard(
                    "cell does not match the mine layout",
                ));
            }
        }

        board.num_visible = board.count_mode(CellMode::Visible);
        if board.num_visible != state.num_visible {
            return Err(ConfigurationError::InvalidBoard(
                "visible count does not match the cells",
            ));
        }

        Ok(board)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_counts_match_clamped_neighborhood() {
        // . * .
        // . . .
        // . . *
        let board = Board::from_mine_coords((3, 3), &[(0, 1), (2, 2)]).unwrap();

        assert_eq!(board[(0, 0)].neighboring_mines(), 1);
        assert_eq!(board[(0, 2)].neighboring_mines(), 1);
        assert_eq!(board[(1, 0)].neighboring_mines(), 1);
        assert_eq!(board[(1, 1)].neighboring_mines(), 2);
        assert_eq!(board[(1, 2)].neighboring_mines(), 2);
        assert_eq!(board[(2, 0)].neighboring_mines(), 0);
        assert_eq!(board[(2, 1)].neighboring_mines(), 1);
        assert!(board[(0, 1)].is_mine());
        assert!(board[(2, 2)].is_mine());
    }

    #[test]
    fn corner_cell_sees_only_three_candidates() {
        // all three neighbors of the corner are mines on a 4x4 board
        let board = Board::from_mine_coords((4, 4), &[(0, 1), (1, 0), (1, 1)]).unwrap();
        assert_eq!(board[(0, 0)].neighboring_mines(), 3);
        assert_eq!(board[(3, 3)].neighboring_mines(), 0);
        assert_eq!(board[(2, 2)].neighboring_mines(), 1);
        assert_eq!(board[(0, 2)].neighboring_mines(), 2);
    }

    #[test]
    fn mine_cells_are_not_counted() {
        let board = Board::from_mine_coords((2, 2), &[(0, 0), (1, 1)]).unwrap();
        assert_eq!(board[(0, 1)].neighboring_mines(), 2);
        assert_eq!(board[(1, 0)].neighboring_mines(), 2);
        assert_eq!(board[(0, 0)].neighboring_mines(), 0);
    }

    #[test]
    fn cells_know_their_coordinates() {
        let board = Board::from_mine_coords((2, 3), &[]).unwrap();
        assert_eq!(board.size(), (2, 3));
        assert_eq!(board[(1, 2)].coords(), (1, 2));
        assert_eq!(board[(1, 2)].row(), 1);
        assert_eq!(board[(1, 2)].col(), 2);
        assert!(board.cells().all(|cell| cell.mode() == CellMode::Hidden));
        assert_eq!(board.cell((2, 0)), None);
    }

    #[test]
    fn from_mine_coords_rejects_bad_layouts() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]),
            Err(ConfigurationError::InvalidCoords((2, 0)))
        );
        assert_eq!(
            Board::from_mine_coords((3, 3), &[(1, 1), (1, 1)]),
            Err(ConfigurationError::DuplicateMine((1, 1)))
        );
        assert!(matches!(
            Board::from_mine_coords((2, 2), &[(0, 0), (0, 1), (1, 0)]),
            Err(ConfigurationError::TooManyMines { .. })
        ));
        assert!(matches!(
            Board::from_mine_coords((0, 2), &[]),
            Err(ConfigurationError::EmptyBoard { .. })
        ));
    }

    #[test]
    fn toggle_flag_skips_visible_cells() {
        let mut board = Board::from_mine_coords((2, 2), &[]).unwrap();

        assert_eq!(board.toggle_flag((0, 0)), Some(CellMode::Flagged));
        assert_eq!(board.toggle_flag((0, 0)), Some(CellMode::Hidden));
        assert!(board.make_visible((0, 0)));
        assert_eq!(board.toggle_flag((0, 0)), None);
        assert_eq!(board.toggle_flag((5, 5)), None);
        assert_eq!(board.num_visible(), 1);
    }

    #[test]
    fn deserialize_keeps_a_board_in_play() {
        let mut board = Board::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();
        board.toggle_flag((0, 0));
        board.make_visible((1, 1));

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, board);
        assert_eq!(restored.num_visible(), 1);
        assert_eq!(restored[(0, 0)].mode(), CellMode::Flagged);
    }

    #[test]
    fn deserialize_rejects_tampered_boards() {
        let board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let value = serde_json::to_value(&board).unwrap();

        let mut wrong_count = value.clone();
        wrong_count["num_visible"] = 3.into();
        assert!(serde_json::from_value::<Board>(wrong_count).is_err());

        let mut duplicate_mine = value.clone();
        duplicate_mine["mines"] = serde_json::json!([[0, 0], [0, 0]]);
        assert!(serde_json::from_value::<Board>(duplicate_mine).is_err());

        let mut hidden_mine = value.clone();
        hidden_mine["cells"]["data"][3]["is_mine"] = true.into();
        assert!(serde_json::from_value::<Board>(hidden_mine).is_err());

        let mut wrong_neighbors = value.clone();
        wrong_neighbors["cells"]["data"][1]["neighboring_mines"] = 9.into();
        assert!(serde_json::from_value::<Board>(wrong_neighbors).is_err());

        let mut too_many_mines = value;
        too_many_mines["mines"] = serde_json::json!([[0, 0], [0, 1], [1, 0]]);
        assert!(serde_json::from_value::<Board>(too_many_mines).is_err());
    }

    #[test]
    fn cells_start_hidden_by_default() {
        assert_eq!(CellMode::default(), CellMode::Hidden);
    }

    #[test]
    fn reveal_all_sets_full_visible_count() {
        let mut board = Board::from_mine_coords((3, 2), &[(0, 0)]).unwrap();
        board.toggle_flag((1, 1));

        board.reveal_all();

        assert_eq!(board.num_visible(), 6);
        assert_eq!(board.count_mode(CellMode::Visible), 6);
        assert!(board.has_visible_mine());
    }
}
