use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

/// One game from first click to win or loss, plus the means to start the next one.
///
/// Every `dispatch_*` call runs to completion, including the win/loss check,
/// before returning. Actions that do not apply to the current state are
/// ignored and report `NoChange`; once the game is Won or Lost nothing but
/// [`Game::new_game`] changes it.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    mode: GameMode,
    num_flagged: CellCount,
    triggered_mine: Option<Coord2>,
    rng: SmallRng,
}

impl Game {
    /// Starts a game with a randomly seeded layout.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_seed(config, rand::random())
    }

    /// Starts a game whose layouts, this one and every later
    /// [`new_game`](Self::new_game), are fully determined by `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = RandomBoardGenerator::new(rng.random()).generate(config)?;
        Ok(Self::from_parts(config, board, rng))
    }

    pub fn with_generator(config: GameConfig, generator: impl BoardGenerator) -> Result<Self> {
        let board = generator.generate(config)?;
        Ok(Self::from_parts(config, board, SmallRng::seed_from_u64(rand::random())))
    }

    /// Resumes play on an already built board, keeping its flags and revealed
    /// cells. Later games reuse its dimensions and mine count.
    ///
    /// A board that shows a mine or has every safe cell revealed is already
    /// over and is rejected with [`ConfigurationError::BoardFinished`].
    pub fn from_board(board: Board) -> Result<Self> {
        if board.has_visible_mine() || board.num_visible() >= board.safe_cells() {
            return Err(ConfigurationError::BoardFinished);
        }

        let (height, width) = board.size();
        let config = GameConfig::new(height, width, board.num_mines())?;
        let num_flagged = board.count_mode(CellMode::Flagged);
        let mut game = Self::from_parts(config, board, SmallRng::seed_from_u64(rand::random()));
        game.num_flagged = num_flagged;
        Ok(game)
    }

    fn from_parts(config: GameConfig, board: Board, rng: SmallRng) -> Self {
        log::debug!(
            "New game {}x{} with {} mines",
            config.height,
            config.width,
            config.num_mines
        );
        Self {
            config,
            board,
            mode: GameMode::default(),
            num_flagged: 0,
            triggered_mine: None,
            rng,
        }
    }

    /// Throws the current board away and deals a fresh random one of the same configuration.
    pub fn new_game(&mut self) -> Result<()> {
        let seed = self.rng.random();
        self.new_game_with(RandomBoardGenerator::new(seed))
    }

    pub fn new_game_with(&mut self, generator: impl BoardGenerator) -> Result<()> {
        let board = generator.generate(self.config)?;
        let rng = self.rng.clone();
        *self = Self::from_parts(self.config, board, rng);
        Ok(())
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn is_finished(&self) -> bool {
        self.mode.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn num_mines(&self) -> CellCount {
        self.board.num_mines()
    }

    pub fn num_visible(&self) -> CellCount {
        self.board.num_visible()
    }

    pub fn num_flagged(&self) -> CellCount {
        self.num_flagged
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.num_mines() as isize) - (self.num_flagged as isize)
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchOutcome {
        match action {
            Action::Reveal(coords) => DispatchOutcome::Reveal(self.dispatch_reveal(coords)),
            Action::Flag(coords) => DispatchOutcome::Mark(self.dispatch_flag(coords)),
            Action::ToggleMode => DispatchOutcome::Mark(self.dispatch_toggle_mode()),
        }
    }

    /// Reveals a cell while sweeping, then settles the game if that decided it.
    pub fn dispatch_reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.mode != GameMode::Sweep || !self.board.reveal(coords) {
            return RevealOutcome::NoChange;
        }
        self.evaluate(coords)
    }

    /// Flags or unflags a cell while in flag mode.
    pub fn dispatch_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if self.mode != GameMode::Flag {
            return MarkOutcome::NoChange;
        }

        match self.board.toggle_flag(coords) {
            Some(CellMode::Flagged) => self.num_flagged += 1,
            Some(_) => self.num_flagged -= 1,
            None => return MarkOutcome::NoChange,
        }
        log::trace!("Toggled flag at {:?}, {} flagged", coords, self.num_flagged);
        MarkOutcome::Changed
    }

    pub fn dispatch_toggle_mode(&mut self) -> MarkOutcome {
        let Some(interaction) = self.mode.interaction() else {
            return MarkOutcome::NoChange;
        };
        self.mode = interaction.toggled().into();
        MarkOutcome::Changed
    }

    // a visible mine always loses, even if the safe count also matches
    fn evaluate(&mut self, revealed_at: Coord2) -> RevealOutcome {
        if self.board.has_visible_mine() {
            self.triggered_mine = Some(revealed_at);
            self.end_game(GameMode::Lost);
            RevealOutcome::HitMine
        } else if self.board.num_visible() == self.board.safe_cells() {
            self.end_game(GameMode::Won);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    fn end_game(&mut self, mode: GameMode) {
        debug_assert!(mode.is_finished());
        log::debug!(
            "Game ended {:?} with {} of {} cells revealed",
            mode,
            self.board.num_visible(),
            self.board.total_cells()
        );
        self.mode = mode;
        self.board.reveal_all();
        self.num_flagged = 0;
    }
}
