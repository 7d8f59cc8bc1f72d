use super::*;

/// Uniform placement: draws coordinates at random and redraws on a repeat, so
/// every layout with the requested mine count is equally likely.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        use ndarray::Array2;
        use rand::prelude::*;

        config.validate()?;

        let size = config.size();
        let mut taken: Array2<bool> = Array2::default(size.to_nd_index());
        let mut mines = Vec::with_capacity(config.num_mines.into());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut redraws = 0usize;

        while mines.len() < usize::from(config.num_mines) {
            let coords = (
                rng.random_range(0..config.height),
                rng.random_range(0..config.width),
            );
            if taken[coords.to_nd_index()] {
                redraws += 1;
                continue;
            }
            taken[coords.to_nd_index()] = true;
            mines.push(coords);
        }

        log::trace!(
            "Placed {} mines on {}x{} with seed {}, {} redraws",
            mines.len(),
            config.height,
            config.width,
            self.seed,
            redraws
        );

        Ok(Board::with_mines(size, mines))
    }
}
