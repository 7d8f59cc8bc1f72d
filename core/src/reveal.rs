use crate::*;

impl Board {
    /// Reveals the cell at `coords`, cascading through zero-count cells.
    ///
    /// Out-of-bounds coordinates and cells that are not Hidden are ignored, so
    /// this is safe to call on anything. When the revealed cell is a safe cell
    /// with no neighboring mines, its up/down/left/right neighbors are revealed
    /// the same way, which opens the whole connected zero region plus the
    /// numbered cells bordering it. Flagged cells stop the cascade.
    ///
    /// Returns whether the target cell itself was revealed.
    pub fn reveal(&mut self, coords: Coord2) -> bool {
        if !self.contains(coords) || !self[coords].mode().is_hidden() {
            return false;
        }

        let size = self.size();
        let start_visible = self.num_visible();
        let mut to_visit = vec![coords];

        while let Some(visit_coords) = to_visit.pop() {
            // a cell may be queued from several sides, only the first pop counts
            if !self.make_visible(visit_coords) {
                continue;
            }

            let cell = self[visit_coords];
            log::trace!(
                "Revealed cell at {:?}, mine: {}, count: {}",
                visit_coords,
                cell.is_mine(),
                cell.neighboring_mines()
            );

            if !cell.is_mine() && cell.neighboring_mines() == 0 {
                to_visit.extend(
                    orthogonal_neighbors(visit_coords, size)
                        .filter(|&pos| self[pos].mode().is_hidden()),
                );
            }
        }

        log::trace!(
            "Reveal at {:?} opened {} cells",
            coords,
            self.num_visible() - start_visible
        );
        true
    }
}
