use super::session_rng::SessionRng;
use super::types::Point;

/// Random placement samples this many cells before falling back to a full
/// scan of the grid.
const MAX_RANDOM_TRIES: u32 = 100;

#[derive(Clone, Debug)]
pub struct Apple {
    position: Point,
}

impl Apple {
    pub fn new(position: Point) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the apple to a free in-bounds cell. The occupancy predicate is
    /// injected by the board; the apple itself only refuses its own current
    /// cell.
    ///
    /// Random sampling can starve on a nearly full grid, so after a bounded
    /// number of tries the grid is scanned cell by cell. Returns false when
    /// no free cell exists at all.
    pub fn relocate(
        &mut self,
        rng: &mut SessionRng,
        width: i32,
        height: i32,
        is_occupied: impl Fn(Point) -> bool,
    ) -> bool {
        for _ in 0..MAX_RANDOM_TRIES {
            let candidate = rng.random_point(width, height);
            if candidate != self.position && !is_occupied(candidate) {
                self.position = candidate;
                return true;
            }
        }

        for y in 0..height {
            for x in 0..width {
                let candidate = Point::new(x, y);
                if candidate != self.position && !is_occupied(candidate) {
                    self.position = candidate;
                    return true;
                }
            }
        }

        false
    }
}
