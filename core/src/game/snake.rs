use std::collections::VecDeque;

use super::settings::BoardSettings;
use super::types::{Direction, Point};

/// One cell of the snake's body plus the direction it is currently
/// traveling. The stored direction is what renderers key corner and
/// straight sprites off, so it always reflects the segment's most recent
/// move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub position: Point,
    pub direction: Direction,
}

impl Segment {
    pub fn new(position: Point, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

/// The snake's body, head first, tail last. Consecutive segments are
/// grid-adjacent except during the tick a growth segment was appended.
#[derive(Clone, Debug)]
pub struct Snake {
    segments: VecDeque<Segment>,
}

impl Snake {
    pub fn new(settings: &BoardSettings) -> Self {
        let direction = settings.snake_start_direction;
        let segments = settings
            .starting_segments()
            .map(|position| Segment::new(position, direction))
            .collect();
        Self { segments }
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        Self {
            segments: segments.into(),
        }
    }

    pub fn head(&self) -> Segment {
        *self
            .segments
            .front()
            .expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Segment {
        *self
            .segments
            .back()
            .expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments in order, head first.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn occupies(&self, position: Point) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.position == position)
    }

    /// Where the head lands if the snake keeps its current heading.
    pub fn next_head_position(&self) -> Point {
        let head = self.head();
        head.position + head.direction.delta()
    }

    /// True unless `direction` would reverse the snake onto itself.
    pub fn can_change_direction(&self, direction: Direction) -> bool {
        !direction.is_opposite(&self.head().direction)
    }

    /// Predictive self-collision query: whether one more move along the
    /// current heading would land the head on a non-head segment.
    pub fn will_collide_itself(&self) -> bool {
        let next = self.next_head_position();
        self.segments
            .iter()
            .skip(1)
            .any(|segment| segment.position == next)
    }

    /// Advances one cell in `direction`. Rejecting a reversal is the
    /// caller's job, via `can_change_direction`.
    ///
    /// Every segment takes over the direction the segment ahead of it was
    /// facing, the head takes `direction`, then the body shifts by
    /// prepending a new head cell and dropping the tail.
    pub fn advance(&mut self, direction: Direction) {
        let mut carried = direction;
        for segment in self.segments.iter_mut() {
            let previous = segment.direction;
            segment.direction = carried;
            carried = previous;
        }

        let new_head_position = self.head().position + direction.delta();
        self.segments
            .push_front(Segment::new(new_head_position, direction));
        self.segments.pop_back();
    }

    /// Appends one segment directly behind the tail. Called on the tick an
    /// apple is eaten, before the next `advance` drops a tail cell, so the
    /// two together net one cell of growth.
    pub fn grow(&mut self) {
        let tail = self.tail();
        let position = tail.position - tail.direction.delta();
        self.segments.push_back(Segment::new(position, tail.direction));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_from(cells: &[(i32, i32, Direction)]) -> Snake {
        Snake::from_segments(
            cells
                .iter()
                .map(|&(x, y, d)| Segment::new(Point::new(x, y), d))
                .collect(),
        )
    }

    #[test]
    fn test_new_snake_canonical_layout() {
        let snake = Snake::new(&BoardSettings::default());
        let segments: Vec<Segment> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Segment::new(Point::new(12, 7), Direction::Left),
                Segment::new(Point::new(13, 7), Direction::Left),
                Segment::new(Point::new(14, 7), Direction::Left),
            ]
        );
        assert_eq!(snake.len(), 3);
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_advance_shifts_straight_body() {
        let mut snake = Snake::new(&BoardSettings::default());
        snake.advance(Direction::Left);
        let positions: Vec<Point> = snake.segments().map(|s| s.position).collect();
        assert_eq!(
            positions,
            vec![Point::new(11, 7), Point::new(12, 7), Point::new(13, 7)]
        );
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_advance_cascades_directions() {
        let mut snake = snake_from(&[
            (5, 5, Direction::Down),
            (5, 4, Direction::Down),
            (6, 4, Direction::Left),
        ]);

        snake.advance(Direction::Right);

        let segments: Vec<Segment> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Segment::new(Point::new(6, 5), Direction::Right),
                Segment::new(Point::new(5, 5), Direction::Right),
                Segment::new(Point::new(5, 4), Direction::Down),
            ]
        );
    }

    #[test]
    fn test_grow_appends_behind_tail() {
        for (direction, behind) in [
            (Direction::Right, Point::new(13, 7)),
            (Direction::Left, Point::new(15, 7)),
            (Direction::Up, Point::new(14, 8)),
            (Direction::Down, Point::new(14, 6)),
        ] {
            let mut snake = snake_from(&[
                (12, 7, direction),
                (13, 7, direction),
                (14, 7, direction),
            ]);
            snake.grow();
            assert_eq!(snake.len(), 4);
            assert_eq!(snake.tail(), Segment::new(behind, direction));
        }
    }

    #[test]
    fn test_grow_then_advance_nets_one_cell() {
        let mut snake = Snake::new(&BoardSettings::default());
        snake.grow();
        assert_eq!(snake.len(), 4);
        snake.advance(Direction::Left);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_can_change_direction_forbids_reversal_only() {
        let snake = Snake::new(&BoardSettings::default());
        assert!(!snake.can_change_direction(Direction::Right));
        assert!(snake.can_change_direction(Direction::Left));
        assert!(snake.can_change_direction(Direction::Up));
        assert!(snake.can_change_direction(Direction::Down));
    }

    #[test]
    fn test_will_collide_itself_detects_hook() {
        // Head at (5, 5) traveling left; the body hooks around so that
        // (4, 5) is occupied by the tail segment.
        let snake = snake_from(&[
            (5, 5, Direction::Left),
            (5, 6, Direction::Up),
            (4, 6, Direction::Right),
            (4, 5, Direction::Down),
        ]);
        assert!(snake.will_collide_itself());
    }

    #[test]
    fn test_will_collide_itself_false_for_straight_snake() {
        let snake = Snake::new(&BoardSettings::default());
        assert!(!snake.will_collide_itself());
    }

    #[test]
    fn test_occupies() {
        let snake = Snake::new(&BoardSettings::default());
        assert!(snake.occupies(Point::new(13, 7)));
        assert!(!snake.occupies(Point::new(11, 7)));
    }
}
