use serde::{Deserialize, Serialize};

use super::types::{Direction, Point};
use crate::config::Validate;

pub const DEFAULT_FIELD_WIDTH: i32 = 17;
pub const DEFAULT_FIELD_HEIGHT: i32 = 15;

/// How many segments a freshly spawned snake has.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSettings {
    pub field_width: i32,
    pub field_height: i32,
    pub snake_start: Point,
    pub snake_start_direction: Direction,
    pub apple_start: Point,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            snake_start: Point::new(12, 7),
            snake_start_direction: Direction::Left,
            apple_start: Point::new(2, 7),
        }
    }
}

impl BoardSettings {
    pub fn cell_count(&self) -> usize {
        (self.field_width as usize) * (self.field_height as usize)
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..self.field_width).contains(&point.x) && (0..self.field_height).contains(&point.y)
    }

    /// Cells of the starting snake, head first. The body extends away from
    /// the start direction.
    pub fn starting_segments(&self) -> impl Iterator<Item = Point> + '_ {
        let delta = self.snake_start_direction.delta();
        (0..INITIAL_SNAKE_LENGTH as i32).map(move |i| {
            Point::new(
                self.snake_start.x - delta.x * i,
                self.snake_start.y - delta.y * i,
            )
        })
    }
}

impl Validate for BoardSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 1 || self.field_width > 100 {
            return Err("Field width must be between 1 and 100".to_string());
        }
        if self.field_height < 1 || self.field_height > 100 {
            return Err("Field height must be between 1 and 100".to_string());
        }
        for point in self.starting_segments() {
            if !self.contains(point) {
                return Err(format!(
                    "Starting snake segment ({}, {}) is outside the field",
                    point.x, point.y
                ));
            }
        }
        if !self.contains(self.apple_start) {
            return Err("Apple start position is outside the field".to_string());
        }
        if self.starting_segments().any(|p| p == self.apple_start) {
            return Err("Apple start position overlaps the starting snake".to_string());
        }
        Ok(())
    }
}
