use crate::config::Validate;
use crate::log;

use super::apple::Apple;
use super::session_rng::SessionRng;
use super::settings::BoardSettings;
use super::snake::Snake;
use super::state::GameState;
use super::types::Direction;
#[cfg(test)]
use super::types::Point;

/// Root aggregate of a session: owns the snake, the apple, the game state
/// and the session RNG. All cross-entity queries (occupancy, bounds) go
/// through the board; snake and apple never see each other.
pub struct Board {
    settings: BoardSettings,
    snake: Snake,
    apple: Apple,
    state: GameState,
    rng: SessionRng,
}

impl Board {
    /// Fails fast on invalid settings; nothing mid-game can fail.
    pub fn new(settings: BoardSettings, seed: u64) -> Result<Self, String> {
        settings.validate()?;
        let snake = Snake::new(&settings);
        let apple = Apple::new(settings.apple_start);
        Ok(Self {
            settings,
            snake,
            apple,
            state: GameState::new(),
            rng: SessionRng::new(seed),
        })
    }

    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn game_state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn start(&mut self) {
        self.state.start();
    }

    /// Advances the simulation by one tick. Returns whether the tick was
    /// applied; ticks are rejected without mutation while the session is
    /// not started or already finished.
    ///
    /// Collision checks run post-move, against the already-updated body,
    /// in this order: apple, walls, self, full field.
    pub fn move_snake(&mut self, direction: Direction) -> bool {
        if !self.state.is_running() {
            return false;
        }

        // A reversal is ignored, not obeyed: the snake keeps its heading.
        let direction = if self.snake.can_change_direction(direction) {
            direction
        } else {
            self.snake.head().direction
        };

        self.snake.advance(direction);

        let head = self.snake.head().position;
        if head == self.apple.position() {
            self.state.increment_score();
            self.snake.grow();
            log!(
                "Apple eaten at ({}, {}). Score: {}",
                head.x,
                head.y,
                self.state.score()
            );

            let snake = &self.snake;
            let relocated = self.apple.relocate(
                &mut self.rng,
                self.settings.field_width,
                self.settings.field_height,
                |position| snake.occupies(position),
            );
            if !relocated {
                log!("No free cell left for the apple, game won");
                self.state.win();
                return true;
            }
        }

        if !self.settings.contains(head) {
            log!("Snake hit the wall at ({}, {})", head.x, head.y);
            self.state.lose();
            return true;
        }

        if self
            .snake
            .segments()
            .skip(1)
            .any(|segment| segment.position == head)
        {
            log!("Snake ran into itself at ({}, {})", head.x, head.y);
            self.state.lose();
            return true;
        }

        if self.snake.len() == self.settings.cell_count() {
            log!("Field filled, game won with score {}", self.state.score());
            self.state.win();
        }

        true
    }

    /// Rebuilds the snake and the apple from the settings and clears the
    /// game state. Two resets in a row yield the same canonical state.
    pub fn reset_board(&mut self) {
        self.snake = Snake::new(&self.settings);
        self.apple = Apple::new(self.settings.apple_start);
        self.state.reset();
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    #[cfg(test)]
    pub(crate) fn set_apple_position(&mut self, position: Point) {
        self.apple = Apple::new(position);
    }
}
