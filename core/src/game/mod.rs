mod apple;
mod board;
mod session_rng;
mod settings;
mod snake;
mod state;
mod types;

pub use apple::Apple;
pub use board::Board;
pub use session_rng::SessionRng;
pub use settings::{BoardSettings, INITIAL_SNAKE_LENGTH};
pub use snake::{Segment, Snake};
pub use state::{GamePhase, GameState};
pub use types::{Direction, Point};
