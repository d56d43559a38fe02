/// Lifecycle of a session. A single closed enum keeps "lost" and "won"
/// mutually exclusive by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Running,
    Lost,
    Won,
}

#[derive(Clone, Debug)]
pub struct GameState {
    score: u32,
    phase: GamePhase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            phase: GamePhase::NotStarted,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Lost
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Idempotent; starting a finished session is ignored, reset it first.
    pub fn start(&mut self) {
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::Running;
        }
    }

    pub fn increment_score(&mut self) {
        self.score += 1;
    }

    pub fn lose(&mut self) {
        self.phase = GamePhase::Lost;
    }

    pub fn win(&mut self) {
        self.phase = GamePhase::Won;
    }

    /// Clears the score and any terminal phase. Started-ness survives: a
    /// session that was already being ticked goes straight back to Running.
    pub fn reset(&mut self) {
        self.score = 0;
        if self.phase != GamePhase::NotStarted {
            self.phase = GamePhase::Running;
        }
    }
}
