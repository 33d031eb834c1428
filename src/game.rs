//! Frame scheduling and the game lifecycle
//!
//! The host calls [`SnakeLoop::frame`] once per animation frame with a
//! monotonically increasing timestamp. The loop decides when a logical tick
//! is due, so rendering cadence and game speed stay independent: a 60 Hz
//! display still moves the snake at one cell per `move_interval_ms`.

use crate::sim::{GameEvent, GamePhase, GameState, Grid, Heading, StepOutcome, step};

/// Whether the host should arm the next frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    /// Keep the animation loop going
    Continue,
    /// Terminal state reached; stop re-arming after this frame
    Stop,
}

/// Fixed-interval game loop over a single owned [`GameState`].
///
/// Lifecycle: `Idle --start--> Running --collision--> GameOver --restart-->
/// Running`. Transition requests from any other phase are silent no-ops, so
/// duplicate button events are harmless.
pub struct SnakeLoop {
    grid: Grid,
    state: GameState,
    move_interval_ms: f64,
    last_move_ms: f64,
    events: Vec<GameEvent>,
}

impl SnakeLoop {
    pub fn new(grid: Grid, move_interval_ms: f64, seed: u64) -> Self {
        Self {
            grid,
            state: GameState::new(&grid, seed),
            move_interval_ms,
            last_move_ms: 0.0,
            events: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Read-only view for the render pass.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Forward a direction request to the snake.
    pub fn request_heading(&mut self, heading: Heading) {
        self.state.set_pending_heading(heading);
    }

    /// Begin a run. Valid only from `Idle`; otherwise a no-op.
    pub fn start(&mut self) {
        if self.state.phase != GamePhase::Idle {
            return;
        }
        self.begin_run();
        log::info!("run started");
    }

    /// Start over after a collision. Valid only from `GameOver`; otherwise a
    /// no-op.
    pub fn restart(&mut self) {
        if self.state.phase != GamePhase::GameOver {
            return;
        }
        self.begin_run();
        log::info!("run restarted");
    }

    fn begin_run(&mut self) {
        self.state.reset(&self.grid);
        self.state.phase = GamePhase::Running;
        // Zeroed so the first running frame ticks immediately
        self.last_move_ms = 0.0;
        self.events.clear();
    }

    /// Drive one animation frame. Runs at most one logical tick, and only
    /// when `move_interval_ms` of real time has elapsed since the last one.
    ///
    /// Returns [`FrameControl::Stop`] once the phase is `GameOver`, after
    /// which the host renders the terminal state and lets the loop lapse.
    pub fn frame(&mut self, now_ms: f64) -> FrameControl {
        if self.state.phase == GamePhase::Running
            && now_ms - self.last_move_ms >= self.move_interval_ms
        {
            self.tick();
            self.last_move_ms = now_ms;
        }

        match self.state.phase {
            GamePhase::GameOver => FrameControl::Stop,
            _ => FrameControl::Continue,
        }
    }

    fn tick(&mut self) {
        // Consumption is detected via the score delta: a collision on the
        // same tick masks the Ate outcome but not the increment.
        let score_before = self.state.score;
        let outcome = step(&mut self.state, &self.grid);

        if self.state.score > score_before {
            self.events.push(GameEvent::Consumed);
        }
        if outcome == StepOutcome::Collided {
            self.events.push(GameEvent::Collided);
            self.state.phase = GamePhase::GameOver;
            log::info!("game over, final score {}", self.state.score);
        }
    }

    /// Events since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
