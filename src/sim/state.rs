//! Snake state and core simulation types

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::grid::Grid;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Page loaded, nothing moving yet
    Idle,
    /// Active gameplay
    Running,
    /// Run ended on a collision
    GameOver,
}

/// Direction of travel. Y grows downward, matching canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// One-cell offset in grid units.
    pub fn offset(self) -> IVec2 {
        match self {
            Heading::Up => IVec2::new(0, -1),
            Heading::Down => IVec2::new(0, 1),
            Heading::Left => IVec2::new(-1, 0),
            Heading::Right => IVec2::new(1, 0),
        }
    }

    /// The exact reverse of this heading.
    pub fn reverse(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

/// Discrete events surfaced to the audio/UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The snake ate the food this tick
    Consumed,
    /// The snake left the board or hit itself this tick
    Collided,
}

/// Complete simulation state. One instance exists per session, owned by the
/// game loop; collaborators read it through shared references.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Occupied cells, head first. All distinct while the snake is alive.
    pub body: Vec<IVec2>,
    /// Direction used by the next tick
    pub heading: Heading,
    /// Buffered direction request; the last accepted request wins
    pub pending_heading: Option<Heading>,
    /// Food cell. Regeneration does not avoid the body.
    pub food: IVec2,
    /// Consumptions this run
    pub score: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
}

impl GameState {
    /// Fresh state: a single segment at the grid center, heading right, food
    /// placed randomly.
    pub fn new(grid: &Grid, seed: u64) -> Self {
        let mut state = Self {
            body: vec![grid.center()],
            heading: Heading::Right,
            pending_heading: None,
            food: IVec2::ZERO,
            score: 0,
            phase: GamePhase::Idle,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.regenerate_food(grid);
        state
    }

    /// Back to the starting configuration. The RNG stream continues so a
    /// restarted run sees new food positions.
    pub fn reset(&mut self, grid: &Grid) {
        self.body.clear();
        self.body.push(grid.center());
        self.heading = Heading::Right;
        self.pending_heading = None;
        self.score = 0;
        self.regenerate_food(grid);
    }

    pub fn head(&self) -> IVec2 {
        self.body[0]
    }

    /// Request a direction change. The request is dropped when it is the
    /// exact reverse of the current heading; otherwise it replaces any
    /// buffered request and is consumed by the next tick.
    pub fn set_pending_heading(&mut self, heading: Heading) {
        if heading != self.heading.reverse() {
            self.pending_heading = Some(heading);
        }
    }

    /// Consume the buffered direction request, if any.
    pub fn apply_pending_heading(&mut self) {
        if let Some(heading) = self.pending_heading.take() {
            self.heading = heading;
        }
    }

    /// Move the food to a uniformly random cell.
    pub fn regenerate_food(&mut self, grid: &Grid) {
        self.food = grid.random_cell(&mut self.rng);
    }
}
