//! Deterministic simulation module
//!
//! All gameplay rules live here. This module must stay pure and deterministic:
//! - Advanced only by explicit `step` calls
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod grid;
pub mod state;
pub mod tick;

pub use grid::Grid;
pub use state::{GameEvent, GamePhase, GameState, Heading};
pub use tick::{StepOutcome, step};
