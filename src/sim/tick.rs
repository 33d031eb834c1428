//! Logical tick
//!
//! One discrete advancement of the snake, independent of rendering cadence.

use super::grid::Grid;
use super::state::GameState;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Ordinary constant-length move
    Continue,
    /// The head landed on food; the body grew by one
    Ate,
    /// The head left the board or hit the body
    Collided,
}

/// Advance the snake by one logical tick.
///
/// Order matters: the buffered heading is applied first, growth or tail
/// removal second, and the collision check runs against the post-move body.
/// A head that lands on food and collides on the same tick keeps its score
/// increment but reports `Collided`.
pub fn step(state: &mut GameState, grid: &Grid) -> StepOutcome {
    state.apply_pending_heading();

    let new_head = state.head() + state.heading.offset();
    state.body.insert(0, new_head);

    let mut outcome = if new_head == state.food {
        state.score += 1;
        state.regenerate_food(grid);
        StepOutcome::Ate
    } else {
        state.body.pop();
        StepOutcome::Continue
    };

    // Self scan starts at index 1 so the head is not compared with itself.
    if !grid.in_bounds(new_head) || state.body[1..].contains(&new_head) {
        outcome = StepOutcome::Collided;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Heading;
    use glam::IVec2;
    use proptest::prelude::*;

    fn cells(points: &[(i32, i32)]) -> Vec<IVec2> {
        points.iter().map(|&(x, y)| IVec2::new(x, y)).collect()
    }

    #[test]
    fn test_plain_move_keeps_length() {
        let grid = Grid::new(9, 9);
        let mut state = GameState::new(&grid, 3);
        state.food = IVec2::new(0, 0);
        state.body = cells(&[(4, 4), (3, 4), (2, 4)]);

        let outcome = step(&mut state, &grid);
        assert_eq!(outcome, StepOutcome::Continue);
        assert_eq!(state.body, cells(&[(5, 4), (4, 4), (3, 4)]));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let grid = Grid::new(5, 5);
        let mut state = GameState::new(&grid, 3);
        state.body = cells(&[(2, 2)]);
        state.heading = Heading::Right;
        state.food = IVec2::new(3, 2);

        let outcome = step(&mut state, &grid);
        assert_eq!(outcome, StepOutcome::Ate);
        assert_eq!(state.body, cells(&[(3, 2), (2, 2)]));
        assert_eq!(state.score, 1);
        assert!(grid.in_bounds(state.food));
    }

    #[test]
    fn test_wall_collision() {
        let grid = Grid::new(9, 9);
        let mut state = GameState::new(&grid, 3);
        state.food = IVec2::new(8, 8);
        state.body = cells(&[(0, 2), (1, 2)]);
        state.heading = Heading::Left;

        let outcome = step(&mut state, &grid);
        assert_eq!(outcome, StepOutcome::Collided);
        assert_eq!(state.head(), IVec2::new(-1, 2));
    }

    #[test]
    fn test_self_collision() {
        let grid = Grid::new(9, 9);
        let mut state = GameState::new(&grid, 3);
        state.food = IVec2::new(8, 8);
        state.body = cells(&[(2, 2), (2, 3), (2, 4), (3, 4), (3, 3)]);
        state.heading = Heading::Down;

        let outcome = step(&mut state, &grid);
        assert_eq!(outcome, StepOutcome::Collided);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_head_may_reenter_vacated_tail_cell() {
        let grid = Grid::new(9, 9);
        let mut state = GameState::new(&grid, 3);
        state.food = IVec2::new(8, 8);
        // 2x2 loop: the head moves onto the cell the tail leaves this tick
        state.body = cells(&[(2, 3), (3, 3), (3, 2), (2, 2)]);
        state.heading = Heading::Up;

        let outcome = step(&mut state, &grid);
        assert_eq!(outcome, StepOutcome::Continue);
        assert_eq!(state.head(), IVec2::new(2, 2));
    }

    #[test]
    fn test_collision_overrides_ate_but_score_stands() {
        let grid = Grid::new(9, 9);
        let mut state = GameState::new(&grid, 3);
        // Food sits right next to an occupied cell the head will also enter.
        // Growth keeps the tail in place, so the new head overlaps the body.
        state.body = cells(&[(2, 2), (2, 3), (3, 3), (3, 2), (4, 2)]);
        state.heading = Heading::Right;
        state.food = IVec2::new(3, 2);

        let outcome = step(&mut state, &grid);
        assert_eq!(outcome, StepOutcome::Collided);
        assert_eq!(state.score, 1);
        assert_eq!(state.body.len(), 6);
    }

    #[test]
    fn test_reversal_never_used_by_step() {
        let grid = Grid::new(9, 9);
        let mut state = GameState::new(&grid, 3);
        state.food = IVec2::new(0, 0);
        state.body = cells(&[(4, 4), (3, 4)]);
        state.heading = Heading::Right;

        state.set_pending_heading(Heading::Left);
        step(&mut state, &grid);
        assert_eq!(state.heading, Heading::Right);
        assert_eq!(state.head(), IVec2::new(5, 4));
    }

    #[test]
    fn test_step_without_consumption_is_deterministic() {
        let grid = Grid::new(9, 9);
        let mut a = GameState::new(&grid, 77);
        a.food = IVec2::new(0, 0);
        a.body = cells(&[(4, 4), (3, 4), (2, 4)]);
        let mut b = a.clone();

        for _ in 0..3 {
            step(&mut a, &grid);
            step(&mut b, &grid);
            assert_eq!(a.body, b.body);
        }
    }

    proptest! {
        /// Random direction requests: while the snake stays alive the body
        /// holds no duplicates and never leaves the board, and its length
        /// grows by exactly one on Ate ticks and not otherwise.
        #[test]
        fn prop_body_invariants(
            seed in 0u64..1_000,
            moves in proptest::collection::vec(0u8..4, 1..250),
        ) {
            let grid = Grid::new(12, 12);
            let mut state = GameState::new(&grid, seed);

            for m in moves {
                let heading = match m {
                    0 => Heading::Up,
                    1 => Heading::Down,
                    2 => Heading::Left,
                    _ => Heading::Right,
                };
                state.set_pending_heading(heading);

                let len_before = state.body.len();
                let outcome = step(&mut state, &grid);
                if outcome == StepOutcome::Collided {
                    break;
                }

                for (i, a) in state.body.iter().enumerate() {
                    prop_assert!(!state.body[i + 1..].contains(a));
                }
                prop_assert!(state.body.iter().all(|&c| grid.in_bounds(c)));
                match outcome {
                    StepOutcome::Ate => prop_assert_eq!(state.body.len(), len_before + 1),
                    _ => prop_assert_eq!(state.body.len(), len_before),
                }
            }
        }
    }
}
