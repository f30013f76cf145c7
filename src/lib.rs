#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! A grid snake simulation that drives itself.
//!
//! The core is two coupled pieces: a hamiltonian cycle built once per board
//! (a closed tour visiting every cell exactly once, see [`cycle`]) and an
//! autopilot that follows the tour but greedily shortcuts toward the goal
//! when an adjacent free cell is closer by forward distance (see [`pilot`]).
//! Strict tour-following can always fill the board; the shortcut heuristic
//! trades that guarantee for speed and is deliberately not proven safe.
//!
//! Rendering and input are a driver's concern. A driver reads state through
//! the accessor traits in [`types`] once per frame and calls
//! [`board::Board::turn`] and [`board::Board::step`] on a fixed cadence:
//!
//! ```
//! use cycle_snake::board::{Board, StepOutcome};
//! use cycle_snake::pilot::{CyclePilot, Pilot};
//!
//! let mut board = Board::new(18, 17, 42).expect("18x17 has a closed tour");
//! let mut pilot = CyclePilot::new();
//! for _ in 0..100 {
//!     let direction = pilot.decide(&board);
//!     board.turn(direction);
//!     match board.step() {
//!         Ok(StepOutcome::BoardCleared) => break,
//!         Ok(_) => {}
//!         // the shortcut heuristic is not proven collision-safe
//!         Err(err) => {
//!             eprintln!("game over: {}", err);
//!             break;
//!         }
//!     }
//! }
//! ```

pub mod board;
pub mod cycle;
pub mod pilot;
pub mod types;

/// Loads a board snapshot fixture from a given string
pub fn snapshot_fixture(snapshot_fixture: &str) -> board::BoardSnapshot {
    let s: Result<board::BoardSnapshot, _> = serde_json::from_str(snapshot_fixture);
    s.expect("the json literal is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Direction, GameStatus};

    #[test]
    fn test_snapshot_fixture_parses_a_json_literal() {
        let fixture = r#"{
            "width": 4,
            "height": 2,
            "body": [{"x": 1, "y": 1}],
            "direction": "East",
            "goal": {"x": 3, "y": 1},
            "status": "Running"
        }"#;
        let snapshot = snapshot_fixture(fixture);
        assert_eq!(snapshot.body, vec![Cell::new(1, 1)]);
        assert_eq!(snapshot.direction, Direction::East);
        assert_eq!(snapshot.goal, Cell::new(3, 1));
        assert_eq!(snapshot.status, GameStatus::Running);
    }

    #[test]
    fn test_fresh_board_snapshot_matches_the_fixture() {
        let board = board::Board::new(4, 2, 0).unwrap();
        let fixture = r#"{
            "width": 4,
            "height": 2,
            "body": [{"x": 1, "y": 1}],
            "direction": "East",
            "goal": {"x": 3, "y": 1},
            "status": "Running"
        }"#;
        assert_eq!(board.snapshot(), snapshot_fixture(fixture));
    }
}
