//! The autopilot: follow the cycle, shortcut when it looks safe.
//!
//! Strictly following the cycle is guaranteed collision-free (the body always
//! occupies a contiguous run of the most recently visited cycle cells) but
//! slow, up to a full traversal of the board between goals. [`CyclePilot`]
//! trades some of that safety margin for speed by stepping off the cycle
//! toward the goal when an adjacent free cell is strictly closer by forward
//! distance, then suppressing further shortcuts until the body has had time
//! to pass through the altered region.
//!
//! The cooldown is a heuristic mitigation, not a proven safety barrier: no
//! proof exists that shortcutting never traps the tail, so callers must
//! treat a lost game as a possible outcome on any board size.
use crate::board::{Board, StepError, StepOutcome};
use crate::types::{Direction, GoalGettableGame, TickInstruments};
use std::time::Instant;
use tracing::{instrument, trace};

/// A decision procedure producing the next turn for a board
pub trait Pilot {
    /// Pick the direction for the next tick. Called once per tick, before
    /// `Board::step`; the driver applies the result via `Board::turn`.
    fn decide(&mut self, board: &Board) -> Direction;
}

/// The cycle-following autopilot with the greedy shortcut heuristic
#[derive(Debug, Clone, Copy)]
pub struct CyclePilot {
    cooldown: usize,
}

impl CyclePilot {
    /// makes a pilot with no shortcut suppression pending
    pub fn new() -> Self {
        CyclePilot { cooldown: 0 }
    }

    /// ticks remaining before shortcut evaluation resumes
    pub fn cooldown(&self) -> usize {
        self.cooldown
    }

    /// the direction from the head to its successor on the cycle
    fn baseline(board: &Board) -> Direction {
        let cycle = board.cycle();
        let head = board.snake().head();
        let head_index = cycle
            .index_of(head)
            .expect("the head is always on the cycle");
        let next = cycle.successor(head_index);
        Direction::from_vector(next.sub_vec(head.to_vector()).to_vector())
    }
}

impl Default for CyclePilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Pilot for CyclePilot {
    #[instrument(level = "trace", skip_all)]
    fn decide(&mut self, board: &Board) -> Direction {
        let baseline = Self::baseline(board);

        if self.cooldown > 0 {
            self.cooldown -= 1;
            return baseline;
        }

        let cycle = board.cycle();
        let head = board.snake().head();
        let head_index = cycle
            .index_of(head)
            .expect("the head is always on the cycle");
        let goal_index = cycle
            .index_of(board.get_goal())
            .expect("the goal is always on the cycle");

        let mut best = baseline;
        let mut best_distance =
            cycle.forward_distance((head_index + 1) % cycle.len(), goal_index);

        for candidate in Direction::all() {
            if candidate == board.direction().opposite() {
                continue;
            }
            let destination = head.add_vec(candidate.to_vector());
            if board.off_board(destination) || board.snake().body.contains(&destination) {
                continue;
            }
            let destination_index = cycle
                .index_of(destination)
                .expect("in-bounds cells are on the cycle");
            let distance = cycle.forward_distance(destination_index, goal_index);
            // strict improvement only; ties go to the cycle-following baseline
            if distance < best_distance {
                best = candidate;
                best_distance = distance;
            }
        }

        if best != baseline {
            // suppress further shortcuts until the body has passed through
            // the altered region, minus one for the step about to happen
            self.cooldown = board.target_length().saturating_sub(1);
            trace!(direction = %best, cooldown = self.cooldown, "taking a shortcut");
        }

        best
    }
}

/// How a [`drive`] run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveReport {
    /// ticks executed before stopping
    pub ticks: u64,
    /// true when the run ended with the board cleared, false when the tick
    /// cap was reached first
    pub cleared: bool,
}

/// Runs the decide/turn/step loop until a terminal state or `max_ticks`,
/// reporting each tick's duration to the given instruments.
///
/// A lost game surfaces as the `StepError` from the failing tick; hitting the
/// tick cap reports `cleared: false`.
pub fn drive<P: Pilot, I: TickInstruments>(
    board: &mut Board,
    pilot: &mut P,
    instruments: &I,
    max_ticks: u64,
) -> Result<DriveReport, StepError> {
    let mut ticks = 0;
    while ticks < max_ticks {
        let start = Instant::now();
        let direction = pilot.decide(board);
        board.turn(direction);
        let outcome = board.step()?;
        instruments.observe_tick(start.elapsed());
        ticks += 1;
        if outcome == StepOutcome::BoardCleared {
            return Ok(DriveReport {
                ticks,
                cleared: true,
            });
        }
    }
    Ok(DriveReport {
        ticks,
        cleared: false,
    })
}
