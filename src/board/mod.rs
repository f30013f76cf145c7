//! The mutable simulation state: snake, goal, and the board that owns them.
//!
//! A `Board` is constructed once per game with fixed dimensions, owns its
//! snake and goal exclusively, and advances one tick at a time via [`Board::step`].
//! The cycle is computed at construction and never changes; it is a property
//! of the geometry, not of the current snake or goal placement.
use crate::cycle::{Cycle, InvalidGeometry};
use crate::types::{
    Cell, Direction, GameStatus, GoalGettableGame, SizeDeterminableGame, SnakeBodyGettableGame,
    StatusDeterminableGame,
};
use fxhash::FxHashSet;
use itertools::Itertools;
use rand::prelude::IteratorRandom;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::error::Error;
use std::fmt;
use tracing::{debug, instrument, trace};

/// The snake: an ordered body, a target length, and a direction of travel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// cells occupied by the snake, in order from tail to head
    pub body: VecDeque<Cell>,
    /// the length the body grows toward; eating the goal increments it
    pub target_length: usize,
    /// the direction applied on the next step
    pub direction: Direction,
}

impl Snake {
    /// makes a new single-segment snake that will grow to `target_length`
    pub fn new(head: Cell, target_length: usize, direction: Direction) -> Self {
        let mut body = VecDeque::with_capacity(target_length);
        body.push_back(head);
        Snake {
            body,
            target_length,
            direction,
        }
    }

    /// the cell the snake's head occupies
    pub fn head(&self) -> Cell {
        *self.body.back().expect("the body is never empty")
    }

    /// Advances the head one cell in the current direction, dropping the
    /// oldest tail cell once the body exceeds the target length. No bounds or
    /// collision checking happens here; that is the board's responsibility.
    pub(crate) fn step(&mut self) {
        let next = self.head().add_vec(self.direction.to_vector());
        self.body.push_back(next);
        if self.body.len() > self.target_length {
            self.body.pop_front();
        }
    }
}

/// Terminal failure kinds surfaced by [`Board::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// the head left the board at the given cell
    OutOfBounds(Cell),
    /// the head ran into the body at the given cell
    SelfCollision(Cell),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::OutOfBounds(cell) => {
                write!(f, "head left the board at ({}, {})", cell.x, cell.y)
            }
            StepError::SelfCollision(cell) => {
                write!(f, "head hit the body at ({}, {})", cell.x, cell.y)
            }
        }
    }
}

impl Error for StepError {}

/// What a successful tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// the snake moved one cell
    Advanced,
    /// the snake reached the goal; the goal was relocated and the target
    /// length grew by one
    GoalReached,
    /// the snake reached the goal and no free cell remains: terminal success
    BoardCleared,
}

/// A serializable read-only view of the board, for driver-side persistence,
/// replay, and test fixtures. The cycle is omitted; it is reproducible from
/// the dimensions alone.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// board width
    pub width: u32,
    /// board height
    pub height: u32,
    /// snake body in order from tail to head
    pub body: Vec<Cell>,
    /// the snake's current direction of travel
    pub direction: Direction,
    /// the cell the goal occupies
    pub goal: Cell,
    /// derived game status
    pub status: GameStatus,
}

/// One game of snake on a `width` x `height` grid
#[derive(Debug, Clone)]
pub struct Board {
    width: u32,
    height: u32,
    snake: Snake,
    goal: Cell,
    cycle: Cycle,
    rng: SmallRng,
}

impl Board {
    /// Makes a new board, building and indexing its cycle. The snake starts
    /// as a single segment at (width/4, height/2) heading east with a target
    /// length of 3; the goal starts at (3*width/4, height/2).
    ///
    /// Fails with [`InvalidGeometry`] when the dimensions are non-positive or
    /// the cycle construction cannot close for them (see [`crate::cycle::builder`]).
    /// Goal relocation is the only source of randomness; seeding it makes
    /// games reproducible.
    pub fn new(width: u32, height: u32, rng_seed: u64) -> Result<Self, InvalidGeometry> {
        let cycle = Cycle::new(width, height)?;
        let snake = Snake::new(
            Cell::new(width as i32 / 4, height as i32 / 2),
            3,
            Direction::East,
        );
        let goal = Cell::new(3 * width as i32 / 4, height as i32 / 2);
        Ok(Board {
            width,
            height,
            snake,
            goal,
            cycle,
            rng: SmallRng::seed_from_u64(rng_seed),
        })
    }

    /// Points the snake in the given direction. The exact opposite of the
    /// current direction is silently ignored; reversing in place would
    /// guarantee a self collision on the next step.
    pub fn turn(&mut self, direction: Direction) {
        if direction == self.snake.direction.opposite() {
            return;
        }
        self.snake.direction = direction;
    }

    /// Advances the game one tick: moves the snake, then checks bounds,
    /// self collision, and the goal, in that order.
    ///
    /// `Err` is a terminal loss. `Ok(StepOutcome::BoardCleared)` is a
    /// terminal success. The board does not recover from either; starting
    /// over requires constructing a fresh board.
    #[instrument(level = "trace", skip_all)]
    pub fn step(&mut self) -> Result<StepOutcome, StepError> {
        self.snake.step();
        let head = self.snake.head();

        if self.off_board(head) {
            debug!(x = head.x, y = head.y, "head left the board");
            return Err(StepError::OutOfBounds(head));
        }

        if self.snake.body.iter().rev().skip(1).any(|cell| *cell == head) {
            debug!(x = head.x, y = head.y, "head ran into the body");
            return Err(StepError::SelfCollision(head));
        }

        if head == self.goal {
            self.snake.target_length += 1;
            return if self.relocate_goal() {
                trace!(
                    goal_x = self.goal.x,
                    goal_y = self.goal.y,
                    target_length = self.snake.target_length,
                    "goal reached"
                );
                Ok(StepOutcome::GoalReached)
            } else {
                debug!("board cleared");
                Ok(StepOutcome::BoardCleared)
            };
        }

        Ok(StepOutcome::Advanced)
    }

    /// Moves the goal to a uniformly random cell the snake does not occupy.
    /// Returns false when no free cell remains.
    fn relocate_goal(&mut self) -> bool {
        let occupied: FxHashSet<Cell> = self.snake.body.iter().copied().collect();
        let chosen = (0..self.width as i32)
            .cartesian_product(0..self.height as i32)
            .map(|(x, y)| Cell::new(x, y))
            .filter(|cell| !occupied.contains(cell))
            .choose(&mut self.rng);
        match chosen {
            Some(cell) => {
                self.goal = cell;
                true
            }
            None => false,
        }
    }

    /// determines if a given cell is not on the board
    pub fn off_board(&self, cell: Cell) -> bool {
        cell.x < 0
            || cell.x >= self.width as i32
            || cell.y < 0
            || cell.y >= self.height as i32
    }

    /// the snake on the board
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// the snake's current direction of travel
    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    /// the length the snake is currently growing toward
    pub fn target_length(&self) -> usize {
        self.snake.target_length
    }

    /// the indexed cycle the autopilot follows
    pub fn cycle(&self) -> &Cycle {
        &self.cycle
    }

    /// captures a serializable view of the current state
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            width: self.width,
            height: self.height,
            body: self.get_snake_body_vec(),
            direction: self.snake.direction,
            goal: self.goal,
            status: self.status(),
        }
    }

    #[cfg(test)]
    pub(crate) fn place_goal(&mut self, cell: Cell) {
        self.goal = cell;
    }

    #[cfg(test)]
    pub(crate) fn place_snake(&mut self, body: Vec<Cell>, direction: Direction) {
        self.snake.target_length = body.len();
        self.snake.body = body.into_iter().collect();
        self.snake.direction = direction;
    }
}

impl SizeDeterminableGame for Board {
    fn get_width(&self) -> u32 {
        self.width
    }

    fn get_height(&self) -> u32 {
        self.height
    }
}

impl SnakeBodyGettableGame for Board {
    fn get_snake_body_vec(&self) -> Vec<Cell> {
        self.snake.body.iter().copied().collect()
    }
}

impl GoalGettableGame for Board {
    fn get_goal(&self) -> Cell {
        self.goal
    }
}

impl StatusDeterminableGame for Board {
    fn status(&self) -> GameStatus {
        let head = self.snake.head();
        if self.off_board(head) {
            return GameStatus::LostOutOfBounds;
        }
        if self.snake.body.iter().rev().skip(1).any(|cell| *cell == head) {
            return GameStatus::LostSelfCollision;
        }
        if self.snake.body.len() == (self.width * self.height) as usize {
            return GameStatus::WonAllCellsFilled;
        }
        GameStatus::Running
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for i in 0..self.height {
            let k = self.height - i - 1;
            for j in 0..self.width {
                let cell = Cell::new(j as i32, k as i32);
                if cell == self.snake.head() {
                    write!(f, "H")?;
                } else if self.snake.body.contains(&cell) {
                    write!(f, "s")?;
                } else if cell == self.goal {
                    write!(f, "g")?;
                } else {
                    write!(f, ".")?;
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
