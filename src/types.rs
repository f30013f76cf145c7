//! various types that are useful for working with the snake simulation
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    /// x component
    pub x: i64,
    /// y component
    pub y: i64,
}

/// A single grid coordinate, 0-indexed from the bottom-left corner
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// x position, in [0, width)
    pub x: i32,
    /// y position, in [0, height)
    pub y: i32,
}

impl Cell {
    /// makes a new cell at the given coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// returns the cell offset by the given vector
    pub fn add_vec(&self, v: Vector) -> Cell {
        Cell {
            x: (self.x as i64 + v.x) as i32,
            y: (self.y as i64 + v.y) as i32,
        }
    }

    /// returns the cell offset by the negation of the given vector
    pub fn sub_vec(&self, v: Vector) -> Cell {
        Cell {
            x: (self.x as i64 - v.x) as i32,
            y: (self.y as i64 - v.y) as i32,
        }
    }

    /// converts this cell to a vector
    pub fn to_vector(self) -> Vector {
        Vector {
            x: self.x as i64,
            y: self.y as i64,
        }
    }
}

/// Represents a direction of travel on the grid.
///
/// Directions are encoded 0-3 in cyclic order (East, North, West, South) so
/// that the opposite of a direction is always two indices away.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[allow(missing_docs)]
    East,
    #[allow(missing_docs)]
    North,
    #[allow(missing_docs)]
    West,
    #[allow(missing_docs)]
    South,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::East => write!(f, "east"),
            Direction::North => write!(f, "north"),
            Direction::West => write!(f, "west"),
            Direction::South => write!(f, "south"),
        }
    }
}

impl Direction {
    /// convert this direction to a unit vector
    pub fn to_vector(self) -> Vector {
        match self {
            Direction::East => Vector { x: 1, y: 0 },
            Direction::North => Vector { x: 0, y: 1 },
            Direction::West => Vector { x: -1, y: 0 },
            Direction::South => Vector { x: 0, y: -1 },
        }
    }

    /// create a Direction from the given unit vector
    pub fn from_vector(vector: Vector) -> Self {
        match vector {
            Vector { x: 1, y: 0 } => Self::East,
            Vector { x: 0, y: 1 } => Self::North,
            Vector { x: -1, y: 0 } => Self::West,
            Vector { x: 0, y: -1 } => Self::South,
            _ => panic!("not a unit vector"),
        }
    }

    /// returns all four directions, in cyclic index order
    pub fn all() -> Vec<Direction> {
        vec![
            Direction::East,
            Direction::North,
            Direction::West,
            Direction::South,
        ]
    }

    /// converts this direction to a usize index. indices are the same order as `Direction::all()`
    pub fn as_index(&self) -> usize {
        match self {
            Direction::East => 0,
            Direction::North => 1,
            Direction::West => 2,
            Direction::South => 3,
        }
    }

    /// converts a usize index to a direction
    pub fn from_index(index: usize) -> Direction {
        match index {
            0 => Direction::East,
            1 => Direction::North,
            2 => Direction::West,
            3 => Direction::South,
            _ => panic!("invalid index"),
        }
    }

    /// the direction of reversed travel, two indices away in cyclic order
    pub fn opposite(&self) -> Direction {
        Direction::from_index((self.as_index() + 2) % 4)
    }
}

/// The derived status of a game
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// the game is still in progress
    Running,
    /// the snake occupies every cell on the board
    WonAllCellsFilled,
    /// the snake's head left the board
    LostOutOfBounds,
    /// the snake's head ran into its own body
    LostSelfCollision,
}

/// a game for which the size of the game board can be determined
pub trait SizeDeterminableGame {
    #[allow(missing_docs)]
    fn get_width(&self) -> u32;
    #[allow(missing_docs)]
    fn get_height(&self) -> u32;
}

/// A game where the snake body is gettable
pub trait SnakeBodyGettableGame {
    /// return a Vec of the positions of the snake body, in order from tail to head
    fn get_snake_body_vec(&self) -> Vec<Cell>;
}

/// A game for which the current goal ("apple") cell can be got
pub trait GoalGettableGame {
    /// get the cell the goal currently occupies
    fn get_goal(&self) -> Cell;
}

/// A game whose win/loss status is determinable
pub trait StatusDeterminableGame {
    /// derive the current status from the game state
    fn status(&self) -> GameStatus;

    /// whether the game has reached a terminal state
    fn is_over(&self) -> bool {
        self.status() != GameStatus::Running
    }
}

/// Instruments to be used with the tick loop
pub trait TickInstruments: std::fmt::Debug {
    #[allow(missing_docs)]
    fn observe_tick(&self, duration: Duration);
}
