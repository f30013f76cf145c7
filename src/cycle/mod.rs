//! The precomputed closed tour and its index.
//!
//! `Cycle` pairs the ordered cell sequence from [`builder::build_cycle`] with
//! a reverse map from cell to tour position. The reverse lookup sits on the
//! hot per-tick path of the autopilot, so it is built once at construction
//! instead of scanning the sequence.
pub mod builder;

use crate::types::Cell;
use fxhash::FxHashMap;
use std::error::Error;
use std::fmt;

pub use builder::{build_cycle, dimensions_supported, InvalidGeometry};

/// Error returned when a cell is looked up that the tour does not visit.
///
/// By construction every in-bounds cell is on the tour, so seeing this for an
/// in-bounds cell indicates a defect in the cycle builder rather than a
/// condition callers are expected to recover from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellNotOnCycle(pub Cell);

impl fmt::Display for CellNotOnCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell ({}, {}) is not on the cycle", self.0.x, self.0.y)
    }
}

impl Error for CellNotOnCycle {}

/// A hamiltonian cycle over the board together with an O(1) reverse index
#[derive(Debug, Clone)]
pub struct Cycle {
    cells: Vec<Cell>,
    indices: FxHashMap<Cell, usize>,
}

impl Cycle {
    /// Builds the cycle for a `width` x `height` board and indexes it
    pub fn new(width: u32, height: u32) -> Result<Self, InvalidGeometry> {
        Ok(Self::from_cells(build_cycle(width, height)?))
    }

    /// Indexes an already built cell sequence
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        let indices = cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (*cell, index))
            .collect();
        Cycle { cells, indices }
    }

    /// the number of cells on the tour, equal to width * height of the board
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// true if the tour visits no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// the full ordered tour, for driver-side debug overlays
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// the position of the given cell in the tour
    pub fn index_of(&self, cell: Cell) -> Result<usize, CellNotOnCycle> {
        self.indices
            .get(&cell)
            .copied()
            .ok_or(CellNotOnCycle(cell))
    }

    /// the cell one forward step along the tour from the given position
    pub fn successor(&self, index: usize) -> Cell {
        self.cells[(index + 1) % self.cells.len()]
    }

    /// The number of forward (wrapping) steps from `from` to `to`, always in
    /// [0, len). Forward distance is not symmetric: going "backward" one cell
    /// costs len - 1 steps.
    pub fn forward_distance(&self, from: usize, to: usize) -> usize {
        let len = self.cells.len();
        (to % len + len - from % len) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Cycle {
        Cycle::new(6, 4).unwrap()
    }

    #[test]
    fn test_index_of_round_trips_for_every_cell() {
        let cycle = fixture();
        for cell in cycle.cells().to_vec() {
            let index = cycle.index_of(cell).unwrap();
            assert_eq!(cycle.cells()[index], cell);
        }
    }

    #[test]
    fn test_index_of_rejects_cells_off_the_grid() {
        let cycle = fixture();
        assert_eq!(
            cycle.index_of(Cell::new(-1, 0)),
            Err(CellNotOnCycle(Cell::new(-1, 0)))
        );
        assert_eq!(
            cycle.index_of(Cell::new(6, 0)),
            Err(CellNotOnCycle(Cell::new(6, 0)))
        );
    }

    #[test]
    fn test_forward_distance_identities() {
        let cycle = fixture();
        let len = cycle.len();
        for index in 0..len {
            assert_eq!(cycle.forward_distance(index, index), 0);
            assert_eq!(cycle.forward_distance(index, (index + 1) % len), 1);
            assert_eq!(cycle.forward_distance((index + 1) % len, index), len - 1);
        }
    }

    #[test]
    fn test_forward_distance_stays_in_range() {
        let cycle = fixture();
        let len = cycle.len();
        for from in 0..len {
            for to in 0..len {
                assert!(cycle.forward_distance(from, to) < len);
            }
        }
    }

    #[test]
    fn test_successor_walks_the_tour_in_order() {
        let cycle = fixture();
        assert_eq!(cycle.successor(0), cycle.cells()[1]);
        assert_eq!(cycle.successor(cycle.len() - 1), cycle.cells()[0]);
    }
}
