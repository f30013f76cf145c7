//! Two-phase construction of the closed tour.
//!
//! The tour reserves row `y = 0` as a one-way return corridor and covers the
//! rest of the board with a column serpentine. Both phases are explicit and
//! sequential; the serpentine cannot close on its own, the corridor is what
//! makes the tour a cycle.
use crate::types::Cell;
use std::error::Error;
use std::fmt;

/// Error returned when the requested dimensions are non-positive or the two
/// phase construction cannot produce a closed tour for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidGeometry {
    /// requested board width
    pub width: u32,
    /// requested board height
    pub height: u32,
}

impl fmt::Display for InvalidGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no closed tour exists for a {}x{} board (requires width >= 3, width even, height >= 2)",
            self.width, self.height
        )
    }
}

impl Error for InvalidGeometry {}

/// Checks whether the serpentine-plus-corridor construction closes for the
/// given dimensions. The serpentine must end its rightmost column walking
/// downward to meet the corridor, which requires an even number of columns.
pub fn dimensions_supported(width: u32, height: u32) -> bool {
    width >= 3 && width % 2 == 0 && height >= 2
}

/// Builds a hamiltonian cycle over a `width` x `height` grid: an ordered list
/// of `width * height` unique cells in which consecutive cells (including the
/// wraparound from last to first) are grid-adjacent.
///
/// Deterministic pure function of the dimensions. The cycle is a static
/// property of board geometry and is computed once per board.
pub fn build_cycle(width: u32, height: u32) -> Result<Vec<Cell>, InvalidGeometry> {
    if !dimensions_supported(width, height) {
        return Err(InvalidGeometry { width, height });
    }
    let mut cycle = Vec::with_capacity((width * height) as usize);

    // serpentine phase: even columns walk up, odd columns walk down. row 0 is
    // reserved for the corridor, so every column after the first covers
    // y in [1, height-1]. the lateral step to the next column falls out of the
    // loop boundaries: at the top row after an even column, at y = 1 after an
    // odd one.
    let top = height as i32 - 1;
    for x in 0..width as i32 {
        let bottom = if x == 0 { 0 } else { 1 };
        if x % 2 == 0 {
            for y in bottom..=top {
                cycle.push(Cell::new(x, y));
            }
        } else {
            for y in (bottom..=top).rev() {
                cycle.push(Cell::new(x, y));
            }
        }
    }

    // return corridor phase: the serpentine ends at (width-1, 1), one cell
    // above the corridor. drop into row 0 and walk it back toward the start;
    // the closing edge to (0, 0) is the cyclic wraparound.
    for x in (1..width as i32).rev() {
        cycle.push(Cell::new(x, 0));
    }

    debug_assert_eq!(cycle.len(), (width * height) as usize);
    Ok(cycle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn assert_valid_cycle(width: u32, height: u32) {
        let cycle = build_cycle(width, height).unwrap();
        assert_eq!(cycle.len(), (width * height) as usize);

        let counts = cycle.iter().counts();
        assert!(
            counts.values().all(|count| *count == 1),
            "{}x{} cycle visits a cell more than once",
            width,
            height
        );

        for cell in &cycle {
            assert!(cell.x >= 0 && (cell.x as u32) < width);
            assert!(cell.y >= 0 && (cell.y as u32) < height);
        }

        for (a, b) in cycle.iter().circular_tuple_windows() {
            let manhattan = (a.x - b.x).abs() + (a.y - b.y).abs();
            assert_eq!(
                manhattan, 1,
                "{:?} and {:?} are not grid-adjacent in the {}x{} cycle",
                a, b, width, height
            );
        }
    }

    #[test]
    fn test_cycles_are_closed_tours_for_supported_dimensions() {
        assert_valid_cycle(4, 2);
        assert_valid_cycle(4, 4);
        assert_valid_cycle(6, 5);
        assert_valid_cycle(10, 3);
        assert_valid_cycle(18, 17);
    }

    #[test]
    fn test_reference_board_covers_all_306_cells() {
        let cycle = build_cycle(18, 17).unwrap();
        assert_eq!(cycle.len(), 306);
        assert_eq!(cycle.iter().unique().count(), 306);
    }

    #[test]
    fn test_cycle_starts_at_origin_and_ends_on_the_corridor() {
        let cycle = build_cycle(6, 4).unwrap();
        assert_eq!(cycle[0], Cell::new(0, 0));
        assert_eq!(*cycle.last().unwrap(), Cell::new(1, 0));
    }

    #[test]
    fn test_unsupported_dimensions_are_rejected() {
        assert_eq!(
            build_cycle(0, 5),
            Err(InvalidGeometry {
                width: 0,
                height: 5
            })
        );
        assert_eq!(
            build_cycle(4, 0),
            Err(InvalidGeometry {
                width: 4,
                height: 0
            })
        );
        // too narrow for the corridor pattern
        assert!(build_cycle(2, 4).is_err());
        // odd column count leaves the serpentine stranded at the top row
        assert!(build_cycle(5, 5).is_err());
        // a single row has nowhere to serpentine
        assert!(build_cycle(4, 1).is_err());
    }

    #[test]
    fn test_invalid_geometry_reports_the_dimensions() {
        let err = build_cycle(5, 5).unwrap_err();
        assert!(err.to_string().contains("5x5"));
    }
}
