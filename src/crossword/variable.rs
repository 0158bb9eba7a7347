//! Slots of the crossword grid

use serde::{Deserialize, Serialize};
use std::fmt;

/// Orientation of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Across,
    Down,
}

/// A slot in the grid: a start cell, a direction and a length.
///
/// Two variables are equal iff all four attributes match. The derived ordering is
/// row-major on the start cell with `Across` before `Down`, which is also the order
/// variables are stored in a [`Crossword`](super::Crossword).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Variable {
    pub i: usize,
    pub j: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    pub fn new(i: usize, j: usize, direction: Direction, length: usize) -> Self {
        Self {
            i,
            j,
            direction,
            length,
        }
    }

    /// Grid coordinates of the `k`-th letter of this slot
    #[inline]
    pub fn cell(&self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.i, self.j + k),
            Direction::Down => (self.i + k, self.j),
        }
    }

    /// All cells covered by this slot, in letter order
    pub fn cells(&self) -> Vec<(usize, usize)> {
        (0..self.length).map(|k| self.cell(k)).collect()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {} : {}", self.i, self.j, self.direction, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_follow_direction() {
        let across = Variable::new(1, 2, Direction::Across, 3);
        assert_eq!(across.cells(), vec![(1, 2), (1, 3), (1, 4)]);

        let down = Variable::new(1, 2, Direction::Down, 3);
        assert_eq!(down.cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_equality_needs_all_attributes() {
        let a = Variable::new(0, 0, Direction::Across, 3);
        assert_eq!(a, Variable::new(0, 0, Direction::Across, 3));
        assert_ne!(a, Variable::new(0, 0, Direction::Down, 3));
        assert_ne!(a, Variable::new(0, 0, Direction::Across, 4));
        assert_ne!(a, Variable::new(0, 1, Direction::Across, 3));
    }

    #[test]
    fn test_ordering_is_row_major_across_first() {
        let mut vars = vec![
            Variable::new(1, 0, Direction::Across, 2),
            Variable::new(0, 0, Direction::Down, 3),
            Variable::new(0, 0, Direction::Across, 3),
        ];
        vars.sort();
        assert_eq!(vars[0].direction, Direction::Across);
        assert_eq!(vars[1], Variable::new(0, 0, Direction::Down, 3));
        assert_eq!(vars[2].i, 1);
    }

    #[test]
    fn test_display() {
        let v = Variable::new(4, 1, Direction::Down, 5);
        assert_eq!(v.to_string(), "(4, 1) down : 5");
    }
}
