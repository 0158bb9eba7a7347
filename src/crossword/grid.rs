//! Crossword structure: blocked cells, slots and the crossings between slots

use super::{Direction, PuzzleError, Variable};
use crate::csp::Assignment;
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;

/// Index of a variable inside its [`Crossword`]
pub type VarId = usize;

/// Crossing cells between pairs of slots.
///
/// Each crossing is stored once, keyed by the pair with the lower id first. Lookups
/// with the ids in the other order get the index pair swapped, so
/// `get(x, y) == get(y, x).map(|(a, b)| (b, a))` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlaps {
    cells: HashMap<(VarId, VarId), (usize, usize)>,
}

impl Overlaps {
    fn insert(&mut self, x: VarId, y: VarId, (index_x, index_y): (usize, usize)) {
        if x < y {
            self.cells.insert((x, y), (index_x, index_y));
        } else {
            self.cells.insert((y, x), (index_y, index_x));
        }
    }

    /// Letter positions `(index in x, index in y)` of the cell shared by `x` and `y`
    pub fn get(&self, x: VarId, y: VarId) -> Option<(usize, usize)> {
        if x < y {
            self.cells.get(&(x, y)).copied()
        } else {
            self.cells
                .get(&(y, x))
                .map(|&(index_y, index_x)| (index_x, index_y))
        }
    }

    /// Number of crossing cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Canonical `(lower id, higher id)` pairs with their index pairs
    pub fn iter(&self) -> impl Iterator<Item = ((VarId, VarId), (usize, usize))> + '_ {
        self.cells.iter().map(|(&pair, &indices)| (pair, indices))
    }
}

/// Immutable crossword geometry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossword {
    pub width: usize,
    pub height: usize,
    /// `true` marks a fillable cell
    pub structure: Vec<Vec<bool>>,
    variables: Vec<Variable>,
    overlaps: Overlaps,
    neighbors: Vec<Vec<VarId>>,
}

impl Crossword {
    /// Build a crossword from rows of fillable flags. Short rows are padded with
    /// blocked cells up to the widest row.
    pub fn from_structure(mut structure: Vec<Vec<bool>>) -> Result<Self, PuzzleError> {
        if structure.is_empty() {
            return Err(PuzzleError::EmptyStructure);
        }

        let height = structure.len();
        let width = structure.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(PuzzleError::ZeroWidth);
        }

        for row in &mut structure {
            row.resize(width, false);
        }

        let variables = find_variables(&structure, width, height);
        let overlaps = find_overlaps(&variables);

        let mut neighbors = vec![Vec::new(); variables.len()];
        for ((x, y), _) in overlaps.iter() {
            neighbors[x].push(y);
            neighbors[y].push(x);
        }
        for list in &mut neighbors {
            list.sort_unstable();
        }

        Ok(Self {
            width,
            height,
            structure,
            variables,
            overlaps,
            neighbors,
        })
    }

    /// Parse the text layout: `_` is a fillable cell, anything else is blocked
    pub fn parse(content: &str) -> Result<Self, PuzzleError> {
        let structure = content
            .lines()
            .map(|line| line.chars().map(|ch| ch == '_').collect())
            .collect();
        Self::from_structure(structure)
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id]
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Look up the id of a variable of this crossword
    pub fn id_of(&self, variable: &Variable) -> Option<VarId> {
        self.variables.binary_search(variable).ok()
    }

    /// Variables sharing a cell with `id`, in id order
    pub fn neighbors(&self, id: VarId) -> &[VarId] {
        &self.neighbors[id]
    }

    pub fn overlap(&self, x: VarId, y: VarId) -> Option<(usize, usize)> {
        self.overlaps.get(x, y)
    }

    pub fn overlaps(&self) -> &Overlaps {
        &self.overlaps
    }

    #[inline]
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.structure[row][col]
    }

    pub fn fillable_count(&self) -> usize {
        self.structure.iter().flatten().filter(|&&cell| cell).count()
    }

    /// Letters placed by `assignment`, row by row. Cells not covered by an assigned
    /// slot are `None`.
    pub fn letter_grid(&self, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
        let mut letters = vec![vec![None; self.width]; self.height];
        for (id, word) in assignment.iter() {
            let variable = self.variable(id);
            for (k, letter) in word.chars().enumerate().take(variable.length) {
                let (row, col) = variable.cell(k);
                if row < self.height && col < self.width {
                    letters[row][col] = Some(letter);
                }
            }
        }
        letters
    }
}

fn find_variables(structure: &[Vec<bool>], width: usize, height: usize) -> Vec<Variable> {
    let mut variables = Vec::new();

    for i in 0..height {
        for j in 0..width {
            if !structure[i][j] {
                continue;
            }

            if j == 0 || !structure[i][j - 1] {
                let length = (j..width).take_while(|&col| structure[i][col]).count();
                if length > 1 {
                    variables.push(Variable::new(i, j, Direction::Across, length));
                }
            }

            if i == 0 || !structure[i - 1][j] {
                let length = (i..height).take_while(|&row| structure[row][j]).count();
                if length > 1 {
                    variables.push(Variable::new(i, j, Direction::Down, length));
                }
            }
        }
    }

    variables
}

fn find_overlaps(variables: &[Variable]) -> Overlaps {
    let mut slots_by_cell: HashMap<(usize, usize), Vec<(VarId, usize)>> = HashMap::new();
    for (id, variable) in variables.iter().enumerate() {
        for k in 0..variable.length {
            slots_by_cell.entry(variable.cell(k)).or_default().push((id, k));
        }
    }

    let mut overlaps = Overlaps::default();
    for occupants in slots_by_cell.values() {
        for (&(x, index_x), &(y, index_y)) in occupants.iter().tuple_combinations() {
            overlaps.insert(x, y, (index_x, index_y));
        }
    }
    overlaps
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.structure {
            for &cell in row {
                write!(f, "{}", if cell { '_' } else { '#' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRUCTURE: &str = "#___#\n#_##_\n#_##_\n#_##_\n#____\n";

    #[test]
    fn test_variables_are_derived_in_order() {
        let crossword = Crossword::parse(STRUCTURE).unwrap();
        assert_eq!(crossword.width, 5);
        assert_eq!(crossword.height, 5);
        assert_eq!(
            crossword.variables(),
            &[
                Variable::new(0, 1, Direction::Across, 3),
                Variable::new(0, 1, Direction::Down, 5),
                Variable::new(1, 4, Direction::Down, 4),
                Variable::new(4, 1, Direction::Across, 4),
            ]
        );
    }

    #[test]
    fn test_overlaps_are_symmetric() {
        let crossword = Crossword::parse(STRUCTURE).unwrap();
        assert_eq!(crossword.overlaps().len(), 3);

        // 0-across and 1-down share their first cell
        assert_eq!(crossword.overlap(0, 1), Some((0, 0)));
        // 1-down ends where 4-across starts
        assert_eq!(crossword.overlap(1, 3), Some((4, 0)));
        assert_eq!(crossword.overlap(3, 1), Some((0, 4)));
        // 4-across ends where the right-hand down slot ends
        assert_eq!(crossword.overlap(3, 2), Some((3, 3)));

        assert_eq!(crossword.overlap(0, 2), None);
        assert_eq!(crossword.overlap(2, 2), None);

        for x in 0..crossword.variable_count() {
            for y in 0..crossword.variable_count() {
                let swapped = crossword.overlap(y, x).map(|(a, b)| (b, a));
                assert_eq!(crossword.overlap(x, y), swapped);
            }
        }
    }

    #[test]
    fn test_overlap_indices_point_at_the_same_cell() {
        let crossword = Crossword::parse(STRUCTURE).unwrap();
        for ((x, y), (index_x, index_y)) in crossword.overlaps().iter() {
            assert_eq!(
                crossword.variable(x).cell(index_x),
                crossword.variable(y).cell(index_y)
            );
        }
    }

    #[test]
    fn test_neighbors() {
        let crossword = Crossword::parse(STRUCTURE).unwrap();
        assert_eq!(crossword.neighbors(0), &[1]);
        assert_eq!(crossword.neighbors(1), &[0, 3]);
        assert_eq!(crossword.neighbors(3), &[1, 2]);
    }

    #[test]
    fn test_single_cells_are_not_slots() {
        let crossword = Crossword::parse("_#_\n###\n_#_\n").unwrap();
        assert_eq!(crossword.variable_count(), 0);
        assert_eq!(crossword.fillable_count(), 4);
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let crossword = Crossword::parse("___\n_\n").unwrap();
        assert_eq!(crossword.width, 3);
        assert!(!crossword.is_fillable(1, 2));
        assert_eq!(crossword.variable_count(), 2);
    }

    #[test]
    fn test_id_lookup() {
        let crossword = Crossword::parse(STRUCTURE).unwrap();
        let down = Variable::new(1, 4, Direction::Down, 4);
        assert_eq!(crossword.id_of(&down), Some(2));
        assert_eq!(crossword.id_of(&Variable::new(1, 4, Direction::Down, 3)), None);
    }

    #[test]
    fn test_empty_structure_is_rejected() {
        assert_eq!(Crossword::parse(""), Err(PuzzleError::EmptyStructure));
        assert_eq!(
            Crossword::from_structure(vec![vec![]]),
            Err(PuzzleError::ZeroWidth)
        );
    }

    #[test]
    fn test_letter_grid() {
        let crossword = Crossword::parse(STRUCTURE).unwrap();
        let mut assignment = Assignment::new();
        assignment.insert(0, "SIX".into());
        assignment.insert(1, "SEVEN".into());

        let letters = crossword.letter_grid(&assignment);
        assert_eq!(letters[0], vec![None, Some('S'), Some('I'), Some('X'), None]);
        assert_eq!(letters[4][1], Some('N'));
        assert_eq!(letters[4][2], None);
    }
}
