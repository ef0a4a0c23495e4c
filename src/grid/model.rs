//! The hexagram grid, sole artifact passed from classification to rendering

use ndarray::Array2;

/// One classified grid cell: `None` is a deliberate blank, `Some` holds a
/// hexagram index in `[0, 63]`
pub type Cell = Option<u8>;

/// Square grid of classified cells
///
/// Produced wholesale by the classifier and never mutated afterwards; a
/// re-processing run replaces the entire grid. Every `Some` cell holds a
/// valid 6-bit index by construction of the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexagramGrid {
    cells: Array2<Cell>,
}

impl HexagramGrid {
    /// Wrap a classified cell array
    pub fn from_cells(cells: Array2<Cell>) -> Self {
        Self { cells }
    }

    /// Side length of the grid in cells
    pub fn size(&self) -> usize {
        self.cells.dim().0
    }

    /// Cell at `(row, col)`; out-of-bounds positions read as blank
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells.get((row, col)).copied().flatten()
    }

    /// Iterate all cells as `(row, col, cell)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| (row, col, cell))
    }

    /// Number of non-blank cells
    pub fn glyph_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether every cell is blank
    pub fn is_blank(&self) -> bool {
        self.glyph_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::HexagramGrid;
    use ndarray::Array2;

    #[test]
    fn test_out_of_bounds_reads_as_blank() {
        let grid = HexagramGrid::from_cells(Array2::from_elem((2, 2), Some(5)));
        assert_eq!(grid.cell(0, 0), Some(5));
        assert_eq!(grid.cell(2, 0), None);
        assert_eq!(grid.cell(0, 7), None);
    }

    #[test]
    fn test_glyph_count_skips_blanks() {
        let mut cells = Array2::from_elem((3, 3), None);
        if let Some(cell) = cells.get_mut((1, 1)) {
            *cell = Some(63);
        }
        let grid = HexagramGrid::from_cells(cells);
        assert_eq!(grid.glyph_count(), 1);
        assert!(!grid.is_blank());
    }
}
