//! Fixed-size row-major grid

use super::types::Position;

/// Rectangular 2-D array stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from already validated rows
    ///
    /// Callers guarantee every row has the same length.
    pub(crate) fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let cells: Vec<T> = rows.into_iter().flatten().collect();
        debug_assert_eq!(cells.len(), row_count * cols);
        Self {
            rows: row_count,
            cols,
            cells,
        }
    }

    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(Position) -> T) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(Position::new(row, col)));
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        if self.contains(pos) {
            self.cells.get(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        if self.contains(pos) {
            self.cells.get_mut(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// Cells of one row, `None` past the last row
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        self.cells.get(row * self.cols..(row + 1) * self.cols)
    }

    /// Cells with their positions in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::new(i / cols, i % cols), cell))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(&mut f).collect(),
        }
    }

    /// Pick id for a cell: `row * cols + col + 1`, 0 is reserved for "no pick"
    pub fn pick_id(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col + 1
    }

    /// Inverse of [`Grid::pick_id`]
    pub fn position_for_pick(&self, cell_id: usize) -> Option<Position> {
        if cell_id == 0 || cell_id > self.rows * self.cols {
            return None;
        }
        let index = cell_id - 1;
        Some(Position::new(index / self.cols, index % self.cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_ids_are_one_based_row_major() {
        let grid = Grid::filled(13, 13, 0u8);
        assert_eq!(grid.pick_id(Position::new(0, 0)), 1);
        assert_eq!(grid.pick_id(Position::new(1, 0)), 14);
        assert_eq!(grid.pick_id(Position::new(12, 12)), 169);
        assert_eq!(grid.position_for_pick(14), Some(Position::new(1, 0)));
        assert_eq!(grid.position_for_pick(169), Some(Position::new(12, 12)));
    }

    #[test]
    fn test_pick_zero_and_overflow_are_rejected() {
        let grid = Grid::filled(2, 3, 0u8);
        assert_eq!(grid.position_for_pick(0), None);
        assert_eq!(grid.position_for_pick(7), None);
        assert_eq!(grid.position_for_pick(6), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = Grid::from_fn(2, 2, |pos| pos.row * 10 + pos.col);
        let values: Vec<_> = grid.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![0, 1, 10, 11]);
        assert_eq!(grid.get(Position::new(2, 0)), None);
    }

    #[test]
    fn test_row_past_the_end_is_none() {
        let grid = Grid::from_fn(2, 3, |pos| pos.row * 10 + pos.col);
        assert_eq!(grid.row(1), Some(&[10, 11, 12][..]));
        assert_eq!(grid.row(2), None);
    }
}
