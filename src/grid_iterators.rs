use crate::cells::GridCoordinate;
use crate::units::{ColumnIndex, Height, RowIndex, Width};

/// Visits every coordinate of a grid in row-major order.
#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    row_width: usize,
    cells_count: usize,
}

impl CellIter {
    pub fn new(width: Width, height: Height) -> CellIter {
        CellIter {
            current_cell_number: 0,
            row_width: width.0,
            cells_count: width.0 * height.0,
        }
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = GridCoordinate::from_row_major_index(self.current_cell_number,
                                                             self.row_width);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Yields the coordinates of one grid row at a time, top row first.
#[derive(Debug, Copy, Clone)]
pub struct BatchIter {
    current_index: usize,
    row_width: usize,
    rows_count: usize,
}

impl BatchIter {
    pub fn new(width: Width, height: Height) -> BatchIter {
        BatchIter {
            current_index: 0,
            row_width: width.0,
            rows_count: height.0,
        }
    }
}

impl ExactSizeIterator for BatchIter {}
impl Iterator for BatchIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index < self.rows_count {
            let row = RowIndex(self.current_index);
            let coords = (0..self.row_width)
                .map(|i| GridCoordinate::from_row_column_indices(ColumnIndex(i), row))
                .collect();
            self.current_index += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.rows_count - self.current_index;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
