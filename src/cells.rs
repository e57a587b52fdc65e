use smallvec::SmallVec;
use std::fmt;

use crate::units::{ColumnIndex, RowIndex};

/// State of a single grid cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CellState {
    Wall,
    Open,
}

impl Default for CellState {
    fn default() -> CellState {
        CellState::Wall
    }
}

/// A grid position, `x` is the column and `y` the row.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub x: usize,
    pub y: usize,
}

impl GridCoordinate {
    pub fn new(x: usize, y: usize) -> GridCoordinate {
        GridCoordinate { x, y }
    }

    pub fn from_row_column_indices(col_index: ColumnIndex, row_index: RowIndex) -> GridCoordinate {
        GridCoordinate::new(col_index.0, row_index.0)
    }

    pub fn from_row_major_index(index: usize, row_width: usize) -> GridCoordinate {
        let y = index / row_width;
        let x = index - (y * row_width);
        GridCoordinate { x, y }
    }

    /// Is `other` exactly one step away along one axis?
    pub fn is_adjacent_to(&self, other: GridCoordinate) -> bool {
        let dx = if self.x > other.x { self.x - other.x } else { other.x - self.x };
        let dy = if self.y > other.y { self.y - other.y } else { other.y - self.y };
        dx + dy == 1
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

pub const ALL_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                                 CompassPrimary::South,
                                                 CompassPrimary::East,
                                                 CompassPrimary::West];

/// Creates a new coordinate `distance` cells away in the given direction.
/// Returns None if that would step below zero on either axis, the upper grid bounds
/// are left to the grid to check.
pub fn offset_coordinate(coord: GridCoordinate,
                         dir: CompassPrimary,
                         distance: usize)
                         -> Option<GridCoordinate> {
    let (x, y) = (coord.x, coord.y);
    match dir {
        CompassPrimary::North => y.checked_sub(distance).map(|y| GridCoordinate { x, y }),
        CompassPrimary::South => Some(GridCoordinate { x, y: y + distance }),
        CompassPrimary::East => Some(GridCoordinate { x: x + distance, y }),
        CompassPrimary::West => x.checked_sub(distance).map(|x| GridCoordinate { x, y }),
    }
}

/// The cell half way between two coordinates on the same row or column.
pub fn midpoint(a: GridCoordinate, b: GridCoordinate) -> GridCoordinate {
    GridCoordinate::new((a.x + b.x) / 2, (a.y + b.y) / 2)
}
