use std::fmt;

use crate::cells::{offset_coordinate, CellState, CoordinateSmallVec, GridCoordinate,
                   ALL_DIRECTIONS, CompassPrimary};
use crate::errors::MazeError;
use crate::grid_iterators::{BatchIter, CellIter};
use crate::units::{Height, Width};

/// Smallest side length that leaves room for an interior inside the boundary ring.
pub const MIN_DIMENSION: usize = 3;

/// A rectangular grid of wall/open cells stored row-major.
///
/// Cells with two odd coordinates are the "rooms" of the maze, every other cell is a wall
/// that may be opened to join two rooms. The entrance and exit are fixed by the dimensions.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MazeGrid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl fmt::Debug for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MazeGrid :: width: {:?}, height: {:?}, open cells: {:?}",
               self.width, self.height, self.open_cells_count())
    }
}

impl MazeGrid {
    /// A grid where every cell is a wall.
    ///
    /// Fails with `MazeError::DegenerateDimensions` if either side is below `MIN_DIMENSION`.
    pub fn new(width: Width, height: Height) -> Result<MazeGrid, MazeError> {
        let (Width(w), Height(h)) = (width, height);
        if w < MIN_DIMENSION || h < MIN_DIMENSION {
            return Err(MazeError::DegenerateDimensions { width: w, height: h });
        }

        Ok(MazeGrid {
            width: w,
            height: h,
            cells: vec![CellState::Wall; w * h],
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Carving steps in twos, so only odd sided grids have every row and column reachable.
    pub fn has_odd_dimensions(&self) -> bool {
        self.width % 2 == 1 && self.height % 2 == 1
    }

    /// The interior room where carving and solving start.
    #[inline]
    pub fn entrance(&self) -> GridCoordinate {
        GridCoordinate::new(1, 1)
    }

    /// The interior room the solver is looking for.
    #[inline]
    pub fn exit(&self) -> GridCoordinate {
        GridCoordinate::new(self.width - 2, self.height - 2)
    }

    /// Boundary cell opened next to the entrance.
    #[inline]
    pub fn entrance_opening(&self) -> GridCoordinate {
        GridCoordinate::new(0, 1)
    }

    /// Boundary cell opened next to the exit.
    #[inline]
    pub fn exit_opening(&self) -> GridCoordinate {
        GridCoordinate::new(self.width - 1, self.height - 2)
    }

    #[inline]
    pub fn in_bounds(&self, coord: GridCoordinate) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Strictly inside the outer boundary ring.
    #[inline]
    pub fn is_interior(&self, coord: GridCoordinate) -> bool {
        coord.x >= 1 && coord.y >= 1 && coord.x <= self.width - 2 && coord.y <= self.height - 2
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is out of bounds.
    #[inline]
    pub fn coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y * self.width + coord.x)
        } else {
            None
        }
    }

    pub fn cell_state(&self, coord: GridCoordinate) -> Option<CellState> {
        self.coordinate_to_index(coord).map(|index| self.cells[index])
    }

    /// Out of bounds coordinates are never open.
    #[inline]
    pub fn is_open(&self, coord: GridCoordinate) -> bool {
        self.cell_state(coord) == Some(CellState::Open)
    }

    /// Mark a cell open. Opening an open cell does nothing, as does an out of bounds coordinate.
    pub fn set_open(&mut self, coord: GridCoordinate) {
        if let Some(index) = self.coordinate_to_index(coord) {
            self.cells[index] = CellState::Open;
        }
    }

    /// Cells to the North, South, East or West of a coordinate that are inside the grid,
    /// open or not.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        ALL_DIRECTIONS.iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<GridCoordinate> {
        offset_coordinate(coord, direction, 1).filter(|neighbour| self.in_bounds(*neighbour))
    }

    /// The subset of `neighbours` a path can step into.
    pub fn open_neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        self.neighbours(coord)
            .into_iter()
            .filter(|neighbour| self.is_open(*neighbour))
            .collect()
    }

    pub fn open_cells_count(&self) -> usize {
        self.cells.iter().filter(|state| **state == CellState::Open).count()
    }

    /// Every pair of adjacent open cells, each pair reported once with the
    /// second cell east or south of the first.
    pub fn iter_open_links<'a>(&'a self) -> impl Iterator<Item = (GridCoordinate, GridCoordinate)> + 'a {
        self.iter()
            .filter(move |coord| self.is_open(*coord))
            .flat_map(move |coord| {
                [CompassPrimary::East, CompassPrimary::South]
                    .iter()
                    .filter_map(move |dir| self.neighbour_at_direction(coord, *dir))
                    .filter(move |neighbour| self.is_open(*neighbour))
                    .map(move |neighbour| (coord, neighbour))
                    .collect::<CoordinateLinkVec>()
            })
    }

    pub fn open_links_count(&self) -> usize {
        self.iter_open_links().count()
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(Width(self.width), Height(self.height))
    }

    #[inline]
    pub fn iter_row(&self) -> BatchIter {
        BatchIter::new(Width(self.width), Height(self.height))
    }
}

type CoordinateLinkVec = smallvec::SmallVec<[(GridCoordinate, GridCoordinate); 2]>;

impl<'a> IntoIterator for &'a MazeGrid {
    type Item = GridCoordinate;
    type IntoIter = CellIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", crate::grid_displays::render_text(self, None))
    }
}
