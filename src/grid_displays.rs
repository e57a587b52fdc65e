//! Plain text pictures of a grid, with optional overlays drawn in the open cells.

use crate::cells::{CoordinateSmallVec, GridCoordinate};
use crate::grid::MazeGrid;
use crate::pathing::Distances;
use crate::utils::{self, FnvHashSet};

const WALL: &str = "██";
const OPEN: &str = "  ";

/// Something that has text to show inside some of the open cells of a grid.
pub trait GridDisplay {
    /// Text for the body of an open cell, two glyphs wide.
    /// None leaves the cell blank.
    fn render_cell_body(&self, _: GridCoordinate) -> Option<String> {
        None
    }
}

/// One line of text per grid row, every cell two glyphs wide.
pub fn render_text(grid: &MazeGrid, overlay: Option<&dyn GridDisplay>) -> String {
    let mut output = String::with_capacity((grid.width() * WALL.len() + 1) * grid.height());

    for row in grid.iter_row() {
        for coord in row {
            if grid.is_open(coord) {
                match overlay.and_then(|display| display.render_cell_body(coord)) {
                    Some(body) => output.push_str(&body),
                    None => output.push_str(OPEN),
                }
            } else {
                output.push_str(WALL);
            }
        }
        output.push('\n');
    }

    output
}

impl GridDisplay for Distances {
    fn render_cell_body(&self, coord: GridCoordinate) -> Option<String> {
        // lowercase hexadecimal, only the low byte fits in two glyphs
        self.distance_from_start_to(coord).map(|d| format!("{:02x}", d % 256))
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[GridCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> Option<String> {
        if self.on_path_coordinates.contains(&coord) {
            Some(String::from("()"))
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinates: CoordinateSmallVec,
    end_coordinates: CoordinateSmallVec,
}
impl StartEndPointsDisplay {
    pub fn new(starts: CoordinateSmallVec, ends: CoordinateSmallVec) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinates: starts,
            end_coordinates: ends,
        }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> Option<String> {
        if self.start_coordinates.contains(&coord) {
            Some(String::from("S "))
        } else if self.end_coordinates.contains(&coord) {
            Some(String::from("E "))
        } else {
            None
        }
    }
}

/// Stacks displays, the first one with something to say about a cell wins.
pub struct LayeredDisplay<'a> {
    layers: Vec<&'a dyn GridDisplay>,
}
impl<'a> LayeredDisplay<'a> {
    pub fn new(layers: Vec<&'a dyn GridDisplay>) -> LayeredDisplay<'a> {
        LayeredDisplay { layers }
    }
}
impl<'a> GridDisplay for LayeredDisplay<'a> {
    fn render_cell_body(&self, coord: GridCoordinate) -> Option<String> {
        self.layers.iter().filter_map(|layer| layer.render_cell_body(coord)).next()
    }
}
