//! **mazes** carves perfect mazes into wall/open cell grids and finds the shortest route from
//! the entrance to the exit.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_iterators;
pub mod maze;
pub mod pathing;
pub mod units;
mod utils;
