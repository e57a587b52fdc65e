use rand::Rng;

use crate::cells::GridCoordinate;
use crate::errors::MazeError;
use crate::generators;
use crate::grid::MazeGrid;
use crate::pathing;
use crate::units::{Height, Width};

/// A carved grid and, once asked for, its entrance to exit solution.
///
/// This is everything a renderer needs: the grid is only reachable through `&`, so nothing
/// outside the crate can change it after carving.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: MazeGrid,
    solution: Option<Vec<GridCoordinate>>,
}

impl Maze {
    /// Create a `width` by `height` grid and carve a perfect maze into it.
    pub fn generate<R>(width: Width, height: Height, rng: &mut R) -> Result<Maze, MazeError>
        where R: Rng + ?Sized
    {
        let mut grid = MazeGrid::new(width, height)?;
        generators::recursive_backtracker(&mut grid, rng);
        Ok(Maze {
            grid,
            solution: None,
        })
    }

    #[inline]
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    #[inline]
    pub fn entrance(&self) -> GridCoordinate {
        self.grid.entrance()
    }

    #[inline]
    pub fn exit(&self) -> GridCoordinate {
        self.grid.exit()
    }

    /// The entrance to exit path, solving on the first call.
    pub fn solve(&mut self) -> Result<&[GridCoordinate], MazeError> {
        if self.solution.is_none() {
            self.solution = Some(pathing::solve(&self.grid)?);
        }
        Ok(self.solution.as_deref().unwrap_or(&[]))
    }

    /// None until `solve` has succeeded.
    pub fn solution(&self) -> Option<&[GridCoordinate]> {
        self.solution.as_deref()
    }
}
