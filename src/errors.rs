use std::error::Error;
use std::fmt;

use crate::cells::GridCoordinate;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum MazeError {
    /// A requested side is below `grid::MIN_DIMENSION`; there is no room for an interior.
    DegenerateDimensions { width: usize, height: usize },
    /// No open path joins `start` to `end` on a grid that should be fully connected.
    Unreachable {
        start: GridCoordinate,
        end: GridCoordinate,
    },
}

impl MazeError {
    /// Raised for bad caller input before any grid exists.
    pub fn is_configuration(&self) -> bool {
        match *self {
            MazeError::DegenerateDimensions { .. } => true,
            MazeError::Unreachable { .. } => false,
        }
    }

    /// Raised when a carved grid breaks the connectivity guarantee.
    pub fn is_consistency(&self) -> bool {
        !self.is_configuration()
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MazeError::DegenerateDimensions { width, height } => {
                write!(f,
                       "maze dimensions {}x{} are too small, both sides must be at least 3",
                       width,
                       height)
            }
            MazeError::Unreachable { start, end } => {
                write!(f, "maze exit {} is not reachable from entrance {}", end, start)
            }
        }
    }
}

impl Error for MazeError {}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn error_categories() {
        let degenerate = MazeError::DegenerateDimensions { width: 2, height: 2 };
        assert!(degenerate.is_configuration());
        assert!(!degenerate.is_consistency());

        let unreachable = MazeError::Unreachable {
            start: GridCoordinate::new(1, 1),
            end: GridCoordinate::new(3, 3),
        };
        assert!(unreachable.is_consistency());
        assert!(!unreachable.is_configuration());
    }

    #[test]
    fn error_messages() {
        let degenerate = MazeError::DegenerateDimensions { width: 2, height: 5 };
        assert_eq!(degenerate.to_string(),
                   "maze dimensions 2x5 are too small, both sides must be at least 3");

        let unreachable = MazeError::Unreachable {
            start: GridCoordinate::new(1, 1),
            end: GridCoordinate::new(2, 2),
        };
        assert_eq!(unreachable.to_string(),
                   "maze exit (2, 2) is not reachable from entrance (1, 1)");
    }
}
