use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use tracing::{debug, trace, warn};

use crate::cells::{midpoint, offset_coordinate, CoordinateSmallVec, GridCoordinate, ALL_DIRECTIONS};
use crate::grid::MazeGrid;

/// Build the random number generator used when the caller does not inject one.
/// The same seed always gives the same sequence, no seed means seeding from the OS.
pub fn seeded_rng(seed: Option<u64>) -> XorShiftRng {
    match seed {
        Some(s) => XorShiftRng::seed_from_u64(s),
        None => XorShiftRng::from_entropy(),
    }
}

/// Apply the recursive backtracker maze generation algorithm to an all wall grid.
///
/// The rooms of the maze are the cells with odd coordinates, the even coordinate cells between
/// them are walls that get knocked through. Starting from the entrance room we keep a stack of
/// rooms: look at the room on top of the stack and pick, uniformly at random, one of the
/// neighbouring rooms (two cells away) that is inside the boundary ring and not yet carved.
/// Open the wall between them, open the new room and push it. When the top room has no
/// uncarved neighbours pop it and backtrack. Once the stack is empty every room has been
/// visited exactly once, so the passages form a spanning tree over the rooms: a perfect maze.
///
/// Finally the boundary cells beside the entrance and exit are opened.
///
/// On grids with an even side the last row or column of rooms does not exist, so the far
/// boundary never gets a passage beside it and the exit room is never carved. That layout is
/// left as it is.
pub fn recursive_backtracker<R>(grid: &mut MazeGrid, rng: &mut R)
    where R: Rng + ?Sized
{
    if !grid.has_odd_dimensions() {
        warn!(width = grid.width(),
              height = grid.height(),
              "even grid dimensions, the exit room is off the carving lattice");
    }

    let start = grid.entrance();
    grid.set_open(start);
    let mut stack = vec![start];
    let mut rooms_visited = 1usize;

    while let Some(&current) = stack.last() {

        let candidates = unvisited_neighbour_rooms(grid, current);

        if candidates.is_empty() {
            trace!(x = current.x, y = current.y, "backtracking");
            stack.pop();
        } else {
            let next_room = candidates[rng.gen_range(0..candidates.len())];
            grid.set_open(midpoint(current, next_room));
            grid.set_open(next_room);
            stack.push(next_room);
            rooms_visited += 1;
        }
    }

    let entrance_opening = grid.entrance_opening();
    let exit_opening = grid.exit_opening();
    grid.set_open(entrance_opening);
    grid.set_open(exit_opening);

    debug!(width = grid.width(),
           height = grid.height(),
           rooms_visited,
           open_cells = grid.open_cells_count(),
           "carved maze");
}

/// Rooms two cells North, South, East or West of `room`, in that order, that are still walls
/// and strictly inside the boundary ring.
fn unvisited_neighbour_rooms(grid: &MazeGrid, room: GridCoordinate) -> CoordinateSmallVec {
    ALL_DIRECTIONS.iter()
        .filter_map(|dir| offset_coordinate(room, *dir, 2))
        .filter(|coord| grid.is_interior(*coord) && !grid.is_open(*coord))
        .collect()
}
