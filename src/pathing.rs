use std::collections::VecDeque;

use bit_set::BitSet;
use tracing::{debug, error};

use crate::cells::GridCoordinate;
use crate::errors::MazeError;
use crate::grid::MazeGrid;
use crate::utils;
use crate::utils::FnvHashMap;

/// Breadth first flood fill of the open cells of a grid from a start cell.
///
/// Every step costs one, so the first time a cell is reached is along a shortest route and
/// it never needs updating. Each reached cell remembers the cell it was reached from, which is
/// enough to rebuild a shortest path afterwards without copying partial paths around.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: GridCoordinate,
    distances: FnvHashMap<GridCoordinate, u32>,
    parents: FnvHashMap<GridCoordinate, GridCoordinate>,
    max_distance: u32,
}

impl Distances {
    /// Distances to every open cell reachable from `start`.
    ///
    /// None if `start` is outside the grid or is a wall.
    pub fn for_grid(grid: &MazeGrid, start: GridCoordinate) -> Option<Distances> {
        Distances::flood(grid, start, None)
    }

    /// Like `for_grid` but stops as soon as `goal` is taken off the queue. Cells further from
    /// the start than `goal` may be missing.
    pub fn for_grid_until(grid: &MazeGrid,
                          start: GridCoordinate,
                          goal: GridCoordinate)
                          -> Option<Distances> {
        Distances::flood(grid, start, Some(goal))
    }

    fn flood(grid: &MazeGrid,
             start: GridCoordinate,
             goal: Option<GridCoordinate>)
             -> Option<Distances> {

        let start_index = grid.coordinate_to_index(start)?;
        if !grid.is_open(start) {
            return None;
        }

        let cells_count = grid.size();
        let mut visited = BitSet::with_capacity(cells_count);
        let mut distances = utils::fnv_hashmap(cells_count);
        let mut parents = utils::fnv_hashmap(cells_count);
        let mut max = 0;

        visited.insert(start_index);
        distances.insert(start, 0);
        let mut frontier = VecDeque::with_capacity(cells_count);
        frontier.push_back(start);

        while let Some(cell_coord) = frontier.pop_front() {

            if Some(cell_coord) == goal {
                break;
            }

            let distance_to_link = distances[&cell_coord] + 1;
            for link_coord in grid.open_neighbours(cell_coord) {
                let link_index = match grid.coordinate_to_index(link_coord) {
                    Some(index) => index,
                    None => continue,
                };
                // insert is false for cells already queued
                if visited.insert(link_index) {
                    distances.insert(link_coord, distance_to_link);
                    parents.insert(link_coord, cell_coord);
                    if distance_to_link > max {
                        max = distance_to_link;
                    }
                    frontier.push_back(link_coord);
                }
            }
        }

        Some(Distances {
            start_coordinate: start,
            distances,
            parents,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> GridCoordinate {
        self.start_coordinate
    }

    /// The largest distance recorded.
    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: GridCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    /// How many cells have a distance, including the start.
    pub fn reached_count(&self) -> usize {
        self.distances.len()
    }

    /// Walk the back pointers from `end` to the start.
    /// The path runs start to end inclusive, None if `end` was not reached.
    pub fn path_to(&self, end: GridCoordinate) -> Option<Vec<GridCoordinate>> {

        let steps = self.distance_from_start_to(end)?;
        let mut path = Vec::with_capacity(steps as usize + 1);
        path.push(end);

        let mut current_coord = end;
        while current_coord != self.start_coordinate {
            current_coord = *self.parents.get(&current_coord)?;
            path.push(current_coord);
        }

        path.reverse();
        Some(path)
    }
}

/// A shortest path through open cells between two points, None if there is no such path.
pub fn shortest_path(grid: &MazeGrid,
                     start: GridCoordinate,
                     end: GridCoordinate)
                     -> Option<Vec<GridCoordinate>> {
    Distances::for_grid_until(grid, start, end).and_then(|distances| distances.path_to(end))
}

/// Shortest path from the grid's entrance to its exit.
///
/// A carved odd sided maze always has one, so failing here means the grid is broken and is
/// reported as `MazeError::Unreachable` rather than an empty path.
pub fn solve(grid: &MazeGrid) -> Result<Vec<GridCoordinate>, MazeError> {
    let (start, end) = (grid.entrance(), grid.exit());

    match shortest_path(grid, start, end) {
        Some(path) => {
            debug!(steps = path.len() - 1, "solved maze");
            Ok(path)
        }
        None => {
            error!(width = grid.width(),
                   height = grid.height(),
                   "no path from entrance {} to exit {}",
                   start,
                   end);
            Err(MazeError::Unreachable { start, end })
        }
    }
}

#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, TestResult};
    use std::collections::VecDeque;

    use super::*;
    use crate::generators::{recursive_backtracker, seeded_rng};
    use crate::units::{Height, Width};

    fn gc(x: usize, y: usize) -> GridCoordinate {
        GridCoordinate::new(x, y)
    }

    fn grid(w: usize, h: usize) -> MazeGrid {
        MazeGrid::new(Width(w), Height(h)).expect("valid grid dimensions")
    }

    fn grid_with_open(w: usize, h: usize, open: &[GridCoordinate]) -> MazeGrid {
        let mut g = grid(w, h);
        for coord in open {
            g.set_open(*coord);
        }
        g
    }

    fn carved(w: usize, h: usize, seed: u64) -> MazeGrid {
        let mut g = grid(w, h);
        recursive_backtracker(&mut g, &mut seeded_rng(Some(seed)));
        g
    }

    // Straight line cells from `a` to `b` inclusive, on one row or column.
    fn line(a: GridCoordinate, b: GridCoordinate) -> Vec<GridCoordinate> {
        if a.x == b.x {
            (a.y.min(b.y)..=a.y.max(b.y)).map(|y| gc(a.x, y)).collect()
        } else {
            (a.x.min(b.x)..=a.x.max(b.x)).map(|x| gc(x, a.y)).collect()
        }
    }

    // Independent plain BFS step count, no back pointers or hashing.
    fn reference_distance(g: &MazeGrid, start: GridCoordinate, end: GridCoordinate) -> Option<usize> {
        let w = g.width();
        let mut distance: Vec<Option<usize>> = vec![None; g.size()];
        let mut queue = VecDeque::new();
        distance[start.y * w + start.x] = Some(0);
        queue.push_back(start);
        while let Some(c) = queue.pop_front() {
            let d = distance[c.y * w + c.x].unwrap();
            let mut next = vec![gc(c.x + 1, c.y), gc(c.x, c.y + 1)];
            if c.x > 0 {
                next.push(gc(c.x - 1, c.y));
            }
            if c.y > 0 {
                next.push(gc(c.x, c.y - 1));
            }
            for n in next {
                if g.is_open(n) && distance[n.y * w + n.x].is_none() {
                    distance[n.y * w + n.x] = Some(d + 1);
                    queue.push_back(n);
                }
            }
        }
        distance[end.y * w + end.x]
    }

    fn is_contiguous(path: &[GridCoordinate]) -> bool {
        path.windows(2).all(|pair| pair[0].is_adjacent_to(pair[1]))
    }

    #[test]
    fn distances_construction_requires_open_start() {
        let g = grid(5, 5);
        assert!(Distances::for_grid(&g, gc(1, 1)).is_none());
        assert!(Distances::for_grid(&g, gc(50, 50)).is_none());
    }

    #[test]
    fn start() {
        let g = grid_with_open(5, 5, &[gc(1, 1)]);
        let distances = Distances::for_grid(&g, gc(1, 1)).unwrap();
        assert_eq!(distances.start(), gc(1, 1));
        assert_eq!(distances.distance_from_start_to(gc(1, 1)), Some(0));
        assert_eq!(distances.reached_count(), 1);
        assert_eq!(distances.max(), 0);
    }

    #[test]
    fn distances_to_unreachable_cells_is_none() {
        let g = grid_with_open(5, 5, &[gc(1, 1), gc(3, 3)]);
        let distances = Distances::for_grid(&g, gc(1, 1)).unwrap();
        for coord in g.iter() {
            if coord != gc(1, 1) {
                assert_eq!(distances.distance_from_start_to(coord), None);
            }
        }
        assert!(distances.path_to(gc(3, 3)).is_none());
    }

    #[test]
    fn distances_on_open_block() {
        let g = grid_with_open(4, 4, &[gc(1, 1), gc(2, 1), gc(1, 2), gc(2, 2)]);
        let distances = Distances::for_grid(&g, gc(1, 1)).unwrap();
        assert_eq!(distances.distance_from_start_to(gc(1, 1)), Some(0));
        assert_eq!(distances.distance_from_start_to(gc(2, 1)), Some(1));
        assert_eq!(distances.distance_from_start_to(gc(1, 2)), Some(1));
        assert_eq!(distances.distance_from_start_to(gc(2, 2)), Some(2));
        assert_eq!(distances.max(), 2);
        assert_eq!(distances.reached_count(), 4);
    }

    #[test]
    fn flood_until_goal_stops_early() {
        let corridor = line(gc(1, 1), gc(7, 1));
        let g = grid_with_open(9, 3, &corridor);

        let full = Distances::for_grid(&g, gc(1, 1)).unwrap();
        assert_eq!(full.reached_count(), 7);
        assert_eq!(full.max(), 6);

        let partial = Distances::for_grid_until(&g, gc(1, 1), gc(2, 1)).unwrap();
        assert_eq!(partial.reached_count(), 2);
        assert_eq!(partial.path_to(gc(2, 1)), Some(vec![gc(1, 1), gc(2, 1)]));
        assert_eq!(partial.path_to(gc(7, 1)), None);
    }

    #[test]
    fn shortest_path_avoids_the_long_way_round() {
        // An L shaped route of 8 steps and a winding loop of 12 steps both join (1,1) to (5,5)
        let mut open = Vec::new();
        open.extend(line(gc(1, 1), gc(1, 5)));
        open.extend(line(gc(1, 5), gc(5, 5)));
        open.extend(line(gc(1, 1), gc(5, 1)));
        open.extend(line(gc(5, 1), gc(5, 3)));
        open.extend(line(gc(5, 3), gc(3, 3)));
        open.extend(line(gc(3, 3), gc(3, 5)));
        let g = grid_with_open(7, 7, &open);

        let path = shortest_path(&g, gc(1, 1), gc(5, 5)).unwrap();
        let mut expected = line(gc(1, 1), gc(1, 5));
        expected.extend(line(gc(2, 5), gc(5, 5)));
        assert_eq!(path, expected);
        assert_eq!(path.len() - 1, 8);
        assert_eq!(reference_distance(&g, gc(1, 1), gc(5, 5)), Some(8));

        // the same answer from solve, the exit of a 7x7 grid is (5,5)
        assert_eq!(solve(&g), Ok(expected));
    }

    #[test]
    fn path_to_start_is_single_cell() {
        let g = grid_with_open(3, 3, &[gc(1, 1)]);
        assert_eq!(shortest_path(&g, gc(1, 1), gc(1, 1)), Some(vec![gc(1, 1)]));
        assert_eq!(solve(&g), Ok(vec![gc(1, 1)]));
    }

    #[test]
    fn solve_fails_loudly_without_a_route() {
        let g = grid(5, 5);
        assert_eq!(solve(&g),
                   Err(MazeError::Unreachable { start: gc(1, 1), end: gc(3, 3) }));

        let cut_off = grid_with_open(5, 5, &[gc(1, 1), gc(2, 1), gc(3, 1), gc(3, 3)]);
        let err = solve(&cut_off).unwrap_err();
        assert!(err.is_consistency());
    }

    #[test]
    fn solved_mazes_match_reference_distance() {
        for seed in 0..20 {
            let g = carved(21, 15, seed);
            let path = solve(&g).unwrap();
            assert_eq!(path.first(), Some(&g.entrance()));
            assert_eq!(path.last(), Some(&g.exit()));
            assert!(is_contiguous(&path));
            assert!(path.iter().all(|coord| g.is_open(*coord)));
            assert_eq!(Some(path.len() - 1), reference_distance(&g, g.entrance(), g.exit()));
        }
    }

    #[test]
    fn quickcheck_solutions_are_shortest_and_contiguous() {
        fn p(w: u8, h: u8, seed: u64) -> TestResult {
            // odd sides between 3 and 41
            let width = 3 + 2 * (w as usize % 20);
            let height = 3 + 2 * (h as usize % 20);
            let g = carved(width, height, seed);
            let path = match solve(&g) {
                Ok(path) => path,
                Err(_) => return TestResult::failed(),
            };
            let expected_steps = reference_distance(&g, g.entrance(), g.exit());
            TestResult::from_bool(is_contiguous(&path) &&
                                  Some(path.len() - 1) == expected_steps)
        }
        quickcheck(p as fn(u8, u8, u64) -> TestResult);
    }
}
