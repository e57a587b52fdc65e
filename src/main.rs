use docopt::Docopt;
use itertools::Itertools;
use serde_derive::Deserialize;
use smallvec::smallvec;
use std::{
    fs::File,
    io,
    io::prelude::*,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mazes::{
    generators,
    grid::MazeGrid,
    grid_displays::{self, GridDisplay, LayeredDisplay, PathDisplay, StartEndPointsDisplay},
    maze::Maze,
    pathing::Distances,
    units::{Height, Width},
};

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>] [--show-path|--show-distances] [--mark-start-end] [--text-out=<path>] [--save-edges=<path>]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n.
    --grid-width=<w>       The grid width in a w*h grid [default: 21].
    --grid-height=<h>      The grid height in a w*h grid [default: 21].
    --seed=<s>             Seed the maze generator so the same maze can be carved again.
    --show-path            Show the shortest path from the entrance to the exit.
    --show-distances       Show the distance from the entrance to every reachable cell, in hex.
    --mark-start-end       Draw an 'S' (entrance) and 'E' (exit).
    --text-out=<path>      Output file path for the text rendering instead of stdout.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#cells) m(#edges). Line 2+ edge between open cells. Uses 1-based row-major cell indices.

Odd sizes work best, on grids with an even side the exit cannot be reached.
Set RUST_LOG (e.g. RUST_LOG=mazes=debug) for diagnostics on stderr.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_show_path: bool,
    flag_show_distances: bool,
    flag_mark_start_end: bool,
    flag_text_out: String,
    flag_save_edges: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            Io(::std::io::Error);
            Maze(::mazes::errors::MazeError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    init_tracing();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());
    debug!(?args, "parsed arguments");

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };

    let mut rng = generators::seeded_rng(args.flag_seed);
    let mut maze = Maze::generate(Width(width), Height(height), &mut rng)?;
    info!(width, height, "generated maze");

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(maze.grid(), &args.flag_save_edges)?;
    }

    if args.flag_show_path {
        let steps = maze.solve()?.len() - 1;
        info!(steps, "solved maze");
    }

    let text = render_maze(&maze, &args);

    if args.flag_text_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Pick the cell overlays the arguments ask for and draw the maze as text.
/// A path is only shown once the maze has been solved.
fn render_maze(maze: &Maze, maze_args: &MazeArgs) -> String {

    let markers = StartEndPointsDisplay::new(smallvec![maze.entrance()], smallvec![maze.exit()]);
    let path_display = maze.solution().map(PathDisplay::new);
    let distances = if maze_args.flag_show_distances {
        Distances::for_grid(maze.grid(), maze.entrance())
    } else {
        None
    };

    let mut layers: Vec<&dyn GridDisplay> = Vec::new();
    if maze_args.flag_mark_start_end {
        layers.push(&markers);
    }
    if let Some(path) = path_display.as_ref() {
        layers.push(path);
    }
    if let Some(d) = distances.as_ref() {
        layers.push(d);
    }

    let layered = LayeredDisplay::new(layers);
    grid_displays::render_text(maze.grid(), Some(&layered))
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze_grid: &MazeGrid, file_path: &str) -> Result<()> {

    let mut graph_data = format!("{} {}\n", maze_grid.size(), maze_grid.open_links_count());

    for (src, dst) in maze_grid.iter_open_links() {
        let index_a = maze_grid.coordinate_to_index(src)
            .ok_or("Links iter gave an invalid coordinate")?;
        let index_b = maze_grid.coordinate_to_index(dst)
            .ok_or("Links iter gave an invalid coordinate")?;
        graph_data.push_str(&[index_a + 1, index_b + 1].iter().join(" "));
        graph_data.push('\n');
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    Ok(())
}
