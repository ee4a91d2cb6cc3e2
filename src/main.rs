use clap::Parser;
use log::{info, warn};

use maze_backtrack::random::{self, RandomSource};
use maze_backtrack::{Maze, MazeError, DEFAULT_DIMS};

/// Carve a perfect maze and print it, with its solution marked
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cell rows
    #[arg(long, default_value_t = DEFAULT_DIMS.0)]
    rows: usize,

    /// Number of cell columns
    #[arg(long, default_value_t = DEFAULT_DIMS.1)]
    cols: usize,

    /// Random seed, fresh entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Only carve, leave the maze unsolved
    #[arg(long)]
    no_solve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(random::seeded(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let mut maze = Maze::new(args.rows, args.cols)?;
    maze.generate(rng.as_mut())?;

    if !args.no_solve {
        match maze.solve(rng.as_mut()) {
            Ok(path) => info!("path length {}", path.len()),
            // only reachable for hand-built grids, a generated maze always connects
            Err(err @ MazeError::NoPathFound { .. }) => warn!("{}", err),
            Err(err) => return Err(err.into()),
        }
    }

    println!("{}", maze.grid());
    Ok(())
}
