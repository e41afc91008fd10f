use std::time::Instant;

use mazestep::{app::logging, generators::Generator, maze::Maze, solvers::Solver};

/// Side length of the profiled mazes.
const SIZE: u16 = 255;

fn main() -> std::io::Result<()> {
    logging::init_stdout_logging(false);

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1);

    for generator in Generator::ALL {
        let mut maze = Maze::new(Solver::Bfs, generator, SIZE, SIZE)?;
        for i in 0..num_iters {
            let started = Instant::now();
            maze.generate();
            let generated = started.elapsed();
            let steps = maze.run_to_end().len();
            tracing::info!(
                "{} iteration {}: generate {:?}, solve {:?} ({} steps, goal reached: {})",
                generator,
                i,
                generated,
                started.elapsed() - generated,
                steps,
                maze.goal_reached()
            );
        }
    }
    Ok(())
}
