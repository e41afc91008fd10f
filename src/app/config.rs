use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{
    error::MazeError,
    generators::Generator,
    maze::Maze,
    solvers::Solver,
};

/// Animate maze generation and solving in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(about, long_about = None, version)]
pub struct Config {
    /// Maze width in grid cells, odd and at least 3
    #[arg(short = 'W', long, default_value_t = 41)]
    pub width: u16,

    /// Maze height in grid cells, odd and at least 3
    #[arg(short = 'H', long, default_value_t = 21)]
    pub height: u16,

    /// Maze generation algorithm
    #[arg(value_enum, short, long, default_value_t = Generator::Dfs)]
    pub generator: Generator,

    /// Maze solving algorithm
    #[arg(value_enum, short, long, default_value_t = Solver::AStar)]
    pub solver: Solver,

    /// Seed for reproducible mazes and solver runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay between solver steps, in milliseconds
    #[arg(short, long, default_value_t = 20)]
    pub delay_ms: u64,

    /// Write logs to this file
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug messages
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 41,
            height: 21,
            generator: Generator::Dfs,
            solver: Solver::AStar,
            seed: None,
            delay_ms: 20,
            log_file: None,
            debug: false,
        }
    }
}

impl Config {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Build the (not yet generated) maze described by this configuration.
    pub fn build_maze(&self) -> Result<Maze, MazeError> {
        match self.seed {
            Some(seed) => Maze::with_seed(
                self.solver,
                self.generator,
                self.width,
                self.height,
                seed,
            ),
            None => Maze::new(self.solver, self.generator, self.width, self.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_parser() {
        let parsed = Config::try_parse_from(["mazestep"]).unwrap();
        let default = Config::default();
        assert_eq!(parsed.width, default.width);
        assert_eq!(parsed.height, default.height);
        assert_eq!(parsed.generator, default.generator);
        assert_eq!(parsed.solver, default.solver);
        assert_eq!(parsed.delay(), Duration::from_millis(20));
        assert!(parsed.build_maze().is_ok());
    }

    #[test]
    fn test_parse_algorithms() {
        let config = Config::try_parse_from([
            "mazestep",
            "--generator",
            "recursive-division",
            "--solver",
            "a-star",
            "-W",
            "15",
            "-H",
            "9",
            "--seed",
            "3",
        ])
        .unwrap();
        assert_eq!(config.generator, Generator::RecursiveDivision);
        assert_eq!(config.solver, Solver::AStar);
        assert_eq!(config.seed, Some(3));

        let maze = config.build_maze().unwrap();
        assert_eq!((maze.width(), maze.height()), (15, 9));
    }

    #[test]
    fn test_even_size_fails_to_build() {
        let config = Config::try_parse_from(["mazestep", "--width", "20"]).unwrap();
        assert_eq!(
            config.build_maze().unwrap_err(),
            MazeError::InvalidDimensions {
                width: 20,
                height: 21
            }
        );
    }
}
