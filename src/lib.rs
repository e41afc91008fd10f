//! Rectangular grid mazes carved by several generators and solved one cell at a time,
//! so that every step can be drawn.
//!
//! ```
//! use mazestep::{generators::Generator, maze::Maze, solvers::Solver};
//!
//! let mut maze = Maze::with_seed(Solver::AStar, Generator::Prim, 21, 11, 7).unwrap();
//! maze.generate();
//! while let Some((x, y)) = maze.next_step() {
//!     assert!(!maze.cells()[(x, y)].is_wall());
//! }
//! assert!(maze.goal_reached());
//! ```

pub mod app;
pub mod error;
pub mod frontier;
pub mod generators;
pub mod maze;
pub mod solvers;
