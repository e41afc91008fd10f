pub mod cell;
pub mod grid;

use std::fmt;

use rand::rngs::StdRng;

pub use cell::CellState;
pub use grid::{Coord, Grid};

use crate::{
    error::MazeError,
    frontier::{Entry, Frontier},
    generators::{Generator, generate_maze, get_rng},
    solvers::Solver,
};

/// Where a [`Maze`] is in its generate-then-solve lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// `generate` has not been called yet.
    Uninitialized,
    /// Carved, no step taken yet.
    Generated,
    /// At least one step taken and the frontier is not empty.
    Stepping,
    /// The frontier is empty; `next_step` returns `None`.
    Exhausted,
}

/// Fields to replace when calling [`Maze::copy_with`]. `None` keeps the current value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MazeOverrides {
    pub solver: Option<Solver>,
    pub generator: Option<Generator>,
    pub width: Option<u16>,
    pub height: Option<u16>,
}

impl MazeOverrides {
    pub fn with_solver(mut self, solver: Solver) -> Self {
        self.solver = Some(solver);
        self
    }

    pub fn with_generator(mut self, generator: Generator) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }
}

/// What one solver step changed, enough for [`Maze::undo_step`] to revert it.
#[derive(Debug, Clone)]
pub struct StepDelta {
    processed: Coord,
    previous_state: CellState,
    /// Frontier entries taken out by the step, stale duplicates included.
    extracted: Vec<Entry<Coord>>,
    /// Neighbours whose cost was set, with their state and cost before the step.
    discovered: Vec<(Coord, CellState, u32)>,
    /// Random state before the step, only kept when priorities were drawn from it.
    rng: Option<StdRng>,
}

impl StepDelta {
    /// The cell the step processed.
    pub fn processed(&self) -> Coord {
        self.processed
    }
}

/// A maze together with the state of an incremental solver running on it.
///
/// Call [`Maze::generate`] once to carve, then [`Maze::next_step`] until it returns `None`.
/// The entrance is always at `(1, 0)` and the exit at `(width - 2, height - 1)` of the
/// carved grid.
#[derive(Debug, Clone)]
pub struct Maze {
    solver: Solver,
    generator: Generator,
    width: u16,
    height: u16,
    cells: Grid<CellState>,
    /// Manhattan distance to the goal, -1 on walls.
    distance: Grid<i32>,
    /// Cheapest path cost found from the start so far, 0 when undiscovered.
    cost: Grid<u32>,
    frontier: Frontier<Coord>,
    rng: StdRng,
    generated: bool,
    steps: usize,
}

impl Maze {
    /// Creates an all-wall maze. Width and height must be odd and at least 3.
    pub fn new(
        solver: Solver,
        generator: Generator,
        width: u16,
        height: u16,
    ) -> Result<Self, MazeError> {
        Self::build(solver, generator, width, height, get_rng(None))
    }

    /// Same as [`Maze::new`], with a seeded random source so that carving and
    /// solving are reproducible.
    pub fn with_seed(
        solver: Solver,
        generator: Generator,
        width: u16,
        height: u16,
        seed: u64,
    ) -> Result<Self, MazeError> {
        Self::build(solver, generator, width, height, get_rng(Some(seed)))
    }

    fn build(
        solver: Solver,
        generator: Generator,
        width: u16,
        height: u16,
        rng: StdRng,
    ) -> Result<Self, MazeError> {
        if width % 2 == 0 || height % 2 == 0 || width < 3 || height < 3 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Maze {
            solver,
            generator,
            width,
            height,
            cells: Grid::new(width, height, CellState::Wall),
            distance: Grid::new(width, height, -1),
            cost: Grid::new(width, height, 0),
            frontier: Frontier::new(),
            rng,
            generated: false,
            steps: 0,
        })
    }

    pub fn solver(&self) -> Solver {
        self.solver
    }

    /// Changes the ordering of cells discovered from now on.
    /// Entries already in the frontier keep their priority.
    pub fn set_solver(&mut self, solver: Solver) {
        self.solver = solver;
    }

    pub fn generator(&self) -> Generator {
        self.generator
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &Grid<CellState> {
        &self.cells
    }

    pub fn distance(&self) -> &Grid<i32> {
        &self.distance
    }

    pub fn cost(&self) -> &Grid<u32> {
        &self.cost
    }

    pub fn frontier(&self) -> &Frontier<Coord> {
        &self.frontier
    }

    pub fn start(&self) -> Coord {
        (1, 0)
    }

    /// Exit cell of the carved grid. After a resizing `copy_with` this stays on the
    /// old grid until the next `generate`.
    pub fn goal(&self) -> Coord {
        (self.cells.width() - 2, self.cells.height() - 1)
    }

    /// Number of cells processed since the last `generate`.
    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    pub fn phase(&self) -> Phase {
        if !self.generated {
            Phase::Uninitialized
        } else if self.frontier.is_empty() {
            Phase::Exhausted
        } else if self.steps == 0 {
            Phase::Generated
        } else {
            Phase::Stepping
        }
    }

    /// Whether the solver has processed the goal cell.
    pub fn goal_reached(&self) -> bool {
        self.cells[self.goal()] == CellState::Visited
    }

    /// Carves a fresh maze with the current generator and resets the solver to the start cell.
    pub fn generate(&mut self) {
        self.cells = generate_maze(self.generator, self.width, self.height, &mut self.rng);
        self.reset_search();

        tracing::debug!(
            "[maze] Generated {}x{} maze with {}, {} open cells",
            self.width,
            self.height,
            self.generator,
            self.cells.iter().filter(|(_, c)| !c.is_wall()).count()
        );
    }

    /// Marks the entrance and exit on the carved grid, recomputes the distances
    /// and reseeds the frontier at the entrance.
    fn reset_search(&mut self) {
        let (width, height) = (self.cells.width(), self.cells.height());
        let start = self.start();
        let goal = self.goal();
        self.cells[start] = CellState::Start;
        self.cells[goal] = CellState::Goal;

        self.distance = Grid::new(width, height, -1);
        for y in 0..height {
            for x in 0..width {
                if !self.cells[(x, y)].is_wall() {
                    self.distance[(x, y)] = manhattan_distance((x, y), goal);
                }
            }
        }

        self.cost = Grid::new(width, height, 0);
        self.frontier = Frontier::seeded(start, 0);
        self.generated = true;
        self.steps = 0;
    }

    /// Processes the frontier cell with the lowest priority and returns it,
    /// or `None` once the frontier is exhausted.
    pub fn next_step(&mut self) -> Option<Coord> {
        self.record_step().map(|delta| delta.processed)
    }

    /// Same as [`Maze::next_step`], returning what the step changed.
    pub fn record_step(&mut self) -> Option<StepDelta> {
        let mut extracted = Vec::new();
        self.drop_stale_entries(&mut extracted);
        let entry = self.frontier.pop_entry()?;
        let current = *entry.value();
        extracted.push(entry);

        let rng = (self.solver == Solver::Random).then(|| self.rng.clone());
        let previous_state = self.cells[current];
        self.cells[current] = CellState::Visited;
        self.steps += 1;

        let new_cost = self.cost[current] + 1;
        let mut discovered = Vec::with_capacity(4);
        let neighbors = self.cells.neighbors(current).collect::<Vec<_>>();
        for neighbor in neighbors {
            let state = self.cells[neighbor];
            if state == CellState::Wall || state == CellState::Visited {
                continue;
            }
            // Equal cost keeps the existing entry and priority
            let known_cost = self.cost[neighbor];
            if known_cost != 0 && new_cost >= known_cost {
                continue;
            }
            discovered.push((neighbor, state, known_cost));
            self.cost[neighbor] = new_cost;
            let priority = self
                .solver
                .priority(new_cost, self.distance[neighbor], &mut self.rng);
            self.frontier.insert(neighbor, priority);
            // Start and goal keep their state so the goal stays visible
            if state == CellState::Passage {
                self.cells[neighbor] = CellState::InQueue;
            }
        }
        // A cell requeued through a cheaper path leaves its older entry behind
        self.drop_stale_entries(&mut extracted);

        if self.frontier.is_empty() {
            tracing::debug!(
                "[maze] Frontier exhausted after {} steps, goal reached: {}",
                self.steps,
                self.goal_reached()
            );
        }
        Some(StepDelta {
            processed: current,
            previous_state,
            extracted,
            discovered,
            rng,
        })
    }

    /// Pops entries of already visited cells off the top of the frontier.
    fn drop_stale_entries(&mut self, extracted: &mut Vec<Entry<Coord>>) {
        while let Some((&coord, _)) = self.frontier.peek_min() {
            if self.cells[coord] != CellState::Visited {
                break;
            }
            if let Some(entry) = self.frontier.pop_entry() {
                extracted.push(entry);
            }
        }
    }

    /// Reverts a step returned by [`Maze::record_step`]. Steps must be undone newest first.
    pub fn undo_step(&mut self, delta: StepDelta) {
        self.frontier.retract(delta.discovered.len());
        for entry in delta.extracted {
            self.frontier.restore(entry);
        }
        for (coord, state, cost) in delta.discovered {
            self.cells[coord] = state;
            self.cost[coord] = cost;
        }
        self.cells[delta.processed] = delta.previous_state;
        self.steps = self.steps.saturating_sub(1);
        if let Some(rng) = delta.rng {
            self.rng = rng;
        }
    }

    /// Steps until the frontier is exhausted and returns the processed cells in order.
    pub fn run_to_end(&mut self) -> Vec<Coord> {
        std::iter::from_fn(|| self.next_step()).collect()
    }

    /// Builds a new maze with some settings replaced, carrying over the current grids,
    /// frontier and random state. Nothing is re-carved, even when the size changes;
    /// call [`Maze::generate`] on the copy for that.
    pub fn copy_with(&self, overrides: MazeOverrides) -> Result<Maze, MazeError> {
        let mut maze = Maze::build(
            overrides.solver.unwrap_or(self.solver),
            overrides.generator.unwrap_or(self.generator),
            overrides.width.unwrap_or(self.width),
            overrides.height.unwrap_or(self.height),
            self.rng.clone(),
        )?;
        maze.cells = self.cells.clone();
        maze.distance = self.distance.clone();
        maze.cost = self.cost.clone();
        maze.frontier = self.frontier.clone();
        maze.generated = self.generated;
        maze.steps = self.steps;
        Ok(maze)
    }
}

fn manhattan_distance(a: Coord, b: Coord) -> i32 {
    (a.0 as i32 - b.0 as i32).abs() + (a.1 as i32 - b.1 as i32).abs()
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line = row.iter().map(|c| c.symbol()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
