use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

mod dfs;
mod prim;
mod recur_div;

use dfs::randomized_dfs;
use prim::randomized_prim;
use recur_div::recursive_division;

use crate::maze::{CellState, Coord, Grid};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Generator {
    #[default]
    Dfs,
    Prim,
    RecursiveDivision,
}

impl Generator {
    pub const ALL: [Generator; 3] = [
        Generator::Dfs,
        Generator::Prim,
        Generator::RecursiveDivision,
    ];

    /// The generator after this one in [`Generator::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&g| g == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Dfs => write!(f, "Randomized Depth-First Search (DFS)"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::RecursiveDivision => write!(f, "Recursive Division"),
        }
    }
}

/// Carve a `width` x `height` maze of [`CellState::Wall`] and [`CellState::Passage`] cells.
///
/// Passages run through cells at odd `(x, y)`; cells at even `x` and even `y` stay walls.
/// Requires both dimensions to be odd and at least 3.
pub fn generate_maze<R: Rng + ?Sized>(
    generator: Generator,
    width: u16,
    height: u16,
    rng: &mut R,
) -> Grid<CellState> {
    match generator {
        Generator::Dfs => randomized_dfs(width, height, rng),
        Generator::Prim => randomized_prim(width, height, rng),
        Generator::RecursiveDivision => recursive_division(width, height, rng),
    }
}

/// Get the cells two steps away in the cardinal directions that lie strictly inside the border.
/// The order is left, right, up, down.
fn get_carveable_neighbors(coord: Coord, width: u16, height: u16) -> Vec<Coord> {
    let (x, y) = coord;
    [
        // NOTE: When x < 2 or y < 2, checked_sub falls back to u16::MAX, which is filtered out
        // by the bounds comparison. saturating_add caps at u16::MAX for the same reason.
        (x.checked_sub(2).unwrap_or(u16::MAX), y),
        (x.saturating_add(2), y),
        (x, y.checked_sub(2).unwrap_or(u16::MAX)),
        (x, y.saturating_add(2)),
    ]
    .into_iter()
    .filter(|&(nx, ny)| nx > 0 && ny > 0 && nx < width - 1 && ny < height - 1)
    .collect()
}

/// Same as [`get_carveable_neighbors`], but in a random order.
fn get_shuffled_neighbors<R: Rng + ?Sized>(
    coord: Coord,
    width: u16,
    height: u16,
    rng: &mut R,
) -> Vec<Coord> {
    let mut neighbors = get_carveable_neighbors(coord, width, height);
    neighbors.shuffle(rng);
    neighbors
}

/// The cell halfway between two carveable cells two steps apart.
fn midpoint(a: Coord, b: Coord) -> Coord {
    ((a.0 + b.0) / 2, (a.1 + b.1) / 2)
}

/// All carveable (odd, odd) cells of a `width` x `height` grid, row by row.
fn carveable_cells(width: u16, height: u16) -> impl Iterator<Item = Coord> {
    (1..height.saturating_sub(1))
        .step_by(2)
        .flat_map(move |y| (1..width.saturating_sub(1)).step_by(2).map(move |x| (x, y)))
}
