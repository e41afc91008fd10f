use rand::Rng;

/// Frontier ordering used by the stepping solver in [`Maze::next_step`](crate::maze::Maze::next_step).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Solver {
    /// Lowest path cost first.
    Bfs,
    /// Deepest path cost first.
    Dfs,
    /// Uniformly random order.
    Random,
    /// Path cost plus Manhattan distance to the goal.
    #[default]
    AStar,
}

impl Solver {
    pub const ALL: [Solver; 4] = [Solver::Bfs, Solver::Dfs, Solver::Random, Solver::AStar];

    /// Exclusive upper bound of the priorities drawn by [`Solver::Random`].
    pub const RANDOM_PRIORITY_RANGE: i64 = 100;

    /// The solver after this one in [`Solver::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Frontier priority of a cell reached with path cost `cost` at `distance` from the goal.
    /// Lower priorities are processed first.
    pub fn priority<R: Rng + ?Sized>(self, cost: u32, distance: i32, rng: &mut R) -> i64 {
        match self {
            Solver::Bfs => cost as i64,
            Solver::Dfs => -(cost as i64),
            Solver::Random => rng.random_range(0..Self::RANDOM_PRIORITY_RANGE),
            Solver::AStar => cost as i64 + distance as i64,
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Random => write!(f, "Random Search"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_priorities() {
        let mut rng = get_rng(Some(0));
        assert_eq!(Solver::Bfs.priority(4, 10, &mut rng), 4);
        assert_eq!(Solver::Dfs.priority(4, 10, &mut rng), -4);
        assert_eq!(Solver::AStar.priority(4, 10, &mut rng), 14);
        for _ in 0..1000 {
            let p = Solver::Random.priority(4, 10, &mut rng);
            assert!((0..Solver::RANDOM_PRIORITY_RANGE).contains(&p));
        }
    }

    #[test]
    fn test_solver_cycle() {
        assert_eq!(Solver::Bfs.next(), Solver::Dfs);
        assert_eq!(Solver::AStar.next(), Solver::Bfs);
    }
}
