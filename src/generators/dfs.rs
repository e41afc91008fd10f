use rand::Rng;

use crate::generators::{get_shuffled_neighbors, midpoint};
use crate::maze::{CellState, Grid};

/// Randomized depth-first carving (recursive backtracker) starting from `(1, 1)`.
pub fn randomized_dfs<R: Rng + ?Sized>(width: u16, height: u16, rng: &mut R) -> Grid<CellState> {
    // Initialize the maze with walls
    let mut maze = Grid::new(width, height, CellState::Wall);

    let start = (1, 1);
    maze[start] = CellState::Passage;

    // The stack keeps only passage cells
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let unvisited = get_shuffled_neighbors(cell, width, height, rng)
            .into_iter()
            .filter(|&c| maze[c] == CellState::Wall)
            .collect::<Vec<_>>();

        if unvisited.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let next = unvisited[rng.random_range(0..unvisited.len())];
        maze[next] = CellState::Passage;
        maze[midpoint(cell, next)] = CellState::Passage;
        // Keep carving in that neighbor's direction
        stack.push(next);
    }

    maze
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_randomized_dfs() {
        let maze = randomized_dfs(7, 7, &mut get_rng(Some(0)));
        // Check that the start cell is carved
        assert_eq!(maze[(1, 1)], CellState::Passage);
        // Check that there are some walls left inside the border
        assert!(
            maze.iter()
                .any(|((x, y), cell)| !maze.is_boundary(x, y) && *cell == CellState::Wall)
        );
    }

    #[test]
    fn test_single_room() {
        let maze = randomized_dfs(3, 3, &mut get_rng(Some(0)));
        let open = maze.iter().filter(|(_, c)| **c == CellState::Passage).count();
        assert_eq!(open, 1);
    }
}
