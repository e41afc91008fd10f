use rand::{Rng, seq::SliceRandom};

use crate::generators::midpoint;
use crate::maze::{CellState, Coord, Grid};

/// Weight of every edge between two adjacent vertices.
const EDGE_WEIGHT: u32 = 1;
/// Tentative cost of a vertex no processed vertex has reached yet.
const UNREACHED: u32 = u32::MAX;

/// The vertex graph over the carveable (odd, odd) cells of the maze.
/// Vertex `v` sits at column `v % cols`, row `v / cols`.
struct VertexGraph {
    cols: usize,
    rows: usize,
}

impl VertexGraph {
    fn new(width: u16, height: u16) -> Self {
        VertexGraph {
            cols: (width as usize - 1) / 2,
            rows: (height as usize - 1) / 2,
        }
    }

    fn len(&self) -> usize {
        self.cols * self.rows
    }

    /// Adjacent vertices with the weight of the edge to each.
    fn edges(&self, v: usize) -> impl Iterator<Item = (usize, u32)> {
        let (col, row) = (v % self.cols, v / self.cols);
        [
            (row > 0).then(|| v - self.cols),
            (col > 0).then(|| v - 1),
            (col + 1 < self.cols).then(|| v + 1),
            (row + 1 < self.rows).then(|| v + self.cols),
        ]
        .into_iter()
        .flatten()
        .map(|w| (w, EDGE_WEIGHT))
    }

    /// Maze coordinate of a vertex.
    fn coord(&self, v: usize) -> Coord {
        (
            (1 + 2 * (v % self.cols)) as u16,
            (1 + 2 * (v / self.cols)) as u16,
        )
    }
}

/// Randomized Prim's minimum spanning tree over the carveable cells.
///
/// All edges weigh the same, so the shape of the tree comes from the shuffled order
/// in which vertices are considered for extraction.
pub fn randomized_prim<R: Rng + ?Sized>(width: u16, height: u16, rng: &mut R) -> Grid<CellState> {
    let graph = VertexGraph::new(width, height);
    let n = graph.len();

    let mut queue = (0..n).collect::<Vec<_>>();
    queue.shuffle(rng);
    let mut in_queue = vec![true; n];
    let mut costs = vec![UNREACHED; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];

    while !queue.is_empty() {
        // First vertex in queue order with the lowest tentative cost
        let pos = queue
            .iter()
            .enumerate()
            .min_by_key(|&(i, &v)| (costs[v], i))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let v = queue.remove(pos);
        in_queue[v] = false;

        for (w, weight) in graph.edges(v) {
            if in_queue[w] && weight < costs[w] {
                costs[w] = weight;
                predecessors[w] = Some(v);
            }
        }
    }

    let mut maze = Grid::new(width, height, CellState::Wall);
    for (v, predecessor) in predecessors.iter().enumerate() {
        let coord = graph.coord(v);
        maze[coord] = CellState::Passage;
        if let Some(&p) = predecessor.as_ref() {
            maze[midpoint(coord, graph.coord(p))] = CellState::Passage;
        }
    }

    maze
}
