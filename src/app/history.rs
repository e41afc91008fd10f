use crate::maze::StepDelta;
use std::collections::VecDeque;

/// Changes made by the most recent solver steps, so that stepping backward
/// while paused restores the exact solver state.
pub struct StepHistory {
    /// History of step deltas, with the most recent one at the front.
    deltas: VecDeque<StepDelta>,
    /// Maximum number of steps to keep. If 0, no history is kept.
    max_num_steps: usize,
}

impl StepHistory {
    pub fn new(max_num_steps: usize) -> Self {
        StepHistory {
            deltas: VecDeque::with_capacity(max_num_steps),
            max_num_steps,
        }
    }

    pub fn push(&mut self, delta: StepDelta) {
        match self.max_num_steps {
            0 => {} // No history to maintain
            _ => {
                // Remove oldest steps if we exceed max history size
                self.deltas.truncate(self.max_num_steps - 1);
                self.deltas.push_front(delta);
            }
        }
    }

    /// Take the most recent step out of the history, ready for `Maze::undo_step`.
    pub fn step_back(&mut self) -> Option<StepDelta> {
        self.deltas.pop_front()
    }

    pub fn clear(&mut self) {
        self.deltas.clear();
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generators::Generator, maze::Maze, solvers::Solver};

    fn maze() -> Maze {
        let mut maze = Maze::with_seed(Solver::Bfs, Generator::Dfs, 9, 9, 1).unwrap();
        maze.generate();
        maze
    }

    #[test]
    fn test_step_back_restores_state() {
        let mut history = StepHistory::new(10);
        let mut maze = maze();
        let initial = maze.cells().clone();
        for _ in 0..3 {
            history.push(maze.record_step().unwrap());
        }
        assert_eq!(history.len(), 3);

        let latest = history.step_back().unwrap();
        maze.undo_step(latest);
        assert_eq!(maze.steps_taken(), 2);
        while let Some(delta) = history.step_back() {
            maze.undo_step(delta);
        }
        assert_eq!(maze.steps_taken(), 0);
        assert_eq!(maze.cells(), &initial);
        assert!(history.is_empty());
    }

    #[test]
    fn test_bounded() {
        let mut history = StepHistory::new(2);
        let mut maze = maze();
        let mut order = Vec::new();
        for _ in 0..5 {
            let delta = maze.record_step().unwrap();
            order.push(delta.processed());
            history.push(delta);
        }
        assert_eq!(history.len(), 2);
        assert_eq!(history.step_back().map(|d| d.processed()), Some(order[4]));
        assert_eq!(history.step_back().map(|d| d.processed()), Some(order[3]));
        assert!(history.step_back().is_none());

        let mut disabled = StepHistory::new(0);
        disabled.push(maze.record_step().unwrap());
        assert!(disabled.is_empty());
        disabled.clear();
    }
}
