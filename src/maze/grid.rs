/// An `(x, y)` position in a [`Grid`].
pub type Coord = (u16, u16);

/// A rectangular, row-major grid of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    data: Box<[T]>,
    width: u16,
    height: u16,
}

impl<T: Clone> Grid<T> {
    /// Creates a `width` x `height` grid with every cell set to `cell`.
    pub fn new(width: u16, height: u16, cell: T) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Copies the grid into one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl<T> Grid<T> {
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn is_boundary(&self, x: u16, y: u16) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.width.max(1) as usize)
    }

    /// Iterates over every cell together with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        let width = self.width as usize;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, cell)| (((i % width) as u16, (i / width) as u16), cell))
    }

    /// Get the in-bounds neighbors of a cell in the cardinal directions,
    /// in the order down, right, up, left.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let (x, y) = coord;
        // NOTE: When x or y is 0, wrapping_sub yields u16::MAX which the bounds check filters out.
        // saturating_add caps at u16::MAX, which is never a valid index either.
        [
            (x, y.saturating_add(1)),
            (x.saturating_add(1), y),
            (x, y.wrapping_sub(1)),
            (x.wrapping_sub(1), y),
        ]
        .into_iter()
        .filter(move |&c| self.is_in_bounds(coord) && self.is_in_bounds(c))
    }
}

impl<T> std::ops::Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl<T> std::ops::IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_uniformly() {
        let grid = Grid::new(7, 3, 9u8);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.to_rows(), vec![vec![9u8; 7]; 3]);
    }

    #[test]
    fn test_indexing_is_row_major() {
        let mut grid = Grid::new(4, 3, 0);
        grid[(3, 1)] = 5;
        assert_eq!(grid[(3, 1)], 5);
        assert_eq!(grid.rows().nth(1).map(|row| row[3]), Some(5));
        assert_eq!(grid.iter().find(|&(_, &v)| v == 5).map(|(c, _)| c), Some((3, 1)));
    }

    #[test]
    fn test_neighbors() {
        let grid = Grid::new(5, 5, ());
        let neighbors = grid.neighbors((2, 2)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(2, 3), (3, 2), (2, 1), (1, 2)]);

        let corner = grid.neighbors((0, 0)).collect::<Vec<_>>();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);

        let far_corner = grid.neighbors((4, 4)).collect::<Vec<_>>();
        assert_eq!(far_corner, vec![(4, 3), (3, 4)]);

        assert_eq!(grid.neighbors((5, 5)).count(), 0);
    }

    #[test]
    fn test_boundary() {
        let grid = Grid::new(5, 3, ());
        assert!(grid.is_boundary(0, 1));
        assert!(grid.is_boundary(4, 1));
        assert!(grid.is_boundary(2, 2));
        assert!(!grid.is_boundary(2, 1));
    }
}
