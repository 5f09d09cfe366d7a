use super::{BoardError, Cell, neighbors::{Topology, neighbors_of}};

/// Fixed-size row-major cell matrix.
/// Dimensions never change after construction; the only mutations are
/// single-cell writes and whole-board rewrites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Convert (row, col) to a linear index, `None` when off the board
    pub const fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Convert a linear index back to (row, col)
    pub const fn coords_of(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    fn check(&self, index: usize) -> Result<usize, BoardError> {
        if index < self.cells.len() {
            Ok(index)
        } else {
            Err(BoardError::IndexOutOfRange { index, size: self.cells.len() })
        }
    }

    pub fn get(&self, index: usize) -> Result<Cell, BoardError> {
        self.check(index).map(|i| self.cells[i])
    }

    pub fn is_live(&self, index: usize) -> Result<bool, BoardError> {
        self.get(index).map(Cell::is_alive)
    }

    pub fn set_live(&mut self, index: usize) -> Result<(), BoardError> {
        let i = self.check(index)?;
        self.cells[i] = Cell::Alive;
        Ok(())
    }

    pub fn set_dead(&mut self, index: usize) -> Result<(), BoardError> {
        let i = self.check(index)?;
        self.cells[i] = Cell::Dead;
        Ok(())
    }

    /// Flip a cell and return its new state
    pub fn toggle(&mut self, index: usize) -> Result<Cell, BoardError> {
        let i = self.check(index)?;
        self.cells[i] = self.cells[i].toggle();
        Ok(self.cells[i])
    }

    /// Set every cell dead
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Set every cell from a predicate over its index
    pub fn fill_with(&mut self, mut alive: impl FnMut(usize) -> bool) {
        self.cells
            .iter_mut()
            .enumerate()
            .for_each(|(i, cell)| *cell = Cell::from(alive(i)));
    }

    /// Neighbour indices of `index` under `topology`, sorted and de-duplicated
    pub fn neighbors(&self, index: usize, topology: Topology) -> Result<Vec<usize>, BoardError> {
        let i = self.check(index)?;
        Ok(neighbors_of(i, self.rows, self.cols, topology))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Indices of live cells in ascending order
    pub fn live_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(i, _)| i)
    }

    /// Iterate over all cells with their linear index
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, Cell)> + '_ {
        self.cells.iter().copied().enumerate()
    }

    fn count_live_neighbors(&self, index: usize, topology: Topology) -> u8 {
        neighbors_of(index, self.rows, self.cols, topology)
            .into_iter()
            .filter(|&n| self.cells[n].is_alive())
            .count() as u8
    }

    /// Pure evolution: the next generation as a new grid, `self` untouched.
    pub fn next_generation(&self, topology: Topology) -> Self {
        let cells = self
            .iter_cells()
            .map(|(i, cell)| cell.evolve(self.count_live_neighbors(i, topology)))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, live: &[usize]) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for &i in live {
            grid.set_live(i).unwrap();
        }
        grid
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.size(), 12);
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(BoardError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_index_round_trip() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.index_of(2, 1), Some(9));
        assert_eq!(grid.coords_of(9), (2, 1));
        assert_eq!(grid.index_of(3, 0), None);
        assert_eq!(grid.index_of(0, 4), None);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = Grid::new(2, 2).unwrap();
        let err = BoardError::IndexOutOfRange { index: 4, size: 4 };
        assert_eq!(grid.is_live(4), Err(err.clone()));
        assert_eq!(grid.set_live(4), Err(err.clone()));
        assert_eq!(grid.set_dead(4), Err(err.clone()));
        assert_eq!(grid.toggle(4), Err(err));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_set_and_clear() {
        let mut grid = grid_with(3, 3, &[0, 4, 8]);
        assert!(grid.is_live(4).unwrap());
        grid.set_dead(4).unwrap();
        assert!(!grid.is_live(4).unwrap());
        assert_eq!(grid.live_indices().collect::<Vec<_>>(), vec![0, 8]);
        grid.clear();
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_fill_with_predicate() {
        let mut grid = grid_with(2, 3, &[0]);
        grid.fill_with(|i| i % 2 == 1);
        assert_eq!(grid.live_indices().collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_neighbors_checks_index() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.neighbors(0, Topology::Bounded), Ok(vec![1, 3, 4]));
        assert_eq!(grid.neighbors(0, Topology::Toroidal).map(|n| n.len()), Ok(8));
        assert_eq!(
            grid.neighbors(9, Topology::Toroidal),
            Err(BoardError::IndexOutOfRange { index: 9, size: 9 })
        );
    }

    #[test]
    fn test_toggle_returns_new_state() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert_eq!(grid.toggle(3), Ok(Cell::Alive));
        assert_eq!(grid.toggle(3), Ok(Cell::Dead));
    }

    #[test]
    fn test_next_generation_leaves_source_untouched() {
        let grid = grid_with(5, 5, &[11, 12, 13]);
        let next = grid.next_generation(Topology::Bounded);
        assert_eq!(grid.live_indices().collect::<Vec<_>>(), vec![11, 12, 13]);
        assert_eq!(next.live_indices().collect::<Vec<_>>(), vec![7, 12, 17]);
    }

    #[test]
    fn test_edge_blinker_differs_by_topology() {
        // vertical line on the left edge of a 3x3 board
        let grid = grid_with(3, 3, &[0, 3, 6]);
        let bounded = grid.next_generation(Topology::Bounded);
        assert_eq!(bounded.live_indices().collect::<Vec<_>>(), vec![3, 4]);

        // on a 3x3 torus every cell neighbours every other: dead cells see
        // three and are born, live cells see two and survive
        let toroidal = grid.next_generation(Topology::Toroidal);
        assert_eq!(toroidal.live_count(), 9);
    }
}
