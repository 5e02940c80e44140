use super::Cell;
use rayon::prelude::*;

/// Grid manages the 2D cellular automaton matrix on a toroidal topology.
/// Every coordinate is canonicalized modulo the grid dimensions, so the
/// grid has no edge and lookups never go out of bounds.
/// Generation stepping is a functional, whole-matrix update.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Reduce an arbitrary integer coordinate onto the torus
    const fn wrap(&self, row: i32, col: i32) -> (usize, usize) {
        let r = self.rows as i32;
        let c = self.cols as i32;
        (((row % r + r) % r) as usize, ((col % c + c) % c) as usize)
    }

    /// Get the cell at a position; any integer coordinate is valid
    pub fn get(&self, row: i32, col: i32) -> Cell {
        let (row, col) = self.wrap(row, col);
        self.cells[self.index(row, col)]
    }

    /// Set the cell at a (wrapped) position
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) {
        let (row, col) = self.wrap(row, col);
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Flip the cell at a (wrapped) position
    pub fn toggle(&mut self, row: i32, col: i32) {
        let (row, col) = self.wrap(row, col);
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].toggled();
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Count live cells in the Moore neighborhood, each coordinate
    /// independently wrapped (the top row is adjacent to the bottom row,
    /// and likewise for the left/right columns). Pure read.
    pub fn live_neighbors(&self, row: i32, col: i32) -> u8 {
        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter(|&(dr, dc)| self.get(row + dr, col + dc).is_alive())
            .count() as u8
    }

    /// Next state for one cell, read entirely from this grid's snapshot
    fn next_cell(&self, row: usize, col: usize) -> Cell {
        let current = self.cells[self.index(row, col)];
        current.next_state(self.live_neighbors(row as i32, col as i32))
    }

    /// Compute the next generation into a fresh matrix (serial).
    /// Every cell is evaluated against this grid's unmodified snapshot;
    /// no partially-updated state is ever observed.
    pub fn step(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Parallel next generation using rayon, rows partitioned across
    /// workers. Each worker reads only the prior snapshot and writes a
    /// disjoint region of the new matrix, so the result is identical to
    /// `step`. Worth it for grids beyond roughly 100x100.
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.rows)
            .into_par_iter()
            .flat_map_iter(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.cells[self.index(row, col)]))
    }
}
