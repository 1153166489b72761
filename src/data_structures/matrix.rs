use rayon::prelude::*;

/// Dense square matrix stored in one flat row-major buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Creates a `size` x `size` matrix with every cell set to `fill`
    pub fn new(size: usize, fill: T) -> Self {
        Matrix {
            size,
            cells: vec![fill; size * size],
        }
    }
}

impl<T> Matrix<T> {
    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.size + col] = value;
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Mutable rows in order, one slice per row
    pub fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, T> {
        // chunks_mut panics on a zero chunk size
        self.cells.chunks_mut(self.size.max(1))
    }

    /// Mutable rows as a rayon parallel iterator
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, T>
    where
        T: Send,
    {
        self.cells.par_chunks_mut(self.size.max(1))
    }
}
