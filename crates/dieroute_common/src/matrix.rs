//! Dense row-major square matrix.
//!
//! Both the capacity table and the usage ledger are N×N matrices indexed by
//! die. [`SquareMatrix`] stores them in a single contiguous buffer and only
//! accepts square input.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors produced when building a [`SquareMatrix`] from rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// A row has a different length than the number of rows.
    #[error("matrix row {row} has {found} columns, expected {expected}")]
    NotSquare {
        /// Zero-based index of the offending row.
        row: usize,
        /// Expected column count (the row count).
        expected: usize,
        /// Actual column count.
        found: usize,
    },
}

/// An N×N matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy> SquareMatrix<T> {
    /// Creates a `size`×`size` matrix with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Builds a matrix from rows, rejecting non-square input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self { size, cells })
    }

    /// Returns the value at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[self.offset(row, col)]
    }

    /// Returns a mutable reference to the value at (`row`, `col`).
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let offset = self.offset(row, col);
        &mut self.cells[offset]
    }

    /// Copies the matrix out as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T> SquareMatrix<T> {
    /// Returns N, the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` for the 0×0 matrix.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics; an empty matrix simply has no rows.
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    /// Returns row `row` as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "matrix index ({row}, {col}) out of range for size {}",
            self.size
        );
        row * self.size + col
    }
}

impl<T: Serialize> Serialize for SquareMatrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de, T: Deserialize<'de> + Copy> Deserialize<'de> for SquareMatrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        SquareMatrix::from_rows(rows).map_err(D::Error::custom)
    }
}
