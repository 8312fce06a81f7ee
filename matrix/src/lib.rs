/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

#![deny(missing_docs)]

//! A dense, fixed-size matrix of real numbers.
//!
//! Elements live in a single row-major buffer (i.e., element `(row, col)` is
//! stored at `row * ncols + col`) and every public accessor checks its
//! indices, returning [`MatrixError::IndexOutOfRange`] instead of clamping.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use serde::{Deserialize, Serialize};

mod error;
pub use error::MatrixError;

/// The kind of floating point number used in the library.
pub type Float = f64;

/// A `nrows` by `ncols` matrix of [`Float`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixData")]
pub struct Matrix {
    nrows: usize,
    ncols: usize,

    // Contains the data ordered by row,
    // Going left to right, and up and down.
    data: Vec<Float>,
}

/// Unchecked shape of a serialized [`Matrix`]
#[derive(Deserialize)]
struct MatrixData {
    nrows: usize,
    ncols: usize,
    data: Vec<Float>,
}

impl TryFrom<MatrixData> for Matrix {
    type Error = MatrixError;

    fn try_from(raw: MatrixData) -> Result<Self, Self::Error> {
        Matrix::from_data(raw.nrows, raw.ncols, raw.data)
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.data.chunks_exact(self.ncols) {
            write!(f, "\n\t")?;
            for v in row {
                write!(f, "{}, ", v)?;
            }
        }
        Ok(())
    }
}

impl Matrix {
    /// Creates a `Matrix` of `nrows` and `ncols` full of values `v`
    ///
    /// # Panics
    /// Panics if either `nrows` or `ncols` is zero.
    #[must_use]
    pub fn new(v: Float, nrows: usize, ncols: usize) -> Self {
        assert!(
            nrows > 0 && ncols > 0,
            "When creating Matrix: found {} rows and {} columns, but both must be larger than zero",
            nrows,
            ncols
        );
        Self {
            nrows,
            ncols,
            data: vec![v; nrows * ncols],
        }
    }

    /// Creates a `Matrix` of `nrows` and `ncols` full of zeroes
    ///
    /// # Panics
    /// Panics if either `nrows` or `ncols` is zero.
    #[must_use]
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::new(0.0, nrows, ncols)
    }

    /// Creates a `Matrix` from a vector containing its elements, ordered by row.
    pub fn from_data(nrows: usize, ncols: usize, data: Vec<Float>) -> Result<Self, MatrixError> {
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::EmptyDimension { nrows, ncols });
        }
        if nrows.checked_mul(ncols) != Some(data.len()) {
            return Err(MatrixError::DataLength {
                nrows,
                ncols,
                len: data.len(),
            });
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Creates a `Matrix` from its rows. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<Float>]) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        if let Some(bad) = rows.iter().find(|r| r.len() != ncols) {
            return Err(MatrixError::DataLength {
                nrows,
                ncols,
                len: nrows.saturating_sub(1) * ncols + bad.len(),
            });
        }
        Self::from_data(nrows, ncols, rows.concat())
    }

    /// Creates a column vector (i.e., `data.len()` rows by 1 column)
    pub fn column(data: Vec<Float>) -> Result<Self, MatrixError> {
        Self::from_data(data.len(), 1, data)
    }

    /// Creates an Identity matrix of size NxN
    ///
    /// # Panics
    /// Panics if `n` is zero.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut ret = Self::zeros(n, n);
        for i in 0..n {
            ret.data[i * (n + 1)] = 1.0;
        }
        ret
    }

    /// Returns a tuple with number of rows and columns
    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Borrows the row-major data
    pub fn as_slice(&self) -> &[Float] {
        &self.data
    }

    /// Consumes the matrix, returning its row-major data
    pub fn into_data(self) -> Vec<Float> {
        self.data
    }

    /// Gets the index of an element within the `data` array of the Matrix,
    /// checking the bounds first.
    fn index(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row < self.nrows && col < self.ncols {
            Ok(self.ncols * row + col)
        } else {
            Err(MatrixError::IndexOutOfRange {
                row,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            })
        }
    }

    /// Gets an element from the matrix
    pub fn get(&self, row: usize, col: usize) -> Result<Float, MatrixError> {
        let i = self.index(row, col)?;
        Ok(self.data[i])
    }

    /// Sets an element into the matrix, returning the value that was set
    pub fn set(&mut self, row: usize, col: usize, v: Float) -> Result<Float, MatrixError> {
        let i = self.index(row, col)?;
        self.data[i] = v;
        Ok(v)
    }

    /// Borrows an element mutably, so it can be both read and written
    /// in place (e.g., `*a.at_mut(0, 1)? -= 2.0`).
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut Float, MatrixError> {
        let i = self.index(row, col)?;
        Ok(&mut self.data[i])
    }

    /// Borrows a whole row
    pub fn row(&self, row: usize) -> Result<&[Float], MatrixError> {
        let start = self.index(row, 0)?;
        Ok(&self.data[start..start + self.ncols])
    }

    /// Swaps two complete rows
    pub fn swap_rows(&mut self, row_a: usize, row_b: usize) -> Result<(), MatrixError> {
        let a = self.index(row_a, 0)?;
        let b = self.index(row_b, 0)?;
        if a != b {
            for col in 0..self.ncols {
                self.data.swap(a + col, b + col);
            }
        }
        Ok(())
    }

    /// Multiplies a matrix by `other`, putting the result into `into`
    pub fn prod_into(&self, other: &Matrix, into: &mut Matrix) -> Result<(), MatrixError> {
        if self.ncols != other.nrows || into.nrows != self.nrows || into.ncols != other.ncols {
            return Err(MatrixError::ProductMismatch {
                left: self.size(),
                right: other.size(),
                into: into.size(),
            });
        }

        let rows = self.data.chunks_exact(self.ncols);
        #[cfg(not(feature = "parallel"))]
        let i = rows.zip(into.data.chunks_exact_mut(other.ncols));

        #[cfg(feature = "parallel")]
        let i = rows
            .collect::<Vec<&[Float]>>()
            .into_par_iter()
            .zip(into.data.par_chunks_exact_mut(other.ncols));

        i.for_each(|(row_data, into_data)| {
            for (c, item) in into_data.iter_mut().enumerate() {
                *item = row_data
                    .iter()
                    .enumerate()
                    .map(|(k, a)| *a * other.data[k * other.ncols + c])
                    .sum();
            }
        });

        Ok(())
    }

    /// Returns the largest absolute value in the matrix
    pub fn max_abs(&self) -> Float {
        self.data.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }
}

impl std::ops::Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    /// # Panics
    /// Panics if the sizes do not match. Use `prod_into` for a fallible version
    fn mul(self, other: &Matrix) -> Self::Output {
        let mut ret = Matrix::zeros(self.nrows, other.ncols);
        if let Err(e) = self.prod_into(other, &mut ret) {
            panic!("{}", e)
        }
        ret
    }
}

impl std::ops::Sub<&Matrix> for &Matrix {
    type Output = Matrix;

    /// # Panics
    /// Panics if the matrices are of different sizes
    fn sub(self, other: &Matrix) -> Self::Output {
        if self.size() != other.size() {
            panic!("Matrices being substracted are of different sizes");
        }
        Matrix {
            nrows: self.nrows,
            ncols: self.ncols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(x, y)| *x - *y)
                .collect(),
        }
    }
}
