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

use thiserror::Error;

/// Errors produced when building or accessing a [`Matrix`](crate::Matrix)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// An element outside of the matrix was requested
    #[error("index ({row}, {col}) out of range for a {nrows}x{ncols} matrix")]
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Rows in the matrix
        nrows: usize,
        /// Columns in the matrix
        ncols: usize,
    },

    /// One of the dimensions is zero
    #[error("a matrix needs at least one row and one column, found {nrows}x{ncols}")]
    EmptyDimension {
        /// Requested rows
        nrows: usize,
        /// Requested columns
        ncols: usize,
    },

    /// The data does not fill the requested dimensions
    #[error("{len} elements cannot fill a {nrows}x{ncols} matrix")]
    DataLength {
        /// Requested rows
        nrows: usize,
        /// Requested columns
        ncols: usize,
        /// Number of elements given
        len: usize,
    },

    /// The matrices of a product have incompatible sizes
    #[error("cannot multiply a {left:?} matrix by a {right:?} matrix into a {into:?} one")]
    ProductMismatch {
        /// Size of the left-hand side
        left: (usize, usize),
        /// Size of the right-hand side
        right: (usize, usize),
        /// Size of the destination
        into: (usize, usize),
    },
}
