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

use matrix::{Float, MatrixError};
use thiserror::Error;

/// The reasons why solving a linear system can fail.
///
/// All of them are fatal: the solve call returns immediately and whatever
/// was done to `A` and `b` up to that point stays there.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// A matrix was accessed out of its bounds (or could not be built)
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// The coefficient matrix is not square
    #[error("the coefficient matrix must be square, found {nrows}x{ncols}")]
    NotSquare {
        /// Rows in `A`
        nrows: usize,
        /// Columns in `A`
        ncols: usize,
    },

    /// The right-hand side does not match the coefficient matrix
    #[error("the right-hand side must be a {expected}x1 column, found {nrows}x{ncols}")]
    DimensionMismatch {
        /// Number of equations in `A`
        expected: usize,
        /// Rows in `b`
        nrows: usize,
        /// Columns in `b`
        ncols: usize,
    },

    /// No usable pivot was found while triangularizing, or while back-substituting
    #[error("numerically unstable system: the best pivot for column {column} is {pivot:e}; the system has no unique solution")]
    NumericallyUnstable {
        /// Column being eliminated (or unknown being solved)
        column: usize,
        /// The offending pivot
        pivot: Float,
    },

    /// A row reads `0 = rhs`, with `rhs` not zero
    #[error("inconsistent system: equation {row} reduces to 0 = {rhs}")]
    InconsistentSystem {
        /// The contradictory row
        row: usize,
        /// Its right-hand side
        rhs: Float,
    },

    /// A (nearly) zero pivot showed up when reducing upwards or normalizing
    #[error("ill-conditioned system: pivot {pivot:e} in row {row} cannot be normalized")]
    IllConditioned {
        /// The offending row
        row: usize,
        /// The offending pivot
        pivot: Float,
    },

    /// The Gauss-Jordan reduction did not end up in the identity matrix
    #[error("Gauss-Jordan reduction failed: element ({row}, {col}) of the reduced matrix is {value}")]
    IdentityReductionFailure {
        /// Row of the offending element
        row: usize,
        /// Column of the offending element
        col: usize,
        /// Its value
        value: Float,
    },

    /// Iterative methods need a non-zero diagonal
    #[error("element ({index}, {index}) of the diagonal is {value:e}; iterative methods need a non-zero diagonal")]
    ZeroDiagonal {
        /// Position in the diagonal
        index: usize,
        /// The offending value
        value: Float,
    },

    /// The iteration cap was reached (or the iteration blew up)
    #[error("the iterative method did not converge after {iterations} iterations (last change was {error:e})")]
    NonConvergence {
        /// Iterations performed
        iterations: usize,
        /// Largest change in the solution during the last iteration
        error: Float,
    },
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    /// Returns `true` if this error means the system has no unique solution
    /// (or none that can be trusted)
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            SolverError::NumericallyUnstable { .. }
                | SolverError::InconsistentSystem { .. }
                | SolverError::IllConditioned { .. }
        )
    }

    /// Returns `true` if this error comes from an out-of-bounds matrix access
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            SolverError::Matrix(MatrixError::IndexOutOfRange { .. })
        )
    }
}
