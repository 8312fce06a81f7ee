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

//! Direct and iterative solvers for dense, square linear systems $`A x = b`$.
//!
//! The direct methods ([`gauss_solve`] and [`gauss_jordan_solve`]) work in place: they
//! triangularize (and, for Gauss-Jordan, reduce to the identity) both `A` and `b`, so
//! callers that need the original system afterwards must clone it first. This also
//! holds when a solve fails half-way through.
//!
//! The iterative methods ([`jacobi_solve`] and [`gauss_seidel_solve`]) are two flavours
//! of the same stationary iteration ([`stationary_iteration`]) and never modify `A` or `b`.
//!
//! ```
//! use matrix::Matrix;
//! use solvers::gauss_solve;
//!
//! let mut a = Matrix::from_rows(&[vec![2., 1.], vec![1., 3.]]).unwrap();
//! let mut b = Matrix::column(vec![3., 5.]).unwrap();
//! let x = gauss_solve(&mut a, &mut b, None).unwrap();
//! assert!((x[0] - 0.8).abs() < 1e-12 && (x[1] - 1.4).abs() < 1e-12);
//! ```

pub use matrix::{Float, Matrix, MatrixError};

mod error;
pub use error::{Result, SolverError};

mod steps;
pub use steps::{Step, StepReporter};

mod system;
pub use system::{check_system, residual_norm};

/// Forward and backward elimination, the building blocks of the direct solvers
pub mod elimination;
pub use elimination::{backward_elimination, check_consistency, forward_elimination};

mod direct;
pub use direct::{back_substitution, gauss_jordan_solve, gauss_solve, verify_identity};

/// Jacobi and Gauss-Seidel iterations
pub mod iterative;
pub use iterative::{
    gauss_seidel_solve, jacobi_solve, stationary_iteration, IterativeConfig, IterativeSolution,
    Sweep,
};

/// Absolute values below this are considered to be zero when choosing,
/// checking or normalizing pivots.
pub const PIVOT_TOLERANCE: Float = 1e-12;

/// How far from the identity a Gauss-Jordan reduced matrix can be
pub const IDENTITY_TOLERANCE: Float = 1e-10;

/// Diagonal elements must be larger (in absolute value) than this
/// for the iterative methods to start.
pub const DIAGONAL_TOLERANCE: Float = 1e-12;

/// Systems with more equations than this are never reported step by step.
pub const MAX_REPORTED_EQUATIONS: usize = 10;
