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

//! Both [Jacobi](https://en.wikipedia.org/wiki/Jacobi_method) and
//! [Gauss-Seidel](https://en.wikipedia.org/wiki/Gauss–Seidel_method) iterations
//! are run by [`stationary_iteration`]; the only difference is whether the
//! unknowns already updated during a sweep are used right away.
//!
//! Convergence is guaranteed for strictly diagonally dominant matrices.

use crate::{check_system, Result, SolverError, DIAGONAL_TOLERANCE};
use matrix::{Float, Matrix};
use serde::{Deserialize, Serialize};

/// The flavour of stationary iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sweep {
    /// Every unknown is updated using the previous iteration only
    Jacobi,
    /// Unknowns updated earlier in the same iteration are used immediately
    GaussSeidel,
}

impl Sweep {
    /// Whether values computed during the current sweep are used immediately
    pub fn uses_updated_values(&self) -> bool {
        matches!(self, Sweep::GaussSeidel)
    }
}

/// Stopping criteria for the iterative methods
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IterativeConfig {
    /// The iteration stops when no unknown changes more than this
    pub tolerance: Float,

    /// The iteration fails after this many sweeps
    pub max_iterations: usize,
}

impl Default for IterativeConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

/// The result of a converged iteration
#[derive(Debug, Clone, PartialEq)]
pub struct IterativeSolution {
    /// The solution
    pub x: Vec<Float>,

    /// Number of sweeps performed
    pub iterations: usize,

    /// Largest change of an unknown during the last sweep
    pub error: Float,
}

/// Solves $`A x = b`$ using the Jacobi method, starting from $`x = 0`$.
pub fn jacobi_solve(
    a: &Matrix,
    b: &Matrix,
    tolerance: Float,
    max_iterations: usize,
) -> Result<Vec<Float>> {
    let config = IterativeConfig {
        tolerance,
        max_iterations,
    };
    stationary_iteration(a, b, &config, Sweep::Jacobi).map(|s| s.x)
}

/// Solves $`A x = b`$ using the Gauss-Seidel method, starting from $`x = 0`$.
pub fn gauss_seidel_solve(
    a: &Matrix,
    b: &Matrix,
    tolerance: Float,
    max_iterations: usize,
) -> Result<Vec<Float>> {
    let config = IterativeConfig {
        tolerance,
        max_iterations,
    };
    stationary_iteration(a, b, &config, Sweep::GaussSeidel).map(|s| s.x)
}

/// Iterates $`x_i = (b_i - \sum_{j \neq i} A_{ij} x_j) / A_{ii}`$ until the largest
/// change of an unknown within a sweep is smaller than `config.tolerance`.
///
/// Returns [`SolverError::ZeroDiagonal`] before iterating if an element in the
/// diagonal is (nearly) zero, and [`SolverError::NonConvergence`] when
/// `config.max_iterations` sweeps were not enough or the iteration diverged
/// beyond what a [`Float`] can hold.
pub fn stationary_iteration(
    a: &Matrix,
    b: &Matrix,
    config: &IterativeConfig,
    sweep: Sweep,
) -> Result<IterativeSolution> {
    let n = check_system(a, b)?;
    for index in 0..n {
        let value = a.get(index, index)?;
        if value.abs() <= DIAGONAL_TOLERANCE {
            return Err(SolverError::ZeroDiagonal { index, value });
        }
    }

    let use_updated = sweep.uses_updated_values();
    let mut x = Matrix::zeros(n, 1);
    let mut x_prev = Matrix::zeros(n, 1);
    let mut error = Float::INFINITY;

    for iteration in 1..=config.max_iterations {
        x_prev.clone_from(&x);
        error = 0.0;

        for i in 0..n {
            let mut sum = 0.0;
            for j in (0..n).filter(|j| *j != i) {
                let v = if use_updated && j < i {
                    x.get(j, 0)?
                } else {
                    x_prev.get(j, 0)?
                };
                sum += a.get(i, j)? * v;
            }
            let xi = (b.get(i, 0)? - sum) / a.get(i, i)?;
            if !xi.is_finite() {
                return Err(SolverError::NonConvergence {
                    iterations: iteration,
                    error: Float::INFINITY,
                });
            }
            x.set(i, 0, xi)?;
            error = error.max((xi - x_prev.get(i, 0)?).abs());
        }
        log::trace!("{:?} iteration {}: max change = {:e}", sweep, iteration, error);

        if error < config.tolerance {
            log::debug!(
                "{:?} converged after {} iterations (max change = {:e})",
                sweep,
                iteration,
                error
            );
            return Ok(IterativeSolution {
                x: x.into_data(),
                iterations: iteration,
                error,
            });
        }
    }

    Err(SolverError::NonConvergence {
        iterations: config.max_iterations,
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(rows: &[Vec<Float>], b: Vec<Float>) -> (Matrix, Matrix) {
        (Matrix::from_rows(rows).unwrap(), Matrix::column(b).unwrap())
    }

    #[test]
    fn test_jacobi_2x2() {
        let (a, b) = system(&[vec![4., 1.], vec![1., 3.]], vec![1., 2.]);
        let x = jacobi_solve(&a, &b, 1e-6, 100).unwrap();
        assert!((x[0] - 1. / 11.).abs() < 1e-5);
        assert!((x[1] - 7. / 11.).abs() < 1e-5);
    }

    #[test]
    fn test_gauss_seidel_2x2() {
        let (a, b) = system(&[vec![4., 1.], vec![1., 3.]], vec![1., 2.]);
        let x = gauss_seidel_solve(&a, &b, 1e-6, 100).unwrap();
        assert!((x[0] - 1. / 11.).abs() < 1e-5);
        assert!((x[1] - 7. / 11.).abs() < 1e-5);
    }

    #[test]
    fn test_first_sweep() {
        // From x = 0, Jacobi gives b_i / A_ii while Gauss-Seidel
        // already uses the new x_0 for x_1.
        let (a, b) = system(&[vec![4., 1.], vec![1., 3.]], vec![1., 2.]);
        let config = IterativeConfig {
            tolerance: 10.0,
            max_iterations: 1,
        };

        let s = stationary_iteration(&a, &b, &config, Sweep::Jacobi).unwrap();
        assert_eq!(s.iterations, 1);
        assert_eq!(s.x, vec![0.25, 2. / 3.]);
        assert_eq!(s.error, 2. / 3.);

        let s = stationary_iteration(&a, &b, &config, Sweep::GaussSeidel).unwrap();
        assert_eq!(s.x, vec![0.25, (2. - 0.25) / 3.]);
    }

    #[test]
    fn test_zero_diagonal() {
        let (a, b) = system(&[vec![1., 2.], vec![3., 0.]], vec![1., 2.]);
        assert_eq!(
            jacobi_solve(&a, &b, 1e-6, 100),
            Err(SolverError::ZeroDiagonal {
                index: 1,
                value: 0.
            })
        );
        assert_eq!(
            gauss_seidel_solve(&a, &b, 1e-6, 100),
            Err(SolverError::ZeroDiagonal {
                index: 1,
                value: 0.
            })
        );
    }

    #[test]
    fn test_non_convergence() {
        let (a, b) = system(&[vec![2., 3.], vec![5., 7.]], vec![11., 13.]);
        assert!(matches!(
            gauss_seidel_solve(&a, &b, 1e-3, 20),
            Err(SolverError::NonConvergence { iterations: 20, .. })
        ));
        assert!(matches!(
            jacobi_solve(&a, &b, 1e-3, 20),
            Err(SolverError::NonConvergence { iterations: 20, .. })
        ));
    }

    #[test]
    fn test_divergence_is_reported() {
        let (a, b) = system(&[vec![1., 1e200], vec![1e200, 1.]], vec![1., 1.]);
        match jacobi_solve(&a, &b, 1e-6, 100) {
            Err(SolverError::NonConvergence { iterations, error }) => {
                assert!(iterations < 100);
                assert!(error.is_infinite());
            }
            other => panic!("expected divergence, found {:?}", other),
        }
    }

    #[test]
    fn test_zero_iterations() {
        let (a, b) = system(&[vec![4., 1.], vec![1., 3.]], vec![1., 2.]);
        assert!(matches!(
            jacobi_solve(&a, &b, 1e-6, 0),
            Err(SolverError::NonConvergence { iterations: 0, .. })
        ));
    }

    #[test]
    fn test_config_serde() {
        let c: IterativeConfig = serde_json::from_str(r#"{"tolerance": 1e-8}"#).unwrap();
        assert_eq!(c.tolerance, 1e-8);
        assert_eq!(c.max_iterations, 100);

        assert!(serde_json::from_str::<IterativeConfig>(r#"{"tol": 1e-8}"#).is_err());

        let s: Sweep = serde_json::from_str(r#""gauss-seidel""#).unwrap();
        assert_eq!(s, Sweep::GaussSeidel);
    }
}
