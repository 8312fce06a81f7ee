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

use clap::ValueEnum;
use matrix::{Float, Matrix};
use serde::{Deserialize, Serialize};
use solvers::{IterativeConfig, SolverError, StepReporter, Sweep};

/// The methods available for solving a system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Gaussian elimination with partial pivoting and back-substitution
    Gauss,
    /// Gauss-Jordan reduction to the identity
    GaussJordan,
    /// Jacobi iteration
    Jacobi,
    /// Gauss-Seidel iteration
    GaussSeidel,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Method::Gauss => "Gauss",
            Method::GaussJordan => "Gauss-Jordan",
            Method::Jacobi => "Jacobi",
            Method::GaussSeidel => "Gauss-Seidel",
        };
        write!(f, "{}", name)
    }
}

impl Method {
    /// The kind of sweep, for the iterative methods. `None` for the direct ones.
    pub fn sweep(&self) -> Option<Sweep> {
        match self {
            Method::Gauss | Method::GaussJordan => None,
            Method::Jacobi => Some(Sweep::Jacobi),
            Method::GaussSeidel => Some(Sweep::GaussSeidel),
        }
    }

    /// Whether this method reduces the system directly (and can thus
    /// report its steps)
    pub fn is_direct(&self) -> bool {
        self.sweep().is_none()
    }
}

/// What came out of solving a system
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The method used
    pub method: Method,

    /// The solution
    pub x: Vec<Float>,

    /// Iterations needed, for the iterative methods
    pub iterations: Option<usize>,

    /// $`\| A x - b \|_\infty`$, calculated with the original system
    pub residual: Float,
}

/// Solves `a x = b` using `method`.
///
/// Unlike the functions in [`solvers`], this one never modifies `a` or `b`: the
/// direct methods work on copies so that the residual can be calculated with
/// the original system. `config` is only used by the iterative methods and
/// `reporter` only by the direct ones.
pub fn solve(
    a: &Matrix,
    b: &Matrix,
    method: Method,
    config: &IterativeConfig,
    reporter: Option<&mut dyn StepReporter>,
) -> Result<Report, SolverError> {
    log::info!("Solving a system of {} equations using {}", a.nrows(), method);

    let (x, iterations) = match method.sweep() {
        None => {
            let mut a_work = a.clone();
            let mut b_work = b.clone();
            let x = if method == Method::Gauss {
                solvers::gauss_solve(&mut a_work, &mut b_work, reporter)?
            } else {
                solvers::gauss_jordan_solve(&mut a_work, &mut b_work, reporter)?
            };
            (x, None)
        }
        Some(sweep) => {
            let solution = solvers::stationary_iteration(a, b, config, sweep)?;
            (solution.x, Some(solution.iterations))
        }
    };

    let residual = solvers::residual_norm(a, &x, b)?;
    Ok(Report {
        method,
        x,
        iterations,
        residual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> (Matrix, Matrix) {
        (
            Matrix::from_rows(&[vec![4., 1.], vec![1., 3.]]).unwrap(),
            Matrix::column(vec![1., 2.]).unwrap(),
        )
    }

    #[test]
    fn test_all_methods() {
        let (a, b) = system();
        let config = IterativeConfig::default();
        for method in Method::value_variants() {
            let report = solve(&a, &b, *method, &config, None).unwrap();
            assert_eq!(report.method, *method);
            assert!((report.x[0] - 1. / 11.).abs() < 1e-5, "{}", method);
            assert!((report.x[1] - 7. / 11.).abs() < 1e-5, "{}", method);
            assert!(report.residual < 1e-5);
            assert_eq!(report.iterations.is_some(), !method.is_direct());
        }
        // Nothing was touched
        assert_eq!((a, b), system());
    }

    #[test]
    fn test_errors_are_kept() {
        let a = Matrix::from_rows(&[vec![1., 1.], vec![1., 1.]]).unwrap();
        let b = Matrix::column(vec![2., 2.]).unwrap();
        let err = solve(&a, &b, Method::Gauss, &IterativeConfig::default(), None).unwrap_err();
        assert!(err.is_singular());
    }

    #[test]
    fn test_names() {
        assert_eq!(Method::GaussJordan.to_string(), "Gauss-Jordan");
        let m: Method = serde_json::from_str(r#""gauss-seidel""#).unwrap();
        assert_eq!(m, Method::GaussSeidel);
        assert_eq!(
            Method::from_str("gauss-jordan", true).unwrap(),
            Method::GaussJordan
        );
        assert_eq!(Method::Jacobi.sweep(), Some(Sweep::Jacobi));
    }
}
