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

use crate::elimination::{backward_pass, forward_pass};
use crate::steps::Steps;
use crate::{
    check_system, Result, SolverError, StepReporter, IDENTITY_TOLERANCE, PIVOT_TOLERANCE,
};
use matrix::{Float, Matrix};

/// Solves $`A x = b`$ using [Gaussian Elimination](https://en.wikipedia.org/wiki/Gaussian_elimination)
/// with partial pivoting, followed by back-substitution.
///
/// # Note
/// Both `a` and `b` are modified in the process (they end up triangularized),
/// also when an error is returned. Clone them first if you need them.
pub fn gauss_solve(
    a: &mut Matrix,
    b: &mut Matrix,
    reporter: Option<&mut dyn StepReporter>,
) -> Result<Vec<Float>> {
    let n = check_system(a, b)?;
    let mut steps = Steps::new(reporter, n);
    forward_pass(a, b, &mut steps)?;
    let x = back_substitution(a, b)?;
    log::debug!("Gaussian elimination solved a system of {} equations", n);
    Ok(x)
}

/// Solves $`A x = b`$ using [Gauss-Jordan](https://en.wikipedia.org/wiki/Gaussian_elimination#Gauss%E2%80%93Jordan_elimination)
/// elimination: `a` is reduced all the way to the identity, so `b` ends up being the solution.
///
/// # Note
/// Both `a` and `b` are modified in the process, also when an error is returned.
pub fn gauss_jordan_solve(
    a: &mut Matrix,
    b: &mut Matrix,
    reporter: Option<&mut dyn StepReporter>,
) -> Result<Vec<Float>> {
    let n = check_system(a, b)?;
    let mut steps = Steps::new(reporter, n);
    forward_pass(a, b, &mut steps)?;
    backward_pass(a, b, &mut steps)?;
    verify_identity(a)?;
    log::debug!("Gauss-Jordan elimination solved a system of {} equations", n);
    Ok(b.as_slice().to_vec())
}

/// Solves an upper-triangular system, from the last unknown to the first.
pub fn back_substitution(a: &Matrix, b: &Matrix) -> Result<Vec<Float>> {
    let n = check_system(a, b)?;
    let mut x = Matrix::zeros(n, 1);
    for i in (0..n).rev() {
        let mut sum = 0.0;
        for j in i + 1..n {
            sum += a.get(i, j)? * x.get(j, 0)?;
        }
        let pivot = a.get(i, i)?;
        if pivot.abs() < PIVOT_TOLERANCE {
            return Err(SolverError::NumericallyUnstable { column: i, pivot });
        }
        x.set(i, 0, (b.get(i, 0)? - sum) / pivot)?;
    }
    Ok(x.into_data())
}

/// Checks that a square matrix is the identity, within [`IDENTITY_TOLERANCE`].
pub fn verify_identity(a: &Matrix) -> Result<()> {
    let (nrows, ncols) = a.size();
    if nrows != ncols {
        return Err(SolverError::NotSquare { nrows, ncols });
    }
    for row in 0..nrows {
        for col in 0..ncols {
            let value = a.get(row, col)?;
            let expected = if row == col { 1.0 } else { 0.0 };
            if (value - expected).abs() > IDENTITY_TOLERANCE {
                return Err(SolverError::IdentityReductionFailure { row, col, value });
            }
        }
    }
    Ok(())
}
