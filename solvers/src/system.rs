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

use crate::{Result, SolverError};
use matrix::{Float, Matrix};

/// Checks that `a` is square and that `b` is a column with as many rows
/// as `a`. Returns the number of equations.
pub fn check_system(a: &Matrix, b: &Matrix) -> Result<usize> {
    let (nrows, ncols) = a.size();
    if nrows != ncols {
        return Err(SolverError::NotSquare { nrows, ncols });
    }
    if b.size() != (nrows, 1) {
        return Err(SolverError::DimensionMismatch {
            expected: nrows,
            nrows: b.nrows(),
            ncols: b.ncols(),
        });
    }
    Ok(nrows)
}

/// Calculates $`\| A x - b \|_\infty`$.
///
/// Remember that the direct solvers modify `A` and `b`, so this needs
/// a copy of the original system.
pub fn residual_norm(a: &Matrix, x: &[Float], b: &Matrix) -> Result<Float> {
    let n = check_system(a, b)?;
    let x = Matrix::column(x.to_vec())?;
    let mut ax = Matrix::zeros(n, 1);
    a.prod_into(&x, &mut ax)?;
    Ok((&ax - b).max_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_system() {
        let a = Matrix::eye(3);
        let b = Matrix::zeros(3, 1);
        assert_eq!(check_system(&a, &b).unwrap(), 3);

        let a = Matrix::zeros(2, 3);
        assert_eq!(
            check_system(&a, &b),
            Err(SolverError::NotSquare { nrows: 2, ncols: 3 })
        );

        let a = Matrix::eye(2);
        assert_eq!(
            check_system(&a, &b),
            Err(SolverError::DimensionMismatch {
                expected: 2,
                nrows: 3,
                ncols: 1
            })
        );

        let b = Matrix::zeros(2, 2);
        assert!(matches!(
            check_system(&a, &b),
            Err(SolverError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_residual_norm() {
        let a = Matrix::from_rows(&[vec![2., 1.], vec![1., 3.]]).unwrap();
        let b = Matrix::column(vec![3., 5.]).unwrap();

        let r = residual_norm(&a, &[0.8, 1.4], &b).unwrap();
        assert!(r < 1e-12);

        let r = residual_norm(&a, &[1.0, 1.0], &b).unwrap();
        assert!((r - 1.0).abs() < 1e-12);

        // wrong length
        assert!(residual_norm(&a, &[1.0], &b).is_err());
    }
}
