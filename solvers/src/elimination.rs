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

//! Both functions here work on the augmented system `(A | b)` in place.
//! [`forward_elimination`] leaves `A` upper-triangular; [`backward_elimination`]
//! takes it from there to the identity.

use crate::steps::Steps;
use crate::{check_system, Result, SolverError, Step, StepReporter, PIVOT_TOLERANCE};
use matrix::Matrix;

/// Makes `a` upper-triangular using Gaussian elimination with partial pivoting,
/// applying the same row operations to `b`.
///
/// For every column, the row (at or below the diagonal) with the largest
/// absolute value is swapped into the diagonal before eliminating the
/// elements below it.
///
/// Fails with [`SolverError::NumericallyUnstable`] when no pivot larger than
/// [`PIVOT_TOLERANCE`] exists for a column, and with
/// [`SolverError::InconsistentSystem`] if the result has an equation reading `0 = c`.
///
/// If a `reporter` is given (and the system has at most
/// [`MAX_REPORTED_EQUATIONS`](crate::MAX_REPORTED_EQUATIONS) equations) it is called
/// after every row swap and every row elimination.
pub fn forward_elimination(
    a: &mut Matrix,
    b: &mut Matrix,
    reporter: Option<&mut dyn StepReporter>,
) -> Result<()> {
    let n = check_system(a, b)?;
    let mut steps = Steps::new(reporter, n);
    forward_pass(a, b, &mut steps)
}

/// Reduces an upper-triangular `a` to the identity, applying the same
/// row operations to `b` (which then holds the solution).
///
/// Elements above the diagonal are eliminated column by column, from the last
/// one to the first; then every row is divided by its pivot. Pivots that are
/// already (almost) 1 are left alone.
///
/// Fails with [`SolverError::IllConditioned`] if a pivot is smaller than
/// [`PIVOT_TOLERANCE`].
pub fn backward_elimination(
    a: &mut Matrix,
    b: &mut Matrix,
    reporter: Option<&mut dyn StepReporter>,
) -> Result<()> {
    let n = check_system(a, b)?;
    let mut steps = Steps::new(reporter, n);
    backward_pass(a, b, &mut steps)
}

/// Scans a triangularized system for rows that read `0 = c`, with `c` not zero.
pub fn check_consistency(a: &Matrix, b: &Matrix) -> Result<()> {
    let n = check_system(a, b)?;
    for row in 0..n {
        if a.row(row)?.iter().all(|v| v.abs() < PIVOT_TOLERANCE) {
            let rhs = b.get(row, 0)?;
            if rhs.abs() >= PIVOT_TOLERANCE {
                return Err(SolverError::InconsistentSystem { row, rhs });
            }
        }
    }
    Ok(())
}

pub(crate) fn forward_pass(a: &mut Matrix, b: &mut Matrix, steps: &mut Steps) -> Result<()> {
    let n = a.nrows();
    for column in 0..n {
        // Find the largest pivot
        let mut pivot_row = column;
        let mut pivot = a.get(column, column)?;
        for row in column + 1..n {
            let v = a.get(row, column)?;
            if v.abs() > pivot.abs() {
                pivot_row = row;
                pivot = v;
            }
        }

        if pivot.abs() < PIVOT_TOLERANCE {
            return Err(SolverError::NumericallyUnstable { column, pivot });
        }

        if pivot_row != column {
            a.swap_rows(column, pivot_row)?;
            b.swap_rows(column, pivot_row)?;
            steps.emit(
                Step::RowSwap {
                    row: column,
                    with: pivot_row,
                },
                a,
                b,
            );
        }

        // Eliminate downwards
        for row in column + 1..n {
            let factor = a.get(row, column)? / pivot;
            for col in column..n {
                let v = a.get(column, col)?;
                *a.at_mut(row, col)? -= factor * v;
            }
            let v = b.get(column, 0)?;
            *b.at_mut(row, 0)? -= factor * v;

            steps.emit(
                Step::Elimination {
                    row,
                    pivot_row: column,
                    factor,
                },
                a,
                b,
            );
        }
        log::trace!("column {} triangularized (pivot = {})", column, pivot);
    }

    check_consistency(a, b)
}

pub(crate) fn backward_pass(a: &mut Matrix, b: &mut Matrix, steps: &mut Steps) -> Result<()> {
    let n = a.nrows();
    for column in (0..n).rev() {
        let pivot = a.get(column, column)?;
        if pivot.abs() < PIVOT_TOLERANCE {
            return Err(SolverError::IllConditioned { row: column, pivot });
        }
        for row in (0..column).rev() {
            let factor = a.get(row, column)? / pivot;
            for col in 0..n {
                let v = a.get(column, col)?;
                *a.at_mut(row, col)? -= factor * v;
            }
            let v = b.get(column, 0)?;
            *b.at_mut(row, 0)? -= factor * v;
        }
        steps.emit(Step::BackwardColumn { column }, a, b);
    }

    // Make the pivots equal to 1.
    for row in 0..n {
        let pivot = a.get(row, row)?;
        if pivot.abs() < PIVOT_TOLERANCE {
            return Err(SolverError::IllConditioned { row, pivot });
        }
        if (pivot - 1.0).abs() >= PIVOT_TOLERANCE {
            for col in 0..n {
                *a.at_mut(row, col)? /= pivot;
            }
            *b.at_mut(row, 0)? /= pivot;
        }
        steps.emit(Step::Normalization { row, pivot }, a, b);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(rows: &[Vec<f64>], b: Vec<f64>) -> (Matrix, Matrix) {
        (Matrix::from_rows(rows).unwrap(), Matrix::column(b).unwrap())
    }

    #[test]
    fn test_forward_elimination_is_upper_triangular() {
        let (mut a, mut b) = system(
            &[vec![1., 2., 3.], vec![4., 5., 6.], vec![7., 8., 10.]],
            vec![1., 2., 3.],
        );
        forward_elimination(&mut a, &mut b, None).unwrap();

        for row in 0..3 {
            for col in 0..row {
                assert!(a.get(row, col).unwrap().abs() < 1e-12, "{}", a);
            }
        }
        // The largest element of the first column was chosen as pivot
        assert_eq!(a.row(0).unwrap(), &[7., 8., 10.]);
        assert_eq!(b.get(0, 0).unwrap(), 3.);
    }

    #[test]
    fn test_forward_elimination_swaps_zero_pivot() {
        let (mut a, mut b) = system(&[vec![0., 1.], vec![2., 1.]], vec![1., 3.]);
        let mut seen = Vec::new();
        let mut record = |s: &Step, _: &Matrix, _: &Matrix| seen.push(*s);
        forward_elimination(&mut a, &mut b, Some(&mut record)).unwrap();

        assert_eq!(a.as_slice(), &[2., 1., 0., 1.]);
        assert_eq!(b.as_slice(), &[3., 1.]);
        assert_eq!(
            seen,
            vec![
                Step::RowSwap { row: 0, with: 1 },
                Step::Elimination {
                    row: 1,
                    pivot_row: 0,
                    factor: 0.
                }
            ]
        );
    }

    #[test]
    fn test_forward_elimination_singular() {
        // The second column is all zeroes
        let (mut a, mut b) = system(&[vec![1., 0.], vec![2., 0.]], vec![1., 2.]);
        let err = forward_elimination(&mut a, &mut b, None).unwrap_err();
        assert!(matches!(
            err,
            SolverError::NumericallyUnstable { column: 1, .. }
        ));

        // Tiny, but not zero
        let (mut a, mut b) = system(&[vec![1e-13, 0.], vec![0., 1.]], vec![1., 2.]);
        let err = forward_elimination(&mut a, &mut b, None).unwrap_err();
        assert!(matches!(
            err,
            SolverError::NumericallyUnstable { column: 0, .. }
        ));
    }

    #[test]
    fn test_check_consistency() {
        let (a, b) = system(&[vec![1., 2.], vec![0., 0.]], vec![1., 3.]);
        assert_eq!(
            check_consistency(&a, &b),
            Err(SolverError::InconsistentSystem { row: 1, rhs: 3. })
        );

        // 0 = 0 is fine
        let (a, b) = system(&[vec![1., 2.], vec![0., 1e-14]], vec![1., 1e-13]);
        assert!(check_consistency(&a, &b).is_ok());
    }

    #[test]
    fn test_backward_elimination() {
        let (mut a, mut b) = system(
            &[vec![2., 1., -1.], vec![0., 4., 2.], vec![0., 0., 1.]],
            vec![3., 10., 1.],
        );
        let mut seen = Vec::new();
        let mut record = |s: &Step, _: &Matrix, _: &Matrix| seen.push(*s);
        backward_elimination(&mut a, &mut b, Some(&mut record)).unwrap();

        assert_eq!(a, Matrix::eye(3));
        let expected = [1., 2., 1.];
        for (found, exp) in b.as_slice().iter().zip(expected) {
            assert!((found - exp).abs() < 1e-12);
        }

        assert_eq!(seen.len(), 6);
        assert_eq!(seen[0], Step::BackwardColumn { column: 2 });
        assert_eq!(seen[2], Step::BackwardColumn { column: 0 });
        assert_eq!(seen[3], Step::Normalization { row: 0, pivot: 2. });
        // Row 2 was already normalized
        assert_eq!(seen[5], Step::Normalization { row: 2, pivot: 1. });
    }

    #[test]
    fn test_backward_elimination_ill_conditioned() {
        let (mut a, mut b) = system(&[vec![1., 1.], vec![0., 0.]], vec![1., 0.]);
        assert_eq!(
            backward_elimination(&mut a, &mut b, None),
            Err(SolverError::IllConditioned { row: 1, pivot: 0. })
        );
    }

    #[test]
    fn test_no_steps_for_large_systems() {
        let n = crate::MAX_REPORTED_EQUATIONS + 1;
        let mut a = Matrix::zeros(n, n);
        for i in 0..n {
            a.set(i, i, 2.0).unwrap();
            a.set(n - 1 - i, i, 3.0).unwrap();
        }
        let mut b = Matrix::new(1.0, n, 1);
        let mut count = 0;
        let mut counter = |_: &Step, _: &Matrix, _: &Matrix| count += 1;
        forward_elimination(&mut a, &mut b, Some(&mut counter)).unwrap();
        assert_eq!(count, 0);
    }
}
