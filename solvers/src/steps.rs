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

use crate::MAX_REPORTED_EQUATIONS;
use matrix::{Float, Matrix};

/// An operation performed by the direct solvers on the augmented system `(A | b)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Rows `row` and `with` were swapped to bring the best pivot to the diagonal
    RowSwap {
        /// The row receiving the pivot
        row: usize,
        /// The row that had the pivot
        with: usize,
    },

    /// `factor` times `pivot_row` was subtracted from `row`
    Elimination {
        /// The row that was modified
        row: usize,
        /// The row holding the pivot
        pivot_row: usize,
        /// The multiplier
        factor: Float,
    },

    /// Everything above the diagonal of `column` was eliminated
    BackwardColumn {
        /// The column that was cleared
        column: usize,
    },

    /// `row` was divided by its `pivot`
    Normalization {
        /// The row that was normalized
        row: usize,
        /// The pivot it was divided by
        pivot: Float,
    },
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::RowSwap { row, with } => write!(f, "Swapping row {} with row {}", row, with),
            Step::Elimination {
                row,
                pivot_row,
                factor,
            } => write!(
                f,
                "Eliminating row {} using row {} (factor = {})",
                row, pivot_row, factor
            ),
            Step::BackwardColumn { column } => {
                write!(f, "After eliminating upwards in column {}", column)
            }
            Step::Normalization { row, pivot } => {
                write!(f, "Normalizing row {} (pivot = {})", row, pivot)
            }
        }
    }
}

/// Something that wants to see the augmented system after every step of
/// the direct solvers (e.g., for printing it).
///
/// It is purely an observer: nothing it does changes the solution.
pub trait StepReporter {
    /// Called right after `step` was applied, with the resulting `a` and `b`
    fn report(&mut self, step: &Step, a: &Matrix, b: &Matrix);
}

impl<F> StepReporter for F
where
    F: FnMut(&Step, &Matrix, &Matrix),
{
    fn report(&mut self, step: &Step, a: &Matrix, b: &Matrix) {
        self(step, a, b)
    }
}

/// The reporter used during a single solve. It stays silent when
/// none was requested or when the system is too large.
pub(crate) struct Steps<'a> {
    reporter: Option<&'a mut dyn StepReporter>,
}

impl<'a> Steps<'a> {
    pub(crate) fn new(reporter: Option<&'a mut dyn StepReporter>, n: usize) -> Self {
        Self {
            reporter: reporter.filter(|_| n <= MAX_REPORTED_EQUATIONS),
        }
    }

    pub(crate) fn emit(&mut self, step: Step, a: &Matrix, b: &Matrix) {
        if let Some(reporter) = self.reporter.as_mut() {
            reporter.report(&step, a, b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Step::RowSwap { row: 0, with: 2 }.to_string(),
            "Swapping row 0 with row 2"
        );
        assert_eq!(
            Step::Elimination {
                row: 1,
                pivot_row: 0,
                factor: 0.5
            }
            .to_string(),
            "Eliminating row 1 using row 0 (factor = 0.5)"
        );
        assert_eq!(
            Step::BackwardColumn { column: 3 }.to_string(),
            "After eliminating upwards in column 3"
        );
        assert_eq!(
            Step::Normalization { row: 1, pivot: 2.0 }.to_string(),
            "Normalizing row 1 (pivot = 2)"
        );
    }

    #[test]
    fn test_steps_gate() {
        let a = Matrix::eye(2);
        let b = Matrix::zeros(2, 1);
        let mut count = 0;
        let mut counter = |_: &Step, _: &Matrix, _: &Matrix| count += 1;

        let mut steps = Steps::new(Some(&mut counter), MAX_REPORTED_EQUATIONS);
        steps.emit(Step::BackwardColumn { column: 0 }, &a, &b);
        let mut steps = Steps::new(Some(&mut counter), MAX_REPORTED_EQUATIONS + 1);
        steps.emit(Step::BackwardColumn { column: 0 }, &a, &b);
        let mut steps = Steps::new(None, 2);
        steps.emit(Step::BackwardColumn { column: 0 }, &a, &b);

        assert_eq!(count, 1);
    }
}
