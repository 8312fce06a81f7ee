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

use crate::Report;
use matrix::{Float, Matrix};
use solvers::{Step, StepReporter, MAX_REPORTED_EQUATIONS};
use std::io::Write;

/// Writes the augmented system `(A | b)` after every step of a direct solver.
///
/// [`StepReporter::report`] cannot fail, so the first I/O error is kept
/// and returned by [`AugmentedPrinter::into_inner`]. Nothing else is written
/// after it.
pub struct AugmentedPrinter<W: Write> {
    out: W,
    error: Option<std::io::Error>,
}

impl<W: Write> AugmentedPrinter<W> {
    /// Creates a printer writing into `out`
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Returns the writer, or the first error found when writing into it
    pub fn into_inner(self) -> std::io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }
}

impl<W: Write> StepReporter for AugmentedPrinter<W> {
    fn report(&mut self, step: &Step, a: &Matrix, b: &Matrix) {
        if self.error.is_some() {
            return;
        }
        let res = writeln!(self.out, "{}:", step).and_then(|_| write_augmented(&mut self.out, a, b));
        if let Err(e) = res {
            self.error = Some(e);
        }
    }
}

/// Writes `(A | b)`, one row per line
pub fn write_augmented<W: Write>(out: &mut W, a: &Matrix, b: &Matrix) -> std::io::Result<()> {
    for (row, rhs) in a.as_slice().chunks_exact(a.ncols()).zip(b.as_slice()) {
        for v in row {
            write!(out, "{:>10.4}", v)?;
        }
        writeln!(out, " | {:>10.4}", rhs)?;
    }
    writeln!(out)
}

/// Writes the solution as `x[0] = ...`, one per line
pub fn print_solution<W: Write>(out: &mut W, x: &[Float]) -> std::io::Result<()> {
    writeln!(out, "Solution:")?;
    for (i, v) in x.iter().enumerate() {
        writeln!(out, "x[{}] = {:.6}", i, v)?;
    }
    Ok(())
}

/// Writes the solution and how it was found
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    match report.iterations {
        Some(its) => writeln!(
            out,
            "Method: {} (converged after {} iterations)",
            report.method, its
        )?,
        None => writeln!(out, "Method: {}", report.method)?,
    }
    print_solution(out, &report.x)?;
    writeln!(out, "Residual: {:e}", report.residual)
}

/// Returns an advisory when a system of `n` equations is too large to
/// show its steps.
pub fn size_warning(n: usize) -> Option<String> {
    if n > MAX_REPORTED_EQUATIONS {
        Some(format!(
            "the system has {} equations, so intermediate steps will not be shown (limit is {})",
            n, MAX_REPORTED_EQUATIONS
        ))
    } else {
        None
    }
}

/***********/
/* TESTING */
/***********/
