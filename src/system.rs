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

use crate::{method, Report, SolveOptions};
use matrix::{Float, Matrix};
use solvers::StepReporter;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A linear system $`A x = b`$ as written in a file, possibly with the options
/// for solving it.
///
/// Files are read as [JSON5](https://json5.org) (so plain JSON works as well).
///
/// ## Example
/// ```json5
/// {
///     // Coefficients, by row
///     a: [[2, 1], [1, 3]],
///     b: [3, 5],
///     options: { method: "gauss-jordan", show_steps: true },
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinearSystem {
    /// The coefficient matrix, by row
    pub a: Vec<Vec<Float>>,

    /// The right-hand side
    pub b: Vec<Float>,

    /// How to solve it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<SolveOptions>,
}

impl std::str::FromStr for LinearSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        json5::from_str(s).map_err(|e| format!("Could not parse linear system: {}", e))
    }
}

impl LinearSystem {
    /// Reads a system from a file
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self, String> {
        let filename = filename.as_ref();
        let data = std::fs::read_to_string(filename)
            .map_err(|e| format!("Could not read file '{}': {}", filename.display(), e))?;
        data.parse()
    }

    /// The number of equations
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Whether the system has no equations at all
    pub fn is_empty(&self) -> bool {
        self.a.is_empty() && self.b.is_empty()
    }

    /// Builds the coefficient matrix and the right-hand side, checking
    /// that they form a square system.
    pub fn matrices(&self) -> Result<(Matrix, Matrix), String> {
        let n = self.a.len();
        if n == 0 {
            return Err("The system has no equations".to_string());
        }
        if let Some((i, row)) = self.a.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(format!(
                "The system must be square: it has {} equations, but row {} has {} coefficients",
                n,
                i,
                row.len()
            ));
        }
        if self.b.len() != n {
            return Err(format!(
                "The system has {} equations, but {} right-hand side values",
                n,
                self.b.len()
            ));
        }
        if self.a.iter().flatten().chain(&self.b).any(|v| !v.is_finite()) {
            return Err("All coefficients must be finite numbers".to_string());
        }

        let a = Matrix::from_rows(&self.a).map_err(|e| e.to_string())?;
        let b = Matrix::column(self.b.clone()).map_err(|e| e.to_string())?;
        Ok((a, b))
    }
}

/// Solves `system` following `options`.
///
/// The `reporter` only sees the steps of the direct methods, and only if
/// `options` asks for them. Iterative options are validated only when an
/// iterative method is chosen.
pub fn solve_system(
    system: &LinearSystem,
    options: &SolveOptions,
    reporter: Option<&mut dyn StepReporter>,
) -> Result<Report, String> {
    let (a, b) = system.matrices()?;
    let method = options.method();
    let config = if method.is_direct() {
        solvers::IterativeConfig::default()
    } else {
        options.iterative_config()?
    };
    let reporter = if options.show_steps() { reporter } else { None };
    method::solve(&a, &b, method, &config, reporter).map_err(|e| e.to_string())
}

/***********/
/* TESTING */
/***********/
