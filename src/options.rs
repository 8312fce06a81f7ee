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

use crate::Method;
use matrix::Float;
use serde::{Deserialize, Serialize};
use solvers::IterativeConfig;

/// The options for solving a system.
///
/// All fields are optional, so that options given in different places (e.g.,
/// a system file and the command line) can be merged.
///
/// ## Example
/// ```json
/// {
///     "method": "gauss-seidel",
///     "tolerance": 1e-8,
///     "max_iterations": 500
/// }
/// ```
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolveOptions {
    /// The method used for solving the system. Defaults to [`Method::Gauss`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<Method>,

    /// Print the augmented system after every step of the direct methods.
    /// Ignored by the iterative methods and for systems of more than
    /// ten equations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_steps: Option<bool>,

    /// Convergence tolerance of the iterative methods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<Float>,

    /// Maximum number of iterations of the iterative methods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
}

impl SolveOptions {
    /// Returns a copy of `self` in which every option set in `other` is replaced.
    #[must_use]
    pub fn merge(&self, other: &SolveOptions) -> SolveOptions {
        SolveOptions {
            method: other.method.or(self.method),
            show_steps: other.show_steps.or(self.show_steps),
            tolerance: other.tolerance.or(self.tolerance),
            max_iterations: other.max_iterations.or(self.max_iterations),
        }
    }

    /// The method to use
    pub fn method(&self) -> Method {
        self.method.unwrap_or(Method::Gauss)
    }

    /// Whether steps should be shown
    pub fn show_steps(&self) -> bool {
        self.show_steps.unwrap_or(false)
    }

    /// Builds the configuration for the iterative methods, checking it.
    pub fn iterative_config(&self) -> Result<IterativeConfig, String> {
        let default = IterativeConfig::default();
        let tolerance = self.tolerance.unwrap_or(default.tolerance);
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(format!(
                "the tolerance must be a positive number, found {}",
                tolerance
            ));
        }
        let max_iterations = self.max_iterations.unwrap_or(default.max_iterations);
        if max_iterations == 0 {
            return Err("the maximum number of iterations must be at least 1".to_string());
        }
        Ok(IterativeConfig {
            tolerance,
            max_iterations,
        })
    }
}

/***********/
/* TESTING */
/***********/
