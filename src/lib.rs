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

//! Solves dense systems of linear equations $`A x = b`$, reading them from
//! files or from an interactive menu.
//!
//! The numerical work happens in the [`solvers`] crate (which works on the
//! [`Matrix`] of the `matrix` crate). This crate chooses the method, reads
//! the systems and their options, and writes the results.

/// Printing errors and warnings
pub mod error_msgs;

/// Choosing a method and running it
pub mod method;
pub use method::{solve, Method, Report};

/// Options for solving a system
pub mod options;
pub use options::SolveOptions;

/// Systems read from files
pub mod system;
pub use system::{solve_system, LinearSystem};

/// Writing systems and solutions
pub mod printer;
pub use printer::{print_solution, size_warning, write_augmented, write_report, AugmentedPrinter};

/// Asking questions in a terminal
pub mod prompt;
pub use prompt::Prompt;

/// The interactive menu
pub mod menu;
pub use menu::run_menu;

/// Functions for running the solver from the command line
pub mod run_solver;

// Re-exports
pub use matrix::{Float, Matrix, MatrixError};
pub use solvers::{IterativeConfig, SolverError, Step, StepReporter, Sweep};
