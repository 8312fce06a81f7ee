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

use crate::printer::{size_warning, write_report, AugmentedPrinter};
use crate::{error_msgs, solve_system, LinearSystem, Method, Prompt, SolveOptions};
use clap::Parser;
use matrix::Float;
use std::io::Write;
use std::path::Path;

/// The options we can pass to the solver
#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct CliOptions {
    /// The input system file (JSON or JSON5). If none is given,
    /// the interactive menu is started
    #[clap(short = 'i')]
    pub input_file: Option<String>,

    /// The method used for solving the system. Overrides the
    /// one in the input file
    #[clap(short = 'm', value_enum)]
    pub method: Option<Method>,

    /// Print the augmented system after every step of the direct methods
    #[clap(short = 's')]
    pub show_steps: bool,

    /// Convergence tolerance of the iterative methods
    #[clap(short = 't')]
    pub tolerance: Option<Float>,

    /// Maximum number of iterations of the iterative methods
    #[clap(short = 'n')]
    pub max_iterations: Option<usize>,

    /// Specifies the path to which to write the results.
    /// If none is given, STDOUT is used
    #[clap(short = 'o')]
    pub output: Option<String>,
}

impl CliOptions {
    /// The options set in the command line, which take precedence
    /// over those in the input file
    pub fn overrides(&self) -> SolveOptions {
        SolveOptions {
            method: self.method,
            show_steps: if self.show_steps { Some(true) } else { None },
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

/// Solves the system in `filename`, writing the steps (if requested) and
/// the solution into `out`.
pub fn run_file<P, W>(filename: P, overrides: &SolveOptions, mut out: W) -> Result<(), String>
where
    P: AsRef<Path>,
    W: Write,
{
    let system = LinearSystem::from_file(filename)?;
    let options = system
        .options
        .clone()
        .unwrap_or_default()
        .merge(overrides);

    if options.show_steps() {
        if let Some(warning) = size_warning(system.len()) {
            error_msgs::print_warning("linsolve", warning);
        }
    }

    let mut printer = AugmentedPrinter::new(&mut out);
    let report = solve_system(&system, &options, Some(&mut printer))?;
    printer
        .into_inner()
        .map_err(|e| format!("Could not write steps: {}", e))?;
    write_report(&mut out, &report).map_err(|e| format!("Could not write results: {}", e))
}

/// Runs the program as requested in the command line
pub fn run(options: &CliOptions) -> Result<(), String> {
    match &options.input_file {
        Some(input) => {
            let overrides = options.overrides();
            match &options.output {
                Some(v) => {
                    let out = std::fs::File::create(v)
                        .map_err(|e| format!("Could not create output file '{}': {}", v, e))?;
                    run_file(input, &overrides, out)
                }
                None => run_file(input, &overrides, std::io::stdout().lock()),
            }
        }
        None => {
            if options.output.is_some() {
                error_msgs::print_warning("linsolve", "option -o is ignored by the interactive menu");
            }
            let stdin = std::io::stdin();
            let mut prompt = Prompt::new(stdin.lock(), std::io::stdout().lock());
            crate::menu::run_menu(&mut prompt)
        }
    }
}

/***********/
/* TESTING */
/***********/
