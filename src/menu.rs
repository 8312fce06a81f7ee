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
use crate::{solve_system, Method, Prompt, SolveOptions};
use matrix::Float;
use std::io::{BufRead, Write};

const MENU: &str = "
Choose a method:
    1. Gauss
    2. Gauss-Jordan
    3. Jacobi
    4. Gauss-Seidel
    5. Exit
";

fn method_from_choice(choice: usize) -> Option<Method> {
    match choice {
        1 => Some(Method::Gauss),
        2 => Some(Method::GaussJordan),
        3 => Some(Method::Jacobi),
        4 => Some(Method::GaussSeidel),
        _ => None,
    }
}

/// Runs the interactive menu until the user chooses to exit.
///
/// Each round reads a new system and solves it with the chosen method.
/// Solver errors are printed and the menu continues; only I/O problems
/// (including running out of input) end it with an error.
pub fn run_menu<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<(), String> {
    loop {
        writeln!(prompt.output(), "{}", MENU).map_err(|e| e.to_string())?;
        let choice = prompt.read_value("Option: ", "Please choose an option from 1 to 5.", |s| {
            s.parse::<usize>().ok().filter(|c| (1..=5).contains(c))
        })?;
        let method = match method_from_choice(choice) {
            Some(m) => m,
            None => {
                writeln!(prompt.output(), "Bye!").map_err(|e| e.to_string())?;
                return Ok(());
            }
        };

        let system = prompt.read_system()?;
        if let Some(warning) = size_warning(system.len()) {
            writeln!(prompt.output(), "Note: {}", warning).map_err(|e| e.to_string())?;
        }

        let mut options = SolveOptions {
            method: Some(method),
            ..SolveOptions::default()
        };
        if method.is_direct() {
            options.show_steps = Some(prompt.read_boolean("Show intermediate steps? (1/0): ")?);
        } else {
            let tolerance = prompt.read_value(
                "Tolerance: ",
                "Please enter a positive number.",
                |s| s.parse::<Float>().ok().filter(|v| v.is_finite() && *v > 0.0),
            )?;
            options.tolerance = Some(tolerance);
            options.max_iterations = Some(prompt.read_integer("Maximum iterations: ", 1)?);
        }

        log::debug!("Menu chose {:?}", options);
        let mut printer = AugmentedPrinter::new(prompt.output());
        let result = solve_system(&system, &options, Some(&mut printer));
        printer.into_inner().map_err(|e| e.to_string())?;

        let out = prompt.output();
        match result {
            Ok(report) => write_report(out, &report).map_err(|e| e.to_string())?,
            Err(e) => writeln!(out, "Error: {}", e).map_err(|e| e.to_string())?,
        }
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<(), String>, String) {
        let mut prompt = Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let res = run_menu(&mut prompt);
        (res, String::from_utf8(prompt.into_output()).unwrap())
    }

    #[test]
    fn test_exit() {
        let (res, out) = run("7\n5\n");
        assert!(res.is_ok());
        assert!(out.contains("from 1 to 5"));
        assert!(out.ends_with("Bye!\n"));
    }

    #[test]
    fn test_gauss_with_steps() {
        let (res, out) = run("1\n2\n2\n1\n3\n1\n3\n5\n1\n5\n");
        assert!(res.is_ok(), "{:?}", res);
        assert!(out.contains("Eliminating row 1 using row 0"), "{}", out);
        assert!(out.contains("x[0] = 0.800000"), "{}", out);
        assert!(out.contains("x[1] = 1.400000"), "{}", out);
    }

    #[test]
    fn test_jacobi() {
        let (res, out) = run("3\n2\n4\n1\n1\n1\n3\n2\n1e-10\n100\n5\n");
        assert!(res.is_ok(), "{:?}", res);
        assert!(out.contains("Method: Jacobi (converged after"), "{}", out);
        assert!(out.contains("x[0] = 0.090909"), "{}", out);
        assert!(out.contains("x[1] = 0.636364"), "{}", out);
    }

    #[test]
    fn test_errors_continue() {
        // singular, then zero diagonal, then exit
        let (res, out) = run("2\n2\n1\n1\n2\n1\n1\n2\n0\n4\n2\n1\n1\n1\n1\n0\n1\n1e-6\n10\n5\n");
        assert!(res.is_ok(), "{:?}", res);
        assert_eq!(out.matches("Error: ").count(), 2, "{}", out);
        assert!(out.ends_with("Bye!\n"));
    }

    #[test]
    fn test_end_of_input() {
        let (res, _) = run("1\n2\n");
        assert!(res.is_err());
    }
}
