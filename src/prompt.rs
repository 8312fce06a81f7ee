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

use crate::LinearSystem;
use matrix::Float;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Largest system that can be typed in through [`Prompt::read_system`]
pub const MAX_TYPED_EQUATIONS: usize = 100;

/// Asks questions through `output` and reads the answers from `input`,
/// insisting until a valid one is given.
///
/// Running out of input is an error, so that a closed terminal (or a
/// script that is too short) does not turn into an endless loop.
pub struct Prompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Creates a new prompt
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Borrows the output, for writing anything other than questions
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompt, returning its output
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `question` and reads one (trimmed) line
    pub fn read_line(&mut self, question: &str) -> Result<String, String> {
        write!(self.output, "{}", question).map_err(|e| e.to_string())?;
        self.output.flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {}", e))?;
        if n == 0 {
            return Err("Unexpected end of input".to_string());
        }
        Ok(line.trim().to_string())
    }

    /// Asks `question` until `parse` accepts the answer. Rejected answers
    /// produce `error` and the question is asked again.
    pub fn read_value<T, F>(&mut self, question: &str, error: &str, parse: F) -> Result<T, String>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            let line = self.read_line(question)?;
            match parse(&line) {
                Some(v) => return Ok(v),
                None => writeln!(self.output, "{}", error).map_err(|e| e.to_string())?,
            }
        }
    }

    /// Reads an integer no smaller than `min`
    pub fn read_integer(&mut self, question: &str, min: usize) -> Result<usize, String> {
        let error = format!("Please enter a whole number no smaller than {}.", min);
        self.read_value(question, &error, |s| {
            usize::from_str(s).ok().filter(|v| *v >= min)
        })
    }

    /// Reads an integer between `min` and `max`, both included
    pub fn read_integer_between(
        &mut self,
        question: &str,
        min: usize,
        max: usize,
    ) -> Result<usize, String> {
        let error = format!("Please enter a whole number from {} to {}.", min, max);
        self.read_value(question, &error, |s| {
            usize::from_str(s)
                .ok()
                .filter(|v| (min..=max).contains(v))
        })
    }

    /// Reads a finite decimal number
    pub fn read_decimal(&mut self, question: &str) -> Result<Float, String> {
        self.read_value(question, "Please enter a valid number.", |s| {
            Float::from_str(s).ok().filter(|v| v.is_finite())
        })
    }

    /// Reads a yes/no answer, given as `1`/`0` or `y`/`n`
    pub fn read_boolean(&mut self, question: &str) -> Result<bool, String> {
        self.read_value(question, "Please enter 1 (yes) or 0 (no).", |s| {
            match s.to_lowercase().as_str() {
                "1" | "y" | "yes" => Some(true),
                "0" | "n" | "no" => Some(false),
                _ => None,
            }
        })
    }

    /// Reads the size of a system and then each of its coefficients
    pub fn read_system(&mut self) -> Result<LinearSystem, String> {
        let n = self.read_integer_between("Number of equations: ", 1, MAX_TYPED_EQUATIONS)?;
        let mut a = Vec::new();
        let mut b = Vec::new();
        for i in 0..n {
            let mut row = Vec::new();
            for j in 0..n {
                row.push(self.read_decimal(&format!("A[{}][{}] = ", i, j))?);
            }
            a.push(row);
            b.push(self.read_decimal(&format!("b[{}] = ", i))?);
        }
        Ok(LinearSystem {
            a,
            b,
            options: None,
        })
    }
}

/***********/
/* TESTING */
/***********/
