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

use std::fmt::Display;

/// Prints a warning message into STDERR.
///
/// `source` tells the user where the warning comes from
///
/// ```
/// use linsolve::error_msgs::print_warning;
/// print_warning("linsolve", "intermediate steps will not be shown");
/// ```
pub fn print_warning<C: Display, T: Display>(source: C, msg: T) {
    eprintln!("Warning [{}]: {}", source, msg)
}

/// Prints an error message into STDERR.
///
/// `source` tells the user where the error comes from
///
/// ```
/// use linsolve::error_msgs::print_error;
/// print_error("linsolve", "could not read file");
/// ```
pub fn print_error<C: Display, T: Display>(source: C, msg: T) {
    eprintln!("Error [{}]: {}", source, msg)
}
