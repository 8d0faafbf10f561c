// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module reads test cover instances from plain text files. The expected
//! format is the following (whitespace delimited, blank lines are ignored):
//!
//! ```plain
//! n                       (number of tests)
//! m                       (number of diseases)
//! cost_1 cost_2 ... cost_n
//! A(1,1) A(1,2) ... A(1,m)
//! ...
//! A(n,1) A(n,2) ... A(n,m)
//! ```

use std::{fs::File, io::{BufRead, BufReader, Read}, path::Path, str::FromStr};

use crate::{Error, Instance};

/// This function is used to read a test cover instance from file. It returns
/// either an instance if everything went on well or an error describing the
/// problem.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Instance, Error> {
    let f = File::open(fname)?;
    parse_instance(BufReader::new(f))
}

/// Parses an instance from any buffered source of text.
pub fn parse_instance<R: Read>(source: BufReader<R>) -> Result<Instance, Error> {
    let mut lines = vec![];
    for (n, line) in source.lines().enumerate() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push((n + 1, line));
        }
    }
    let mut lines = lines.into_iter();

    let (ln, line)  = lines.next().ok_or_else(|| missing("the number of tests"))?;
    let nb_tests    = single::<usize>(ln, &line, "the number of tests")?;
    let (ln, line)  = lines.next().ok_or_else(|| missing("the number of diseases"))?;
    let nb_diseases = single::<usize>(ln, &line, "the number of diseases")?;
    if nb_tests == 0 || nb_diseases == 0 {
        return Err(Error::MalformedInstance(
            format!("line {}: the number of tests and diseases must be positive", ln)));
    }

    let (ln, line)  = lines.next().ok_or_else(|| missing("the costs"))?;
    let cost        = tokens::<f64>(ln, &line, nb_tests)?;

    let mut reactions = Vec::with_capacity(nb_tests);
    for test in 0..nb_tests {
        let (ln, line) = lines.next().ok_or_else(|| missing(&format!("the row of test {}", test)))?;
        let row = tokens::<u8>(ln, &line, nb_diseases)?
            .into_iter()
            .map(|x| match x {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(Error::MalformedInstance(format!("line {}: {} is not a 0/1 value", ln, x))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        reactions.push(row);
    }

    if let Some((ln, _)) = lines.next() {
        return Err(Error::MalformedInstance(format!("line {}: unexpected trailing data", ln)));
    }

    Instance::new(nb_tests, nb_diseases, cost, reactions)
}

impl FromStr for Instance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_instance(BufReader::new(s.as_bytes()))
    }
}

fn missing(what: &str) -> Error {
    Error::MalformedInstance(format!("unexpected end of file while reading {}", what))
}

fn single<T: FromStr>(ln: usize, line: &str, what: &str) -> Result<T, Error>
where T::Err: std::fmt::Display
{
    let values = tokens::<T>(ln, line, 1)
        .map_err(|_| Error::MalformedInstance(format!("line {}: expected {}", ln, what)))?;
    values.into_iter().next().ok_or_else(|| missing(what))
}

/// Parses exactly `expected` tokens from the given line.
fn tokens<T: FromStr>(ln: usize, line: &str, expected: usize) -> Result<Vec<T>, Error>
where T::Err: std::fmt::Display
{
    let values = line.split_ascii_whitespace()
        .map(|tok| tok.parse::<T>()
            .map_err(|e| Error::MalformedInstance(format!("line {}: '{}' {}", ln, tok, e))))
        .collect::<Result<Vec<T>, _>>()?;

    if values.len() != expected {
        return Err(Error::MalformedInstance(
            format!("line {}: expected {} values but got {}", ln, expected, values.len())));
    }
    Ok(values)
}

#[cfg(test)]
mod test_io_utils {
    use crate::{Instance, Error};

    fn malformed(text: &str) -> bool {
        matches!(text.parse::<Instance>(), Err(Error::MalformedInstance(_)))
    }

    #[test]
    fn it_parses_a_well_formed_instance() {
        let inst = "3\n2\n1 2.5 3\n1 0\n0 1\n1 1\n".parse::<Instance>().unwrap();
        assert_eq!(3, inst.nb_tests());
        assert_eq!(2, inst.nb_diseases());
        assert_eq!(&[1.0, 2.5, 3.0], inst.costs());
        assert!(inst.reacts(0, 0));
        assert!(!inst.reacts(0, 1));
        assert!(inst.reacts(2, 1));
    }
    #[test]
    fn blank_lines_are_ignored() {
        let inst = "\n3\n\n2\n1 1 1\n1 0\n\n0 1\n1 1\n\n".parse::<Instance>().unwrap();
        assert_eq!(3, inst.nb_tests());
    }
    #[test]
    fn non_numeric_tokens_are_rejected() {
        assert!(malformed("three\n2\n1 1 1\n1 0\n0 1\n1 1\n"));
        assert!(malformed("3\n2\n1 x 1\n1 0\n0 1\n1 1\n"));
        assert!(malformed("3\n2\n1 1 1\n1 0\n0 a\n1 1\n"));
    }
    #[test]
    fn wrong_counts_are_rejected() {
        assert!(malformed("3\n2\n1 1\n1 0\n0 1\n1 1\n"));
        assert!(malformed("3\n2\n1 1 1\n1 0 1\n0 1\n1 1\n"));
        assert!(malformed("3 4\n2\n1 1 1\n1 0\n0 1\n1 1\n"));
    }
    #[test]
    fn short_files_are_rejected() {
        assert!(malformed(""));
        assert!(malformed("3\n"));
        assert!(malformed("3\n2\n1 1 1\n1 0\n0 1\n"));
    }
    #[test]
    fn trailing_data_is_rejected() {
        assert!(malformed("3\n2\n1 1 1\n1 0\n0 1\n1 1\n0 0\n"));
    }
    #[test]
    fn non_binary_entries_are_rejected() {
        assert!(malformed("2\n2\n1 1\n1 2\n0 1\n"));
    }
    #[test]
    fn non_positive_dimensions_are_rejected() {
        assert!(malformed("0\n2\n\n"));
        assert!(malformed("2\n0\n1 1\n\n"));
        assert!(malformed("-2\n2\n1 1\n1 0\n0 1\n"));
    }
    #[test]
    fn negative_costs_are_rejected() {
        assert!(malformed("2\n2\n1 -1\n1 0\n0 1\n"));
    }
    #[test]
    fn a_missing_file_is_an_io_error() {
        assert!(matches!(crate::read_instance("/this/file/does/not/exist"), Err(Error::Io(_))));
    }
}
