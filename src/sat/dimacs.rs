#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A reader for the DIMACS CNF file format.
//!
//! The format is line-oriented:
//! - lines starting with `c` are comments and are ignored;
//! - the `p cnf <vars> <clauses>` problem line is informational and is
//!   ignored as well;
//! - a line starting with `%` ends the input (SATLIB benchmark files
//!   carry such a trailer);
//! - every other non-empty line is a sequence of signed decimal integers
//!   terminated by `0`, forming one clause. Tokens after the terminating
//!   `0` on the same line are not examined.
//!
//! A sequence consisting of the bare terminator is an empty clause and is
//! preserved: it makes the formula unsatisfiable.

use crate::sat::cnf::Cnf;
use std::io::{self, BufRead};
use std::path::Path;
use thiserror::Error;

/// Ways a DIMACS input can be rejected.
#[derive(Debug, Error)]
pub enum DimacsError {
    #[error("failed to read DIMACS input: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected a literal, found {token:?}")]
    InvalidToken { line: usize, token: String },

    #[error("line {line}: clause is not terminated by 0")]
    MissingTerminator { line: usize },
}

/// Parses DIMACS CNF data from any buffered reader.
///
/// # Errors
///
/// Fails on I/O errors, non-integer literal tokens, and clause lines
/// missing the terminating `0`.
pub fn parse_dimacs<R: BufRead>(reader: R) -> Result<Cnf, DimacsError> {
    let mut clauses: Vec<Vec<i32>> = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('c') || line.starts_with('p') {
            continue;
        }
        if line.starts_with('%') {
            break;
        }

        let mut clause = Vec::new();
        let mut terminated = false;
        for token in line.split_whitespace() {
            let value: i32 = token.parse().map_err(|_| DimacsError::InvalidToken {
                line: number + 1,
                token: token.to_string(),
            })?;
            if value == 0 {
                terminated = true;
                break;
            }
            clause.push(value);
        }

        if !terminated {
            return Err(DimacsError::MissingTerminator { line: number + 1 });
        }
        clauses.push(clause);
    }

    Ok(Cnf::new(clauses))
}

/// Parses DIMACS CNF data held in a string.
///
/// # Errors
///
/// See [`parse_dimacs`].
pub fn parse_dimacs_text(text: &str) -> Result<Cnf, DimacsError> {
    parse_dimacs(io::Cursor::new(text))
}

/// Opens and parses a DIMACS CNF file.
///
/// # Errors
///
/// Fails when the file cannot be opened, plus everything
/// [`parse_dimacs`] rejects.
pub fn parse_file(path: &Path) -> Result<Cnf, DimacsError> {
    let file = std::fs::File::open(path)?;
    parse_dimacs(io::BufReader::new(file))
}
