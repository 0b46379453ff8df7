//! Text rendering of recorded solutions

use std::io::Write;

use crate::board::solution::Solution;
use crate::io::configuration::{EMPTY_MARK, QUEEN_MARK};
use crate::io::error::{Result, SolverError};

fn write_error(source: std::io::Error) -> SolverError {
    SolverError::ReportWrite { source }
}

/// Write one solution as an ASCII board, one row per line
///
/// The queen's column gets [`QUEEN_MARK`], every other cell
/// [`EMPTY_MARK`], separated by single spaces.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_solution<W: Write>(out: &mut W, solution: &Solution) -> Result<()> {
    for row in 0..solution.size() {
        let cells: Vec<&str> = (0..solution.size())
            .map(|col| {
                if solution.queen_at(row) == Some(col) {
                    QUEEN_MARK
                } else {
                    EMPTY_MARK
                }
            })
            .collect();
        writeln!(out, "{}", cells.join(" ")).map_err(write_error)?;
    }

    Ok(())
}

/// Write the closing total line
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_total<W: Write>(out: &mut W, solutions: &[Solution]) -> Result<()> {
    writeln!(out, "Total solutions: {}", solutions.len()).map_err(write_error)
}

/// Write every solution in discovery order followed by the total count
///
/// Solutions are separated by blank lines, matching one board per
/// paragraph.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_report<W: Write>(out: &mut W, solutions: &[Solution]) -> Result<()> {
    for solution in solutions {
        write_solution(out, solution)?;
        writeln!(out).map_err(write_error)?;
    }
    write_total(out, solutions)
}
