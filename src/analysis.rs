//! Per-column summary of a Fermat grid.
//!
//! For a prime column `q` every row with `a` coprime to `q` reads 1, and a
//! row sharing a factor with `q` can never read 1. A composite column in
//! which every coprime row still reads 1 passes the Fermat test for every
//! base drawn, which for `height >= q` makes `q` a Carmichael number.

use alloc::vec::Vec;
use core::fmt;

use crate::structures::grid::Grid;
use crate::structures::sieve::PrimeSieve;
use crate::utils::gcd;

/// How a column behaves under the Fermat test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// `q = 1`: every residue is 0.
    Unit,
    /// `q` is prime.
    Prime,
    /// `q` is composite but every coprime base in the grid reads 1.
    FermatPseudoprime,
    /// `q` is composite and some coprime base exposes it.
    Composite,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Unit => "unit",
            ColumnKind::Prime => "prime",
            ColumnKind::FermatPseudoprime => "fermat pseudoprime",
            ColumnKind::Composite => "composite",
        };
        f.write_str(name)
    }
}

/// Counts for a single column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnStats {
    /// The modulus `q` rendered in this column.
    pub modulus: u64,
    /// Rows reading exactly 1.
    pub ones: usize,
    /// Rows whose base is coprime to `q`.
    pub coprime: usize,
    pub kind: ColumnKind,
}

impl ColumnStats {
    /// Rows that read 1 out of the rows that could.
    pub fn witness_ratio(&self) -> f64 {
        if self.coprime == 0 {
            return 0.0;
        }
        self.ones as f64 / self.coprime as f64
    }
}

/// Summarize every column of `grid`, left to right.
///
/// # Example
///
/// ```
/// use fermat_grid::analysis::{column_report, ColumnKind};
/// use fermat_grid::{Dimensions, Grid};
///
/// let grid = Grid::fermat(Dimensions::new(10, 6).unwrap());
/// let report = column_report(&grid);
///
/// assert_eq!(report[0].kind, ColumnKind::Unit);
/// assert_eq!(report[4].kind, ColumnKind::Prime); // q = 5
/// assert_eq!(report[4].ones, 8); // a = 5 and a = 10 read 0
/// assert_eq!(report[5].kind, ColumnKind::Composite); // q = 6
/// ```
pub fn column_report(grid: &Grid) -> Vec<ColumnStats> {
    let sieve = PrimeSieve::new(grid.width() + 1);
    (0..grid.width())
        .map(|col| {
            let q = Grid::modulus_for_col(col);
            let mut ones = 0;
            let mut coprime = 0;
            for (row, value) in grid.column(col).enumerate() {
                if value == 1 {
                    ones += 1;
                }
                if gcd(grid.base_for_row(row), q) == 1 {
                    coprime += 1;
                }
            }

            let kind = if q == 1 {
                ColumnKind::Unit
            } else if sieve.is_prime(col + 1) {
                ColumnKind::Prime
            } else if ones == coprime && coprime > 0 {
                ColumnKind::FermatPseudoprime
            } else {
                ColumnKind::Composite
            };

            ColumnStats {
                modulus: q,
                ones,
                coprime,
                kind,
            }
        })
        .collect()
}

/// Aggregate counts over a column report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub primes: usize,
    pub pseudoprimes: usize,
    pub composites: usize,
}

impl ReportSummary {
    pub fn from_report(report: &[ColumnStats]) -> Self {
        report
            .iter()
            .fold(Self::default(), |mut summary, stats| {
                match stats.kind {
                    ColumnKind::Prime => summary.primes += 1,
                    ColumnKind::FermatPseudoprime => summary.pseudoprimes += 1,
                    ColumnKind::Composite => summary.composites += 1,
                    ColumnKind::Unit => {}
                }
                summary
            })
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} prime, {} pseudoprime, {} composite columns",
            self.primes, self.pseudoprimes, self.composites
        )
    }
}
