//! The Fermat grid: `a^(q-1) mod q` for every pair of base and modulus.
//!
//! Cell `(i, j)` of a `height x width` grid holds the residue for base
//! `a = height - i` and modulus `q = j + 1`, so the bottom row is `a = 1`
//! and the leftmost column is `q = 1`. By Fermat's little theorem every
//! cell whose column is a prime `q` not dividing `a` equals 1.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use tracing::{debug, debug_span};

use crate::structures::dims::Dimensions;
use crate::utils::mod_pow;

/// Residue `a^(q-1) mod q` for a single cell.
///
/// Column `q = 1` is always 0.
///
/// # Panics
///
/// Panics if `q` is zero.
///
/// # Example
///
/// ```
/// use fermat_grid::fermat_residue;
///
/// assert_eq!(fermat_residue(7, 5), 1);
/// assert_eq!(fermat_residue(10, 5), 0);
/// assert_eq!(fermat_residue(3, 1), 0);
/// ```
#[inline]
pub const fn fermat_residue(a: u64, q: u64) -> u64 {
    mod_pow(a, q - 1, q)
}

/// Immutable row-major grid of residues.
///
/// # Example
///
/// ```
/// use fermat_grid::{Dimensions, Grid};
///
/// let grid = Grid::fermat(Dimensions::new(10, 10).unwrap());
///
/// // a = 7 sits at row 10 - 7, q = 5 at column 5 - 1
/// assert_eq!(grid[(3, 4)], 1);
///
/// // q = 1 is always zero
/// assert!(grid.column(0).all(|v| v == 0));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<u64>,
}

impl Grid {
    /// Compute the Fermat grid for the given dimensions.
    ///
    /// Time complexity: O(height * width * log width).
    pub fn fermat(dims: Dimensions) -> Self {
        let _span = debug_span!("fermat_grid", %dims).entered();
        let grid = Self::from_fn(dims, |row, col| {
            let a = (dims.height() - row) as u64;
            let q = col as u64 + 1;
            fermat_residue(a, q)
        });
        debug!(max = grid.max_value(), "grid computed");
        grid
    }

    /// Build a grid from a pure function of `(row, col)`.
    pub fn from_fn<F>(dims: Dimensions, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> u64,
    {
        let cells = (0..dims.cells())
            .map(|index| {
                let (row, col) = dims.split(index);
                f(row, col)
            })
            .collect();
        Self { dims, cells }
    }

    /// The grid's dimensions.
    pub const fn dims(&self) -> Dimensions {
        self.dims
    }

    pub const fn height(&self) -> usize {
        self.dims.height()
    }

    pub const fn width(&self) -> usize {
        self.dims.width()
    }

    /// Base `a` rendered in `row`.
    #[inline]
    pub const fn base_for_row(&self, row: usize) -> u64 {
        (self.dims.height() - row) as u64
    }

    /// Modulus `q` rendered in `col`.
    #[inline]
    pub const fn modulus_for_col(col: usize) -> u64 {
        col as u64 + 1
    }

    /// Cell value, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.cells[row * self.width() + col])
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> Option<&[u64]> {
        if row >= self.height() {
            return None;
        }
        let start = row * self.width();
        Some(&self.cells[start..start + self.width()])
    }

    /// Iterate rows from top (`a = height`) to bottom (`a = 1`).
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> + '_ {
        self.cells.chunks_exact(self.width())
    }

    /// Iterate one column from top to bottom.
    ///
    /// Yields nothing when `col` is out of bounds.
    pub fn column(&self, col: usize) -> impl Iterator<Item = u64> + '_ {
        let width = self.width();
        let take = if col < width { self.height() } else { 0 };
        self.cells.iter().skip(col).step_by(width).take(take).copied()
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[u64] {
        &self.cells
    }

    /// Smallest cell value.
    pub fn min_value(&self) -> u64 {
        self.cells.iter().copied().min().unwrap_or(0)
    }

    /// Largest cell value.
    pub fn max_value(&self) -> u64 {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = u64;

    fn index(&self, (row, col): (usize, usize)) -> &u64 {
        assert!(
            row < self.height() && col < self.width(),
            "index ({}, {}) out of bounds for {} grid",
            row,
            col,
            self.dims
        );
        &self.cells[row * self.width() + col]
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({})", self.dims)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = (self.max_value().max(1).ilog10() + 1) as usize;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>cell$}", v)?;
            }
        }
        Ok(())
    }
}

/* ---- Serde ---- */

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let rows: Vec<&[u64]> = self.rows().collect();
        let mut state = serializer.serialize_struct("Grid", 3)?;
        state.serialize_field("height", &self.height())?;
        state.serialize_field("width", &self.width())?;
        state.serialize_field("cells", &rows)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct GridRepr {
            height: usize,
            width: usize,
            cells: Vec<Vec<u64>>,
        }

        let repr = GridRepr::deserialize(deserializer)?;
        let dims = Dimensions::new(repr.height, repr.width).map_err(D::Error::custom)?;
        if repr.cells.len() != dims.height() {
            return Err(D::Error::custom(alloc::format!(
                "expected {} rows, got {}",
                dims.height(),
                repr.cells.len()
            )));
        }
        if let Some(bad) = repr.cells.iter().find(|r| r.len() != dims.width()) {
            return Err(D::Error::custom(alloc::format!(
                "expected rows of {} cells, got {}",
                dims.width(),
                bad.len()
            )));
        }

        let cells = repr.cells.into_iter().flatten().collect();
        Ok(Self { dims, cells })
    }
}
