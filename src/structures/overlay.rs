//! Prime column mask laid over the Fermat grid.
//!
//! Every row of the mask is identical, so only one row is stored and it is
//! broadcast over `height` rows on read.

use alloc::vec::Vec;
use core::fmt;

use tracing::debug;

use crate::structures::dims::Dimensions;
use crate::structures::sieve::PrimeSieve;

/// Binary mask marking columns whose 1-based index is a prime below `width`.
///
/// Column `k` (0-based) is set iff `k + 1` is in `primes(width)`. Since the
/// sieve bound is exclusive, the last column (`q = width`) is never set.
///
/// # Example
///
/// ```
/// use fermat_grid::{Dimensions, PrimeMask};
///
/// let mask = PrimeMask::new(Dimensions::new(3, 8).unwrap());
/// assert_eq!(mask.row().collect::<Vec<_>>(), vec![0, 1, 1, 0, 1, 0, 1, 0]);
/// assert_eq!(mask.get(2, 6), Some(1));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PrimeMask {
    dims: Dimensions,
    columns: Vec<bool>,
}

impl PrimeMask {
    /// Build the mask from the primes below `dims.width()`.
    pub fn new(dims: Dimensions) -> Self {
        let sieve = PrimeSieve::new(dims.width());
        let columns: Vec<bool> = (0..dims.width()).map(|k| sieve.is_prime(k + 1)).collect();
        debug!(%dims, primes = sieve.count(), "prime overlay built");
        Self { dims, columns }
    }

    pub const fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Mask value at `(row, col)`: 1 on a prime column, 0 elsewhere.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.dims.height() {
            return None;
        }
        self.columns.get(col).map(|&set| set as u8)
    }

    /// Whether column `col` is marked.
    #[inline]
    pub fn is_set(&self, col: usize) -> bool {
        self.columns.get(col).copied().unwrap_or(false)
    }

    /// The single stored row as 0/1 values.
    pub fn row(&self) -> impl Iterator<Item = u8> + '_ {
        self.columns.iter().map(|&set| set as u8)
    }

    /// The stored row as booleans.
    pub fn columns(&self) -> &[bool] {
        &self.columns
    }

    /// 0-based indices of the marked columns.
    pub fn prime_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(k, &set)| set.then_some(k))
    }

    /// Materialize the full `height x width` mask.
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        let row: Vec<u8> = self.row().collect();
        (0..self.dims.height()).map(|_| row.clone()).collect()
    }
}

/// Build the overlay for a `height x width` grid.
pub fn prime_overlay(dims: Dimensions) -> PrimeMask {
    PrimeMask::new(dims)
}

impl fmt::Debug for PrimeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrimeMask({}, ", self.dims)?;
        for v in self.row() {
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

/* ---- Serde ---- */

#[cfg(feature = "serde")]
impl serde::Serialize for PrimeMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let row: Vec<u8> = self.row().collect();
        let mut state = serializer.serialize_struct("PrimeMask", 2)?;
        state.serialize_field("height", &self.dims.height())?;
        state.serialize_field("columns", &row)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PrimeMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct PrimeMaskRepr {
            height: usize,
            columns: Vec<u8>,
        }

        let repr = PrimeMaskRepr::deserialize(deserializer)?;
        let dims = Dimensions::new(repr.height, repr.columns.len()).map_err(D::Error::custom)?;
        let mask = Self::new(dims);
        if !mask.row().eq(repr.columns.iter().copied()) {
            return Err(D::Error::custom(
                "mask columns do not match the primes below the width",
            ));
        }
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn mask(height: usize, width: usize) -> PrimeMask {
        PrimeMask::new(Dimensions::new(height, width).unwrap())
    }

    #[test]
    fn width_ten() {
        let m = mask(2, 10);
        let row: Vec<u8> = m.row().collect();
        // q = 2, 3, 5, 7
        assert_eq!(row, vec![0, 1, 1, 0, 1, 0, 1, 0, 0, 0]);
        assert_eq!(m.prime_columns().collect::<Vec<_>>(), vec![1, 2, 4, 6]);
    }

    #[test]
    fn last_column_never_set() {
        // 11 is prime but not < 11
        let m = mask(1, 11);
        assert!(!m.is_set(10));
        let m = mask(1, 12);
        assert!(m.is_set(10));
    }

    #[test]
    fn tiny_widths() {
        assert_eq!(mask(4, 1).prime_columns().count(), 0);
        assert_eq!(mask(4, 2).prime_columns().count(), 0);
        assert_eq!(mask(4, 3).prime_columns().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn rows_identical() {
        let m = mask(5, 30);
        let matrix = m.to_matrix();
        assert_eq!(matrix.len(), 5);
        for row in &matrix {
            assert_eq!(row, &matrix[0]);
            assert_eq!(row.len(), 30);
        }
        for r in 0..5 {
            for k in 0..30 {
                assert_eq!(m.get(r, k), Some(matrix[0][k]));
            }
        }
    }

    #[test]
    fn get_out_of_bounds() {
        let m = mask(2, 5);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 5), None);
        assert!(!m.is_set(99));
    }

    #[test]
    fn free_function_matches() {
        let dims = Dimensions::new(3, 40).unwrap();
        assert_eq!(prime_overlay(dims), PrimeMask::new(dims));
    }

    #[test]
    fn debug_shows_row() {
        assert_eq!(alloc::format!("{:?}", mask(2, 6)), "PrimeMask(2x6, 011010)");
    }
}
