//! Sieve of Eratosthenes over odd candidates.
//!
//! Even numbers are never struck: 2 is taken as prime unconditionally and
//! every other even index is skipped when reading the sieve back. Each odd
//! prime `i <= sqrt(n)` strikes `i*i, i*i + 2i, i*i + 4i, ...`, stepping
//! over the even multiples.

use alloc::vec;
use alloc::vec::Vec;

use tracing::trace;

use crate::utils::floor_sqrt;

/// A completed sieve for all integers below `bound`.
///
/// # Example
///
/// ```
/// use fermat_grid::PrimeSieve;
///
/// let sieve = PrimeSieve::new(10);
/// assert!(sieve.is_prime(7));
/// assert!(!sieve.is_prime(9));
/// assert_eq!(sieve.iter().collect::<Vec<_>>(), vec![2, 3, 5, 7]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeSieve {
    bound: usize,
    /// `marks[k]` is meaningful only for odd `k >= 3`.
    marks: Vec<bool>,
}

impl PrimeSieve {
    /// Sieve every integer strictly less than `bound`.
    ///
    /// Time complexity: O(n log log n). Space: O(n).
    pub fn new(bound: usize) -> Self {
        let mut marks = vec![true; bound];
        let limit = floor_sqrt(bound as u64) as usize;

        for i in (3..=limit).step_by(2) {
            if marks[i] {
                for k in (i * i..bound).step_by(2 * i) {
                    marks[k] = false;
                }
            }
        }

        let sieve = Self { bound, marks };
        trace!(bound, primes = sieve.count(), "sieve built");
        sieve
    }

    /// Exclusive upper bound of the sieve.
    pub const fn bound(&self) -> usize {
        self.bound
    }

    /// Whether `k` is a prime below the bound.
    ///
    /// Anything at or beyond the bound reports `false`.
    #[inline]
    pub fn is_prime(&self, k: usize) -> bool {
        if k >= self.bound {
            return false;
        }
        match k {
            2 => true,
            _ if k < 3 || k % 2 == 0 => false,
            _ => self.marks[k],
        }
    }

    /// Primes below the bound in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        let two = if self.bound > 2 { Some(2) } else { None };
        two.into_iter()
            .chain((3..self.bound).step_by(2).filter(move |&k| self.marks[k]))
    }

    /// Number of primes below the bound.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Collect the primes into a vector.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

/// Ascending list of all primes strictly less than `n`.
///
/// `n <= 2` gives an empty list.
///
/// # Example
///
/// ```
/// use fermat_grid::primes;
///
/// assert_eq!(primes(10), vec![2, 3, 5, 7]);
/// assert_eq!(primes(3), vec![2]);
/// assert!(primes(2).is_empty());
/// ```
pub fn primes(n: usize) -> Vec<usize> {
    PrimeSieve::new(n).to_vec()
}
