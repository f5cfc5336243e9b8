//! Fermat's little theorem as a picture.
//!
//! For every base `a` in `1..=height` and modulus `q` in `1..=width` the grid
//! holds `a^(q-1) mod q`. Prime columns light up as 1 except where `q`
//! divides `a`, and an optional mask marks those prime columns on top.
//!
//! The core (grid, sieve, overlay, analysis) is `no_std` with `alloc`; the
//! `render` feature adds the colormapped canvas and the plotting driver.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod analysis;
pub mod error;
#[cfg(feature = "render")]
pub mod plot;
#[cfg(feature = "render")]
pub mod render;
pub mod structures;
pub mod utils;

pub use error::GridError;
pub use structures::dims::Dimensions;
pub use structures::grid::{fermat_residue, Grid};
pub use structures::overlay::{prime_overlay, PrimeMask};
pub use structures::sieve::{primes, PrimeSieve};
pub use utils::{floor_sqrt, gcd, is_prime, mod_pow};
