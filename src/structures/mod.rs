pub mod dims;
pub mod grid;
pub mod overlay;
pub mod sieve;
