//! Raster rendering: colormapped layers composited onto a canvas.
//!
//! Layers are anything implementing [`Raster`]. A [`Canvas`] maps each layer
//! through a [`Colormap`] after normalizing it to its own value range and
//! blends it over what is already drawn.

pub mod canvas;
pub mod colormap;

pub use canvas::{Canvas, ImageCanvas};
pub use colormap::{normalize, Colormap, UnknownColormap};

use crate::structures::dims::Dimensions;
use crate::structures::grid::Grid;
use crate::structures::overlay::PrimeMask;

/// A two-dimensional array of values that can be drawn.
pub trait Raster {
    fn dims(&self) -> Dimensions;

    /// Value at `(row, col)`. Callers stay within `dims()`.
    fn value(&self, row: usize, col: usize) -> f64;

    /// `(min, max)` over all cells, used for normalization.
    fn range(&self) -> (f64, f64) {
        let dims = self.dims();
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for row in 0..dims.height() {
            for col in 0..dims.width() {
                let v = self.value(row, col);
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        (lo, hi)
    }
}

impl Raster for Grid {
    fn dims(&self) -> Dimensions {
        Grid::dims(self)
    }

    #[inline]
    fn value(&self, row: usize, col: usize) -> f64 {
        self[(row, col)] as f64
    }

    fn range(&self) -> (f64, f64) {
        (self.min_value() as f64, self.max_value() as f64)
    }
}

impl Raster for PrimeMask {
    fn dims(&self) -> Dimensions {
        PrimeMask::dims(self)
    }

    /// Broadcasts the stored row; `row` is ignored.
    #[inline]
    fn value(&self, _row: usize, col: usize) -> f64 {
        self.is_set(col) as u8 as f64
    }

    fn range(&self) -> (f64, f64) {
        let any = self.columns().iter().any(|&set| set);
        let all = self.columns().iter().all(|&set| set);
        (if all { 1.0 } else { 0.0 }, if any { 1.0 } else { 0.0 })
    }
}
