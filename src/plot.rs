//! The plotting driver: grid first, then the optional prime overlay.

use tracing::{debug, info_span};

use crate::error::GridError;
use crate::render::{Canvas, Colormap};
use crate::structures::dims::Dimensions;
use crate::structures::grid::Grid;
use crate::structures::overlay::PrimeMask;

/// Opacity of the prime overlay unless configured otherwise.
pub const DEFAULT_OVERLAY_ALPHA: f64 = 0.3;

/// How [`plot_little_fermat`] draws its layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotOptions {
    /// Composite the prime column mask over the grid.
    pub overlay_primes: bool,
    pub base_colormap: Colormap,
    pub overlay_colormap: Colormap,
    pub overlay_alpha: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            overlay_primes: false,
            base_colormap: Colormap::Viridis,
            overlay_colormap: Colormap::Gray,
            overlay_alpha: DEFAULT_OVERLAY_ALPHA,
        }
    }
}

impl PlotOptions {
    pub fn with_overlay_primes(mut self, overlay_primes: bool) -> Self {
        self.overlay_primes = overlay_primes;
        self
    }

    pub fn with_colormap(mut self, cmap: Colormap) -> Self {
        self.base_colormap = cmap;
        self
    }

    pub fn with_overlay_alpha(mut self, alpha: f64) -> Self {
        self.overlay_alpha = alpha;
        self
    }
}

/// Plot `a^(q-1) mod q` for `a` in `1..=height` and `q` in `1..=width`.
///
/// Renders the grid as the base layer and, when `overlay_primes` is set,
/// the prime column mask on top at `overlay_alpha`. Returns the computed
/// grid. Call [`Canvas::show`] afterwards to flush the image.
///
/// # Errors
///
/// Propagates any error raised by the canvas.
///
/// # Example
///
/// ```
/// use fermat_grid::plot::{plot_little_fermat, PlotOptions};
/// use fermat_grid::render::ImageCanvas;
/// use fermat_grid::Dimensions;
///
/// let dims = Dimensions::new(32, 32).unwrap();
/// let mut canvas = ImageCanvas::new(dims).unwrap();
/// let options = PlotOptions::default().with_overlay_primes(true);
///
/// let grid = plot_little_fermat(&mut canvas, dims, &options).unwrap();
/// assert_eq!(grid.dims(), dims);
/// assert_eq!(canvas.layers(), 2);
/// ```
pub fn plot_little_fermat<C>(
    canvas: &mut C,
    dims: Dimensions,
    options: &PlotOptions,
) -> Result<Grid, GridError>
where
    C: Canvas + ?Sized,
{
    let _span = info_span!("plot_little_fermat", %dims, overlay = options.overlay_primes).entered();

    let grid = Grid::fermat(dims);
    canvas.render(&grid, options.base_colormap)?;

    if options.overlay_primes {
        let overlay = PrimeMask::new(dims);
        canvas.render_with_alpha(&overlay, options.overlay_colormap, options.overlay_alpha)?;
        debug!(alpha = options.overlay_alpha, "prime overlay drawn");
    }

    Ok(grid)
}
