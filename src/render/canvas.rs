//! Canvases that composite raster layers.

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};
use tracing::{debug, debug_span, info};

use super::colormap::{normalize, Colormap};
use super::Raster;
use crate::error::GridError;
use crate::structures::dims::Dimensions;

/// A drawing surface for raster layers.
///
/// Each layer is normalized to its own range, mapped through a colormap and
/// blended source-over: `out = alpha * src + (1 - alpha) * dst`.
pub trait Canvas {
    /// Draw an opaque layer.
    fn render(&mut self, raster: &dyn Raster, cmap: Colormap) -> Result<(), GridError> {
        self.render_with_alpha(raster, cmap, 1.0)
    }

    /// Draw a layer at opacity `alpha` in `[0, 1]`.
    fn render_with_alpha(
        &mut self,
        raster: &dyn Raster,
        cmap: Colormap,
        alpha: f64,
    ) -> Result<(), GridError>;

    /// Flush everything drawn so far to the output.
    fn show(&mut self) -> Result<(), GridError>;
}

/// In-memory RGB canvas with one pixel per cell.
///
/// Row 0 is the top of the image. [`show`](Canvas::show) writes a PNG when an
/// output path is configured and is a no-op otherwise.
///
/// # Example
///
/// ```
/// use fermat_grid::render::{Canvas, Colormap, ImageCanvas};
/// use fermat_grid::{Dimensions, Grid};
///
/// let dims = Dimensions::new(16, 16).unwrap();
/// let mut canvas = ImageCanvas::new(dims).unwrap();
/// canvas.render(&Grid::fermat(dims), Colormap::Viridis).unwrap();
///
/// assert_eq!(canvas.layers(), 1);
/// assert_eq!(canvas.image().dimensions(), (16, 16));
/// ```
#[derive(Debug, Clone)]
pub struct ImageCanvas {
    dims: Dimensions,
    image: RgbImage,
    output: Option<PathBuf>,
    layers: usize,
}

impl ImageCanvas {
    /// Create a black canvas.
    ///
    /// # Errors
    ///
    /// Returns `GridError::TooLarge` if a dimension does not fit the image
    /// backend's `u32` pixel coordinates.
    pub fn new(dims: Dimensions) -> Result<Self, GridError> {
        let too_large = |_| GridError::TooLarge {
            height: dims.height(),
            width: dims.width(),
        };
        let width = u32::try_from(dims.width()).map_err(too_large)?;
        let height = u32::try_from(dims.height()).map_err(too_large)?;

        Ok(Self {
            dims,
            image: RgbImage::new(width, height),
            output: None,
            layers: 0,
        })
    }

    /// Write the image to `path` as PNG on `show`.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Number of layers drawn so far.
    pub fn layers(&self) -> usize {
        self.layers
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Pixel color at `(row, col)`.
    pub fn pixel(&self, row: usize, col: usize) -> Option<[u8; 3]> {
        if row >= self.dims.height() || col >= self.dims.width() {
            return None;
        }
        Some(self.image.get_pixel(col as u32, row as u32).0)
    }
}

#[inline]
fn blend(src: u8, dst: u8, alpha: f64) -> u8 {
    (alpha * src as f64 + (1.0 - alpha) * dst as f64).round() as u8
}

impl Canvas for ImageCanvas {
    fn render_with_alpha(
        &mut self,
        raster: &dyn Raster,
        cmap: Colormap,
        alpha: f64,
    ) -> Result<(), GridError> {
        let got = raster.dims();
        if got != self.dims {
            return Err(GridError::ShapeMismatch {
                expected: self.dims,
                got,
            });
        }

        let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        let _span = debug_span!("render_layer", %cmap, alpha, layer = self.layers).entered();

        let range = raster.range();
        for (x, y, pixel) in self.image.enumerate_pixels_mut() {
            let value = raster.value(y as usize, x as usize);
            let src = cmap.map(normalize(value, range));
            let Rgb(dst) = *pixel;
            *pixel = Rgb([
                blend(src[0], dst[0], alpha),
                blend(src[1], dst[1], alpha),
                blend(src[2], dst[2], alpha),
            ]);
        }

        self.layers += 1;
        debug!(lo = range.0, hi = range.1, "layer composited");
        Ok(())
    }

    fn show(&mut self) -> Result<(), GridError> {
        let Some(path) = &self.output else {
            debug!(layers = self.layers, "no output configured, keeping image in memory");
            return Ok(());
        };

        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| GridError::Render(e.to_string()))?;
        info!(path = %path.display(), dims = %self.dims, layers = self.layers, "image written");
        Ok(())
    }
}
