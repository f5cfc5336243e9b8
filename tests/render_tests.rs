#![cfg(feature = "render")]

use fermat_grid::plot::{plot_little_fermat, PlotOptions, DEFAULT_OVERLAY_ALPHA};
use fermat_grid::render::{normalize, Canvas, Colormap, ImageCanvas, Raster};
use fermat_grid::{Dimensions, Grid, GridError, PrimeMask};

fn dims(height: usize, width: usize) -> Dimensions {
    Dimensions::new(height, width).unwrap()
}

fn blend(src: u8, dst: u8, alpha: f64) -> u8 {
    (alpha * src as f64 + (1.0 - alpha) * dst as f64).round() as u8
}

#[test]
fn base_layer_uses_grid_colors() {
    let d = dims(24, 24);
    let mut canvas = ImageCanvas::new(d).unwrap();
    let grid = plot_little_fermat(&mut canvas, d, &PlotOptions::default()).unwrap();

    let range = Raster::range(&grid);
    for (row, col) in [(0, 0), (3, 4), (23, 23), (10, 12)] {
        let expected = Colormap::Viridis.map(normalize(grid[(row, col)] as f64, range));
        assert_eq!(canvas.pixel(row, col), Some(expected), "({}, {})", row, col);
    }
}

#[test]
fn overlay_lightens_prime_columns_only() {
    let d = dims(16, 16);
    let mut plain = ImageCanvas::new(d).unwrap();
    let mut overlaid = ImageCanvas::new(d).unwrap();
    let options = PlotOptions::default();
    let grid = plot_little_fermat(&mut plain, d, &options).unwrap();
    plot_little_fermat(&mut overlaid, d, &options.with_overlay_primes(true)).unwrap();

    let mask = PrimeMask::new(d);
    let white = Colormap::Gray.map(1.0);
    let black = Colormap::Gray.map(0.0);
    for row in 0..d.height() {
        for col in 0..d.width() {
            let base = plain.pixel(row, col).unwrap();
            let top = if mask.is_set(col) { white } else { black };
            let expected = [0, 1, 2].map(|i| blend(top[i], base[i], DEFAULT_OVERLAY_ALPHA));
            assert_eq!(overlaid.pixel(row, col), Some(expected));
        }
    }
    assert_eq!(grid.dims(), d);
}

#[test]
fn image_orientation_puts_largest_base_on_top() {
    let d = dims(5, 3);
    let grid = Grid::fermat(d);
    assert_eq!(grid.base_for_row(0), 5);
    let mut canvas = ImageCanvas::new(d).unwrap();
    canvas.render(&grid, Colormap::Gray).unwrap();
    // q = 2 column: a = 5 (odd) on top reads 1, a = 4 below reads 0
    assert_ne!(canvas.pixel(0, 1), canvas.pixel(1, 1));
    assert_eq!(canvas.pixel(1, 1), canvas.pixel(3, 1));
}

#[test]
fn show_writes_png() {
    let path = std::env::temp_dir().join(format!("fermat_grid_{}.png", std::process::id()));
    let d = dims(8, 12);
    let mut canvas = ImageCanvas::new(d).unwrap().with_output(&path);
    plot_little_fermat(&mut canvas, d, &PlotOptions::default().with_overlay_primes(true)).unwrap();
    canvas.show().unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn show_reports_unwritable_path() {
    let path = std::env::temp_dir()
        .join("fermat_grid_missing_dir")
        .join("nested")
        .join("out.png");
    let mut canvas = ImageCanvas::new(dims(2, 2)).unwrap().with_output(path);
    match canvas.show() {
        Err(GridError::Render(_)) => {}
        other => panic!("expected render error, got {:?}", other),
    }
}

#[test]
fn error_messages() {
    let err = Dimensions::new(0, 4).unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: height must be positive, got 0");

    let err = GridError::ShapeMismatch {
        expected: dims(2, 3),
        got: dims(3, 2),
    };
    assert_eq!(err.to_string(), "shape mismatch: expected 2x3, got 3x2");

    let err = Dimensions::new(usize::MAX, 3).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("grid too large: {}x3 cells overflow", usize::MAX)
    );
}
