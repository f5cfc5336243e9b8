//! Render a Fermat grid with the prime overlay to a PNG.
//!
//! Run with: cargo run --example render_png -- [height] [width] [output]

use fermat_grid::plot::{plot_little_fermat, PlotOptions};
use fermat_grid::render::{Canvas, Colormap, ImageCanvas};
use fermat_grid::Dimensions;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let height = args.next().map(|s| s.parse()).transpose()?.unwrap_or(256);
    let width = args.next().map(|s| s.parse()).transpose()?.unwrap_or(256);
    let output = args.next().unwrap_or_else(|| "fermat_demo.png".to_string());

    let dims = Dimensions::new(height, width)?;
    let mut canvas = ImageCanvas::new(dims)?.with_output(&output);
    let options = PlotOptions::default()
        .with_colormap(Colormap::Magma)
        .with_overlay_primes(true);

    let grid = plot_little_fermat(&mut canvas, dims, &options)?;
    canvas.show()?;

    println!("wrote {} ({} grid, max residue {})", output, grid.dims(), grid.max_value());
    Ok(())
}
