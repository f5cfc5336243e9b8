use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fermat_grid::analysis::{column_report, ReportSummary};
use fermat_grid::plot::{plot_little_fermat, PlotOptions, DEFAULT_OVERLAY_ALPHA};
use fermat_grid::render::{Canvas, Colormap, ImageCanvas};
use fermat_grid::{Dimensions, Grid};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

#[derive(Parser)]
#[command(
    name = "fermat-grid",
    version,
    about = "Plot a^(q-1) mod q for every base a and modulus q"
)]
struct Cli {
    #[arg(long, env = "FERMAT_HEIGHT", default_value_t = 1080, help = "Largest base a")]
    height: usize,

    #[arg(long, env = "FERMAT_WIDTH", default_value_t = 1080, help = "Largest modulus q")]
    width: usize,

    #[arg(long, env = "FERMAT_OVERLAY_PRIMES", help = "Overlay a mask on prime columns")]
    overlay_primes: bool,

    #[arg(long, env = "FERMAT_OVERLAY_ALPHA", default_value_t = DEFAULT_OVERLAY_ALPHA, help = "Opacity of the prime overlay")]
    overlay_alpha: f64,

    #[arg(long, env = "FERMAT_COLORMAP", value_enum, default_value_t = Colormap::Viridis)]
    colormap: Colormap,

    #[arg(short, long, env = "FERMAT_OUTPUT", default_value = "little_fermat.png", help = "Where to write the PNG")]
    output: PathBuf,

    #[arg(long, env = "FERMAT_LOG_LEVEL", default_value_t = Level::WARN, help = "Default log level, overridden by RUST_LOG")]
    log_level: Level,
}

fn setup_tracing_with_log_level(level: Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Logs the column report; skipped entirely unless `info` is enabled.
fn log_column_summary(grid: &Grid) -> Option<ReportSummary> {
    if !tracing::enabled!(Level::INFO) {
        return None;
    }
    let summary = ReportSummary::from_report(&column_report(grid));
    info!(%summary, "column report");
    Some(summary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing_with_log_level(cli.log_level);

    let dims = Dimensions::new(cli.height, cli.width)?;
    let options = PlotOptions::default()
        .with_overlay_primes(cli.overlay_primes)
        .with_colormap(cli.colormap)
        .with_overlay_alpha(cli.overlay_alpha);

    let mut canvas = ImageCanvas::new(dims)?.with_output(&cli.output);
    let grid = plot_little_fermat(&mut canvas, dims, &options)?;

    log_column_summary(&grid);

    canvas
        .show()
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    println!("{}", cli.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::fermat(Dimensions::new(10, 10).unwrap())
    }

    #[test]
    fn column_summary_skipped_below_info() {
        let subscriber = Registry::default().with(EnvFilter::new("warn"));
        tracing::subscriber::with_default(subscriber, || {
            assert_eq!(log_column_summary(&grid()), None);
        });
    }

    #[test]
    fn column_summary_computed_at_info() {
        let subscriber = Registry::default().with(EnvFilter::new("info"));
        tracing::subscriber::with_default(subscriber, || {
            let summary = log_column_summary(&grid()).unwrap();
            assert_eq!(summary.primes, 4);
            assert_eq!(summary.composites, 5);
        });
    }
}
