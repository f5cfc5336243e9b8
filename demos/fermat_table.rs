//! Fermat Table
//!
//! Prints a small grid of a^(q-1) mod q with prime columns marked, and the
//! per-column report underneath.
//!
//! Run with: cargo run --example fermat_table

use fermat_grid::analysis::{column_report, ReportSummary};
use fermat_grid::{Dimensions, Grid, PrimeMask};

fn main() {
    let dims = Dimensions::new(12, 16).unwrap();
    let grid = Grid::fermat(dims);
    let mask = PrimeMask::new(dims);

    println!("=== a^(q-1) mod q for a in 1..=12, q in 1..=16 ===\n");

    print!("  q ");
    for col in 0..dims.width() {
        let marker = if mask.is_set(col) { '*' } else { ' ' };
        print!("{:>3}{}", Grid::modulus_for_col(col), marker);
    }
    println!();

    for (row, values) in grid.rows().enumerate() {
        print!("{:>3} ", grid.base_for_row(row));
        for v in values {
            print!("{:>3} ", v);
        }
        println!();
    }

    println!("\n(* = prime column below the width)\n");

    let report = column_report(&grid);
    for stats in &report {
        println!(
            "q = {:>2}: {:>2}/{:>2} coprime rows read 1  ({})",
            stats.modulus, stats.ones, stats.coprime, stats.kind
        );
    }
    println!("\n{}", ReportSummary::from_report(&report));
}
