use num_bigint::BigUint;
use proptest::prelude::*;

use fermat_grid::analysis::{column_report, ColumnKind};
use fermat_grid::{fermat_residue, gcd, is_prime, mod_pow, primes, Dimensions, Grid, PrimeMask};

fn arb_dims(max: usize) -> impl Strategy<Value = Dimensions> {
    (1..=max, 1..=max).prop_map(|(h, w)| Dimensions::new(h, w).unwrap())
}

fn arb_prime() -> impl Strategy<Value = u64> {
    prop::sample::select(primes(2000))
        .prop_map(|p| p as u64)
}

// ===== Grid =====

proptest! {
    #[test]
    fn fermat_holds_for_primes(p in arb_prime(), a in 1u64..100_000) {
        prop_assume!(a % p != 0);
        prop_assert_eq!(fermat_residue(a, p), 1);
    }
}

proptest! {
    #[test]
    fn first_column_is_zero(dims in arb_dims(60)) {
        let grid = Grid::fermat(dims);
        prop_assert!(grid.column(0).all(|v| v == 0));
    }
}

proptest! {
    #[test]
    fn cells_match_their_coordinates(dims in arb_dims(40)) {
        let grid = Grid::fermat(dims);
        for i in 0..dims.height() {
            for j in 0..dims.width() {
                let a = (dims.height() - i) as u64;
                let q = j as u64 + 1;
                prop_assert_eq!(grid[(i, j)], mod_pow(a, q - 1, q));
                prop_assert!(grid[(i, j)] < q || q == 1);
            }
        }
    }
}

proptest! {
    #[test]
    fn mod_pow_agrees_with_bigint(base in any::<u64>(), exp in 0u64..5000, modulus in 1u64..u64::MAX) {
        let expected = BigUint::from(base).modpow(&BigUint::from(exp), &BigUint::from(modulus));
        prop_assert_eq!(BigUint::from(mod_pow(base, exp, modulus)), expected);
    }
}

#[test]
fn full_power_agrees_with_bigint_at_corner() {
    // a^(q-1) materialized in full, as an arbitrary-precision reference
    let grid = Grid::fermat(Dimensions::new(1080, 1080).unwrap());
    for (row, col) in [(0, 1079), (0, 1068), (1, 1078), (79, 1000), (540, 539)] {
        let a = grid.base_for_row(row);
        let q = Grid::modulus_for_col(col);
        let full = BigUint::from(a).pow((q - 1) as u32) % BigUint::from(q);
        assert_eq!(BigUint::from(grid[(row, col)]), full, "a = {}, q = {}", a, q);
    }
}

#[test]
fn cell_a7_q5() {
    let grid = Grid::fermat(Dimensions::new(10, 10).unwrap());
    assert_eq!(grid[(10 - 7, 5 - 1)], 1);
}

// ===== Sieve =====

#[test]
fn sieve_known_values() {
    assert_eq!(primes(10), vec![2, 3, 5, 7]);
    assert_eq!(primes(2), Vec::<usize>::new());
    assert_eq!(primes(3), vec![2]);
}

proptest! {
    #[test]
    fn sieve_ascending_distinct_prime_bounded(n in 0usize..20_000) {
        let ps = primes(n);
        prop_assert!(ps.windows(2).all(|w| w[0] < w[1]));
        for &p in &ps {
            prop_assert!(p < n);
            prop_assert!(is_prime(p as u64));
        }
    }
}

proptest! {
    #[test]
    fn sieve_is_complete(n in 0usize..5000) {
        let expected: Vec<usize> = (0..n).filter(|&k| is_prime(k as u64)).collect();
        prop_assert_eq!(primes(n), expected);
    }
}

// ===== Overlay =====

proptest! {
    #[test]
    fn overlay_rows_identical_and_prime(dims in arb_dims(80)) {
        let mask = PrimeMask::new(dims);
        let matrix = mask.to_matrix();
        prop_assert_eq!(matrix.len(), dims.height());
        for row in &matrix {
            prop_assert_eq!(row, &matrix[0]);
        }
        for (k, &v) in matrix[0].iter().enumerate() {
            let q = k + 1;
            let expected = is_prime(q as u64) && q < dims.width();
            prop_assert_eq!(v == 1, expected, "column {}", k);
        }
    }
}

proptest! {
    #[test]
    fn overlay_aligns_with_ones(dims in arb_dims(80)) {
        let grid = Grid::fermat(dims);
        let mask = PrimeMask::new(dims);
        for k in mask.prime_columns() {
            let q = Grid::modulus_for_col(k);
            for (row, v) in grid.column(k).enumerate() {
                let a = grid.base_for_row(row);
                if a % q == 0 {
                    prop_assert_eq!(v, 0);
                } else {
                    prop_assert_eq!(v, 1);
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn report_marks_overlay_columns_prime(dims in arb_dims(80)) {
        let grid = Grid::fermat(dims);
        let mask = PrimeMask::new(dims);
        let report = column_report(&grid);
        for (k, stats) in report.iter().enumerate() {
            if mask.is_set(k) {
                prop_assert_eq!(stats.kind, ColumnKind::Prime);
                prop_assert_eq!(stats.ones, stats.coprime);
            }
            let coprime = (1..=dims.height() as u64)
                .filter(|&a| gcd(a, stats.modulus) == 1)
                .count();
            prop_assert_eq!(stats.coprime, coprime);
        }
    }
}
