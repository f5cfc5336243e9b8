/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n). Used as a reference oracle and for
/// single lookups; the overlay goes through [`PrimeSieve`](crate::PrimeSieve).
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(0, 0)` is `0`.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Integer square root: the largest `r` with `r * r <= n`.
pub const fn floor_sqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }

    // Newton iteration from above; ceil(n / 2) avoids overflow at u64::MAX.
    let mut x = n;
    let mut y = n / 2 + (n & 1);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Compute `base^exp mod modulus` using square-and-multiply.
///
/// Intermediate products are held in `u128`, so any `u64` operands are safe
/// and the full power is never materialized.
///
/// Time complexity: O(log exp) multiplications.
///
/// # Panics
///
/// Panics if `modulus` is zero.
///
/// # Example
///
/// ```
/// use fermat_grid::mod_pow;
///
/// assert_eq!(mod_pow(3, 4, 5), 1); // Fermat: 3^(5-1) = 1 (mod 5)
/// assert_eq!(mod_pow(7, 0, 1), 0); // everything is 0 mod 1
/// assert_eq!(mod_pow(1080, 1079, 1080), 0);
/// ```
pub const fn mod_pow(base: u64, exp: u64, modulus: u64) -> u64 {
    assert!(modulus != 0, "mod_pow modulus must be non-zero");
    if modulus == 1 {
        return 0;
    }

    let m = modulus as u128;
    let mut base = base as u128 % m;
    let mut result: u128 = 1;
    let mut e = exp;

    while e > 0 {
        if e & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        e >>= 1;
    }
    result as u64
}
