//! Greatest common divisor and least common multiple.
//!
//! Results are magnitudes: signs of the inputs are ignored.

/// Folds `gcd` left to right over `values`. Empty input gives 0.
pub fn fold_gcd(values: &[i64]) -> u64 {
    values.iter().fold(0, |acc, v| gcd(acc, v.unsigned_abs()))
}

/// Folds `lcm` left to right over `values`, or `None` on `u64` overflow.
pub fn fold_lcm(values: &[i64]) -> Option<u64> {
    values
        .iter()
        .try_fold(1, |acc, v| lcm(acc, v.unsigned_abs()))
}

/// Euclid's algorithm. `gcd(a, 0) == a`, `gcd(0, 0) == 0`.
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `a * b / gcd(a, b)`, or `None` on overflow. Zero if either is zero.
fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(4, 6), 2);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(12, 0), 12);
        assert_eq!(gcd(0, 12), 12);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn lcm_basics() {
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(0, 6), Some(0));
        assert_eq!(lcm(0, 0), Some(0));
    }

    #[test]
    fn lcm_overflow_is_none() {
        assert_eq!(lcm(i64::MAX as u64, (i64::MAX - 1) as u64), None);
        assert_eq!(fold_lcm(&[i64::MAX, i64::MAX - 1]), None);
    }

    #[test]
    fn folds_ignore_sign() {
        assert_eq!(fold_gcd(&[-4, 6]), 2);
        assert_eq!(fold_gcd(&[4, -6]), 2);
        assert_eq!(fold_gcd(&[i64::MIN, 0]), 1 << 63);
        assert_eq!(fold_lcm(&[-4, 6]), Some(12));
    }

    #[test]
    fn folds() {
        assert_eq!(fold_gcd(&[12, 18, 24]), 6);
        assert_eq!(fold_lcm(&[2, 3, 4]), Some(12));
        assert_eq!(fold_lcm(&[4, 6]), Some(12));
        assert_eq!(fold_gcd(&[4, 6]), 2);
    }

    #[test]
    fn fold_identities() {
        assert_eq!(fold_gcd(&[]), 0);
        assert_eq!(fold_lcm(&[]), Some(1));
        assert_eq!(fold_gcd(&[-9]), 9);
    }
}
