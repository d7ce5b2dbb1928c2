//! Primality by trial division.

/// Returns `true` if `n` is prime. Integers below 2 are not prime.
///
/// Trial division by 2, 3 and then `6k ± 1` while `i * i <= n`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5i64;
    // `i <= n / i` is `i * i <= n` without overflow.
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Keeps the primes of `values`, preserving order.
pub fn filter_primes(values: &[i64]) -> Vec<i64> {
    values.iter().copied().filter(|n| is_prime(*n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_two_is_not_prime() {
        for n in [i64::MIN, -7, -1, 0, 1] {
            assert!(!is_prime(n), "{n}");
        }
    }

    #[test]
    fn small_primes() {
        let primes: Vec<i64> = (0..50).filter(|n| is_prime(*n)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn squares_of_primes_are_composite() {
        for p in [5i64, 7, 11, 13, 9_973] {
            assert!(!is_prime(p * p), "{}", p * p);
        }
    }

    #[test]
    fn large_prime() {
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
    }

    #[test]
    fn filter_preserves_order() {
        assert_eq!(filter_primes(&[1, 2, 3, 4, 5, 6, 7]), vec![2, 3, 5, 7]);
        assert_eq!(filter_primes(&[7, 4, 2, 7]), vec![7, 2, 7]);
    }
}
