//! Fibonacci sequence generation.

use bfhl_types::MAX_FIBONACCI_TERMS;

/// Returns the first `n` Fibonacci terms, starting `0, 1`.
///
/// `n` is capped at [`MAX_FIBONACCI_TERMS`], the longest prefix that fits
/// in a `u64`.
pub fn fibonacci(n: usize) -> Vec<u64> {
    let n = n.min(MAX_FIBONACCI_TERMS);
    let mut terms = Vec::with_capacity(n);
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        terms.push(a);
        // `b` runs two terms ahead and may saturate; it is never emitted then.
        (a, b) = (b, a.saturating_add(b));
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_terms_is_empty() {
        assert!(fibonacci(0).is_empty());
    }

    #[test]
    fn one_and_two_terms() {
        assert_eq!(fibonacci(1), vec![0]);
        assert_eq!(fibonacci(2), vec![0, 1]);
    }

    #[test]
    fn five_terms() {
        assert_eq!(fibonacci(5), vec![0, 1, 1, 2, 3]);
    }

    #[test]
    fn last_representable_term() {
        let terms = fibonacci(MAX_FIBONACCI_TERMS);
        assert_eq!(terms.len(), 94);
        assert_eq!(terms[93], 12_200_160_415_121_876_738);
    }

    #[test]
    fn oversized_request_is_capped() {
        assert_eq!(fibonacci(1_000).len(), MAX_FIBONACCI_TERMS);
    }
}
