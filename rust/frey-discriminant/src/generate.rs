//! Seeded generation of extra `(N, p)` cases.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::TestCase;

/// Draw `count` cases with `N` in `[2, max_n]` and odd `p` in `[1, N)`.
///
/// Uses a fixed seed for reproducibility. `max_n` below 2 yields no cases.
pub fn random_cases(count: usize, max_n: u64, seed: u64) -> Vec<TestCase> {
    if max_n < 2 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cases = Vec::with_capacity(count);

    while cases.len() < count {
        let n = rng.gen_range(2..=max_n);
        // odd p < N: p = 2k + 1 with 2k + 1 < N
        let k = rng.gen_range(0..(n - 1).div_ceil(2));
        let p = 2 * k + 1;
        if let Ok(case) = TestCase::new(n, p) {
            cases.push(case);
        }
    }

    cases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_cases_shape() {
        let cases = random_cases(200, 500, 42);
        assert_eq!(cases.len(), 200);
        for c in &cases {
            assert!(c.n >= 2 && c.n <= 500);
            assert!(c.p % 2 == 1 && c.p < c.n, "bad case {:?}", c);
        }
    }

    #[test]
    fn test_random_cases_reproducible() {
        assert_eq!(random_cases(50, 1000, 7), random_cases(50, 1000, 7));
        assert_ne!(random_cases(50, 1000, 7), random_cases(50, 1000, 8));
    }

    #[test]
    fn test_random_cases_degenerate_bound() {
        assert!(random_cases(10, 1, 42).is_empty());
        assert!(random_cases(0, 1000, 42).is_empty());
    }
}
