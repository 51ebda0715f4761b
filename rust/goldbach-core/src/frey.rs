//! The Goldbach-Frey quintic `y^2 = x(x^2 - p^2)(x^2 - (2N - p)^2)`.
//!
//! Its five roots are `0, ±p, ±(2N - p)`, and the discriminant of the
//! defining polynomial is the product of squared root differences. The paper
//! closes this to
//!
//! ```text
//! Δ = 2^12 · p^6 · (2N - p)^6 · (N - p)^4 · N^4
//! ```
//!
//! Both sides are evaluated here with arbitrary precision so callers can
//! compare them exactly.

use num_bigint::BigInt;
use num_traits::One;

/// A curve in the family, indexed by `(N, p)` with `2N = p + q`.
///
/// No ordering between `N` and `p` is enforced: sweeps over `p` routinely
/// pass `p > N`, where `N - p` goes negative and the fourth power absorbs
/// the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreyCurve {
    pub n: u64,
    pub p: u64,
}

impl FreyCurve {
    pub fn new(n: u64, p: u64) -> Self {
        FreyCurve { n, p }
    }

    /// The Goldbach partner `q = 2N - p`, signed.
    pub fn q(&self) -> i128 {
        2 * self.n as i128 - self.p as i128
    }

    /// `[0, p, -p, q, -q]`.
    pub fn roots(&self) -> [BigInt; 5] {
        let p = BigInt::from(self.p);
        let q = BigInt::from(self.q());
        [BigInt::from(0), p.clone(), -p, q.clone(), -q]
    }

    /// `∏_{i<j} (e_i - e_j)^2` over the roots.
    pub fn discriminant(&self) -> BigInt {
        discriminant_from_roots(&self.roots())
    }

    /// `2^12 · p^6 · q^6 · (N - p)^4 · N^4`.
    pub fn factored_discriminant(&self) -> BigInt {
        let p = BigInt::from(self.p);
        let q = BigInt::from(self.q());
        let n = BigInt::from(self.n);
        let gap = &n - &p;
        (BigInt::one() << 12u32) * p.pow(6) * q.pow(6) * gap.pow(4) * n.pow(4)
    }
}

/// Discriminant of a monic polynomial given its roots.
pub fn discriminant_from_roots(roots: &[BigInt]) -> BigInt {
    let mut disc = BigInt::one();
    for (i, a) in roots.iter().enumerate() {
        for b in &roots[i + 1..] {
            let diff = a - b;
            disc *= &diff * &diff;
        }
    }
    disc
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use std::str::FromStr;

    #[test]
    fn test_worked_example_n15_p7() {
        let curve = FreyCurve::new(15, 7);
        assert_eq!(curve.q(), 23);
        let expected = BigInt::from_str("14792452668935016284160000").unwrap();
        assert_eq!(curve.discriminant(), expected);
        assert_eq!(curve.factored_discriminant(), expected);
    }

    #[test]
    fn test_forms_agree_on_sweep() {
        for n in 2..60u64 {
            for p in (1..2 * n).step_by(2) {
                let curve = FreyCurve::new(n, p);
                assert_eq!(
                    curve.discriminant(),
                    curve.factored_discriminant(),
                    "forms disagree at N={}, p={}",
                    n,
                    p
                );
            }
        }
    }

    #[test]
    fn test_p_equal_n_is_singular() {
        // p = q = N gives a repeated root
        let curve = FreyCurve::new(11, 11);
        assert!(curve.discriminant().is_zero());
        assert!(curve.factored_discriminant().is_zero());
    }

    #[test]
    fn test_discriminant_from_roots_quadratic() {
        // x^2 - 5x + 6 = (x - 2)(x - 3): disc = 1
        let roots = [BigInt::from(2), BigInt::from(3)];
        assert_eq!(discriminant_from_roots(&roots), BigInt::one());
    }

    #[test]
    fn test_large_inputs_do_not_overflow() {
        let curve = FreyCurve::new(1_000_000_007, 999_999_937);
        assert_eq!(curve.discriminant(), curve.factored_discriminant());
        assert!(curve.discriminant().bits() > 128);
    }
}
