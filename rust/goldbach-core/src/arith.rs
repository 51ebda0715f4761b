//! Exact integer primitives: trial-division primality, odd prime factors and
//! p-adic valuations on machine words and big integers.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;

use crate::sieve::PrimeSieve;

/// Deterministic primality by trial division up to sqrt(n).
pub fn is_prime_trial(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Distinct odd primes dividing `n`, ascending.
///
/// Powers of 2 are removed first, so whatever cofactor survives division by
/// every odd prime up to its square root is itself an odd prime. The sieve
/// only speeds up the search; divisors past its limit fall back to odd trial
/// division.
pub fn odd_prime_factors(n: u64, sieve: &PrimeSieve) -> Vec<u64> {
    let mut factors = Vec::new();
    if n == 0 {
        return factors;
    }

    let mut rest = n >> n.trailing_zeros();

    let mut last_tried = 2u64;
    for &p in sieve.primes() {
        if p == 2 {
            continue;
        }
        if p * p > rest {
            break;
        }
        if rest % p == 0 {
            factors.push(p);
            while rest % p == 0 {
                rest /= p;
            }
        }
        last_tried = p;
    }

    // Sieve ran out before sqrt(rest): continue with odd candidates.
    let mut d = if last_tried == 2 { 3 } else { last_tried + 2 };
    while d * d <= rest {
        if rest % d == 0 {
            factors.push(d);
            while rest % d == 0 {
                rest /= d;
            }
        }
        d += 2;
    }

    if rest > 1 {
        factors.push(rest);
    }
    factors
}

/// `ord_r(n)`: the exponent of `r` in `n`, by repeated division.
///
/// `None` stands for an infinite valuation (`n == 0`) or a base below 2.
pub fn valuation(mut n: u64, r: u64) -> Option<u32> {
    if n == 0 || r < 2 {
        return None;
    }
    let mut v = 0u32;
    while n % r == 0 {
        n /= r;
        v += 1;
    }
    Some(v)
}

/// `ord_r(|n|)` for a big integer. Same conventions as [`valuation`].
pub fn big_valuation(n: &BigInt, r: u64) -> Option<u32> {
    if n.is_zero() || r < 2 {
        return None;
    }
    let r = BigUint::from(r);
    let mut m = n.magnitude().clone();
    let mut v = 0u32;
    loop {
        let (q, rem) = m.div_rem(&r);
        if !rem.is_zero() {
            break;
        }
        m = q;
        v += 1;
    }
    Some(v)
}
