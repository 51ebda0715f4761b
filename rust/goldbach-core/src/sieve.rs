//! Sieve of Eratosthenes with both a membership table and the prime list.

/// Primes up to a fixed limit, built once and read-only afterward.
#[derive(Debug, Clone)]
pub struct PrimeSieve {
    limit: u64,
    is_prime: Vec<bool>,
    primes: Vec<u64>,
}

impl PrimeSieve {
    /// Sieve every integer in `0..=limit`.
    pub fn new(limit: u64) -> Self {
        if limit < 2 {
            return PrimeSieve {
                limit,
                is_prime: vec![false; limit as usize + 1],
                primes: Vec::new(),
            };
        }

        let n = limit as usize;
        let mut is_prime = vec![true; n + 1];
        is_prime[0] = false;
        is_prime[1] = false;

        let mut p = 2usize;
        while p * p <= n {
            if is_prime[p] {
                let mut multiple = p * p;
                while multiple <= n {
                    is_prime[multiple] = false;
                    multiple += p;
                }
            }
            p += 1;
        }

        let primes = (2..=n).filter(|&i| is_prime[i]).map(|i| i as u64).collect();

        PrimeSieve {
            limit,
            is_prime,
            primes,
        }
    }

    /// Upper bound (inclusive) the sieve was built for.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Membership test. Values past the limit are reported as not prime.
    pub fn is_prime(&self, k: u64) -> bool {
        k <= self.limit && self.is_prime[k as usize]
    }

    /// All primes up to the limit, ascending.
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    /// The ascending prefix of primes that are `<= bound`.
    pub fn primes_up_to(&self, bound: u64) -> &[u64] {
        let end = self.primes.partition_point(|&p| p <= bound);
        &self.primes[..end]
    }

    /// Number of primes found.
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }
}
