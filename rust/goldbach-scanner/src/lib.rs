//! Goldbach comet scanner.
//!
//! For every even `2N` in a window, count the ordered Goldbach
//! representations G(2N), compare them with the Hardy-Littlewood prediction
//!
//! ```text
//! HL(2N) = 2 · C2 · ∏_{r | 2N, r > 2} (r - 1)/(r - 2) · 2N / (ln 2N)^2
//! ```
//!
//! and bucket the ratio by the mod-6 orbit type of `2N`. The product term is
//! the static conduit ("wormhole") factor.

pub mod config;

use std::fmt;
use std::time::Instant;

use goldbach_core::{odd_prime_factors, PrimeSieve};
use serde::Serialize;

pub use config::{CliConfig, ConfigError};

/// Twin prime constant C2, carried as a literal.
pub const TWIN_PRIME_CONSTANT: f64 = 0.6601618158468;

/// Default scan window: `2N` from 10,000,000 over 2000 consecutive integers.
pub const DEFAULT_START: u64 = 10_000_000;
pub const DEFAULT_RANGE: u64 = 2000;

/// Errors raised by the scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Hardy-Littlewood prediction is undefined for 2N = {0} (needs 2N > 2)")]
    OutsideDomain(u64),

    #[error("{value} exceeds the sieve limit {limit}")]
    BeyondSieve { value: u64, limit: u64 },
}

/// Comet band of an even number, decided by its residue mod 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrbitType {
    /// `2N ≡ 0 (mod 6)`, i.e. `3 | N`: upper band.
    Resonant,
    /// `≡ 0 (mod 3)` but not mod 6. Never hit by even inputs.
    Stable,
    /// `3 ∤ 2N`: lower band.
    Generic,
}

impl OrbitType {
    /// Summary order.
    pub const ALL: [OrbitType; 3] = [OrbitType::Resonant, OrbitType::Stable, OrbitType::Generic];

    pub fn classify(two_n: u64) -> Self {
        if two_n % 6 == 0 {
            OrbitType::Resonant
        } else if two_n % 3 == 0 {
            OrbitType::Stable
        } else {
            OrbitType::Generic
        }
    }

    fn index(self) -> usize {
        match self {
            OrbitType::Resonant => 0,
            OrbitType::Stable => 1,
            OrbitType::Generic => 2,
        }
    }
}

impl fmt::Display for OrbitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width specifiers in table rows apply
        match self {
            OrbitType::Resonant => f.pad("Resonant (mod 6)"),
            OrbitType::Stable => f.pad("Stable (mod 3)"),
            OrbitType::Generic => f.pad("Generic"),
        }
    }
}

/// Ordered Goldbach count G(2N) = #{(p, q) : p + q = 2N, p, q prime}.
///
/// `(p, q)` and `(q, p)` are counted separately; `p = q = N` counts once.
pub fn goldbach_count(two_n: u64, sieve: &PrimeSieve) -> Result<u64, ScanError> {
    check_sieve(two_n, sieve)?;
    let count = sieve
        .primes()
        .iter()
        .take_while(|&&p| p < two_n)
        .filter(|&&p| sieve.is_prime(two_n - p))
        .count();
    Ok(count as u64)
}

/// G(2N) by a double loop over all primes `<= 2N`. Reference for
/// [`goldbach_count`].
pub fn goldbach_count_brute(two_n: u64, sieve: &PrimeSieve) -> Result<u64, ScanError> {
    check_sieve(two_n, sieve)?;
    let primes = sieve.primes_up_to(two_n);
    let mut count = 0u64;
    for &p in primes {
        for &q in primes {
            if p + q == two_n {
                count += 1;
            }
        }
    }
    Ok(count)
}

/// Static conduit factor `∏_{r | n, r odd prime} (r - 1)/(r - 2)`.
pub fn wormhole_factor(n: u64, sieve: &PrimeSieve) -> f64 {
    odd_prime_factors(n, sieve)
        .into_iter()
        .map(|r| (r - 1) as f64 / (r - 2) as f64)
        .product()
}

/// Hardy-Littlewood prediction for the ordered count G(2N).
pub fn hl_prediction(two_n: u64, sieve: &PrimeSieve) -> Result<f64, ScanError> {
    if two_n <= 2 {
        return Err(ScanError::OutsideDomain(two_n));
    }
    let x = two_n as f64;
    let log_x = x.ln();
    let integral = x / (log_x * log_x);
    Ok(2.0 * TWIN_PRIME_CONSTANT * wormhole_factor(two_n, sieve) * integral)
}

fn check_sieve(value: u64, sieve: &PrimeSieve) -> Result<(), ScanError> {
    if value > sieve.limit() {
        return Err(ScanError::BeyondSieve {
            value,
            limit: sieve.limit(),
        });
    }
    Ok(())
}

/// One scanned even number.
#[derive(Debug, Clone, Serialize)]
pub struct EvenRecord {
    pub two_n: u64,
    pub count: u64,
    pub predicted: f64,
    pub wormhole: f64,
    pub orbit: OrbitType,
    /// `count / predicted`, 0 when the prediction is not positive.
    pub ratio: f64,
}

impl EvenRecord {
    pub fn measure(two_n: u64, sieve: &PrimeSieve) -> Result<Self, ScanError> {
        let count = goldbach_count(two_n, sieve)?;
        let predicted = hl_prediction(two_n, sieve)?;
        let wormhole = wormhole_factor(two_n, sieve);
        let ratio = if predicted > 0.0 {
            count as f64 / predicted
        } else {
            0.0
        };
        Ok(EvenRecord {
            two_n,
            count,
            predicted,
            wormhole,
            orbit: OrbitType::classify(two_n),
            ratio,
        })
    }
}

/// Running statistics for one orbit type.
#[derive(Debug, Clone, Serialize)]
pub struct OrbitStats {
    pub orbit: OrbitType,
    pub samples: usize,
    pub ratio_sum: f64,
    pub wormhole_sum: f64,
}

impl OrbitStats {
    pub fn new(orbit: OrbitType) -> Self {
        OrbitStats {
            orbit,
            samples: 0,
            ratio_sum: 0.0,
            wormhole_sum: 0.0,
        }
    }

    pub fn record(&mut self, rec: &EvenRecord) {
        self.samples += 1;
        self.ratio_sum += rec.ratio;
        self.wormhole_sum += rec.wormhole;
    }

    pub fn mean_ratio(&self) -> Option<f64> {
        (self.samples > 0).then(|| self.ratio_sum / self.samples as f64)
    }

    pub fn mean_wormhole(&self) -> Option<f64> {
        (self.samples > 0).then(|| self.wormhole_sum / self.samples as f64)
    }
}

/// Everything a scan produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub start: u64,
    pub end: u64,
    pub primes_sieved: usize,
    pub records: Vec<EvenRecord>,
    /// In [`OrbitType::ALL`] order, empty classes included.
    pub per_orbit: Vec<OrbitStats>,
    pub overall_mean_ratio: Option<f64>,
}

impl ScanSummary {
    /// Orbit classes that received at least one sample.
    pub fn populated_orbits(&self) -> impl Iterator<Item = &OrbitStats> {
        self.per_orbit.iter().filter(|s| s.samples > 0)
    }
}

/// Scan window over even numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    pub start: u64,
    pub end: u64,
}

impl ScanWindow {
    /// Window `[start, start + range]`. The first even number scanned is
    /// `max(start, 4)` rounded up to even; 2 and below are outside the
    /// formula's domain.
    pub fn new(start: u64, range: u64) -> Self {
        let end = start.saturating_add(range);
        let first = start.max(4);
        let first = first + first % 2;
        ScanWindow { start: first, end }
    }

    /// Even numbers in the window, ascending. Empty when degenerate.
    pub fn evens(&self) -> impl Iterator<Item = u64> {
        let end = self.end;
        (self.start..=end).step_by(2)
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Whether the table shows `two_n`: the first ten evens, then every
    /// hundredth.
    pub fn is_displayed(&self, two_n: u64) -> bool {
        let offset = two_n - self.start;
        offset < 20 || offset % 200 == 0
    }
}

/// Sieve up to the window end and scan every even number in it.
pub fn scan(window: ScanWindow) -> Result<ScanSummary, ScanError> {
    let t0 = Instant::now();
    let sieve = PrimeSieve::new(window.end);
    log::info!(
        "Sieve up to {} found {} primes in {:.2}s",
        window.end,
        sieve.len(),
        t0.elapsed().as_secs_f64()
    );
    scan_with_sieve(window, &sieve)
}

/// Scan against a prebuilt sieve, which must reach the window end.
pub fn scan_with_sieve(window: ScanWindow, sieve: &PrimeSieve) -> Result<ScanSummary, ScanError> {
    let t0 = Instant::now();
    let mut per_orbit: Vec<OrbitStats> = OrbitType::ALL.iter().map(|&o| OrbitStats::new(o)).collect();
    let mut records = Vec::new();

    if !window.is_empty() {
        check_sieve(window.end, sieve)?;
    }

    for two_n in window.evens() {
        let rec = EvenRecord::measure(two_n, sieve)?;
        log::debug!(
            "2N={} G={} HL={:.1} ratio={:.4} orbit={}",
            rec.two_n,
            rec.count,
            rec.predicted,
            rec.ratio,
            rec.orbit
        );
        per_orbit[rec.orbit.index()].record(&rec);
        records.push(rec);
    }

    let overall_mean_ratio = if records.is_empty() {
        None
    } else {
        Some(records.iter().map(|r| r.ratio).sum::<f64>() / records.len() as f64)
    };

    log::info!(
        "Scanned {} even numbers in {:.2}s",
        records.len(),
        t0.elapsed().as_secs_f64()
    );

    Ok(ScanSummary {
        start: window.start,
        end: window.end,
        primes_sieved: sieve.len(),
        records,
        per_orbit,
        overall_mean_ratio,
    })
}
