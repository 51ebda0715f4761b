//! Property checks for the Goldbach scanner over real windows.

use goldbach_core::{is_prime_trial, PrimeSieve};
use goldbach_scanner::{
    goldbach_count, goldbach_count_brute, scan, OrbitType, ScanWindow,
};

#[test]
fn test_count_matches_brute_force() {
    let sieve = PrimeSieve::new(2_000);
    for two_n in (4..=2_000u64).step_by(2) {
        assert_eq!(
            goldbach_count(two_n, &sieve).unwrap(),
            goldbach_count_brute(two_n, &sieve).unwrap(),
            "optimized and brute-force counts disagree at 2N={}",
            two_n
        );
    }
}

#[test]
fn test_count_is_odd_exactly_when_n_is_prime() {
    // Ordered pairs come in (p, q)/(q, p) couples; only p = q = N is unpaired.
    let sieve = PrimeSieve::new(5_000);
    for two_n in (4..=5_000u64).step_by(2) {
        let g = goldbach_count(two_n, &sieve).unwrap();
        assert_eq!(
            g % 2 == 1,
            is_prime_trial(two_n / 2),
            "parity of G({}) = {} does not match primality of N",
            two_n,
            g
        );
    }
}

#[test]
fn test_every_even_has_a_representation() {
    let sieve = PrimeSieve::new(20_000);
    for two_n in (4..=20_000u64).step_by(2) {
        assert!(goldbach_count(two_n, &sieve).unwrap() > 0, "no representation for {}", two_n);
    }
}

#[test]
fn test_ratio_trends_toward_one() {
    let small = scan(ScanWindow::new(1_000, 1_000)).unwrap();
    let large = scan(ScanWindow::new(200_000, 2_000)).unwrap();

    let small_mean = small.overall_mean_ratio.unwrap();
    let large_mean = large.overall_mean_ratio.unwrap();

    // n/(ln n)^2 undershoots Li_2, so the ratio approaches 1 from above.
    assert!(large_mean > 1.0 && large_mean < 1.3, "mean ratio {} at 2N ~ 2e5", large_mean);
    assert!(
        large_mean < small_mean,
        "ratio should shrink with 2N: {} (2e5) vs {} (1e3)",
        large_mean,
        small_mean
    );
}

#[test]
fn test_conduit_factor_levels_the_bands() {
    let summary = scan(ScanWindow::new(200_000, 2_000)).unwrap();
    let resonant = summary.per_orbit.iter().find(|s| s.orbit == OrbitType::Resonant).unwrap();
    let generic = summary.per_orbit.iter().find(|s| s.orbit == OrbitType::Generic).unwrap();

    assert!(resonant.samples > 0 && generic.samples > 0);
    assert_eq!(resonant.samples + generic.samples, summary.records.len());

    // Without the wormhole factor the resonant band sits ~2x higher.
    let gap = (resonant.mean_ratio().unwrap() - generic.mean_ratio().unwrap()).abs();
    assert!(gap < 0.05, "orbit bands differ by {} after correction", gap);
    assert!(resonant.mean_wormhole().unwrap() > generic.mean_wormhole().unwrap());
}

#[test]
fn test_summary_serializes_to_json() {
    let summary = scan(ScanWindow::new(100, 20)).unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["records"].as_array().unwrap().len(), 11);
    assert_eq!(json["records"][0]["two_n"], 100);
    assert_eq!(json["records"][0]["orbit"], "Generic");
    assert_eq!(json["per_orbit"].as_array().unwrap().len(), 3);
}
