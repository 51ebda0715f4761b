//! Goldbach comet scanner driver.
//!
//! Counts ordered Goldbach representations over a window of even numbers,
//! compares them with the Hardy-Littlewood prediction, and summarizes the
//! ratio per mod-6 orbit type. Ends with the worked discriminant example
//! 2N = 30, p = 7.

use std::time::Instant;

use goldbach_core::{FreyCurve, PrimeSieve};
use goldbach_scanner::{scan_with_sieve, CliConfig, ScanSummary, ScanWindow};

fn main() {
    env_logger::init();

    let config = match CliConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: goldbach-scanner [--start=<2N>] [--range=<width>] [--json]");
            std::process::exit(2);
        }
    };
    let window = config.window();

    if !config.json {
        println!("{}", "=".repeat(70));
        println!("  Project Mirror v2: Goldbach Comet Geometric Scanner");
        println!("  Static Conduit Verification (HL formula corrected)");
        println!("{}", "=".repeat(70));
        println!("[*] Sieve up to {}...", window.end);
    }

    let t0 = Instant::now();
    let sieve = PrimeSieve::new(window.end);
    let sieve_secs = t0.elapsed().as_secs_f64();
    log::info!("Sieve up to {} done in {:.2}s", window.end, sieve_secs);

    let summary = match scan_with_sieve(window, &sieve) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if config.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to serialize summary: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("[*] Found {} primes. ({:.2}s)", sieve.len(), sieve_secs);
    println!("{}", "-".repeat(70));
    print_table(window, &summary);
    print_orbit_stats(&summary);
    print_worked_example();
}

fn print_table(window: ScanWindow, summary: &ScanSummary) {
    println!("[*] Scanning 2N from {} to {}...", window.start, window.end);
    println!(
        "{:<12} | {:<10} | {:<12} | {:<8} | {:<8} | {}",
        "2N", "G(2N)", "HL Pred", "Ratio", "Wormhole", "Orbit Type"
    );
    println!("{}", "-".repeat(70));

    for rec in summary.records.iter().filter(|r| window.is_displayed(r.two_n)) {
        println!(
            "{:<12} | {:<10} | {:<12.1} | {:<8.4} | {:<8.4} | {}",
            rec.two_n, rec.count, rec.predicted, rec.ratio, rec.wormhole, rec.orbit
        );
    }
    println!("{}", "-".repeat(70));
}

fn print_orbit_stats(summary: &ScanSummary) {
    println!("\n[*] Statistics by orbit type:");
    for stats in summary.populated_orbits() {
        if let (Some(ratio), Some(wormhole)) = (stats.mean_ratio(), stats.mean_wormhole()) {
            println!(
                "    {:<20}: n={:<5} avg_ratio={:.6}  avg_wormhole={:.4}",
                stats.orbit, stats.samples, ratio, wormhole
            );
        }
    }

    match summary.overall_mean_ratio {
        Some(mean) => {
            println!("\n[*] Overall average ratio: {:.6}", mean);
            println!("[*] If HL formula is correct, ratio should be close to 1.0");
            println!("[*] Deviations from 1.0 reflect the integral approximation");
            println!("    (Li_2(n) vs n/(ln n)^2), which converges slowly.");
        }
        None => println!("\n[*] No even numbers in range; nothing to average."),
    }
}

fn print_worked_example() {
    println!("\n{}", "=".repeat(70));
    println!("[*] Discriminant verification (Theorem 2.1)");
    println!("{}", "=".repeat(70));

    // 2N = 30 = 7 + 23, both prime
    let curve = FreyCurve::new(15, 7);
    let roots = curve.roots();
    let disc = curve.discriminant();
    let predicted = curve.factored_discriminant();

    let roots: Vec<String> = roots.iter().map(|r| r.to_string()).collect();
    println!("  2N={}, p={}, 2N-p={}", 2 * curve.n, curve.p, curve.q());
    println!("  Roots: [{}]", roots.join(", "));
    println!("  Computed Δ = {}", disc);
    println!("  Formula  Δ = 2^12 · 7^6 · 23^6 · 8^4 · 15^4 = {}", predicted);
    if disc == predicted {
        println!("  Match: ✓");
    } else {
        log::warn!("Worked example mismatch: {} vs {}", disc, predicted);
        println!("  Match: ✗ — MISMATCH");
    }
}
