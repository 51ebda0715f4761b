//! verify_discriminant: independent check of the Goldbach-Frey discriminant.
//!
//! Runs the built-in Theorem 3.2 and 5.1 cases, the uniformity sweep at
//! (N, r) = (15, 5), and optionally a batch of seeded random cases.

use frey_discriminant::{random_cases, verify, CliConfig, FormulaCheck, VerificationReport};

fn main() {
    env_logger::init();

    let config = match CliConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: frey-discriminant [--random=<count>] [--max-n=<N>] [--seed=<u64>] [--json]");
            std::process::exit(2);
        }
    };

    let generated = random_cases(config.random, config.max_n, config.seed);
    log::info!(
        "Generated {} random cases (max N {}, seed {})",
        generated.len(),
        config.max_n,
        config.seed
    );

    let report = verify(&generated);

    if config.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!();
    print_formula(&report);
    print_valuation(&report);
    print_uniformity(&report);
    if !report.generated.is_empty() {
        print_generated(&report, &config);
    }
    print_summary(&report);
}

fn header(lines: &[&str]) {
    println!("{}", "=".repeat(60));
    for line in lines {
        println!("{}", line);
    }
    println!("{}", "=".repeat(60));
}

fn verdict(passed: bool) -> &'static str {
    if passed {
        "ALL PASSED ✓"
    } else {
        "SOME FAILED ✗"
    }
}

fn pass_fail(passed: bool) -> &'static str {
    if passed {
        "PASS ✓"
    } else {
        "FAIL ✗"
    }
}

fn print_formula(report: &VerificationReport) {
    header(&[
        "Theorem 3.2: Discriminant Formula",
        "Δ = 2^12 · p^6 · (2N-p)^6 · (N-p)^4 · N^4",
    ]);
    for check in &report.formula {
        println!("  {}", check);
    }
    for reason in &report.rejected {
        println!("  REJECTED: {}", reason);
    }
    println!("\n  Result: {}\n", verdict(report.formula_passed()));
}

fn print_valuation(report: &VerificationReport) {
    header(&[
        "Theorem 5.1(iii): ord_r(Δ) = 4·ord_r(N)",
        "for r > 2 with r ∤ p(2N-p)(N-p)",
    ]);
    for check in &report.valuation {
        println!("  {}", check);
    }
    println!("\n  Result: {}\n", verdict(report.valuation_passed()));
}

fn print_uniformity(report: &VerificationReport) {
    header(&[
        "Theorem 5.1(ii): Uniform conductor at static conduit",
        "ord_r(Δ) is the same for all p with r ∤ p(2N-p)(N-p)",
    ]);

    let u = &report.uniformity;
    let ord_n = u.ord_n.map_or_else(|| "∞".to_string(), |v| v.to_string());
    let expected = u.ord_n.map_or_else(|| "∞".to_string(), |v| (4 * v).to_string());
    println!("  N={}, r={}, ord_r(N)={}", u.n, u.r, ord_n);
    println!("  Expected ord_r(Δ) = 4·{} = {}", ord_n, expected);
    println!();
    for &(p, v) in &u.values {
        let v = v.map_or_else(|| "∞".to_string(), |v| v.to_string());
        println!("    p={:>3}: ord_{}(Δ) = {}", p, u.r, v);
    }

    let values: Vec<String> = u
        .distinct
        .iter()
        .map(|v| v.map_or_else(|| "∞".to_string(), |v| v.to_string()))
        .collect();
    println!(
        "\n  Uniform: {} (values: {{{}}})\n",
        if u.uniform() { "✓" } else { "✗" },
        values.join(", ")
    );
}

fn print_generated(report: &VerificationReport, config: &CliConfig) {
    header(&[
        "Theorem 3.2 on generated cases",
        format!(
            "{} cases, N ≤ {}, seed {}",
            report.generated.len(),
            config.max_n,
            config.seed
        )
        .as_str(),
    ]);
    let failures: Vec<&FormulaCheck> = report.generated.iter().filter(|c| !c.matches).collect();
    for check in &failures {
        println!("  {}", check);
    }
    println!(
        "  {} of {} cases match",
        report.generated.len() - failures.len(),
        report.generated.len()
    );
    println!("\n  Result: {}\n", verdict(report.generated_passed()));
}

fn print_summary(report: &VerificationReport) {
    header(&["FINAL SUMMARY"]);
    println!(
        "  Theorem 3.2 (discriminant formula):     {}",
        pass_fail(report.formula_passed())
    );
    println!(
        "  Theorem 5.1(iii) (ord_r = 4·ord_r(N)):  {}",
        pass_fail(report.valuation_passed())
    );
    println!(
        "  Theorem 5.1(ii) (uniformity):           {}",
        pass_fail(report.uniformity_passed())
    );
    if !report.generated.is_empty() {
        println!(
            "  Generated cases ({:>4}):                 {}",
            report.generated.len(),
            pass_fail(report.generated_passed())
        );
    }
    println!();
}
