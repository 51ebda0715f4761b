//! End-to-end checks of the discriminant verifier.

use frey_discriminant::{
    check_formula, check_uniformity, check_valuation, random_cases, verify, TestCase,
    ValuationCase, ValuationOutcome,
};
use goldbach_core::{big_valuation, FreyCurve};
use num_bigint::BigInt;

#[test]
fn test_worked_example_exact_value() {
    // 2N = 30, p = 7: 2N - p = 23, N - p = 8
    let check = check_formula(TestCase::new(15, 7).unwrap());
    let expected = BigInt::from(2u32).pow(12)
        * BigInt::from(7u32).pow(6)
        * BigInt::from(23u32).pow(6)
        * BigInt::from(8u32).pow(4)
        * BigInt::from(15u32).pow(4);
    assert_eq!(check.direct, expected);
    assert_eq!(expected.to_string(), "14792452668935016284160000");
    assert_eq!(big_valuation(&check.direct, 5), Some(4));
}

#[test]
fn test_random_cases_all_match() {
    for case in random_cases(300, 100_000, 2024) {
        let check = check_formula(case);
        assert!(check.matches, "{}", check);
    }
}

#[test]
fn test_valuation_identity_over_prime_powers() {
    // N = r^k with p = 1: r never divides 1, 2N - 1 or N - 1
    for &(r, k) in &[(3u64, 1u32), (3, 4), (5, 2), (7, 3), (11, 2)] {
        let n = r.pow(k);
        let check = check_valuation(ValuationCase { n, p: 1, r, expected_ord_n: k });
        assert!(
            matches!(
                check.outcome,
                ValuationOutcome::Checked { ord_delta: Some(d), matches: true, .. } if d == 4 * k
            ),
            "{}",
            check
        );
    }
}

#[test]
fn test_uniformity_holds_for_other_conduits() {
    for &(n, r) in &[(21u64, 3u64), (21, 7), (45, 5), (49, 7)] {
        let report = check_uniformity(n, r);
        assert!(!report.values.is_empty());
        assert!(report.uniform(), "N={}, r={}: values {:?}", n, r, report.distinct);
        let ord_n = report.ord_n.unwrap();
        assert_eq!(report.distinct.iter().next(), Some(&Some(4 * ord_n)));
    }
}

#[test]
fn test_singular_curve_has_infinite_valuation() {
    let disc = FreyCurve::new(9, 9).discriminant();
    assert_eq!(big_valuation(&disc, 3), None);
}

#[test]
fn test_report_json_keeps_big_values_exact() {
    let report = verify(&random_cases(3, 50, 1));
    assert!(report.all_passed());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["formula"][0]["direct"], "14792452668935016284160000");
    assert_eq!(json["formula"][0]["case"]["n"], 15);
    assert_eq!(json["valuation"][0]["outcome"]["status"], "checked");
    assert_eq!(json["generated"].as_array().unwrap().len(), 3);
}
