//! Independent verification of the Goldbach-Frey discriminant.
//!
//! Theorem 3.2:      Δ = 2^12 · p^6 · (2N - p)^6 · (N - p)^4 · N^4
//! Theorem 5.1(iii): ord_r(Δ) = 4 · ord_r(N) when r ∤ p(2N - p)(N - p)
//! Theorem 5.1(ii):  for fixed N and r | N, ord_r(Δ) does not depend on p
//!
//! Every check evaluates the discriminant directly from the roots and
//! compares against the closed form with exact big-integer arithmetic.
//! A mismatch is a result, not an error: it is recorded with both values and
//! the remaining cases still run.

pub mod config;
pub mod generate;

use std::collections::BTreeSet;
use std::fmt;

use goldbach_core::{big_valuation, valuation, FreyCurve};
use num_bigint::BigInt;
use serde::{Serialize, Serializer};

pub use config::{CliConfig, ConfigError};
pub use generate::random_cases;

/// `(N, p)` pairs checked against Theorem 3.2.
pub const FORMULA_CASES: &[(u64, u64)] = &[
    (15, 7),   // 2N=30, 2N-p=23
    (10, 3),   // 2N=20, 2N-p=17
    (25, 7),   // 2N=50, 2N-p=43
    (50, 13),  // 2N=100, 2N-p=87
    (100, 29), // 2N=200, 2N-p=171
    (49, 3),   // N = 7^2, square factor
];

/// Cases for Theorem 5.1(iii).
pub const VALUATION_CASES: &[ValuationCase] = &[
    ValuationCase { n: 15, p: 7, r: 3, expected_ord_n: 1 },
    ValuationCase { n: 15, p: 7, r: 5, expected_ord_n: 1 },
    ValuationCase { n: 49, p: 3, r: 7, expected_ord_n: 2 },
    ValuationCase { n: 125, p: 7, r: 5, expected_ord_n: 3 },
    ValuationCase { n: 21, p: 5, r: 3, expected_ord_n: 1 },
    ValuationCase { n: 21, p: 5, r: 7, expected_ord_n: 1 },
    ValuationCase { n: 27, p: 5, r: 3, expected_ord_n: 3 },
];

/// Default static conduit for the uniformity sweep: r = 5 divides N = 15.
pub const UNIFORMITY_N: u64 = 15;
pub const UNIFORMITY_R: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("degenerate test case N={n}, p={p}: need N > p > 0")]
    Degenerate { n: u64, p: u64 },
}

/// A validated `(N, p)` test case with `N > p > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub n: u64,
    pub p: u64,
}

impl TestCase {
    pub fn new(n: u64, p: u64) -> Result<Self, VerifyError> {
        if p == 0 || p >= n {
            return Err(VerifyError::Degenerate { n, p });
        }
        Ok(TestCase { n, p })
    }

    pub fn curve(&self) -> FreyCurve {
        FreyCurve::new(self.n, self.p)
    }

    pub fn q(&self) -> u64 {
        2 * self.n - self.p
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "2N={:>4}, p={:>3}, 2N-p={:>3}", 2 * self.n, self.p, self.q())
    }
}

fn serialize_display<S: Serializer>(value: &BigInt, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}

/// Outcome of comparing the direct and factored discriminant.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaCheck {
    pub case: TestCase,
    #[serde(serialize_with = "serialize_display")]
    pub direct: BigInt,
    #[serde(serialize_with = "serialize_display")]
    pub factored: BigInt,
    pub matches: bool,
}

impl fmt::Display for FormulaCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matches {
            write!(f, "{}: ✓", self.case)
        } else {
            write!(
                f,
                "{}: ✗ MISMATCH (direct {} != factored {})",
                self.case, self.direct, self.factored
            )
        }
    }
}

/// Theorem 3.2 for one case.
pub fn check_formula(case: TestCase) -> FormulaCheck {
    let curve = case.curve();
    let direct = curve.discriminant();
    let factored = curve.factored_discriminant();
    let matches = direct == factored;
    if matches {
        log::debug!("Formula holds for N={}, p={}", case.n, case.p);
    } else {
        log::warn!(
            "Discriminant mismatch at N={}, p={}: direct {} vs factored {}",
            case.n,
            case.p,
            direct,
            factored
        );
    }
    FormulaCheck {
        case,
        direct,
        factored,
        matches,
    }
}

/// Run [`check_formula`] over raw `(N, p)` pairs. Degenerate pairs are
/// returned as errors in place; they do not stop the run.
pub fn check_formulas(cases: &[(u64, u64)]) -> Vec<Result<FormulaCheck, VerifyError>> {
    cases
        .iter()
        .map(|&(n, p)| TestCase::new(n, p).map(check_formula))
        .collect()
}

/// `(N, p, r)` with the valuation of N the case was written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValuationCase {
    pub n: u64,
    pub p: u64,
    pub r: u64,
    pub expected_ord_n: u32,
}

impl ValuationCase {
    /// `r ∤ p(2N - p)(N - p)`.
    pub fn hypothesis_holds(&self) -> bool {
        let curve = FreyCurve::new(self.n, self.p);
        let r = self.r as i128;
        let gap = self.n as i128 - self.p as i128;
        self.p as i128 % r != 0 && curve.q() % r != 0 && gap % r != 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValuationOutcome {
    /// `r` divides one of `p`, `2N - p`, `N - p`.
    Skipped,
    Checked {
        ord_n: Option<u32>,
        ord_delta: Option<u32>,
        /// `4 · ord_r(N)`.
        expected: Option<u32>,
        matches: bool,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ValuationCheck {
    pub case: ValuationCase,
    pub outcome: ValuationOutcome,
}

impl ValuationCheck {
    pub fn passed(&self) -> bool {
        match self.outcome {
            ValuationOutcome::Skipped => true,
            ValuationOutcome::Checked { matches, .. } => matches,
        }
    }
}

fn fmt_ord(v: Option<u32>) -> String {
    v.map_or_else(|| "∞".to_string(), |v| v.to_string())
}

impl fmt::Display for ValuationCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.case;
        write!(f, "2N={:>4}, p={:>3}, r={}: ", 2 * c.n, c.p, c.r)?;
        match &self.outcome {
            ValuationOutcome::Skipped => write!(f, "SKIP (hypothesis violated)"),
            ValuationOutcome::Checked {
                ord_n,
                ord_delta,
                expected,
                matches,
            } => write!(
                f,
                "ord_r(N)={}, ord_r(Δ)={}, 4·ord_r(N)={}  {}",
                fmt_ord(*ord_n),
                fmt_ord(*ord_delta),
                fmt_ord(*expected),
                if *matches { "✓" } else { "✗ MISMATCH" }
            ),
        }
    }
}

/// Theorem 5.1(iii) for one case.
///
/// Passing requires `ord_r(Δ) = 4 · ord_r(N)` and that `ord_r(N)` equals the
/// value the case was written for.
pub fn check_valuation(case: ValuationCase) -> ValuationCheck {
    if !case.hypothesis_holds() {
        log::info!("Skipping N={}, p={}, r={}: hypothesis violated", case.n, case.p, case.r);
        return ValuationCheck {
            case,
            outcome: ValuationOutcome::Skipped,
        };
    }

    let disc = FreyCurve::new(case.n, case.p).discriminant();
    let ord_delta = big_valuation(&disc, case.r);
    let ord_n = valuation(case.n, case.r);
    let expected = ord_n.map(|v| 4 * v);
    let matches = ord_delta.is_some() && ord_delta == expected && ord_n == Some(case.expected_ord_n);

    if !matches {
        log::warn!(
            "Valuation mismatch at N={}, p={}, r={}: ord_r(Δ)={:?}, 4·ord_r(N)={:?}",
            case.n,
            case.p,
            case.r,
            ord_delta,
            expected
        );
    }

    ValuationCheck {
        case,
        outcome: ValuationOutcome::Checked {
            ord_n,
            ord_delta,
            expected,
            matches,
        },
    }
}

/// Theorem 5.1(ii) sweep result.
#[derive(Debug, Clone, Serialize)]
pub struct UniformityReport {
    pub n: u64,
    pub r: u64,
    pub ord_n: Option<u32>,
    /// `(p, ord_r(Δ))` for every admissible `p`.
    pub values: Vec<(u64, Option<u32>)>,
    pub distinct: BTreeSet<Option<u32>>,
}

impl UniformityReport {
    /// A single valuation across all admissible `p`.
    pub fn uniform(&self) -> bool {
        self.distinct.len() == 1
    }
}

/// Sweep odd `p` in `[3, 2N)` with `2N - p > 1` and `r ∤ p(2N - p)(N - p)`,
/// recording `ord_r(Δ)` for each.
pub fn check_uniformity(n: u64, r: u64) -> UniformityReport {
    let mut values = Vec::new();
    for p in (3..2 * n).step_by(2) {
        let case = ValuationCase {
            n,
            p,
            r,
            expected_ord_n: 0,
        };
        let curve = FreyCurve::new(n, p);
        if curve.q() <= 1 || !case.hypothesis_holds() {
            continue;
        }
        let v = big_valuation(&curve.discriminant(), r);
        log::debug!("p={}: ord_{}(Δ) = {:?}", p, r, v);
        values.push((p, v));
    }

    let distinct = values.iter().map(|&(_, v)| v).collect();
    UniformityReport {
        n,
        r,
        ord_n: valuation(n, r),
        values,
        distinct,
    }
}

/// Everything one verification run produced.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub formula: Vec<FormulaCheck>,
    pub rejected: Vec<String>,
    pub valuation: Vec<ValuationCheck>,
    pub uniformity: UniformityReport,
    pub generated: Vec<FormulaCheck>,
}

impl VerificationReport {
    pub fn formula_passed(&self) -> bool {
        self.formula.iter().all(|c| c.matches)
    }

    pub fn valuation_passed(&self) -> bool {
        self.valuation.iter().all(ValuationCheck::passed)
    }

    pub fn uniformity_passed(&self) -> bool {
        self.uniformity.uniform()
    }

    pub fn generated_passed(&self) -> bool {
        self.generated.iter().all(|c| c.matches)
    }

    pub fn all_passed(&self) -> bool {
        self.formula_passed()
            && self.valuation_passed()
            && self.uniformity_passed()
            && self.generated_passed()
    }
}

/// Run the built-in cases plus any generated ones.
pub fn verify(generated: &[TestCase]) -> VerificationReport {
    let mut formula = Vec::new();
    let mut rejected = Vec::new();
    for result in check_formulas(FORMULA_CASES) {
        match result {
            Ok(check) => formula.push(check),
            Err(e) => rejected.push(e.to_string()),
        }
    }

    VerificationReport {
        formula,
        rejected,
        valuation: VALUATION_CASES.iter().copied().map(check_valuation).collect(),
        uniformity: check_uniformity(UNIFORMITY_N, UNIFORMITY_R),
        generated: generated.iter().copied().map(check_formula).collect(),
    }
}
