//! Shared arithmetic for the Goldbach mirror experiments.
//!
//! The scanner and the discriminant verifier both lean on the same small set
//! of exact routines: a sieve of Eratosthenes, trial-division primality,
//! p-adic valuations, and the discriminant of the Goldbach-Frey quintic
//! `y^2 = x(x^2 - p^2)(x^2 - (2N - p)^2)`.

pub mod arith;
pub mod frey;
pub mod sieve;

pub use arith::{big_valuation, is_prime_trial, odd_prime_factors, valuation};
pub use frey::FreyCurve;
pub use sieve::PrimeSieve;
