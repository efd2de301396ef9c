#![cfg_attr(not(test), no_std)]
//! A software implementation of [posit arithmetic](https://posithub.org/docs/posit_standard-2.pdf)
//! together with the *quire*, the wide fixed-point accumulator that lets you sum posits and
//! products of posits with no intermediate rounding at all.
//!
//! # Introduction
//!
//! Posits are a tapered-precision floating point format proposed by John Gustafson, standardised
//! in 2022. A posit trades a fixed exponent field for a variable-length *regime* run, spending
//! bits on precision near ±1 and on range at the extremes. There are exactly two special values:
//! zero (`000…0`) and NaR, "not a real" (`100…0`); everything else is a regular number, and the
//! two's complement order of the bit patterns is the numeric order.
//!
//! Useful references:
//!
//!   - [Posit standard](https://posithub.org/docs/posit_standard-2.pdf) (2022)
//!   - [Original extended paper](https://posithub.org/docs/Posits4.pdf) (2017)
//!
//! # Usage
//!
//! ```
//! // Use standard posit types, or define your own.
//! # use posit_arith::Posit;
//! use posit_arith::{p8, p16, p32, p64};  // Standard: n bits, 2 exponent bits
//! type MyPosit = Posit<24, 3, i32>;  // Non-standard: 24 bits, 3 exponent bits
//!
//! // Create posits from ints, IEEE floats, constants, or a raw bit representation.
//! # use posit_arith::{RoundFrom, RoundInto};
//! let a = p32::round_from(2.71_f64);
//! let b = p32::round_from(42_i32);
//! let c = p32::from_bits(0x7f001337);
//! let d = p32::MIN_POSITIVE;
//!
//! // Perform basic arithmetic and comparisons with the usual operators.
//! assert!(p16::round_from(2.14_f32) + p16::ONE == 3.14_f32.round_into());
//! assert!(p16::MIN_POSITIVE < 1e-15_f32.round_into());
//!
//! // Sum with no intermediate rounding via the quire: every product is accumulated exactly and
//! // the result is rounded exactly once at the end.
//! use posit_arith::q16;
//! let x = [p16::MAX, p16::ONE, -p16::ONE, p16::MAX];
//! let y = [-p16::ONE, p16::ONE, -p16::ONE, p16::ONE];
//! assert_eq!(q16::dot(&x, &y), p16::ONE + p16::ONE);
//! ```
//!
//! Every rounding in this crate is the posit-standard rounding: round to nearest, ties to the
//! even bit pattern, saturating at `MAX`/`MIN_POSITIVE` rather than overflowing to NaR or
//! underflowing to zero.

mod posit;
mod quire;
mod word;

pub use posit::Posit;
pub use posit::convert::{RoundFrom, RoundInto};
pub use quire::Quire;
pub use word::Int;

/// Standard-defined 8-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p8 = Posit<8, 2, i8>;

/// Standard-defined 16-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p16 = Posit<16, 2, i16>;

/// Standard-defined 32-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p32 = Posit<32, 2, i32>;

/// Standard-defined 64-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p64 = Posit<64, 2, i64>;

/// Standard-defined 128-bit quire for [`p8`].
#[allow(non_camel_case_types)]
pub type q8 = Quire<8, 2, 2>;

/// Standard-defined 256-bit quire for [`p16`].
#[allow(non_camel_case_types)]
pub type q16 = Quire<16, 2, 4>;

/// Standard-defined 512-bit quire for [`p32`].
#[allow(non_camel_case_types)]
pub type q32 = Quire<32, 2, 8>;

/// Standard-defined 1024-bit quire for [`p64`].
#[allow(non_camel_case_types)]
pub type q64 = Quire<64, 2, 16>;

/// Number of cases to run, for tests which use `proptest`.
#[cfg(test)]
pub(crate) const PROPTEST_CASES: u32 = 10_000;
