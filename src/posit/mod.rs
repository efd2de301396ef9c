//! This module and its submodules implement the posit number type itself: the bit-level codec
//! between the stored pattern and the decomposed `(sign, scale, fraction)` form, the one rounding
//! routine every operation funnels through, and the arithmetic built on top of those.
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Bit 0, bit 1, .. bit N-1**: numbered least significant to most significant, starts at 0.
//!   - **maxpos/minpos**: the largest/smallest positive posit of a format.

use crate::word::Unsigned;

/// A posit floating point number with `N` bits and `ES` exponent bits, using `Int` as its
/// underlying type.
///
/// Examples:
///
/// ```
/// # use posit_arith::Posit;
/// type Foo = Posit::<32, 2, i32>;  // A 32-bit posit with 2-bit exponent field, represented in a
///                                  // 32-bit machine type
/// type Bar = Posit::<6, 1, i8>;  // A 6-bit posit with 1-bit exponent field, represented in an
///                                // 8-bit machine type.
/// ```
///
/// Stored in two's complement, sign-extended when `N` is narrower than `Int`. The two's
/// complement order of the patterns is the numeric order, which is why comparisons below are
/// plain integer comparisons.
///
/// Note that unlike the underlying int this type is *not* `Eq`/`Ord`: `NaR != NaR`, and any
/// comparison against NaR is undefined, exactly as for IEEE NaN.
pub struct Posit<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> (Int);

/// A regular (non-zero, non-NaR) posit, decomposed into sign, scale, and fraction. This is the
/// form the arithmetic kernels work on.
///
/// The fraction is an unsigned *magnitude* with the hidden bit at the msb, i.e. it represents
/// the number `frac / 2^(BITS-1) ∈ [1, 2)`, and the whole `Decoded` represents
///
/// ```text
///   (-1)^sign × frac / 2^(BITS-1) × 2^scale
/// ```
///
/// where `scale = regime × 2^ES + exponent` combines the regime and exponent fields.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Decoded<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> {
  pub(crate) sign: bool,
  pub(crate) scale: i32,
  pub(crate) frac: Int::Unsigned,
}

impl<const N: u32, const ES: u32, Int: crate::Int> Decoded<N, ES, Int> {
  /// A `Decoded` is *normalised* if the hidden bit is in place. All kernels take and return
  /// normalised values.
  pub(crate) fn is_normalised(&self) -> bool {
    self.frac & Int::Unsigned::TOP != Int::Unsigned::ZERO
  }
}

/// Basics: bit access, sign extension, layout assertions
mod basics;

/// Constants (zero, NaR, max, min_positive, etc)
mod consts;

/// Pattern → `Decoded`
pub(crate) mod decode;

/// `Decoded` → pattern, including the one rounding routine
mod encode;

/// Clone/Copy/PartialEq/PartialOrd/Default
mod cmp;

/// Neg, abs, next, prior
mod unary;

/// Debug and Display
mod fmt;

/// Add, Sub, Mul, Div
mod ops;

/// Conversions to and from ints and IEEE floats
pub(crate) mod convert;

/// Test-only: arbitrary-precision oracle, via `malachite`
#[cfg(test)]
pub(crate) mod oracle;

/// Test-only: exhaustive and proptest case generators
#[cfg(test)]
pub(crate) mod cases;
