use crate::posit::Posit;

/// A *quire* for a posit format with `N` bits and `ES` exponent bits, `WORDS` 64-bit limbs long.
///
/// A quire is a fixed-point accumulator wide enough that sums and dot products of posits can
/// be computed with **no** intermediate rounding whatsoever: every product of two posits of
/// the format is exactly representable in it, and only the final conversion back to a posit
/// rounds, once.
///
/// `WORDS` is bounded from below by what it takes to hold `MAX × MAX` down to `MIN_POSITIVE ×
/// MIN_POSITIVE` as one fixed-point number (a smaller quire is a compile-time error); anything
/// above that is headroom, and each extra bit doubles the number of terms that can be
/// accumulated before the quire can overflow. The standard sizes (see [`crate::q8`] through
/// [`crate::q64`]) all carry 30 bits of headroom.
///
/// Like a posit, a quire has a NaR state, and it is *absorbing*: accumulating NaR, or merging
/// a NaR quire, poisons the accumulator, and everything accumulated afterwards is ignored. The
/// poison only surfaces when converting back to a posit, which yields [NaR](Posit::NAR).
///
/// # Examples
///
/// ```
/// use posit_arith::{p16, q16, Posit, RoundFrom};
///
/// let terms = [p16::MAX, p16::ONE, -p16::MAX];
/// // Naively, adding MAX + 1 saturates at MAX and the 1 is lost for good...
/// let naive = terms.iter().fold(p16::ZERO, |acc, &t| acc + t);
/// assert_eq!(naive, p16::ZERO);
/// // ...but the quire holds it exactly.
/// let mut quire = q16::ZERO;
/// for &t in &terms {
///   quire += t;
/// }
/// assert_eq!(p16::round_from(&quire), p16::ONE);
/// ```
///
/// # Equality
///
/// Unlike posits, where `NAR != NAR`, quire equality is plain equality of accumulator *state*:
/// two quires are equal iff their bits are, so a NaR quire equals another NaR quire. A quire is
/// an intermediate, not a number; the NaN-style semantics apply after rounding, on the posit.
///
/// ```
/// use posit_arith::{p16, q16};
/// assert_eq!(q16::NAR, q16::NAR);
/// assert!(p16::NAR != p16::NAR);
/// ```
//
// Stored as an array of u64 limbs in little-endian order, so limb arithmetic ripples upward
// through increasing indices and the sign lives in the top bit of the last limb.
#[derive(Clone)]
#[derive(PartialEq, Eq)]
pub struct Quire<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
> (pub(crate) [u64; WORDS]);

/// Capacity constants, raw bit access, NaR handling.
mod basics;

/// The core fixed-point accumulation routine.
mod accumulate;

/// Accumulating posits and products of posits; merging quires.
mod ops;

/// The one rounding: quire → posit.
mod convert;

/// Fused dot product.
mod dot;
