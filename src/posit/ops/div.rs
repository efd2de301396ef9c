use super::*;
use crate::word::{Unsigned, Wide};

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Return a [normalised](Decoded::is_normalised) `Decoded` that's the result of dividing `x`
  /// by `y`, plus the sticky bit.
  ///
  /// The numerator fraction is widened and shifted all the way up, so the integer quotient
  /// carries `Int::BITS` fraction bits: the ratio of two fractions in `[1., 2.[` is in
  /// `]0.5, 2.[`, so the quotient has either `Int::BITS + 1` or `Int::BITS` significant bits.
  /// In the first case drop the extra lsb into sticky and bump nothing; in the second the
  /// quotient is already a normalised fraction one binade down. A nonzero remainder means the
  /// division was inexact and ORs into sticky either way.
  ///
  /// # Safety
  ///
  /// `x` and `y` have to be [normalised](Decoded::is_normalised), or calling this function
  /// is *undefined behaviour*.
  #[inline]
  pub(crate) unsafe fn div_kernel(
    x: Decoded<N, ES, Int>,
    y: Decoded<N, ES, Int>,
  ) -> (Decoded<N, ES, Int>, bool) {
    type U<Int> = <Int as crate::word::Sealed>::Unsigned;
    type W<Int> = <U<Int> as crate::word::Unsigned>::Wide;

    let sign = x.sign ^ y.sign;
    let num = x.frac.widen() << U::<Int>::BITS;
    let den = y.frac.widen();
    let (q, r) = (num / den, num % den);

    let bit_b = W::<Int>::ONE << U::<Int>::BITS;
    if q & bit_b != W::<Int>::ZERO {
      let sticky = q & W::<Int>::ONE != W::<Int>::ZERO || r != W::<Int>::ZERO;
      (Decoded { sign, scale: x.scale - y.scale, frac: (q >> 1).split().1 }, sticky)
    } else {
      (Decoded { sign, scale: x.scale - y.scale - 1, frac: q.split().1 }, r != W::<Int>::ZERO)
    }
  }

  pub(crate) fn div(self, other: Self) -> Self {
    if self.is_nar() || other.is_nar() || other.is_zero() {
      Self::NAR
    } else if self.is_zero() {
      Self::ZERO
    } else {
      // SAFETY: neither `self` nor `other` are 0 or NaR
      let a = unsafe { self.decode_regular() };
      let b = unsafe { other.decode_regular() };
      // SAFETY: `a` and `b` are normalised
      let (result, sticky) = unsafe { Self::div_kernel(a, b) };
      result.encode_round(sticky)
    }
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div::div, DivAssign::div_assign}
