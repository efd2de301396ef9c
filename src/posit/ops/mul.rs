use super::*;
use crate::word::{Unsigned, Wide};

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Return a [normalised](Decoded::is_normalised) `Decoded` that's the result of multiplying
  /// `x` and `y`, plus the sticky bit.
  ///
  /// The product of two fractions in `[1., 2.[` is in `[1., 4.[`, so the full double-width
  /// product has its leading bit in one of the top two positions. If it is in the very top one
  /// the product is in `[2., 4.[` and the scale goes up by one; otherwise shift left once to
  /// put it there. Either way the high half is the result fraction and anything left in the
  /// low half is sticky.
  ///
  /// # Safety
  ///
  /// `x` and `y` have to be [normalised](Decoded::is_normalised), or calling this function
  /// is *undefined behaviour*.
  #[inline]
  pub(crate) unsafe fn mul_kernel(
    x: Decoded<N, ES, Int>,
    y: Decoded<N, ES, Int>,
  ) -> (Decoded<N, ES, Int>, bool) {
    type U<Int> = <Int as crate::word::Sealed>::Unsigned;
    type W<Int> = <U<Int> as crate::word::Unsigned>::Wide;

    let sign = x.sign ^ y.sign;
    let prod = x.frac.wide_mul(y.frac);
    let (prod, scale) = if prod & W::<Int>::TOP != W::<Int>::ZERO {
      (prod, x.scale + y.scale + 1)
    } else {
      (prod << 1, x.scale + y.scale)
    };
    let (hi, lo) = prod.split();
    (Decoded { sign, scale, frac: hi }, lo != U::<Int>::ZERO)
  }

  pub(crate) fn mul(self, other: Self) -> Self {
    if self.is_nar() || other.is_nar() {
      Self::NAR
    } else if self.is_zero() || other.is_zero() {
      Self::ZERO
    } else {
      // SAFETY: neither `self` nor `other` are 0 or NaR
      let a = unsafe { self.decode_regular() };
      let b = unsafe { other.decode_regular() };
      // SAFETY: `a` and `b` are normalised
      let (result, sticky) = unsafe { Self::mul_kernel(a, b) };
      result.encode_round(sticky)
    }
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul::mul, MulAssign::mul_assign}
