use super::*;
use crate::word::{Unsigned, Wide};

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Return a [normalised](Decoded::is_normalised) `Decoded` that's the result of adding `x` and
  /// `y`, plus the sticky bit.
  ///
  /// The kernel works on magnitudes. Both fractions are widened into a register of twice the
  /// width, top-aligned, and the smaller operand is shifted right into alignment with the
  /// larger. A double-width register is enough to do this exactly for any shift up to
  /// `Int::BITS`; beyond that the shifted-out bits can only ever feed sticky, never the guard,
  /// because the posit fraction field is always at least two bits shorter than the word.
  ///
  /// # Safety
  ///
  /// `x` and `y` have to be [normalised](Decoded::is_normalised) and must not be symmetrical
  /// (equal magnitude, opposite sign), or calling this function is *undefined behaviour*.
  #[inline]
  pub(crate) unsafe fn add_kernel(
    x: Decoded<N, ES, Int>,
    y: Decoded<N, ES, Int>,
  ) -> (Decoded<N, ES, Int>, bool) {
    type U<Int> = <Int as crate::word::Sealed>::Unsigned;
    type W<Int> = <U<Int> as crate::word::Unsigned>::Wide;
    let b = U::<Int>::BITS;

    // Order by magnitude, largest first. The result carries the sign of the larger operand
    // (for same signs either would do).
    let (x, y) = if (x.scale, x.frac) >= (y.scale, y.frac) { (x, y) } else { (y, x) };
    let shift = (x.scale - y.scale) as u32;
    if shift >= 2 * b {
      // `y` is entirely below the double-width register: it only contributes sticky.
      return (x, true)
    }

    let xw = x.frac.widen() << b;
    let yw_full = y.frac.widen() << b;
    let yw = yw_full >> shift;
    // Bits of `y` that fell off the bottom of the register. Nonzero only when `shift > b`.
    let dropped = shift != 0
      && yw_full & ((W::<Int>::ONE << shift) - W::<Int>::ONE) != W::<Int>::ZERO;

    if x.sign == y.sign {
      // Adding two magnitudes may overflow by exactly 1 place: e.g. 1.5 + 1.5 = 3. = 1.5 × 2¹.
      // If it does, shift right by 1 and bump the scale, keeping the squeezed-out lsb as
      // sticky.
      let (sum, overflow) = xw.overflowing_add(yw);
      let (frac_w, scale, jam) = if overflow {
        (W::<Int>::TOP | sum >> 1, x.scale + 1, sum & W::<Int>::ONE != W::<Int>::ZERO)
      } else {
        (sum, x.scale, false)
      };
      let (hi, lo) = frac_w.split();
      (
        Decoded { sign: x.sign, scale, frac: hi },
        dropped || jam || lo != U::<Int>::ZERO,
      )
    } else {
      // Opposite signs: subtract the smaller magnitude. If bits of `y` were dropped, the true
      // subtrahend is *larger* than `yw`, so borrow one more lsb and let sticky carry the
      // difference; the value then sits strictly between `diff` and `diff + 1`, which is what
      // sticky means.
      let diff = xw - yw - if dropped { W::<Int>::ONE } else { W::<Int>::ZERO };
      // Cancellation can wipe out any number of leading bits (but at most 1 when `dropped`,
      // since then `yw < 2^(b-1) ≪ xw`). Shift the leading bit back up to the top. `diff` is
      // nonzero because the operands are not symmetrical.
      let cancelled = diff.leading_zeros();
      let frac_w = diff << cancelled;
      let (hi, lo) = frac_w.split();
      (
        Decoded { sign: x.sign, scale: x.scale - cancelled as i32, frac: hi },
        dropped || lo != U::<Int>::ZERO,
      )
    }
  }

  pub(crate) fn add(self, other: Self) -> Self {
    if self.is_nar() || other.is_nar() {
      Self::NAR
    } else if self.is_zero() {
      other
    } else if other.is_zero() {
      self
    } else if self.0.wrapping_add(other.0) == Int::ZERO {
      // Symmetrical operands cancel exactly. Posit negation is two's complement negation of the
      // pattern, so this is a plain integer check.
      Self::ZERO
    } else {
      // SAFETY: neither operand is 0 or NaR, and they are not symmetrical
      unsafe {
        let (result, sticky) = Self::add_kernel(
          self.decode_regular(),
          other.decode_regular(),
        );
        result.encode_round(sticky)
      }
    }
  }

  pub(crate) fn sub(self, other: Self) -> Self {
    self.add(-other)
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add::add, AddAssign::add_assign}
super::mk_ops!{Sub::sub, SubAssign::sub_assign}
