use super::*;
use crate::word::Unsigned;

/// The result of decoding a posit which may be [zero](Posit::ZERO) or [NaR](Posit::NAR): those
/// two patterns have no regime/exponent/fraction reading, so they come out as themselves.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum TryDecoded<const N: u32, const ES: u32, Int: crate::Int> {
  Zero,
  NaR,
  Regular(Decoded<N, ES, Int>),
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Decode `self` into a sign, a scale, and a fraction magnitude.
  ///
  /// The layout of a regular posit, msb to lsb, is
  ///
  /// ```text
  ///   ┌──────┬─────────────────┬────────────────┬────────────┐
  ///   │ sign │ regime          │ exponent       │ fraction   │
  ///   │ 1    │ 2 ..= N-1 bits  │ 0 ..= ES bits  │ the rest   │
  ///   └──────┴─────────────────┴────────────────┴────────────┘
  /// ```
  ///
  /// where the *regime* is a run of `m` equal bits, terminated by the complementary bit or by
  /// the end of the number. A run of ones means `k = m - 1`, a run of zeros `k = -m`. The
  /// exponent and fraction are whatever bits remain (possibly none: both fields are
  /// zero-extended when cut short), and the fraction carries a hidden `1.` in front. The value,
  /// for a *positive* posit, is then `1.fraction × 2^(k × 2^ES + exponent)`.
  ///
  /// A negative posit is the two's complement of the positive pattern of its magnitude, so the
  /// first step is taking the absolute value; the fields are read from that.
  ///
  /// # Safety
  ///
  /// `self` must not be [`Posit::ZERO`] or [`Posit::NAR`], or calling this function is
  /// *undefined behaviour*.
  pub(crate) unsafe fn decode_regular(self) -> Decoded<N, ES, Int> {
    debug_assert!(!self.is_special());
    type U<Int> = <Int as crate::word::Sealed>::Unsigned;

    let sign = self.0.is_negative();
    // The magnitude, shifted up so the regime run starts at the very msb (junk bits and the
    // sign bit drop out the left). `wrapping_abs` is exact: the only pattern whose absolute
    // value overflows is NaR, which is excluded by the precondition.
    let mag = self.0.wrapping_abs().as_unsigned() << (Self::JUNK_BITS + 1);

    // Run length and regime. A run of zeros is always terminated within the field (a run that
    // reached the end would make the magnitude 0, i.e. a special value); a run of ones may be
    // terminated by the end of the field, but then `leading_ones` stops by itself, because
    // everything below the field is zero here.
    let ones = mag & U::<Int>::TOP != U::<Int>::ZERO;
    let m = if ones { mag.leading_ones() } else { mag.leading_zeros() };
    let k = if ones { m as i32 - 1 } else { -(m as i32) };

    // Slide out the run and its terminator; what is left is exponent ++ fraction, msb-aligned,
    // with zeros below (so truncated fields come out zero-extended for free).
    let body = if m + 1 >= Int::BITS { U::<Int>::ZERO } else { mag << (m + 1) };
    let exponent = if const { ES == 0 } {
      0
    } else {
      (body >> (Int::BITS - ES)).as_u32()
    };
    let explicit = if const { ES == 0 } {
      body
    } else if const { ES >= Int::BITS } {
      U::<Int>::ZERO
    } else {
      body << ES
    };

    Decoded {
      sign,
      scale: (k << ES) + exponent as i32,
      frac: U::<Int>::TOP | (explicit >> 1),
    }
  }

  /// Decode `self` into [`TryDecoded::Zero`], [`TryDecoded::NaR`], or a regular
  /// [`Decoded`] number.
  pub(crate) fn try_decode(self) -> TryDecoded<N, ES, Int> {
    if self.is_zero() {
      TryDecoded::Zero
    } else if self.is_nar() {
      TryDecoded::NaR
    } else {
      // SAFETY: `self` is not 0 or NaR.
      TryDecoded::Regular(unsafe { self.decode_regular() })
    }
  }

  /// The regime `k` of `self`, or `None` if `self` is zero or NaR.
  pub fn regime(self) -> Option<i32> {
    (!self.is_special()).then(|| {
      // SAFETY: `self` is not 0 or NaR.
      unsafe { self.decode_regular() }.scale >> ES
    })
  }

  /// The exponent field of `self` (the `ES`-bit refinement of the regime), or `None` if `self`
  /// is zero or NaR.
  pub fn exponent(self) -> Option<u32> {
    (!self.is_special()).then(|| {
      // SAFETY: `self` is not 0 or NaR.
      let scale = unsafe { self.decode_regular() }.scale;
      (scale - ((scale >> ES) << ES)) as u32
    })
  }

  /// The total scale of `self`, `regime × 2^ES + exponent`, or `None` if `self` is zero or NaR.
  pub fn scale(self) -> Option<i32> {
    (!self.is_special()).then(|| {
      // SAFETY: `self` is not 0 or NaR.
      unsafe { self.decode_regular() }.scale
    })
  }

  /// The fraction magnitude of `self` with the hidden bit at the msb (i.e. the number
  /// `1.fraction`, as a fixed-point value with `Int::BITS - 1` fractional bits), or `None` if
  /// `self` is zero or NaR.
  pub fn fraction(self) -> Option<Int::Unsigned> {
    (!self.is_special()).then(|| {
      // SAFETY: `self` is not 0 or NaR.
      unsafe { self.decode_regular() }.frac
    })
  }
}
