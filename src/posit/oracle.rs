//! The test oracle: slow, obviously-correct reference conversions into [`Rational`], and the
//! predicate every rounding test in the crate checks against. Nothing here is compiled outside
//! of tests.

use super::*;

use crate::Quire;
use crate::word::Unsigned;

use malachite::{Integer, rational::Rational};
use malachite::base::num::arithmetic::traits::{PowerOf2, Abs, Reciprocal};

/// The error type returned when a [Posit] or [Quire] cannot be converted to a [Rational]
/// because it is NaR.
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct IsNaR;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Convert a posit **which is not 0 or NaR** into a [Rational] value. Panics if `self` is 0
  /// or NaR.
  ///
  /// This is a deliberately plodding, one-field-at-a-time rendition of the decoding algorithm,
  /// with none of the production decoder's tricks: it is what those tricks are checked against.
  fn into_rational_regular(self) -> Rational {
    let sign = self.to_bits().is_negative();
    // The absolute value of the pattern, left-aligned in a u64 so we can scan fields off its
    // top end. The junk and low zero bits shifted in on the right are harmless: they read as
    // zero padding of the truncated fields, which is exactly their meaning.
    let mag = self.to_bits().wrapping_abs().as_unsigned().as_u64();
    let x = mag << (64 - Self::BITS);
    assert!(x != 0 && x >> 63 == 0, "should not pass 0 or NaR ({x:b}) here");

    // Skip the (zero) sign bit; the next bit tells whether the regime is a run of 1s or 0s.
    let x = x << 1;
    let k = if x >> 63 == 0 {
      // Run of 0s followed by 1; the terminating 1 is always present because the posit is not
      // 0.
      -(x.leading_zeros() as i64)
    } else {
      // Run of 1s followed by 0 or by the end of the posit; in the latter case the left shift
      // above has already slid a terminating 0 in from the right.
      (!x).leading_zeros() as i64 - 1
    };
    let run = if x >> 63 == 0 { x.leading_zeros() } else { (!x).leading_zeros() };

    // Shift out the regime and its terminating bit; the top ES bits are now the exponent,
    // zero-padded from the right if the format truncated it.
    let x = (x << run) << 1;
    let exponent = if const { ES != 0 } { x >> (64 - ES) } else { 0 };
    let x = x << ES;

    // What remains is the fraction, read as `1.fff…` i.e. `1 + x / 2^64`.
    let scale = (k << ES) + exponent as i64;
    let magnitude =
      (Rational::from(1u32) + Rational::from(x) / Rational::power_of_2(64i64))
      * Rational::power_of_2(scale);
    if sign { -magnitude } else { magnitude }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> TryFrom<Posit<N, ES, Int>> for Rational {
  type Error = IsNaR;

  fn try_from(value: Posit<N, ES, Int>) -> Result<Self, Self::Error> {
    if value.is_zero() {
      Ok(Rational::from(0))
    } else if value.is_nar() {
      Err(IsNaR)
    } else {
      Ok(value.into_rational_regular())
    }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> From<Decoded<N, ES, Int>> for Rational {
  fn from(value: Decoded<N, ES, Int>) -> Self {
    let unit = (Int::Unsigned::BITS - 1) as i64;
    let magnitude =
      Rational::from(value.frac.as_u64()) / Rational::power_of_2(unit)
      * Rational::power_of_2(value.scale as i64);
    if value.sign { -magnitude } else { magnitude }
  }
}

impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
> TryFrom<&Quire<N, ES, WORDS>> for Rational {
  type Error = IsNaR;

  fn try_from(value: &Quire<N, ES, WORDS>) -> Result<Self, Self::Error> {
    if value.is_nar() {
      return Err(IsNaR)
    }
    // The quire is just a big two's complement fixed-point number with denominator 2^WIDTH.
    // Limbs are little-endian; only the topmost carries the sign.
    let mut limbs = value.0.iter().rev();
    let top = *limbs.next().unwrap() as i64;
    let mut numerator = Integer::from(top);
    for limb in limbs {
      numerator = numerator * Integer::power_of_2(64u64) + Integer::from(*limb);
    }
    let denominator = Integer::power_of_2(Quire::<N, ES, WORDS>::WIDTH as u64);
    Ok(Rational::from_integers(numerator, denominator))
  }
}

/// Check whether the exact number `exact` should round to `posit`.
///
///   - Over- or under-flow: round to [Posit::MAX]/[Posit::MIN] or
///     [Posit::MIN_POSITIVE]/[Posit::MAX_NEGATIVE] respectively, never to NaR or 0.
///   - Geometric region (some exponent bits truncated by a long regime): round to the nearest
///     posit in terms of absolute **ratio**, ties to the even bit pattern.
///   - Everywhere else: round to the nearest posit in terms of absolute **difference**, ties to
///     the even bit pattern.
pub fn is_correct_rounded<const N: u32, const ES: u32, Int: crate::Int>(
  exact: Rational,
  posit: Posit<N, ES, Int>,
) -> bool {
  // Only the exact number 0 is rounded to posit 0, and nothing rounds to NaR.
  if posit.is_zero() { return exact == Rational::from(0) }
  if posit.is_nar() { return false }

  // Saturation cases first.
  if exact > Rational::from(0) {
    if exact >= Rational::try_from(Posit::<N, ES, Int>::MAX).unwrap() {
      return posit == Posit::<N, ES, Int>::MAX
    } else if exact <= Rational::try_from(Posit::<N, ES, Int>::MIN_POSITIVE).unwrap() {
      return posit == Posit::<N, ES, Int>::MIN_POSITIVE
    }
  } else if exact < Rational::from(0) {
    if exact <= Rational::try_from(Posit::<N, ES, Int>::MIN).unwrap() {
      return posit == Posit::<N, ES, Int>::MIN
    } else if exact >= Rational::try_from(Posit::<N, ES, Int>::MAX_NEGATIVE).unwrap() {
      return posit == Posit::<N, ES, Int>::MAX_NEGATIVE
    }
  }

  // Remaining cases: round to nearest, where "nearest" is arithmetic in the middle of the
  // range and geometric at the edges. The boundary is where the regime grows long enough to
  // start chopping exponent bits, i.e. at |x| = 2^((N - 2 - ES) ⋅ 2^ES).
  let distance = {
    let geometric_cutoff = Rational::power_of_2((N as i64 - 2 - ES as i64) << ES);
    let arithmetic_range = (&geometric_cutoff).reciprocal() ..= geometric_cutoff;
    let is_arithmetic_rounding = arithmetic_range.contains(&(&exact).abs());

    move |x: &Rational, y: &Rational| {
      if is_arithmetic_rounding {
        x - y
      } else if x.clone().abs() >= y.clone().abs() {
        x / y
      } else {
        y / x
      }
    }
  };

  // `posit` represents exactly `curr`; its immediate neighbours represent `prev` and `next`.
  let prev = Rational::try_from(posit.prior());
  let curr = Rational::try_from(posit).unwrap();
  let next = Rational::try_from(posit.next());
  let posit_is_even = posit.to_bits() & Int::ONE == Int::ZERO;

  if exact == curr {
    true
  } else if let Ok(prev) = prev && prev < exact && exact < curr {
    // In `]posit.prior(), posit[`: must be closer to `posit`, or equidistant with `posit`
    // even.
    let distance_curr = distance(&curr, &exact);
    let distance_prev = distance(&exact, &prev);
    distance_curr < distance_prev || distance_curr == distance_prev && posit_is_even
  } else if let Ok(next) = next && curr < exact && exact < next {
    let distance_curr = distance(&exact, &curr);
    let distance_next = distance(&next, &exact);
    distance_curr < distance_next || distance_curr == distance_next && posit_is_even
  } else {
    false
  }
}

pub fn try_is_correct_rounded<const N: u32, const ES: u32, Int: crate::Int>(
  exact: Result<Rational, IsNaR>,
  posit: Posit<N, ES, Int>,
) -> bool {
  match exact {
    Ok(exact) => is_correct_rounded(exact, posit),
    Err(IsNaR) => posit.is_nar(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Manually check all positive bit patterns for a 6-bit posit with 2-bit exponent (cf. Posit
  /// Arithmetic, John L. Gustafson, Chapter 2).
  #[test]
  fn exhaustive_posit_6_2() {
    type Posit = super::Posit<6, 2, i16>;

    assert_eq!(Rational::try_from(Posit::from_bits(0b000000)), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(Posit::from_bits(-0b100000)), Err(IsNaR));

    for (bits, (num, den)) in [
      (0b000001, (1, 65536)),
      (0b000010, (1, 4096)),
      (0b000011, (1, 1024)),
      (0b000100, (1, 256)),
      (0b000101, (1, 128)),
      (0b000110, (1, 64)),
      (0b000111, (1, 32)),
      (0b001000, (2, 32)),
      (0b001001, (3, 32)),
      (0b001010, (4, 32)),
      (0b001011, (6, 32)),
      (0b001100, (8, 32)),
      (0b001101, (12, 32)),
      (0b001110, (16, 32)),
      (0b001111, (24, 32)),
      (0b010000, (1, 1)),
      (0b010001, (3, 2)),
      (0b010010, (2, 1)),
      (0b010011, (3, 1)),
      (0b010100, (4, 1)),
      (0b010101, (6, 1)),
      (0b010110, (8, 1)),
      (0b010111, (12, 1)),
      (0b011000, (16, 1)),
      (0b011001, (32, 1)),
      (0b011010, (64, 1)),
      (0b011011, (128, 1)),
      (0b011100, (256, 1)),
      (0b011101, (1024, 1)),
      (0b011110, (4096, 1)),
      (0b011111, (65536, 1)),
    ] {
      assert_eq!(Posit::from_bits( bits).try_into(), Ok(Rational::from_signeds( num, den)));
      assert_eq!(Posit::from_bits(-bits).try_into(), Ok(Rational::from_signeds(-num, den)));
    }
  }

  /// A few spot checks in a 16-bit format, including truncated exponent fields.
  #[test]
  fn examples_16_2() {
    type Posit = super::Posit<16, 2, i16>;

    assert_eq!(Posit::from_bits(0b0_01_00_10000001000).try_into(), Ok(Rational::from_signeds(3080, 1 << 15)));
    assert_eq!(Posit::from_bits(0b0_01_00_11011001000).try_into(), Ok(Rational::from_signeds(3784, 1 << 15)));
    assert_eq!(Posit::from_bits(0b0_01_01_11011001000).try_into(), Ok(Rational::from_signeds(3784, 1 << 14)));
    assert_eq!(Posit::from_bits(0b0_01_10_11011001000).try_into(), Ok(Rational::from_signeds(3784, 1 << 13)));
    assert_eq!(Posit::from_bits(0b0_01_11_11011001000).try_into(), Ok(Rational::from_signeds(3784, 1 << 12)));
    assert_eq!(Posit::from_bits(0b0_11110_10_11001000).try_into(), Ok(Rational::from(456 << 6)));
    assert_eq!(Posit::from_bits(0b0_11110_01_11001000).try_into(), Ok(Rational::from(456 << 5)));

    assert_eq!(Posit::from_bits(0b0_11111111111110_1u16 as i16).try_into(), Ok(Rational::from(1i64 << 50)));
    assert_eq!(Posit::from_bits(0b0_11111111111110_0u16 as i16).try_into(), Ok(Rational::from(1i64 << 48)));
    assert_eq!(Posit::from_bits(0b0_11111111110_00_10u16 as i16).try_into(), Ok(Rational::from(3i64 << 35)));

    assert_eq!(Posit::MAX.try_into(), Ok(Rational::from(1i64 << 56)));
    assert_eq!(Posit::MIN.try_into(), Ok(Rational::from(-1i64 << 56)));
    assert_eq!(Posit::MIN_POSITIVE.try_into(), Ok(Rational::from_signeds(1, 1i64 << 56)));
    assert_eq!(Posit::MAX_NEGATIVE.try_into(), Ok(Rational::from_signeds(-1, 1i64 << 56)));

    assert_eq!(Posit::ZERO.try_into(), Ok(Rational::from(0)));
    assert_eq!(Posit::ONE.try_into(), Ok(Rational::from(1)));
    assert_eq!(Posit::MINUS_ONE.try_into(), Ok(Rational::from(-1)));
    assert_eq!(Rational::try_from(Posit::NAR), Err(IsNaR));
  }

  #[test]
  fn decoded() {
    // 1.5 × 2^3 = 12
    let d = Decoded::<16, 2, i16> { sign: false, scale: 3, frac: 0b11 << 14 };
    assert_eq!(Rational::from(d), Rational::from(12));
    let d = Decoded::<16, 2, i16> { sign: true, scale: -1, frac: 1 << 15 };
    assert_eq!(Rational::from(d), Rational::from_signeds(-1, 2));
  }

  #[test]
  fn quire() {
    // Integer 1 sits exactly WIDTH bits up from the bottom.
    let mut limbs = [0u64; 4];
    limbs[crate::q16::WIDTH as usize / 64] = 1 << (crate::q16::WIDTH % 64);
    assert_eq!(Rational::try_from(&crate::q16::from_bits(limbs)), Ok(Rational::from(1)));

    assert_eq!(Rational::try_from(&crate::q16::ZERO), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(&crate::q16::NAR), Err(IsNaR));

    // All ones is -2^-WIDTH.
    let limbs = [u64::MAX; 4];
    assert_eq!(
      Rational::try_from(&crate::q16::from_bits(limbs)),
      Ok(-Rational::power_of_2(-(crate::q16::WIDTH as i64))),
    );
  }

  #[test]
  fn rounding_predicate() {
    use crate::{p8, RoundFrom};
    // 1/2 is exact.
    assert!(is_correct_rounded(Rational::from_signeds(1, 2), p8::round_from(0.5)));
    // Between maxpos = 2^24 and infinity everything saturates.
    assert!(is_correct_rounded(Rational::from(1 << 30), p8::MAX));
    assert!(!is_correct_rounded(Rational::from(1 << 30), p8::MAX.prior()));
    // Nothing rounds to NaR or to 0 except 0 itself.
    assert!(!is_correct_rounded(Rational::from(1), p8::NAR));
    assert!(is_correct_rounded(Rational::from(0), p8::ZERO));
    assert!(!is_correct_rounded(Rational::from_signeds(1, 1i64 << 40), p8::ZERO));
  }
}
