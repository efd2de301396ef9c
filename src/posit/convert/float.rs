use super::*;
use crate::posit::decode::TryDecoded;
use crate::word::Unsigned;

/// Decompose a finite, nonzero `f64` into a [`Decoded`] plus the sticky bit for whatever fell
/// off when the 52-bit mantissa was squeezed into a word narrower than 64 bits.
fn decode_finite_f64<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
>(num: f64) -> (Decoded<N, ES, Int>, bool) {
  debug_assert!(num.is_finite() && num != 0.0);
  const MANT_BITS: u32 = f64::MANTISSA_DIGITS - 1;

  let bits = num.to_bits();
  let sign = bits >> 63 != 0;
  let exp_field = (bits >> MANT_BITS) as i32 & 0x7ff;
  let mant = bits & ((1u64 << MANT_BITS) - 1);

  // Reconstruct the value as `frac / 2^63 × 2^scale` with the (hidden or leading) unit bit of
  // `frac` at the top. A zero exponent field marks a subnormal: no hidden bit, fixed exponent,
  // and the unit bit is wherever the msb of the mantissa happens to be.
  let (scale, frac64) = if exp_field != 0 {
    (exp_field - 1023, 1u64 << 63 | mant << (63 - MANT_BITS))
  } else {
    let lz = mant.leading_zeros();
    (-1011 - lz as i32, mant << lz)
  };

  let b = <Int as crate::word::Sealed>::Unsigned::BITS;
  let frac = <Int as crate::word::Sealed>::Unsigned::of_u64(frac64 >> (64 - b));
  let sticky = b < 64 && frac64 << b != 0;
  (Decoded { sign, scale, frac }, sticky)
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<f64> for Posit<N, ES, Int> {
  /// Convert an `f64` into a `Posit`, rounding if necessary. Any infinity or NaN converts to
  /// [NaR](Posit::NAR); everything finite rounds to the nearest posit (and so never to zero
  /// or NaR, however extreme the input).
  fn round_from(value: f64) -> Self {
    use core::num::FpCategory;
    match value.classify() {
      FpCategory::Nan | FpCategory::Infinite => Self::NAR,
      FpCategory::Zero => Self::ZERO,
      FpCategory::Normal | FpCategory::Subnormal => {
        let (decoded, sticky) = decode_finite_f64(value);
        decoded.encode_round(sticky)
      }
    }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<f32> for Posit<N, ES, Int> {
  /// Convert an `f32` into a `Posit`, rounding if necessary. Any infinity or NaN converts to
  /// [NaR](Posit::NAR). Widening to `f64` first is exact, so this still rounds only once.
  fn round_from(value: f32) -> Self {
    Self::round_from(value as f64)
  }
}

/// Assemble the IEEE-754 bit pattern (sans sign bit) nearest to `frac / 2^63 × 2^scale`, for a
/// binary format with `mant_bits` mantissa bits and maximum exponent `emax`. `frac` must have
/// its top bit set.
///
/// Overflow goes to infinity and underflow to (unsigned) zero, through the same
/// guard-and-sticky rounding as everywhere else; the increment carries from the mantissa into
/// the exponent field on its own, which also takes care of the largest-finite → infinity and
/// subnormal → normal boundaries.
fn finite_bits(scale: i32, frac: u64, mant_bits: u32, emax: i32) -> u64 {
  debug_assert!(frac >> 63 == 1);
  if scale > emax {
    return (2 * emax as u64 + 1) << mant_bits
  }
  let emin = 1 - emax;
  // `body` holds the future mantissa field top-aligned, `t` how many of its low bits get
  // dropped. Normals shift the hidden bit out; subnormals keep it, pushed right however far
  // below `emin` the value sits.
  let (exp_field, body, t) = if scale >= emin {
    ((scale + emax) as u64, frac << 1, 64 - mant_bits)
  } else {
    (0, frac, 64 - mant_bits + (emin - scale) as u32)
  };
  let (mant, guard, sticky) = if t > 64 {
    (0, false, true)
  } else if t == 64 {
    (0, body >> 63 != 0, body << 1 != 0)
  } else {
    (body >> t, (body >> (t - 1)) & 1 != 0, body & ((1u64 << (t - 1)) - 1) != 0)
  };
  let round_up = guard && (sticky || mant & 1 == 1);
  (exp_field << mant_bits | mant) + round_up as u64
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<Posit<N, ES, Int>> for f64 {
  /// Convert a `Posit` into an `f64`, rounding if necessary. [NaR](Posit::NAR) converts to NaN.
  ///
  /// For formats up to 32 bits every posit value is exactly representable; 64-bit posits have
  /// up to 61 fraction bits and round.
  fn round_from(value: Posit<N, ES, Int>) -> Self {
    match value.try_decode() {
      TryDecoded::Zero => 0.0,
      TryDecoded::NaR => f64::NAN,
      TryDecoded::Regular(d) => {
        let frac64 = d.frac.as_u64() << (64 - <Int as crate::word::Sealed>::Unsigned::BITS);
        let bits = finite_bits(d.scale, frac64, f64::MANTISSA_DIGITS - 1, 1023);
        f64::from_bits((d.sign as u64) << 63 | bits)
      }
    }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<Posit<N, ES, Int>> for f32 {
  /// Convert a `Posit` into an `f32`, rounding if necessary. [NaR](Posit::NAR) converts to NaN.
  ///
  /// This goes straight to `f32` instead of through `f64`, so wide posits round once, not
  /// twice.
  fn round_from(value: Posit<N, ES, Int>) -> Self {
    match value.try_decode() {
      TryDecoded::Zero => 0.0,
      TryDecoded::NaR => f32::NAN,
      TryDecoded::Regular(d) => {
        let frac64 = d.frac.as_u64() << (64 - <Int as crate::word::Sealed>::Unsigned::BITS);
        let bits = finite_bits(d.scale, frac64, f32::MANTISSA_DIGITS - 1, 127);
        f32::from_bits((d.sign as u32) << 31 | bits as u32)
      }
    }
  }
}
