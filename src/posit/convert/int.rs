use super::*;
use crate::posit::decode::TryDecoded;
use crate::word::Unsigned;

/// The kernel for converting an integer magnitude to a [`Decoded`]: find the msb, top-align it,
/// and keep whatever falls off a narrow word as sticky. `mag` must be nonzero.
#[inline]
fn decode_magnitude<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
>(sign: bool, mag: u64) -> (Decoded<N, ES, Int>, bool) {
  debug_assert!(mag != 0);
  let lz = mag.leading_zeros();
  let scale = (63 - lz) as i32;
  let frac64 = mag << lz;

  let b = <Int as crate::word::Sealed>::Unsigned::BITS;
  let frac = <Int as crate::word::Sealed>::Unsigned::of_u64(frac64 >> (64 - b));
  let sticky = b < 64 && frac64 << b != 0;
  (Decoded { sign, scale, frac }, sticky)
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<i64> for Posit<N, ES, Int> {
  /// Convert an `i64` into a `Posit`, rounding to the nearest value (ties to even pattern) if
  /// the integer has more significant bits than the format keeps at that scale.
  fn round_from(value: i64) -> Self {
    if value == 0 {
      Self::ZERO
    } else {
      let (decoded, sticky) = decode_magnitude(value < 0, value.unsigned_abs());
      decoded.encode_round(sticky)
    }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<i32> for Posit<N, ES, Int> {
  /// Convert an `i32` into a `Posit`, rounding if necessary.
  fn round_from(value: i32) -> Self {
    Self::round_from(value as i64)
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<Posit<N, ES, Int>> for i64 {
  /// Convert a `Posit` into an `i64`, rounding to the nearest integer and ties to even.
  /// Values beyond the `i64` range saturate at `i64::MIN`/`i64::MAX`; [NaR](Posit::NAR)
  /// converts to `i64::MIN`.
  fn round_from(value: Posit<N, ES, Int>) -> Self {
    match value.try_decode() {
      TryDecoded::Zero => 0,
      TryDecoded::NaR => i64::MIN,
      TryDecoded::Regular(d) => {
        let frac64 = d.frac.as_u64() << (64 - <Int as crate::word::Sealed>::Unsigned::BITS);
        let mag = match d.scale {
          // The magnitude is in [2^63, 2^64): out of range either way (the one in-range
          // pattern, -2^63, is also what negative saturation produces).
          s if s >= 63 => u64::MAX,
          // In [0.5, 1): up to 1 on a strict majority, down to 0 on the tie.
          -1 => (frac64 > 1 << 63) as u64,
          // Below 0.25: down to 0.
          s if s < -1 => 0,
          // An integer part of `s + 1` bits and `63 - s` fraction bits; round those off.
          s => {
            let s = s as u32;
            let int_part = frac64 >> (63 - s);
            let guard = (frac64 >> (62 - s)) & 1 != 0;
            let sticky = frac64 & ((1u64 << (62 - s)) - 1) != 0;
            int_part + (guard && (sticky || int_part & 1 == 1)) as u64
          }
        };
        if d.sign {
          // mag ≤ 2^63 here, and 2^63 wraps to exactly i64::MIN.
          (mag.min(1 << 63) as i64).wrapping_neg()
        } else {
          mag.min(i64::MAX as u64) as i64
        }
      }
    }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<Posit<N, ES, Int>> for i32 {
  /// Convert a `Posit` into an `i32`, rounding to the nearest integer and ties to even, with
  /// saturation; [NaR](Posit::NAR) converts to `i32::MIN`.
  fn round_from(value: Posit<N, ES, Int>) -> Self {
    i64::round_from(value).clamp(i32::MIN as i64, i32::MAX as i64) as i32
  }
}
