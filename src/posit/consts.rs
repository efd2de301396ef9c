use super::*;
use crate::word::const_as;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = Self(Int::ZERO);

  /// NaR is the `0b1000...` bit pattern, appropriately sign-extended. This is that number
  /// represented as an i64 (max width of any Int).
  const NAR_I64: i64 = i64::MIN >> (64 - Int::BITS + Self::JUNK_BITS);

  /// Not-a-real (`NaR`): the single exceptional value, covering infinities, undefined results,
  /// and anything else that is not a real number.
  //
  // Represented by the bit pattern `0b1000...0`.
  pub const NAR: Self = Self(const_as(Self::NAR_I64));

  /// Largest representable value, equal to `-MIN`; `maxpos` in the posit literature.
  //
  // Represented by the bit pattern `0b0111...1`.
  pub const MAX: Self = Self(const_as(!Self::NAR_I64));

  /// Smallest representable value, equal to `-MAX`.
  ///
  /// Not to be confused with the smallest absolute value, i.e. [`Self::MIN_POSITIVE`]!
  //
  // Represented by the bit pattern `0b100...01`.
  pub const MIN: Self = Self(const_as(Self::NAR_I64 + 1));

  /// Smallest *positive* value, equal to `-MAX_NEGATIVE`; `minpos` in the posit literature.
  //
  // Represented by the bit pattern `0b000...01`.
  pub const MIN_POSITIVE: Self = Self(Int::ONE);

  /// Largest *negative* value, equal to `-MIN_POSITIVE`.
  //
  // Represented by the bit pattern `0b1111...1`.
  pub const MAX_NEGATIVE: Self = Self(const_as(-1));

  /// The minimum scale; [`Self::MIN_POSITIVE`] = 2 <sup>[`Self::MIN_SCALE`]</sup>.
  pub const MIN_SCALE: i32 = -Self::MAX_SCALE;

  /// The maximum scale; [`Self::MAX`] = 2 <sup>[`Self::MAX_SCALE`]</sup>.
  pub const MAX_SCALE: i32 = (N as i32 - 2) << ES;

  /// One (`1`), the multiplicative identity element.
  //
  // Represented by the bit pattern `0b0100...0`.
  pub const ONE: Self = Self(const_as(-(Self::NAR_I64 >> 1)));

  /// Negative one (`-1`).
  //
  // Represented by the bit pattern `0b1100...0`.
  pub const MINUS_ONE: Self = Self(const_as(Self::NAR_I64 >> 1));
}
