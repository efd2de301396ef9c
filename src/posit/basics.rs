use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The size of this Posit type in bits (i.e. parameter `N`).
  ///
  /// Note: this is the logical size, not necessarily the size of the underlying type.
  pub const BITS: u32 = {
    assert!(
      N >= 3,
      "A posit cannot have fewer than 3 bits",
    );
    assert!(
      N <= Int::BITS,
      "Cannot represent an n-bit Posit with an underlying Int machine type with fewer bits.",
    );
    N
  };

  /// The number of exponent bits (i.e. parameter `ES`).
  pub const ES: u32 = {
    assert!(
      ES <= N,
      "Cannot use a number of exponent bits ES higher than the number of total bits N",
    );
    // The value of ES isn't completely arbitrary: scales are carried around as `i32`, and the
    // quire needs quantities up to 4 × Self::MAX_SCALE = 4 × (N-2) × 2^ES to be representable
    // there. Rounding (N-2) up to a power of two, that is
    //
    //   ceil(log2(N-2)) + ES + 2 ≤ 31,  i.e.  (N-2).ilog2() + ES + 2 < 31
    //
    // which we can check at compile time.
    assert!(
      (N - 2).ilog2() + ES + 2 < 31,
      "The chosen ES is too big for this N. Scales are represented in 32 bits, including those \
      of products of extreme posits; consider lowering the number of exponent bits.",
    );
    ES
  };

  /// When representing an `N`-bit posit using a machine type whose width is `M`, the leftmost
  /// `M - N` bits are junk; they are always the same as the bit `N-1` (the function
  /// [`Self::sign_extend`] maintains this invariant).
  ///
  /// In other words, the range of the `Int` in `Posit<N, ES, Int>` is `-2^(N-1) .. 2^(N-1) - 1`.
  ///
  /// Of course, if [`Self::BITS`] is exactly as wide as the underlying `Int::BITS` (as is vastly
  /// the more common case), this is `0`.
  pub(crate) const JUNK_BITS: u32 = Int::BITS - Self::BITS;

  /// Take an `Int` and sign-extend from [`Self::BITS`] (logical width of posit) to `Int::BITS`.
  #[inline]
  pub(crate) fn sign_extend(x: Int) -> Int {
    if const { Self::JUNK_BITS == 0 } {
      x
    } else {
      (x << Self::JUNK_BITS) >> Self::JUNK_BITS
    }
  }

  /// Construct a posit from its raw bit representation. Bits higher (more significant) than the
  /// lowest `N` ([`Self::BITS`]) bits, if any, are ignored.
  #[inline]
  pub fn from_bits(bits: Int) -> Self {
    Self(Self::sign_extend(bits))
  }

  /// As [`Self::from_bits`], but does not check that `bits` is a valid bit pattern for `Self`.
  ///
  /// # Safety
  ///
  /// `bits` has to be a result of a [`Self::to_bits`] call, i.e. it has to be in the range
  /// `-1 << (N-1) .. 1 << (N-1) - 1`, or calling this function is *undefined behaviour*. Note
  /// that if `Int::BITS == Self::BITS` this always holds.
  #[inline]
  pub const unsafe fn from_bits_unchecked(bits: Int) -> Self {
    Self(bits)
  }

  /// Return the underlying bit representation of `self` as a machine int. Bits higher
  /// (more significant) than the lowest `N` ([`Self::BITS`]) bits, if any, are set as equal to
  /// the `N-1`th bit (i.e. sign-extended).
  #[inline]
  pub const fn to_bits(self) -> Int {
    self.0
  }

  /// As [`Self::from_bits`], but taking the unsigned word. Convenient for binary literals
  /// without overflow gymnastics.
  #[inline]
  pub fn from_bits_unsigned(bits: Int::Unsigned) -> Self {
    Self::from_bits(Int::of_unsigned(bits))
  }

  /// As [`Self::to_bits`], reinterpreted as the unsigned word. Convenient for comparing against
  /// binary literals without overflow gymnastics.
  #[inline]
  pub fn to_bits_unsigned(self) -> Int::Unsigned {
    self.0.as_unsigned()
  }

  /// Is `self` [zero](Self::ZERO)?
  #[inline]
  pub fn is_zero(&self) -> bool {
    self.0 == Int::ZERO
  }

  /// Is `self` [NaR](Self::NAR), "not a real"?
  #[inline]
  pub fn is_nar(&self) -> bool {
    self.0 == Self::NAR.0
  }

  /// Is `self` negative? Zero reads as not negative; NaR, whose pattern is the most negative
  /// int, reads as negative.
  #[inline]
  pub fn sign(&self) -> bool {
    self.0.is_negative()
  }

  /// Checks whether `self` is an exception ([0](Self::ZERO) or [NaR](Self::NAR)), that is, the
  /// same as `self.is_zero() || self.is_nar()`, but in one comparison: those are the only two
  /// patterns that become 0 once the sign bit is shifted out.
  #[inline]
  pub(crate) fn is_special(&self) -> bool {
    (self.0 << Self::JUNK_BITS) << 1 == Int::ZERO
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Decoded<N, ES, Int> {
  /// The [`Decoded::frac`] field is a fixed-point magnitude with the decimal point
  /// [`Decoded::FRAC_WIDTH`] bits from the right (so, directly after the hidden bit at the msb).
  pub(crate) const FRAC_WIDTH: u32 = Int::BITS - 1;

  /// As [`Posit::BITS`].
  pub const BITS: u32 = Posit::<N, ES, Int>::BITS;

  /// As [`Posit::ES`].
  pub const ES: u32 = Posit::<N, ES, Int>::ES;

  /// As [`Posit::JUNK_BITS`].
  #[allow(unused)]
  pub(crate) const JUNK_BITS: u32 = Posit::<N, ES, Int>::JUNK_BITS;
}


mod tests_compile_fail {
  /// ```compile_fail
  /// use posit_arith::Posit;
  /// pub fn foo() -> u32 { Posit::<2, 0, i8>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_8_few() {}

  /// ```compile_fail
  /// use posit_arith::Posit;
  /// pub fn foo() -> u32 { Posit::<2, 1, i16>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_16_few() {}

  /// ```compile_fail
  /// use posit_arith::Posit;
  /// pub fn foo() -> u32 { Posit::<9, 0, i8>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_8_many() {}

  /// ```compile_fail
  /// use posit_arith::Posit;
  /// pub fn foo() -> u32 { Posit::<17, 1, i16>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_16_many() {}

  /// ```compile_fail
  /// use posit_arith::Posit;
  /// pub fn foo() -> u32 { Posit::<33, 2, i32>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_32_many() {}

  /// ```compile_fail
  /// use posit_arith::Posit;
  /// pub fn foo() -> u32 { Posit::<65, 3, i64>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_64_many() {}

  /// ```compile_fail
  /// use posit_arith::Posit;
  /// pub fn foo() -> u32 { Posit::<8, 9, i16>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_larger_than_n() {}

  /// ```compile_fail
  /// use posit_arith::Posit;
  /// pub fn foo() -> u32 { Posit::<32, 25, i32>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_scale_overflow() {}

  /// ```compile_fail
  /// use posit_arith::Posit;
  /// pub fn foo() -> u32 { Posit::<64, 24, i64>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_scale_overflow_64() {}
}
