use super::*;

impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
> Quire<N, ES, WORDS> {
  /// The largest scale of the posit format this quire serves, `(N - 2) × 2^ES`.
  const MAX_SCALE: u32 = {
    assert!(N >= 3, "Posit formats have at least 3 bits");
    assert!((N - 2).ilog2() + ES + 2 < 31, "ES is too large for this quire");
    (N - 2) << ES
  };

  /// The minimum quire size in bits: a product of two posits of the format spans scales
  /// `-2 × MAX_SCALE` up to `+2 × MAX_SCALE`, so representing every one exactly as a fixed
  /// point number takes `4 × MAX_SCALE + 1` bits, plus a sign bit.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_arith::*;
  /// assert_eq!(q16::MIN_BITS, 226);
  /// ```
  pub const MIN_BITS: u32 = 4 * Self::MAX_SCALE + 2;

  /// The quire size in bits.
  ///
  /// A quire with fewer than [`MIN_BITS`](Self::MIN_BITS) bits does not compile:
  ///
  /// ```compile_fail
  /// use posit_arith::{Quire, p16};
  /// let mut q: Quire<16, 2, 3> = Quire::ZERO;  // 192 bits < the required 226
  /// q += p16::ONE;
  /// ```
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_arith::*;
  /// assert_eq!(q16::BITS, 256);
  /// ```
  pub const BITS: u32 = {
    assert!(WORDS as u32 * 64 >= Self::MIN_BITS, "This quire type is too small for its posit format");
    WORDS as u32 * 64
  };

  /// The headroom above [`MIN_BITS`](Self::MIN_BITS): accumulating fewer than
  /// 2<sup>`CAPACITY_BITS`</sup> products is guaranteed not to overflow the quire.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_arith::*;
  /// assert_eq!(q32::CAPACITY_BITS, 30);  // At least 2^30 - 1 products, always safely
  /// ```
  pub const CAPACITY_BITS: u32 = Self::BITS - Self::MIN_BITS;

  /// The position of the fixed point: the number 1 is represented in the quire as
  /// `1 << WIDTH`.
  pub(crate) const WIDTH: u32 = {
    let _ = Self::BITS;
    2 * Self::MAX_SCALE
  };

  /// A quire holding the number 0.
  pub const ZERO: Self = Self([0; WORDS]);

  /// A quire in the NaR state.
  pub const NAR: Self = {
    let mut nar = [0; WORDS];
    nar[WORDS - 1] = 1 << 63;
    Self(nar)
  };

  /// Construct a quire from its raw limbs, in little-endian order.
  pub const fn from_bits(limbs: [u64; WORDS]) -> Self {
    Self(limbs)
  }

  /// The raw limbs, in little-endian order.
  pub const fn to_bits(&self) -> [u64; WORDS] {
    self.0
  }

  /// Reset to [`ZERO`](Self::ZERO), clearing a NaR state too.
  pub fn clear(&mut self) {
    *self = Self::ZERO;
  }

  /// Whether `self` is in the NaR state.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_arith::*;
  /// assert!(q32::NAR.is_nar());
  /// assert!(!q32::ZERO.is_nar());
  /// ```
  pub const fn is_nar(&self) -> bool {
    // Almost every non-NaR quire fails the first compare: the whole-array scan only runs for
    // NaR itself and for values a hair's breadth from overflowing negative.
    if self.0[WORDS - 1] != 1 << 63 { return false }
    let mut i = 0;
    while i < WORDS - 1 {
      if self.0[i] != 0 { return false }
      i += 1
    }
    true
  }

  /// The sign bit of the accumulator (1 for negative).
  pub(crate) const fn sign(&self) -> u64 {
    self.0[WORDS - 1] >> 63
  }
}

impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
> core::fmt::Debug for Quire<N, ES, WORDS> {
  /// Limbs in big-endian (most significant first) order, the way one would read the number.
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    write!(f, "Quire<{N}, {ES}>[")?;
    for (i, limb) in self.0.iter().rev().enumerate() {
      if i != 0 { write!(f, " ")? }
      write!(f, "{limb:016x}")?;
    }
    write!(f, "]")
  }
}

impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
> Default for Quire<N, ES, WORDS> {
  fn default() -> Self {
    Self::ZERO
  }
}
