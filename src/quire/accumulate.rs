use super::*;

impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
> Quire<N, ES, WORDS> {
  /// Add (or, if `negative`, subtract) `addend × 2^(pos - WIDTH)` into the accumulator,
  /// exactly.
  ///
  /// `pos` is the bit position of the addend's least significant bit, counted from the
  /// bottom of the quire. It may be negative: the only contributions that reach below
  /// the quire are products of the smallest posits, whose fractions are a bare hidden
  /// bit, so the bits shifted out are always 0.
  pub(crate) fn accumulate_wide(&mut self, mut addend: u128, mut pos: i32, negative: bool) {
    debug_assert!(!self.is_nar());
    if pos < 0 {
      debug_assert!(addend & ((1u128 << -pos) - 1) == 0);
      addend >>= -pos;
      pos = 0;
    }
    let limb = (pos / 64) as usize;
    let off = (pos % 64) as u32;
    debug_assert!(limb < WORDS);

    // The addend lands on at most 3 limbs once shifted into place.
    let (a_lo, a_hi) = (addend as u64, (addend >> 64) as u64);
    let parts = if off == 0 {
      [a_lo, a_hi, 0]
    } else {
      [a_lo << off, a_lo >> (64 - off) | a_hi << off, a_hi >> (64 - off)]
    };
    if limb + 3 > WORDS {
      // The top bit of any contribution sits below MIN_BITS, so parts past the end are 0.
      debug_assert!(parts[WORDS - limb ..].iter().all(|&part| part == 0));
    }

    let sign_before = self.sign();
    let mut carry = false;
    for i in limb .. WORDS {
      let part = match parts.get(i - limb) {
        Some(&part) => part,
        None if !carry => break,
        None => 0,
      };
      let (sum, c1, c2);
      if negative {
        (sum, c1) = self.0[i].overflowing_sub(part);
        (self.0[i], c2) = sum.overflowing_sub(carry as u64);
      } else {
        (sum, c1) = self.0[i].overflowing_add(part);
        (self.0[i], c2) = sum.overflowing_add(carry as u64);
      }
      carry = c1 || c2;
    }

    // Two's complement overflow: the sign may only flip towards the addend's sign.
    debug_assert!(
      !(sign_before == negative as u64 && self.sign() != sign_before),
      "quire overflow",
    );
    debug_assert!(!self.is_nar(), "quire overflow");
  }
}
