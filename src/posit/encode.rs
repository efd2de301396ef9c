use super::*;
use crate::word::Unsigned;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Decoded<N, ES, Int> {
  /// Encode a posit, rounding if necessary. The rounding rule is always the same: "round to
  /// nearest, round ties to even bit pattern, never round to 0 and never to NaR (i.e. never
  /// over- or under-flow)".
  ///
  /// `sticky` accumulates bits already lost *before* this call: it is `false` **if and only
  /// if** `self` is the exact value being encoded. Every operation in the crate funnels through
  /// here exactly once, with whatever fell off its intermediate computation OR-ed into
  /// `sticky`, so everything is correctly rounded by construction.
  ///
  /// The mechanics: lay out `sign | regime | exponent | fraction` as if the number had
  /// unbounded bits, keep the first `N`, and round off the rest by guard (first dropped bit)
  /// and sticky (OR of all the others):
  ///
  /// ```text
  ///   round up ⟺ guard ∧ (sticky ∨ lsb of the kept pattern)
  /// ```
  ///
  /// Because the fields sit next to each other in order of significance, "round up" is a plain
  /// `+1` on the kept pattern: a carry out of the fraction bumps the exponent, and a carry out
  /// of the exponent lengthens the regime, all by itself. The one case the increment cannot
  /// reach is past maxpos (that would be NaR), which is exactly the saturation case handled
  /// before anything is materialised.
  pub(crate) fn encode_round(self, sticky_in: bool) -> Posit<N, ES, Int> {
    debug_assert!(
      self.is_normalised(),
      "{self:?} does not have its hidden bit in place",
    );
    type U<Int> = <Int as crate::word::Sealed>::Unsigned;
    let Decoded { sign, scale, frac } = self;

    // Split the scale into regime and exponent: k = floor(scale / 2^ES), e = the rest.
    let k = scale >> ES;
    let e = (scale - (k << ES)) as u32;

    // A regime of k ≥ N-2 fills the whole field with ones, which is the maxpos pattern no
    // matter what the exponent and fraction say. Anything with k < -(N-2) is strictly below
    // minpos in magnitude and pins to minpos: posits never round a nonzero value to zero.
    if k >= N as i32 - 2 {
      return Posit::saturate_max(sign)
    }
    if k < -(N as i32 - 2) {
      return Posit::saturate_min(sign)
    }

    // Materialise the regime at its natural length: a run of m bits plus a terminator, which
    // both branches above guarantee to fit within the N-1 bits after the sign.
    let (pattern, m) = if k >= 0 {
      let m = k as u32 + 1;
      (((U::<Int>::ONE << m) - U::<Int>::ONE) << 1, m)  // m ones, then the 0 terminator
    } else {
      (U::<Int>::ONE, (-k) as u32)  // m zeros, then the 1 terminator
    };

    // Exponent and fraction take whatever room remains, in that order.
    let rem = N - 2 - m;
    let es_kept = ES.min(rem);
    let pattern = (pattern << es_kept) | U::<Int>::of_u32(e >> (ES - es_kept));
    let fb = rem - es_kept;
    let explicit = frac << 1;  // drop the hidden bit
    let pattern = if fb == 0 { pattern } else { (pattern << fb) | (explicit >> (Int::BITS - fb)) };

    // Guard and sticky from the bits that did not fit, regardless of which field they came
    // from: dropped exponent bits first (msb to lsb), then every fraction bit.
    let de = ES - es_kept;
    let (guard, sticky) = if de > 0 {
      (
        (e >> (de - 1)) & 1 != 0,
        sticky_in || e & ((1 << (de - 1)) - 1) != 0 || explicit != U::<Int>::ZERO,
      )
    } else {
      let dropped = if fb == 0 { explicit } else { explicit << fb };
      (
        dropped & U::<Int>::TOP != U::<Int>::ZERO,
        sticky_in || dropped << 1 != U::<Int>::ZERO,
      )
    };

    let odd = pattern & U::<Int>::ONE != U::<Int>::ZERO;
    let pattern = if guard && (sticky || odd) {
      pattern.wrapping_add(U::<Int>::ONE)
    } else {
      pattern
    };

    // Apply the sign: a negative posit is the two's complement of its magnitude's pattern.
    let mag = Int::of_unsigned(pattern);
    Posit::from_bits(if sign { mag.wrapping_neg() } else { mag })
  }

  /// Encode a value known to be exactly representable in the format: no fraction bit falls off
  /// and the scale is in regular range. Checked in debug builds by decoding the result back.
  pub(crate) fn encode(self) -> Posit<N, ES, Int> {
    let posit = self.encode_round(false);
    // SAFETY: `encode_round` never returns 0 or NaR
    debug_assert!(unsafe { posit.decode_regular() } == self);
    posit
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// ±maxpos: what a too-large magnitude rounds to.
  pub(crate) fn saturate_max(sign: bool) -> Self {
    if sign { Self::MIN } else { Self::MAX }
  }

  /// ±minpos: what a too-small (but nonzero) magnitude rounds to.
  pub(crate) fn saturate_min(sign: bool) -> Self {
    if sign { Self::MAX_NEGATIVE } else { Self::MIN_POSITIVE }
  }
}
