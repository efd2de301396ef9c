use super::*;
use crate::posit::Decoded;
use crate::word::Unsigned;
use crate::RoundFrom;

/// The single rounding step of a quire computation: round the exact fixed-point value to the
/// nearest posit, ties to even. A NaR quire yields [NaR](Posit::NAR).
impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
  Int: crate::Int,
> RoundFrom<&Quire<N, ES, WORDS>> for Posit<N, ES, Int> {
  fn round_from(quire: &Quire<N, ES, WORDS>) -> Self {
    type U<Int> = <Int as crate::word::Sealed>::Unsigned;

    if quire.is_nar() { return Self::NAR }
    let negative = quire.sign() != 0;
    let mut mag = quire.0;
    if negative {
      // Two's complement negation, limb by limb. Can't overflow: the only negative value
      // whose magnitude isn't representable is the NaR pattern, already handled.
      let mut carry = true;
      for limb in &mut mag {
        (*limb, carry) = (!*limb).overflowing_add(carry as u64);
      }
    }
    let Some(top) = mag.iter().rposition(|&limb| limb != 0) else { return Self::ZERO };

    // Normalise: the msb of the magnitude becomes the hidden bit, and its distance from the
    // fixed point is the scale. Everything below the top 64 bits folds into the sticky bit.
    let lz = mag[top].leading_zeros();
    let msb = 64 * top as u32 + 63 - lz;
    let scale = msb as i32 - Quire::<N, ES, WORDS>::WIDTH as i32;
    let mut frac64 = mag[top] << lz;
    let mut sticky = false;
    if top > 0 {
      if lz != 0 {
        frac64 |= mag[top - 1] >> (64 - lz);
      }
      sticky |= mag[top - 1] << lz != 0;
      sticky |= mag[.. top - 1].iter().any(|&limb| limb != 0);
    }

    let b = U::<Int>::BITS;
    let frac = U::<Int>::of_u64(frac64 >> (64 - b));
    let sticky = sticky || (b < 64 && frac64 << b != 0);
    Decoded::<N, ES, Int> { sign: negative, scale, frac }.encode_round(sticky)
  }
}

impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
> Quire<N, ES, WORDS> {
  /// Round the accumulated value to the nearest posit; method form of
  /// [`Posit::round_from`].
  pub fn to_posit<Int: crate::Int>(&self) -> Posit<N, ES, Int> {
    Posit::round_from(self)
  }
}
