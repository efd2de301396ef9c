use super::*;
use crate::word::const_as;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// An iterator through all the posits of the format except 0 and NaR.
  pub(crate) fn cases_exhaustive() -> impl Iterator<Item = Self> + Clone {
    let abs = 1 ..= (i64::MAX >> (64 - Self::BITS));
    let pos = abs.clone().map(|abs| Self::from_bits(const_as(abs)));
    let neg = abs.clone().map(|abs| Self::from_bits(const_as(-abs)));
    pos.chain(neg)
  }

  /// An iterator through every posit of the format, 0 and NaR included.
  pub(crate) fn cases_exhaustive_all() -> impl Iterator<Item = Self> + Clone {
    [Self::ZERO, Self::NAR].into_iter().chain(Self::cases_exhaustive())
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields posits except 0 and NaR.
  pub(crate) fn cases_proptest() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    (
      any::<bool>(),
      1 ..= (i64::MAX >> (64 - Self::BITS)),
    ).prop_map(|(sign, abs)| {
      let bits = if sign {abs} else {-abs};
      Self::from_bits(const_as(bits))
    })
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) over every posit of the format, 0 and
  /// NaR included.
  pub(crate) fn cases_proptest_all() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    let max = i64::MAX >> (64 - Self::BITS);
    (-max - 1 ..= max).prop_map(|bits| Self::from_bits(const_as(bits)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cases_exhaustive() {
    assert_eq!(
      Posit::<4, 1, i8>::cases_exhaustive().collect::<Vec<_>>().as_slice(),
      [
        Posit::from_bits(0b0001),
        Posit::from_bits(0b0010),
        Posit::from_bits(0b0011),
        Posit::from_bits(0b0100),
        Posit::from_bits(0b0101),
        Posit::from_bits(0b0110),
        Posit::from_bits(0b0111),
        Posit::from_bits(-0b0001),
        Posit::from_bits(-0b0010),
        Posit::from_bits(-0b0011),
        Posit::from_bits(-0b0100),
        Posit::from_bits(-0b0101),
        Posit::from_bits(-0b0110),
        Posit::from_bits(-0b0111),
      ]
    )
  }

  #[test]
  fn cases_exhaustive_all_counts() {
    // 2^N patterns in total, of which 2 are the specials.
    assert_eq!(Posit::<4, 1, i8>::cases_exhaustive_all().count(), 16);
    assert_eq!(crate::p8::cases_exhaustive().count(), 254);
  }
}
