use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Returns the posit value of the lexicographic successor of `self`'s representation.
  ///
  /// Note that, unlike every other function of a posit, `next` and `prior` do not produce a
  /// [NaR](Posit::NAR) output on a [NaR](Posit::NAR) input.
  ///
  /// Standard: "**next**".
  #[inline]
  pub fn next(self) -> Self {
    Self::from_bits(self.0.wrapping_add(Int::ONE))
  }

  /// Returns the posit value of the lexicographic predecessor of `self`'s representation.
  ///
  /// Note that, unlike every other function of a posit, `next` and `prior` do not produce a
  /// [NaR](Posit::NAR) output on a [NaR](Posit::NAR) input.
  ///
  /// Standard: "**prior**".
  #[inline]
  pub fn prior(self) -> Self {
    Self::from_bits(self.0.wrapping_sub(Int::ONE))
  }

  /// Return the absolute value of `self`. Exact; never rounds.
  ///
  /// Standard: "**abs**".
  #[inline]
  pub fn abs(self) -> Self {
    Posit::from_bits(self.0.wrapping_abs())
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
core::ops::Neg for Posit<N, ES, Int> {
  type Output = Posit<N, ES, Int>;

  /// Exact; never rounds (posits are symmetric around zero). NaR negates to NaR.
  ///
  /// Standard: "**negate**".
  #[inline]
  fn neg(self) -> Self::Output {
    Posit::from_bits(self.0.wrapping_neg())
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
core::ops::Neg for &Posit<N, ES, Int> {
  type Output = Posit<N, ES, Int>;

  /// Exact; never rounds (posits are symmetric around zero). NaR negates to NaR.
  ///
  /// Standard: "**negate**".
  #[inline]
  fn neg(self) -> Self::Output {
    Posit::from_bits(self.0.wrapping_neg())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::rational::Rational;

  mod neg {
    use super::*;

    #[test]
    fn p8() {
      assert_eq!(-crate::p8::ZERO, crate::p8::ZERO);
      assert!((-crate::p8::NAR).is_nar());
      for p in crate::p8::cases_exhaustive() {
        assert_eq!(Rational::try_from(-p).unwrap(), -Rational::try_from(p).unwrap())
      }
    }

    #[test]
    fn posit_10_1() {
      assert_eq!(-Posit::<10, 1, i16>::ZERO, Posit::<10, 1, i16>::ZERO);
      assert!((-Posit::<10, 1, i16>::NAR).is_nar());
      for p in Posit::<10, 1, i16>::cases_exhaustive() {
        assert_eq!(Rational::try_from(-p).unwrap(), -Rational::try_from(p).unwrap())
      }
    }
  }

  mod abs {
    use super::*;
    use malachite::base::num::arithmetic::traits::Abs;

    #[test]
    fn p8() {
      assert_eq!(crate::p8::ZERO.abs(), crate::p8::ZERO);
      assert!(crate::p8::NAR.abs().is_nar());
      for p in crate::p8::cases_exhaustive() {
        assert_eq!(Rational::try_from(p.abs()).unwrap(), Rational::try_from(p).unwrap().abs())
      }
    }

    #[test]
    fn posit_10_1() {
      assert_eq!(Posit::<10, 1, i16>::ZERO.abs(), Posit::<10, 1, i16>::ZERO);
      assert!(Posit::<10, 1, i16>::NAR.abs().is_nar());
      for p in Posit::<10, 1, i16>::cases_exhaustive() {
        assert_eq!(Rational::try_from(p.abs()).unwrap(), Rational::try_from(p).unwrap().abs())
      }
    }
  }

  mod next_prior {
    use super::*;

    #[test]
    fn p8() {
      assert_eq!(crate::p8::ZERO.next(), crate::p8::MIN_POSITIVE);
      assert_eq!(crate::p8::ZERO.prior(), crate::p8::MAX_NEGATIVE);
      assert_eq!(crate::p8::MAX.next().to_bits(), crate::p8::NAR.to_bits());
      for p in crate::p8::cases_exhaustive() {
        assert_eq!(p.next().prior(), p);
        assert_eq!(p.prior().next(), p);
      }
    }
  }
}
