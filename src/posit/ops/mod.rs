use super::*;

/// Addition and subtraction (both use the same magnitude-addition kernel; `a - b` is just
/// `a + (-b)`).
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Wires one rounding kernel up as an operator. The owned `Posit ⋅ Posit` impl dispatches to
/// the inherent method of the same name, and the borrowed and assigning forms all funnel
/// through it (posits are `Copy`; a reference operand is only a convenience).
macro_rules! mk_ops {
  ($op_trait:ident :: $method:ident, $assign_trait:ident :: $assign_method:ident) => {
    impl<const N: u32, const ES: u32, Int: crate::Int>
    $op_trait for Posit<N, ES, Int> {
      type Output = Self;

      #[inline]
      fn $method(self, rhs: Self) -> Self {
        self.$method(rhs)
      }
    }

    impl<const N: u32, const ES: u32, Int: crate::Int>
    $op_trait<&Posit<N, ES, Int>> for Posit<N, ES, Int> {
      type Output = Posit<N, ES, Int>;

      #[inline]
      fn $method(self, rhs: &Posit<N, ES, Int>) -> Posit<N, ES, Int> {
        $op_trait::$method(self, *rhs)
      }
    }

    impl<const N: u32, const ES: u32, Int: crate::Int>
    $op_trait<Posit<N, ES, Int>> for &Posit<N, ES, Int> {
      type Output = Posit<N, ES, Int>;

      #[inline]
      fn $method(self, rhs: Posit<N, ES, Int>) -> Posit<N, ES, Int> {
        $op_trait::$method(*self, rhs)
      }
    }

    impl<const N: u32, const ES: u32, Int: crate::Int>
    $op_trait<&Posit<N, ES, Int>> for &Posit<N, ES, Int> {
      type Output = Posit<N, ES, Int>;

      #[inline]
      fn $method(self, rhs: &Posit<N, ES, Int>) -> Posit<N, ES, Int> {
        $op_trait::$method(*self, *rhs)
      }
    }

    impl<const N: u32, const ES: u32, Int: crate::Int>
    $assign_trait for Posit<N, ES, Int> {
      #[inline]
      fn $assign_method(&mut self, rhs: Self) {
        *self = $op_trait::$method(*self, rhs)
      }
    }

    impl<const N: u32, const ES: u32, Int: crate::Int>
    $assign_trait<&Posit<N, ES, Int>> for Posit<N, ES, Int> {
      #[inline]
      fn $assign_method(&mut self, rhs: &Posit<N, ES, Int>) {
        *self = $op_trait::$method(*self, *rhs)
      }
    }
  }
}

pub(crate) use mk_ops;

/// Instantiates the test suite for one binary operator: every format is checked against exact
/// rational arithmetic, exhaustively where the pair count allows it and by sampling above.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt) => {
    use crate::Posit;
    use crate::posit::oracle::{self, IsNaR};
    use malachite::rational::Rational;
    use proptest::prelude::*;

    // Every owned, borrowed and assigning form the operator comes in.
    #[allow(dead_code)]
    fn operator_forms() {
      let mut a = crate::p32::ONE;
      let mut b = crate::p32::MINUS_ONE;
      let _ = a $op b;
      let _ = a $op &b;
      let _ = &a $op b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    /// Whether `a $op b` rounds to what the exact rational result says it should.
    fn rounds_correctly<const N: u32, const ES: u32, Int: crate::Int>(
      a: Posit<N, ES, Int>,
      b: Posit<N, ES, Int>,
    ) -> bool
    where
      Rational: TryFrom<Posit<N, ES, Int>, Error = IsNaR>,
    {
      let got = a $op b;
      let (Ok(ra), Ok(rb)) = (Rational::try_from(a), Rational::try_from(b)) else {
        return got.is_nar()  // NaR in, NaR out
      };
      if stringify!($op) == "/" && rb == Rational::from(0) {
        return got.is_nar()
      }
      oracle::is_correct_rounded(ra $op rb, got)
    }

    macro_rules! exhaustive {
      ($name:ident, $posit:ty) => {
        #[test]
        fn $name() {
          for a in <$posit>::cases_exhaustive_all() {
            for b in <$posit>::cases_exhaustive_all() {
              assert!(rounds_correctly(a, b), "wrong result for {a:?} and {b:?}")
            }
          }
        }
      };
    }

    macro_rules! sampled {
      ($name:ident, $posit:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(a in <$posit>::cases_proptest_all(), b in <$posit>::cases_proptest_all()) {
            prop_assert!(rounds_correctly(a, b), "wrong result for {a:?} and {b:?}")
          }
        }
      };
    }

    // The tiny formats hit every regime/exponent/fraction split there is.
    exhaustive!{posit_3_0_exhaustive, Posit::<3, 0, i8>}
    exhaustive!{posit_4_0_exhaustive, Posit::<4, 0, i8>}
    exhaustive!{posit_4_1_exhaustive, Posit::<4, 1, i8>}

    exhaustive!{posit_8_0_exhaustive, Posit::<8, 0, i8>}

    exhaustive!{posit_10_0_exhaustive, Posit::<10, 0, i16>}
    exhaustive!{posit_10_1_exhaustive, Posit::<10, 1, i16>}
    exhaustive!{posit_10_2_exhaustive, Posit::<10, 2, i16>}

    // Past ~10 bits the 2^2N operand pairs put exhaustion out of reach, so the wide formats
    // get sampled instead.
    exhaustive!{p8_exhaustive, crate::p8}
    sampled!{p16_proptest, crate::p16}
    sampled!{p32_proptest, crate::p32}
    sampled!{p64_proptest, crate::p64}
  }
}

pub(crate) use mk_tests;
