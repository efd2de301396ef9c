use super::*;
use crate::RoundFrom;

impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
> Quire<N, ES, WORDS> {
  /// The fused dot product `a · b`: every product is accumulated into a fresh quire exactly,
  /// and the sum is rounded to a posit exactly once, at the end.
  ///
  /// If any operand is [NaR](Posit::NAR), the result is NaR.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_arith::{p16, q16};
  /// // Catastrophic cancellation is no problem: MAX·MAX cancels exactly against -MAX·MAX.
  /// let a = [p16::MAX, p16::ONE, p16::MAX];
  /// let b = [p16::MAX, p16::ONE, -p16::MAX];
  /// assert_eq!(q16::dot(&a, &b), p16::ONE);
  /// ```
  ///
  /// # Panics
  ///
  /// If `a` and `b` differ in length.
  pub fn dot<Int: crate::Int>(a: &[Posit<N, ES, Int>], b: &[Posit<N, ES, Int>]) -> Posit<N, ES, Int> {
    assert_eq!(a.len(), b.len(), "dot product of slices of different lengths");
    let mut quire = Self::ZERO;
    for (&x, &y) in a.iter().zip(b) {
      quire.add_product(x, y);
    }
    Posit::round_from(&quire)
  }
}
