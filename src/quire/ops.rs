use super::*;
use crate::posit::decode::TryDecoded;
use crate::word::{Unsigned, Wide};
use core::ops::{AddAssign, SubAssign};

impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
> Quire<N, ES, WORDS> {
  /// Accumulate `posit` (negated if `negate`) into `self`, exactly.
  fn accumulate<Int: crate::Int>(&mut self, posit: Posit<N, ES, Int>, negate: bool) {
    type U<Int> = <Int as crate::word::Sealed>::Unsigned;

    if self.is_nar() { return }
    match posit.try_decode() {
      TryDecoded::Zero => (),
      TryDecoded::NaR => *self = Self::NAR,
      TryDecoded::Regular(d) => {
        // The posit's value is frac × 2^(scale - (B-1)), with the hidden bit at B-1.
        let pos = Self::WIDTH as i32 + d.scale - (U::<Int>::BITS - 1) as i32;
        self.accumulate_wide(d.frac.as_u64() as u128, pos, d.sign ^ negate)
      }
    }
  }

  /// Accumulate the product `a × b` into `self`, exactly: the product's double-width
  /// fraction goes into the quire whole, without any intermediate rounding.
  ///
  /// If `a` or `b` is [NaR](Posit::NAR), `self` becomes [`NAR`](Self::NAR).
  pub fn add_product<Int: crate::Int>(&mut self, a: Posit<N, ES, Int>, b: Posit<N, ES, Int>) {
    type U<Int> = <Int as crate::word::Sealed>::Unsigned;

    if self.is_nar() { return }
    if a.is_nar() || b.is_nar() {
      *self = Self::NAR;
      return
    }
    if a.is_zero() || b.is_zero() { return }
    // SAFETY: neither `a` nor `b` are 0 or NaR
    let x = unsafe { a.decode_regular() };
    let y = unsafe { b.decode_regular() };
    // Both hidden bits sit at B-1, so the product's value is
    // (fx × fy) × 2^(sx + sy - (2B-2)).
    let pos = Self::WIDTH as i32 + x.scale + y.scale - (2 * (U::<Int>::BITS - 1)) as i32;
    self.accumulate_wide(x.frac.wide_mul(y.frac).as_u128(), pos, x.sign ^ y.sign)
  }
}

impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
  Int: crate::Int,
> AddAssign<Posit<N, ES, Int>> for Quire<N, ES, WORDS> {
  fn add_assign(&mut self, rhs: Posit<N, ES, Int>) {
    self.accumulate(rhs, false)
  }
}

impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
  Int: crate::Int,
> AddAssign<&Posit<N, ES, Int>> for Quire<N, ES, WORDS> {
  fn add_assign(&mut self, rhs: &Posit<N, ES, Int>) {
    self.accumulate(*rhs, false)
  }
}

impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
  Int: crate::Int,
> SubAssign<Posit<N, ES, Int>> for Quire<N, ES, WORDS> {
  fn sub_assign(&mut self, rhs: Posit<N, ES, Int>) {
    self.accumulate(rhs, true)
  }
}

impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
  Int: crate::Int,
> SubAssign<&Posit<N, ES, Int>> for Quire<N, ES, WORDS> {
  fn sub_assign(&mut self, rhs: &Posit<N, ES, Int>) {
    self.accumulate(*rhs, true)
  }
}

/// Merge two quires by exact fixed-point addition. NaR on either side wins.
impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
> AddAssign<&Quire<N, ES, WORDS>> for Quire<N, ES, WORDS> {
  fn add_assign(&mut self, rhs: &Quire<N, ES, WORDS>) {
    if self.is_nar() { return }
    if rhs.is_nar() {
      *self = Self::NAR;
      return
    }
    let sign_before = self.sign();
    let mut carry = false;
    for (limb, &r) in self.0.iter_mut().zip(&rhs.0) {
      let (sum, c1) = limb.overflowing_add(r);
      let (sum, c2) = sum.overflowing_add(carry as u64);
      *limb = sum;
      carry = c1 || c2;
    }
    debug_assert!(
      !(sign_before == rhs.sign() && self.sign() != sign_before),
      "quire overflow",
    );
    debug_assert!(!self.is_nar(), "quire overflow");
  }
}

impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
> AddAssign for Quire<N, ES, WORDS> {
  fn add_assign(&mut self, rhs: Self) {
    *self += &rhs
  }
}

impl<
  const N: u32,
  const ES: u32,
  const WORDS: usize,
  Int: crate::Int,
> From<Posit<N, ES, Int>> for Quire<N, ES, WORDS> {
  fn from(posit: Posit<N, ES, Int>) -> Self {
    let mut quire = Self::ZERO;
    quire += posit;
    quire
  }
}
