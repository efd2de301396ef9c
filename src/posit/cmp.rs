use super::*;

// The `Int` trait has bounds indirectly, via `Sealed`. For example, we don't have `Int:
// PartialEq`, we have `Int: Sealed` and `Sealed: PartialEq`, so the derive macro would insist on
//
//   impl<const N: u32, const ES: u32, Int: PartialEq + Int> PartialEq for Posit<N, ES, Int>
//
// when `Int: Int` alone suffices; so the impls are written out explicitly here.
//
// More importantly, comparisons are *partial*: NaR compares equal to nothing, not even itself,
// and orders against nothing, exactly like an IEEE NaN. Everything else is the plain two's
// complement comparison of the underlying int, because the posit encoding is monotone in it.

impl<const N: u32, const ES: u32, Int: crate::Int>
Clone for Posit<N, ES, Int> {
  #[inline]
  fn clone(&self) -> Self {
    Self(self.0)
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
Copy for Posit<N, ES, Int> {}

impl<const N: u32, const ES: u32, Int: crate::Int>
PartialEq for Posit<N, ES, Int> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0 && !self.is_nar()
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
PartialOrd for Posit<N, ES, Int> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
    if self.is_nar() || other.is_nar() {
      None
    } else {
      Some(self.0.cmp(&other.0))
    }
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
Default for Posit<N, ES, Int> {
  #[inline]
  fn default() -> Self {
    Self(Int::ZERO)
  }
}
