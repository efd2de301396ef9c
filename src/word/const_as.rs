use super::Sealed;

/// One line of the [`const_as`] function.
macro_rules! const_as_line {
  ($x:ident, $u:ty) => {
    if const { U::BITS == <$u>::BITS } {
      let u = $x as $u;
      // SAFETY: Because U and $u are guaranteed to be `iX` of the same width, `$u` is `U`, and
      // the transmute_copy is a no-op.
      return unsafe { ::core::mem::transmute_copy::<$u, U>(&u) }
    }
  }
}

/// The keyword `as`, as a `const` function generic over the target [`Int`](crate::Int). A plain
/// `as` cast cannot be written for a generic type, and a trait method cannot be called in const
/// context; this can be both.
pub(crate) const fn const_as<U: Sealed>(x: i64) -> U {
  const_as_line!(x, i8);
  const_as_line!(x, i16);
  const_as_line!(x, i32);
  const_as_line!(x, i64);
  unreachable!() // cannot be const { unreachable!() }
}

#[cfg(test)]
#[allow(overflowing_literals)]
mod tests {
  use super::*;

  #[test]
  fn identity() {
    const VALUE: i64 = const_as(0x0123_4567_89ab_cdef_i64);
    assert_eq!(VALUE, 0x0123_4567_89ab_cdef_i64);
  }

  #[test]
  fn truncate() {
    const VALUE: i32 = const_as(0xdeadbeef_i64);
    assert_eq!(VALUE, 0xdeadbeef_i32);
  }

  #[test]
  fn sign() {
    const A: i16 = const_as(-1_i64);
    assert_eq!(A, -1_i16);
    const B: i8 = const_as(0_i64);
    assert_eq!(B, 0_i8);
  }
}
