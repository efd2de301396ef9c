use super::{Sealed, Unsigned, Wide};

macro_rules! impl_signed { ($i:ty, $u:ty) => {
  impl Sealed for $i {
    type Unsigned = $u;

    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MIN: Self = <$i>::MIN;
    const MAX: Self = <$i>::MAX;
    const BITS: u32 = <$i>::BITS;

    #[inline]
    fn as_unsigned(self) -> $u { self as $u }
    #[inline]
    fn of_unsigned(x: $u) -> Self { x as $i }

    #[inline]
    fn is_negative(self) -> bool { self < 0 }
    #[inline]
    fn wrapping_neg(self) -> Self { self.wrapping_neg() }
    #[inline]
    fn wrapping_abs(self) -> Self { self.wrapping_abs() }
    #[inline]
    fn wrapping_add(self, other: Self) -> Self { self.wrapping_add(other) }
    #[inline]
    fn wrapping_sub(self, other: Self) -> Self { self.wrapping_sub(other) }
  }
} }

impl_signed!(i8, u8);
impl_signed!(i16, u16);
impl_signed!(i32, u32);
impl_signed!(i64, u64);

macro_rules! impl_unsigned { ($u:ty, $i:ty, $w:ty) => {
  impl Unsigned for $u {
    type Signed = $i;
    type Wide = $w;

    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX: Self = <$u>::MAX;
    const TOP: Self = 1 << (<$u>::BITS - 1);
    const BITS: u32 = <$u>::BITS;

    #[inline]
    fn as_signed(self) -> $i { self as $i }

    #[inline]
    fn leading_zeros(self) -> u32 { self.leading_zeros() }
    #[inline]
    fn leading_ones(self) -> u32 { self.leading_ones() }
    #[inline]
    fn wrapping_add(self, other: Self) -> Self { self.wrapping_add(other) }
    #[inline]
    fn wrapping_sub(self, other: Self) -> Self { self.wrapping_sub(other) }

    #[inline]
    fn widen(self) -> $w { self as $w }
    #[inline]
    fn wide_mul(self, other: Self) -> $w { (self as $w) * (other as $w) }

    #[inline]
    fn as_u64(self) -> u64 { self as u64 }
    #[inline]
    fn of_u64(x: u64) -> Self { x as $u }
    #[inline]
    fn as_u32(self) -> u32 { self as u32 }
    #[inline]
    fn of_u32(x: u32) -> Self { x as $u }
  }
} }

impl_unsigned!(u8, i8, u16);
impl_unsigned!(u16, i16, u32);
impl_unsigned!(u32, i32, u64);
impl_unsigned!(u64, i64, u128);

macro_rules! impl_wide { ($w:ty, $h:ty) => {
  impl Wide for $w {
    type Half = $h;

    const ZERO: Self = 0;
    const ONE: Self = 1;
    const TOP: Self = 1 << (<$w>::BITS - 1);
    const BITS: u32 = <$w>::BITS;

    #[inline]
    fn split(self) -> ($h, $h) { ((self >> <$h>::BITS) as $h, self as $h) }

    #[inline]
    fn leading_zeros(self) -> u32 { self.leading_zeros() }
    #[inline]
    fn overflowing_add(self, other: Self) -> (Self, bool) { self.overflowing_add(other) }

    #[inline]
    fn as_u128(self) -> u128 { self as u128 }
  }
} }

impl_wide!(u16, u8);
impl_wide!(u32, u16);
impl_wide!(u64, u32);
impl_wide!(u128, u64);
