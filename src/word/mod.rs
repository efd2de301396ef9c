use core::fmt;
use core::ops::*;

mod const_as;
mod impls;

pub(crate) use const_as::const_as;

/// A machine integer which can be the underlying representation of a [`Posit`](crate::Posit):
/// one of `i8`, `i16`, `i32`, `i64`.
///
/// A posit is stored in two's complement in a signed word, sign-extended if the posit is
/// narrower than the word. All the arithmetic kernels, however, work on the *magnitude* of the
/// number, so every `Int` comes with an [`Unsigned`] view of the same width, and every
/// `Unsigned` with a [`Wide`] word of twice the width in which products and aligned sums are
/// exact.
pub trait Int: Sealed {}

impl<T: Sealed> Int for T {}

/// Implementation detail of [`Int`]; the operations the rest of the crate needs from a signed
/// storage word. Cannot be implemented outside this crate.
pub trait Sealed:
  Copy + Clone + Eq + Ord + core::hash::Hash
  + fmt::Debug + fmt::Display + fmt::Binary
  + Not<Output = Self>
  + BitAnd<Output = Self> + BitOr<Output = Self> + BitXor<Output = Self>
  + Shl<u32, Output = Self> + Shr<u32, Output = Self>
  + Add<Output = Self> + Sub<Output = Self>
  + Send + Sync + 'static
{
  /// The unsigned word of the same width.
  type Unsigned: Unsigned<Signed = Self>;

  const ZERO: Self;
  const ONE: Self;
  const MIN: Self;
  const MAX: Self;
  const BITS: u32;

  /// Reinterpret the bits as unsigned.
  fn as_unsigned(self) -> Self::Unsigned;
  /// Reinterpret an unsigned word of the same width as signed.
  fn of_unsigned(x: Self::Unsigned) -> Self;

  fn is_negative(self) -> bool;
  fn wrapping_neg(self) -> Self;
  fn wrapping_abs(self) -> Self;
  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
}

/// The unsigned view of an [`Int`]. Shifts on this type are logical, which is what the codec
/// wants when it slides fields around.
pub trait Unsigned:
  Copy + Clone + Eq + Ord
  + fmt::Debug + fmt::Display + fmt::Binary
  + Not<Output = Self>
  + BitAnd<Output = Self> + BitOr<Output = Self> + BitXor<Output = Self>
  + Shl<u32, Output = Self> + Shr<u32, Output = Self>
  + Add<Output = Self> + Sub<Output = Self>
  + Send + Sync + 'static
{
  /// The signed word of the same width.
  type Signed: Sealed<Unsigned = Self>;
  /// The unsigned word of twice the width.
  type Wide: Wide<Half = Self>;

  const ZERO: Self;
  const ONE: Self;
  const MAX: Self;
  /// Just the most significant bit.
  const TOP: Self;
  const BITS: u32;

  fn as_signed(self) -> Self::Signed;

  fn leading_zeros(self) -> u32;
  fn leading_ones(self) -> u32;
  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;

  /// Zero-extend into the low half of a [`Wide`].
  fn widen(self) -> Self::Wide;
  /// Full double-width product; never overflows.
  fn wide_mul(self, other: Self) -> Self::Wide;

  /// Lossless: every `Unsigned` is at most 64 bits.
  fn as_u64(self) -> u64;
  /// Truncating.
  fn of_u64(x: u64) -> Self;
  /// Truncating.
  fn as_u32(self) -> u32;
  /// Truncating.
  fn of_u32(x: u32) -> Self;
}

/// An unsigned word of twice the width of some [`Unsigned`]. A product of two magnitudes, or a
/// sum of two aligned magnitudes, is exact here.
pub trait Wide:
  Copy + Clone + Eq + Ord
  + fmt::Debug
  + BitAnd<Output = Self> + BitOr<Output = Self>
  + Shl<u32, Output = Self> + Shr<u32, Output = Self>
  + Add<Output = Self> + Sub<Output = Self>
  + Div<Output = Self> + Rem<Output = Self>
{
  type Half;

  const ZERO: Self;
  const ONE: Self;
  /// Just the most significant bit.
  const TOP: Self;
  const BITS: u32;

  /// `(hi, lo)` halves.
  fn split(self) -> (Self::Half, Self::Half);

  fn leading_zeros(self) -> u32;
  fn overflowing_add(self, other: Self) -> (Self, bool);

  /// Lossless: every `Wide` is at most 128 bits.
  fn as_u128(self) -> u128;
}
